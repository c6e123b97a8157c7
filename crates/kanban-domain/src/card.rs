use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field_update::FieldUpdate;

pub type CardId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a card. Fields left at their default are untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: FieldUpdate<String>,
}

impl CardUpdate {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn is_change(&self) -> bool {
        self.title.is_some() || self.description.is_change()
    }
}

impl Card {
    pub fn new(id: CardId, title: String, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update(&mut self, updates: CardUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        updates.description.apply_to(&mut self.description);
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_timestamps_match() {
        let card = Card::new(Uuid::new_v4(), "Write docs".to_string(), None);
        assert_eq!(card.created_at, card.updated_at);
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut card = Card::new(
            Uuid::new_v4(),
            "Write docs".to_string(),
            Some("README first".to_string()),
        );
        let created = card.created_at;

        card.update(CardUpdate::title("Write more docs"));
        assert_eq!(card.title, "Write more docs");
        assert_eq!(card.description.as_deref(), Some("README first"));
        assert_eq!(card.created_at, created);
        assert!(card.updated_at >= created);

        card.update(CardUpdate {
            description: FieldUpdate::Clear,
            ..Default::default()
        });
        assert_eq!(card.title, "Write more docs");
        assert!(card.description.is_none());
    }

    #[test]
    fn test_empty_update_is_not_a_change() {
        assert!(!CardUpdate::default().is_change());
        assert!(CardUpdate::title("x").is_change());
    }

    #[test]
    fn test_serialized_layout() {
        let card = Card::new(Uuid::new_v4(), "A".to_string(), None);
        let json = serde_json::to_value(&card).unwrap();

        assert!(json["id"].is_string());
        assert_eq!(json["title"], "A");
        assert!(json.get("description").is_none());
        assert!(json["createdAt"].is_string());
        assert!(json["updatedAt"].is_string());
    }
}
