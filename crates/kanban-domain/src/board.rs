use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::list::{List, ListId};

pub type BoardId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    #[serde(default)]
    pub lists: Vec<List>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(id: BoardId, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            lists: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn list(&self, id: ListId) -> Option<&List> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn list_mut(&mut self, id: ListId) -> Option<&mut List> {
        self.lists.iter_mut().find(|l| l.id == id)
    }

    pub fn list_index(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|l| l.id == id)
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(List::card_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;

    #[test]
    fn test_lookup_helpers() {
        let mut board = Board::new(Uuid::new_v4(), "Sprint 1".to_string());
        let todo = List::new(Uuid::new_v4(), "To Do".to_string());
        let done = List::new(Uuid::new_v4(), "Done".to_string());
        let (todo_id, done_id) = (todo.id, done.id);
        board.lists = vec![todo, done];

        assert_eq!(board.list_index(done_id), Some(1));
        assert_eq!(board.list(todo_id).map(|l| l.title.as_str()), Some("To Do"));
        assert!(board.list(Uuid::new_v4()).is_none());

        board
            .list_mut(todo_id)
            .unwrap()
            .cards
            .push(Card::new(Uuid::new_v4(), "A".to_string(), None));
        assert_eq!(board.card_count(), 1);
    }

    #[test]
    fn test_missing_lists_deserialize_empty() {
        let json = format!(
            r#"{{"id":"{}","title":"Old","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let board: Board = serde_json::from_str(&json).unwrap();
        assert!(board.lists.is_empty());
    }
}
