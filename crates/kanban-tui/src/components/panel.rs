use crate::theme::{drop_marker, focused_border, unfocused_border};
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

/// Border and title settings for a bordered panel such as a list column.
pub struct PanelConfig<'a> {
    pub title: &'a str,
    pub is_focused: bool,
    pub is_drop_target: bool,
    pub override_style: Option<Style>,
}

impl<'a> PanelConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_focused: false,
            is_drop_target: false,
            override_style: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn drop_target(mut self, is_target: bool) -> Self {
        self.is_drop_target = is_target;
        self
    }

    pub fn style(mut self, style: Option<Style>) -> Self {
        self.override_style = style;
        self
    }

    pub fn border_style(&self) -> Style {
        if self.is_drop_target {
            drop_marker()
        } else if let Some(style) = self.override_style {
            style
        } else if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        }
    }

    pub fn block(&self) -> Block<'a> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(self.border_style())
            .title(self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_target_wins_over_focus() {
        let config = PanelConfig::new("To Do").focused(true).drop_target(true);
        assert_eq!(config.border_style(), drop_marker());

        let config = PanelConfig::new("To Do").focused(true);
        assert_eq!(config.border_style(), focused_border());
    }
}
