use crate::app::{App, AppMode};
use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crossterm::event::KeyCode;
use kanban_domain::{BoardId, CardId, CardUpdate, ListId};

impl App {
    fn selected_card_ids(&self) -> Option<(BoardId, ListId, CardId)> {
        Some((
            self.current_board()?.id,
            self.selected_list()?.id,
            self.selected_card()?.id,
        ))
    }

    pub fn handle_create_card_key(&mut self) {
        if self.selected_list().is_some() {
            self.input.clear();
            self.mode = AppMode::CreateCard;
        }
    }

    pub fn handle_edit_card_title_key(&mut self) {
        if let Some(title) = self.selected_card().map(|c| c.title.clone()) {
            self.input.set(title);
            self.mode = AppMode::EditCardTitle;
        }
    }

    pub fn handle_delete_card_key(&mut self) {
        if self.selected_card().is_some() {
            self.mode = AppMode::DeleteCard;
        }
    }

    pub fn handle_create_card_dialog(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                let ids = self
                    .current_board()
                    .map(|b| b.id)
                    .zip(self.selected_list().map(|l| l.id));
                if let Some((board_id, list_id)) = ids {
                    if let Some(card) = self.store.add_card(board_id, list_id, self.input.trimmed(), None) {
                        tracing::info!("Created card '{}' ({})", card.title, card.id);
                        let index = self.selected_list().and_then(|l| l.card_index(card.id));
                        self.card_selection.set(index);
                    }
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn handle_edit_card_title_dialog(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                if let Some((board_id, list_id, card_id)) = self.selected_card_ids() {
                    self.store.update_card(
                        board_id,
                        list_id,
                        card_id,
                        CardUpdate::title(self.input.trimmed()),
                    );
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn handle_delete_card_confirm(&mut self, key_code: KeyCode) {
        match handle_confirm_input(key_code) {
            DialogAction::Confirm => {
                if let Some((board_id, list_id, card_id)) = self.selected_card_ids() {
                    tracing::info!("Deleting card {}", card_id);
                    self.store.delete_card(board_id, list_id, card_id);
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }
}
