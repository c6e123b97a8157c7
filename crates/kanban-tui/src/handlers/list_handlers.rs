use crate::app::{App, AppMode};
use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crossterm::event::KeyCode;

impl App {
    pub fn handle_create_list_key(&mut self) {
        if self.current_board().is_some() {
            self.input.clear();
            self.mode = AppMode::CreateList;
        }
    }

    pub fn handle_rename_list_key(&mut self) {
        if let Some(title) = self.selected_list().map(|l| l.title.clone()) {
            self.input.set(title);
            self.mode = AppMode::RenameList;
        }
    }

    pub fn handle_delete_list_key(&mut self) {
        if self.selected_list().is_some() {
            self.mode = AppMode::DeleteList;
        }
    }

    pub fn handle_create_list_dialog(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                if let Some(board_id) = self.current_board().map(|b| b.id) {
                    if let Some(list) = self.store.add_list(board_id, self.input.trimmed()) {
                        tracing::info!("Created list '{}' ({})", list.title, list.id);
                        let index = self.current_board().and_then(|b| b.list_index(list.id));
                        self.list_selection.set(index);
                        self.card_selection.clear();
                    }
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn handle_rename_list_dialog(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                let ids = self
                    .current_board()
                    .map(|b| b.id)
                    .zip(self.selected_list().map(|l| l.id));
                if let Some((board_id, list_id)) = ids {
                    self.store.update_list(board_id, list_id, self.input.trimmed());
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn handle_delete_list_confirm(&mut self, key_code: KeyCode) {
        match handle_confirm_input(key_code) {
            DialogAction::Confirm => {
                let ids = self
                    .current_board()
                    .map(|b| b.id)
                    .zip(self.selected_list().map(|l| l.id));
                if let Some((board_id, list_id)) = ids {
                    tracing::info!("Deleting list {}", list_id);
                    self.store.delete_list(board_id, list_id);
                    self.card_selection.clear();
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }
}
