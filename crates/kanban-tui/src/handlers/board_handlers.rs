use crate::app::{App, AppMode, View};
use crate::dialog::{handle_confirm_input, handle_dialog_input, DialogAction};
use crossterm::event::KeyCode;

impl App {
    pub fn handle_boards_view_key(&mut self, key_code: KeyCode) {
        let board_count = self.store.boards().len();
        match key_code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Down | KeyCode::Char('j') => self.board_selection.next(board_count),
            KeyCode::Up | KeyCode::Char('k') => {
                if board_count > 0 {
                    self.board_selection.prev();
                }
            }
            KeyCode::Char('n') => {
                self.input.clear();
                self.mode = AppMode::CreateBoard;
            }
            KeyCode::Char('r') => {
                if let Some(title) = self.selected_board().map(|b| b.title.clone()) {
                    self.input.set(title);
                    self.mode = AppMode::RenameBoard;
                }
            }
            KeyCode::Char('d') => {
                if self.selected_board().is_some() {
                    self.mode = AppMode::DeleteBoard;
                }
            }
            KeyCode::Enter => self.open_selected_board(),
            _ => {}
        }
    }

    pub fn open_selected_board(&mut self) {
        let Some(board_id) = self.selected_board().map(|b| b.id) else {
            return;
        };
        tracing::debug!("Opening board {}", board_id);
        self.store.set_current_board(board_id);
        self.view = View::Board;
        self.list_selection.clear();
        self.card_selection.clear();
        self.scroll = Default::default();
        self.show_overview = false;
    }

    pub fn handle_create_board_dialog(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                let board = self.store.create_board(self.input.trimmed());
                tracing::info!("Created board '{}' ({})", board.title, board.id);
                self.board_selection.set(Some(self.store.boards().len() - 1));
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn handle_rename_board_dialog(&mut self, key_code: KeyCode) {
        match handle_dialog_input(&mut self.input, key_code, false) {
            DialogAction::Confirm => {
                if let Some(board_id) = self.selected_board().map(|b| b.id) {
                    self.store.update_board(board_id, self.input.trimmed());
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub fn handle_delete_board_confirm(&mut self, key_code: KeyCode) {
        match handle_confirm_input(key_code) {
            DialogAction::Confirm => {
                if let Some(board_id) = self.selected_board().map(|b| b.id) {
                    tracing::info!("Deleting board {}", board_id);
                    self.store.delete_board(board_id);
                }
                self.close_dialog();
            }
            DialogAction::Cancel => self.close_dialog(),
            DialogAction::None => {}
        }
    }

    pub(crate) fn close_dialog(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
    }
}
