use crate::app::{App, Deferred, View};
use crossterm::event::KeyCode;
use kanban_domain::List;

impl App {
    pub fn handle_board_view_key(&mut self, key_code: KeyCode) -> Option<Deferred> {
        if !self.drag.is_idle() {
            self.handle_drag_key(key_code);
            return None;
        }

        match key_code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Esc => self.view = View::Boards,
            KeyCode::Left | KeyCode::Char('h') => self.select_neighbour_list(false),
            KeyCode::Right | KeyCode::Char('l') => self.select_neighbour_list(true),
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.selected_list().map_or(0, List::card_count);
                self.card_selection.next(count);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.selected_card().is_some() {
                    self.card_selection.prev();
                }
            }
            KeyCode::Char('a') => self.handle_create_list_key(),
            KeyCode::Char('r') => self.handle_rename_list_key(),
            KeyCode::Char('D') => self.handle_delete_list_key(),
            KeyCode::Char('n') => self.handle_create_card_key(),
            KeyCode::Char('e') => self.handle_edit_card_title_key(),
            KeyCode::Char('E') => {
                if self.selected_card().is_some() {
                    return Some(Deferred::EditDescription);
                }
            }
            KeyCode::Char('d') => self.handle_delete_card_key(),
            KeyCode::Char('t') => self.show_overview = !self.show_overview,
            KeyCode::Char(' ') => self.pick_up_selected_card(),
            KeyCode::Char('m') => self.pick_up_selected_list(),
            _ => {}
        }
        None
    }

    fn select_neighbour_list(&mut self, forward: bool) {
        let count = self.current_board().map_or(0, |b| b.lists.len());
        if count == 0 {
            return;
        }
        if forward {
            self.list_selection.next(count);
        } else {
            self.list_selection.prev();
        }
        // Start at the top of the newly focused list.
        self.card_selection.clear();
    }
}
