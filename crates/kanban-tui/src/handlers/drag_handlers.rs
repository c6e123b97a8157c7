use crate::app::App;
use crate::drag::{Direction, DragItem, DropAction, Point, PointerKind, Release};
use crate::layout::Hit;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

impl App {
    pub fn pick_up_selected_card(&mut self) {
        let state = self.store.state();
        let Some(board) = state.current_board() else {
            return;
        };
        let (Some(list), Some(card_index)) = (self.selected_list(), self.card_selection.get()) else {
            return;
        };
        let Some(card) = list.cards.get(card_index) else {
            return;
        };
        let item = DragItem::Card {
            id: card.id,
            list_id: list.id,
        };
        self.drag.pick_up(board, item, card_index);
    }

    pub fn pick_up_selected_list(&mut self) {
        let state = self.store.state();
        let Some(board) = state.current_board() else {
            return;
        };
        let Some(list_index) = self.list_selection.get() else {
            return;
        };
        let Some(list) = board.lists.get(list_index) else {
            return;
        };
        let item = DragItem::List { id: list.id };
        self.drag.pick_up(board, item, list_index);
    }

    pub fn handle_drag_key(&mut self, key_code: KeyCode) {
        let state = self.store.state();
        let Some(board) = state.current_board() else {
            self.drag.cancel();
            return;
        };
        let direction = match key_code {
            KeyCode::Esc => {
                self.drag.cancel();
                return;
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.finish_drag();
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => Direction::Up,
            KeyCode::Down | KeyCode::Char('j') => Direction::Down,
            KeyCode::Left | KeyCode::Char('h') => Direction::Left,
            KeyCode::Right | KeyCode::Char('l') => Direction::Right,
            _ => return,
        };
        self.drag.step(board, direction);
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.mode != crate::app::AppMode::Normal || self.view != crate::app::View::Board {
            return;
        }
        let state = self.store.state();
        let Some(board) = state.current_board() else {
            return;
        };
        let now = Instant::now();
        let point = Point::from((mouse.column, mouse.row));
        let hit = self.layout.hit(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(hit) = hit else {
                    return;
                };
                self.select_hit(&hit);
                let (item, source_index) = match hit {
                    Hit::ListHeader { list_id, index } => (DragItem::List { id: list_id }, index),
                    Hit::Card { list_id, card_id, index } => (
                        DragItem::Card {
                            id: card_id,
                            list_id,
                        },
                        index,
                    ),
                    Hit::ListBody { .. } => return,
                };
                self.drag
                    .press(item, board.id, source_index, PointerKind::Mouse, point, now);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let target = hit.map(|h| h.drop_target());
                self.drag.pointer_move(board, point, target, now);
            }
            MouseEventKind::Up(MouseButton::Left) => self.finish_drag(),
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                if self.drag.effects().scroll_locked() {
                    return;
                }
                if let Some(list) = hit.and_then(|h| board.list(h.drop_target().list_id())) {
                    let down = mouse.kind == MouseEventKind::ScrollDown;
                    self.scroll.scroll_cards(list.id, list.card_count(), down);
                }
            }
            _ => {}
        }
    }

    fn select_hit(&mut self, hit: &Hit) {
        match *hit {
            Hit::ListHeader { index, .. } | Hit::ListBody { index, .. } => {
                if self.list_selection.get() != Some(index) {
                    self.card_selection.clear();
                }
                self.list_selection.set(Some(index));
            }
            Hit::Card { list_id, index, .. } => {
                let list_index = self.current_board().and_then(|b| b.list_index(list_id));
                self.list_selection.set(list_index);
                self.card_selection.set(Some(index));
            }
        }
    }

    fn finish_drag(&mut self) {
        match self.drag.release() {
            Release::Drop(action) => self.apply_drop(action),
            Release::Click(_) | Release::Nothing => {}
        }
    }

    /// Run the move and keep the moved item selected.
    pub fn apply_drop(&mut self, action: DropAction) {
        if !action.apply(&mut self.store) {
            return;
        }
        match action {
            DropAction::MoveList { dest_index, .. } => {
                self.list_selection.set(Some(dest_index));
                self.card_selection.clear();
            }
            DropAction::MoveCard {
                dest_list_id,
                dest_index,
                ..
            } => {
                let list_index = self.current_board().and_then(|b| b.list_index(dest_list_id));
                self.list_selection.set(list_index);
                self.card_selection.set(Some(dest_index));
            }
        }
        self.sync_selection();
    }
}
