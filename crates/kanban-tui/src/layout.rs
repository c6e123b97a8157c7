//! Geometry of the board view, shared by rendering and mouse hit-testing.
//!
//! Lists are laid out as equal-width columns starting at
//! `BoardScroll::list_offset`; cards are fixed-height boxes stacked inside a
//! column from that list's card offset. The layout computed for the last
//! frame is what mouse events are resolved against.

use crate::drag::DropTarget;
use kanban_domain::{Board, CardId, ListId};
use ratatui::layout::Rect;
use std::collections::HashMap;

pub const CARD_HEIGHT: u16 = 3;
pub const MIN_LIST_WIDTH: u16 = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRegion {
    pub card_id: CardId,
    pub index: usize,
    pub area: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRegion {
    pub list_id: ListId,
    pub index: usize,
    pub area: Rect,
    /// Top border row, where list drags start.
    pub header: Rect,
    pub body: Rect,
    pub card_offset: usize,
    pub cards: Vec<CardRegion>,
}

impl ListRegion {
    /// Row at which a drop marker for `slot` is drawn.
    pub fn slot_row(&self, slot: usize) -> u16 {
        let visible = slot.saturating_sub(self.card_offset) as u16;
        let row = self.body.y + visible.saturating_mul(CARD_HEIGHT);
        row.min(self.body.bottom().saturating_sub(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ListHeader { list_id: ListId, index: usize },
    ListBody { list_id: ListId, index: usize },
    Card { list_id: ListId, card_id: CardId, index: usize },
}

impl Hit {
    pub fn drop_target(&self) -> DropTarget {
        match *self {
            Hit::ListHeader { list_id, .. } | Hit::ListBody { list_id, .. } => {
                DropTarget::List { list_id }
            }
            Hit::Card { list_id, card_id, .. } => DropTarget::Card { list_id, card_id },
        }
    }
}

/// Scroll position of the board view.
#[derive(Debug, Clone, Default)]
pub struct BoardScroll {
    pub list_offset: usize,
    pub card_offsets: HashMap<ListId, usize>,
}

impl BoardScroll {
    pub fn card_offset(&self, list_id: ListId) -> usize {
        self.card_offsets.get(&list_id).copied().unwrap_or(0)
    }

    /// Shift offsets just enough for the given list and card to be on screen.
    pub fn follow(&mut self, area: Rect, board: &Board, list_index: Option<usize>, card_index: Option<usize>) {
        let Some(list_index) = list_index else {
            self.list_offset = 0;
            return;
        };
        let visible = visible_list_count(area);
        if list_index < self.list_offset {
            self.list_offset = list_index;
        } else if list_index >= self.list_offset + visible {
            self.list_offset = list_index + 1 - visible;
        }

        let (Some(list), Some(card_index)) = (board.lists.get(list_index), card_index) else {
            return;
        };
        let rows = visible_card_count(area);
        let offset = self.card_offsets.entry(list.id).or_insert(0);
        if card_index < *offset {
            *offset = card_index;
        } else if card_index >= *offset + rows {
            *offset = card_index + 1 - rows;
        }
    }

    /// Forget offsets of lists that are not on `board`.
    pub fn retain_lists(&mut self, board: Option<&Board>) {
        match board {
            Some(board) => self
                .card_offsets
                .retain(|id, _| board.list_index(*id).is_some()),
            None => self.card_offsets.clear(),
        }
    }

    /// Mouse-wheel scrolling of one list.
    pub fn scroll_cards(&mut self, list_id: ListId, card_count: usize, down: bool) {
        let offset = self.card_offsets.entry(list_id).or_insert(0);
        if down {
            if *offset + 1 < card_count {
                *offset += 1;
            }
        } else {
            *offset = offset.saturating_sub(1);
        }
    }
}

pub fn visible_list_count(area: Rect) -> usize {
    usize::from((area.width / MIN_LIST_WIDTH).max(1))
}

pub fn visible_card_count(area: Rect) -> usize {
    usize::from((area.height.saturating_sub(2) / CARD_HEIGHT).max(1))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardLayout {
    pub lists: Vec<ListRegion>,
}

impl BoardLayout {
    pub fn compute(area: Rect, board: &Board, scroll: &BoardScroll) -> Self {
        let visible = visible_list_count(area);
        let width = area.width / visible as u16;
        let mut lists = Vec::new();

        for (slot, (index, list)) in board
            .lists
            .iter()
            .enumerate()
            .skip(scroll.list_offset)
            .take(visible)
            .enumerate()
        {
            let column = Rect::new(area.x + slot as u16 * width, area.y, width, area.height);
            let header = Rect::new(column.x, column.y, column.width, 1);
            let body = Rect::new(
                column.x + 1,
                column.y + 1,
                column.width.saturating_sub(2),
                column.height.saturating_sub(2),
            );

            let card_offset = scroll.card_offset(list.id).min(list.cards.len());
            let mut cards = Vec::new();
            let mut y = body.y;
            for (card_index, card) in list.cards.iter().enumerate().skip(card_offset) {
                if y + CARD_HEIGHT > body.bottom() {
                    break;
                }
                cards.push(CardRegion {
                    card_id: card.id,
                    index: card_index,
                    area: Rect::new(body.x, y, body.width, CARD_HEIGHT),
                });
                y += CARD_HEIGHT;
            }

            lists.push(ListRegion {
                list_id: list.id,
                index,
                area: column,
                header,
                body,
                card_offset,
                cards,
            });
        }

        Self { lists }
    }

    pub fn list(&self, list_id: ListId) -> Option<&ListRegion> {
        self.lists.iter().find(|l| l.list_id == list_id)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let region = self.lists.iter().find(|l| contains(l.area, column, row))?;
        if contains(region.header, column, row) {
            return Some(Hit::ListHeader {
                list_id: region.list_id,
                index: region.index,
            });
        }
        if let Some(card) = region.cards.iter().find(|c| contains(c.area, column, row)) {
            return Some(Hit::Card {
                list_id: region.list_id,
                card_id: card.card_id,
                index: card.index,
            });
        }
        Some(Hit::ListBody {
            list_id: region.list_id,
            index: region.index,
        })
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::{Card, List};
    use uuid::Uuid;

    fn board(cards_per_list: &[usize]) -> Board {
        let mut board = Board::new(Uuid::new_v4(), "B".to_string());
        for (i, count) in cards_per_list.iter().enumerate() {
            let mut list = List::new(Uuid::new_v4(), format!("L{i}"));
            for j in 0..*count {
                list.cards
                    .push(Card::new(Uuid::new_v4(), format!("C{j}"), None));
            }
            board.lists.push(list);
        }
        board
    }

    #[test]
    fn test_columns_split_width() {
        let b = board(&[1, 0]);
        let layout = BoardLayout::compute(Rect::new(0, 0, 48, 20), &b, &BoardScroll::default());

        assert_eq!(layout.lists.len(), 2);
        assert_eq!(layout.lists[0].area, Rect::new(0, 0, 24, 20));
        assert_eq!(layout.lists[1].area.x, 24);
        assert_eq!(layout.lists[0].cards[0].area, Rect::new(1, 1, 22, CARD_HEIGHT));
    }

    #[test]
    fn test_retain_lists_drops_missing_lists() {
        let mut b = board(&[3, 3]);
        let mut scroll = BoardScroll::default();
        scroll.scroll_cards(b.lists[0].id, 3, true);
        scroll.scroll_cards(b.lists[1].id, 3, true);

        let removed = b.lists.remove(0);
        scroll.retain_lists(Some(&b));
        assert!(!scroll.card_offsets.contains_key(&removed.id));
        assert_eq!(scroll.card_offset(b.lists[0].id), 1);

        scroll.retain_lists(None);
        assert!(scroll.card_offsets.is_empty());
    }

    #[test]
    fn test_hit_testing() {
        let b = board(&[2, 0]);
        let layout = BoardLayout::compute(Rect::new(0, 0, 48, 20), &b, &BoardScroll::default());

        assert_eq!(
            layout.hit(5, 0),
            Some(Hit::ListHeader { list_id: b.lists[0].id, index: 0 })
        );
        assert_eq!(
            layout.hit(5, 4),
            Some(Hit::Card {
                list_id: b.lists[0].id,
                card_id: b.lists[0].cards[1].id,
                index: 1
            })
        );
        assert_eq!(
            layout.hit(30, 10),
            Some(Hit::ListBody { list_id: b.lists[1].id, index: 1 })
        );
        assert_eq!(layout.hit(60, 10), None);
    }

    #[test]
    fn test_overflowing_cards_are_clipped() {
        let b = board(&[10]);
        let layout = BoardLayout::compute(Rect::new(0, 0, 30, 11), &b, &BoardScroll::default());
        assert_eq!(layout.lists[0].cards.len(), 3);
    }

    #[test]
    fn test_follow_keeps_selection_visible() {
        let b = board(&[10, 1, 1, 1]);
        let area = Rect::new(0, 0, 48, 11);
        let mut scroll = BoardScroll::default();

        scroll.follow(area, &b, Some(3), None);
        assert_eq!(scroll.list_offset, 2);

        scroll.follow(area, &b, Some(0), Some(7));
        assert_eq!(scroll.list_offset, 0);
        assert_eq!(scroll.card_offset(b.lists[0].id), 5);

        let layout = BoardLayout::compute(area, &b, &scroll);
        assert_eq!(layout.lists[0].cards[0].index, 5);
        assert_eq!(layout.lists[0].slot_row(5), 1);
    }

    #[test]
    fn test_wheel_scroll_is_bounded() {
        let b = board(&[2]);
        let id = b.lists[0].id;
        let mut scroll = BoardScroll::default();
        scroll.scroll_cards(id, 2, true);
        scroll.scroll_cards(id, 2, true);
        assert_eq!(scroll.card_offset(id), 1);
        scroll.scroll_cards(id, 2, false);
        scroll.scroll_cards(id, 2, false);
        assert_eq!(scroll.card_offset(id), 0);
    }
}
