//! Where would the dragged item land?
//!
//! Card hovers are tracked in two coordinate systems. A *slot* is a gap in
//! the list as rendered (0 is above the first card, `len` is below the
//! last) and is where the placeholder is drawn. The *destination index* is
//! what `move_card` expects: a position in the destination list after the
//! dragged card has been removed from its source. Inside the source list,
//! slots past the dragged card translate to one less.

use kanban_domain::{Board, CardId, ListId};

/// The item being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragItem {
    List { id: ListId },
    Card { id: CardId, list_id: ListId },
}

/// What the pointer is over, as reported by hit-testing the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    List { list_id: ListId },
    Card { list_id: ListId, card_id: CardId },
}

impl DropTarget {
    pub fn list_id(&self) -> ListId {
        match self {
            DropTarget::List { list_id } | DropTarget::Card { list_id, .. } => *list_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hover {
    /// List under the pointer (for list drags, the list whose place is taken).
    pub list_id: ListId,
    /// Rendered gap for cards, list position for lists.
    pub slot: usize,
    pub dest_index: usize,
    /// The item would land exactly where it already is.
    pub is_own_position: bool,
}

impl Hover {
    /// Where to draw the drop marker, if anywhere.
    pub fn placeholder(&self) -> Option<usize> {
        (!self.is_own_position).then_some(self.slot)
    }
}

fn card_hover(source_list: ListId, source_index: usize, list_id: ListId, slot: usize) -> Hover {
    let same_list = list_id == source_list;
    let dest_index = if same_list && slot > source_index {
        slot - 1
    } else {
        slot
    };
    Hover {
        list_id,
        slot,
        dest_index,
        is_own_position: same_list && dest_index == source_index,
    }
}

fn card_hover_from_dest(source_list: ListId, source_index: usize, list_id: ListId, dest_index: usize) -> Hover {
    let same_list = list_id == source_list;
    let slot = if same_list && dest_index > source_index {
        dest_index + 1
    } else {
        dest_index
    };
    Hover {
        list_id,
        slot,
        dest_index,
        is_own_position: same_list && dest_index == source_index,
    }
}

fn list_hover(board: &Board, source_index: usize, index: usize) -> Option<Hover> {
    let list = board.lists.get(index)?;
    Some(Hover {
        list_id: list.id,
        slot: index,
        dest_index: index,
        is_own_position: index == source_index,
    })
}

/// Largest valid `move_card` destination in `list_id`.
fn max_card_dest(board: &Board, source_list: ListId, list_id: ListId) -> Option<usize> {
    let count = board.list(list_id)?.card_count();
    Some(if list_id == source_list {
        count.saturating_sub(1)
    } else {
        count
    })
}

/// Hover for `item` over `target`, or `None` when the target is not part of
/// `board`.
pub fn compute_hover(board: &Board, item: &DragItem, source_index: usize, target: &DropTarget) -> Option<Hover> {
    match item {
        DragItem::Card { list_id: source_list, .. } => {
            let slot = match target {
                DropTarget::List { list_id } => board.list(*list_id)?.card_count(),
                DropTarget::Card { list_id, card_id } => {
                    board.list(*list_id)?.card_index(*card_id)? + 1
                }
            };
            Some(card_hover(*source_list, source_index, target.list_id(), slot))
        }
        DragItem::List { .. } => {
            let index = board.list_index(target.list_id())?;
            list_hover(board, source_index, index)
        }
    }
}

/// Hover for an item that has not moved yet.
pub fn initial_hover(board: &Board, item: &DragItem, source_index: usize) -> Option<Hover> {
    match item {
        DragItem::Card { list_id, .. } => {
            board.list(*list_id)?;
            Some(card_hover_from_dest(*list_id, source_index, *list_id, source_index))
        }
        DragItem::List { .. } => list_hover(board, source_index, source_index),
    }
}

/// Keyboard movement of the destination by one step.
pub fn step_hover(board: &Board, item: &DragItem, source_index: usize, current: &Hover, direction: Direction) -> Option<Hover> {
    match item {
        DragItem::Card { list_id: source_list, .. } => {
            let (list_id, dest) = match direction {
                Direction::Up => (current.list_id, current.dest_index.saturating_sub(1)),
                Direction::Down => {
                    let max = max_card_dest(board, *source_list, current.list_id)?;
                    (current.list_id, (current.dest_index + 1).min(max))
                }
                Direction::Left | Direction::Right => {
                    let index = board.list_index(current.list_id)?;
                    let next = if direction == Direction::Left {
                        index.checked_sub(1)?
                    } else {
                        index + 1
                    };
                    let list = board.lists.get(next)?;
                    let max = max_card_dest(board, *source_list, list.id)?;
                    (list.id, current.dest_index.min(max))
                }
            };
            Some(card_hover_from_dest(*source_list, source_index, list_id, dest))
        }
        DragItem::List { .. } => {
            let next = match direction {
                Direction::Left => current.dest_index.checked_sub(1)?,
                Direction::Right => current.dest_index + 1,
                Direction::Up | Direction::Down => return Some(*current),
            };
            list_hover(board, source_index, next)
        }
    }
}
