use super::{Command, CommandContext, CommandOutcome};
use crate::board::BoardId;
use crate::card::{Card, CardId, CardUpdate};
use crate::list::ListId;
use crate::reorder;
use kanban_core::KanbanResult;

/// Append a card to a list
pub struct CreateCard {
    pub board_id: BoardId,
    pub list_id: ListId,
    pub card_id: CardId,
    pub title: String,
    pub description: Option<String>,
}

impl Command for CreateCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let Some(list) = board.list_mut(self.list_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        list.cards.push(Card::new(
            self.card_id,
            self.title.clone(),
            self.description.clone(),
        ));
        list.touch();
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Create card: '{}'", self.title)
    }
}

/// Patch a card's title and/or description
pub struct UpdateCard {
    pub board_id: BoardId,
    pub list_id: ListId,
    pub card_id: CardId,
    pub updates: CardUpdate,
}

impl Command for UpdateCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        if !self.updates.is_change() {
            return Ok(CommandOutcome::Unchanged);
        }
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let Some(list) = board.list_mut(self.list_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let Some(card) = list.cards.iter_mut().find(|c| c.id == self.card_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        card.update(self.updates.clone());
        list.touch();
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Update card {}", self.card_id)
    }
}

/// Delete a card
pub struct DeleteCard {
    pub board_id: BoardId,
    pub list_id: ListId,
    pub card_id: CardId,
}

impl Command for DeleteCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let Some(list) = board.list_mut(self.list_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let before = list.cards.len();
        list.cards.retain(|c| c.id != self.card_id);
        if list.cards.len() == before {
            return Ok(CommandOutcome::Unchanged);
        }
        list.touch();
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Delete card {}", self.card_id)
    }
}

/// Move a card within a list or across lists of the same board.
///
/// `dest_index` is a position in the destination list as it looks after the
/// card has been taken out of the source list.
pub struct MoveCard {
    pub board_id: BoardId,
    pub source_list_id: ListId,
    pub dest_list_id: ListId,
    pub source_index: usize,
    pub dest_index: usize,
}

impl Command for MoveCard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let same_list = self.source_list_id == self.dest_list_id;
        if same_list && self.source_index == self.dest_index {
            return Ok(CommandOutcome::Unchanged);
        }

        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let (Some(src), Some(dst)) = (
            board.list_index(self.source_list_id),
            board.list_index(self.dest_list_id),
        ) else {
            return Ok(CommandOutcome::Unchanged);
        };

        let moved = if same_list {
            let list = &mut board.lists[src];
            reorder::move_within(&mut list.cards, self.source_index, self.dest_index)
                .map(|()| list.touch())
        } else {
            match reorder::pair_mut(&mut board.lists, src, dst) {
                Some((source, dest)) => {
                    reorder::transfer(&mut source.cards, &mut dest.cards, self.source_index, self.dest_index)
                        .map(|()| {
                            source.touch();
                            dest.touch();
                        })
                }
                None => return Ok(CommandOutcome::Unchanged),
            }
        };

        if let Err(e) = moved {
            tracing::warn!("Ignoring card move on board {}: {}", self.board_id, e);
            return Ok(CommandOutcome::Unchanged);
        }
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!(
            "Move card from {}[{}] to {}[{}]",
            self.source_list_id, self.source_index, self.dest_list_id, self.dest_index
        )
    }
}
