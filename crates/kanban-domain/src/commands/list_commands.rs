use super::{Command, CommandContext, CommandOutcome};
use crate::board::BoardId;
use crate::list::{List, ListId};
use crate::reorder;
use kanban_core::KanbanResult;

/// Append a list to a board
pub struct CreateList {
    pub board_id: BoardId,
    pub list_id: ListId,
    pub title: String,
}

impl Command for CreateList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        board.lists.push(List::new(self.list_id, self.title.clone()));
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Create list: '{}'", self.title)
    }
}

/// Rename a list
pub struct UpdateList {
    pub board_id: BoardId,
    pub list_id: ListId,
    pub title: String,
}

impl Command for UpdateList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let Some(list) = board.list_mut(self.list_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        list.update_title(self.title.clone());
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Rename list {} to '{}'", self.list_id, self.title)
    }
}

/// Delete a list and its cards
pub struct DeleteList {
    pub board_id: BoardId,
    pub list_id: ListId,
}

impl Command for DeleteList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        let before = board.lists.len();
        board.lists.retain(|l| l.id != self.list_id);
        if board.lists.len() == before {
            return Ok(CommandOutcome::Unchanged);
        }
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Delete list {}", self.list_id)
    }
}

/// Reorder the lists of a board
pub struct MoveList {
    pub board_id: BoardId,
    pub source_index: usize,
    pub dest_index: usize,
}

impl Command for MoveList {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        if self.source_index == self.dest_index {
            return Ok(CommandOutcome::Unchanged);
        }
        let Some(board) = context.board_mut(self.board_id) else {
            return Ok(CommandOutcome::Unchanged);
        };
        if let Err(e) = reorder::move_within(&mut board.lists, self.source_index, self.dest_index) {
            tracing::warn!("Ignoring list move on board {}: {}", self.board_id, e);
            return Ok(CommandOutcome::Unchanged);
        }
        board.touch();
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!(
            "Move list from position {} to {}",
            self.source_index, self.dest_index
        )
    }
}
