use super::{Command, CommandContext, CommandOutcome};
use crate::board::{Board, BoardId};
use kanban_core::KanbanResult;

/// Create a new board and make it the current one
pub struct CreateBoard {
    pub board: Board,
}

impl Command for CreateBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        context.boards.push(self.board.clone());
        *context.current_board_id = Some(self.board.id);
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Create board: '{}'", self.board.title)
    }
}

/// Rename a board
pub struct UpdateBoard {
    pub board_id: BoardId,
    pub title: String,
}

impl Command for UpdateBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        match context.board_mut(self.board_id) {
            Some(board) => {
                board.update_title(self.title.clone());
                Ok(CommandOutcome::BoardsChanged)
            }
            None => Ok(CommandOutcome::Unchanged),
        }
    }

    fn description(&self) -> String {
        format!("Rename board {} to '{}'", self.board_id, self.title)
    }
}

/// Delete a board with all of its lists and cards
pub struct DeleteBoard {
    pub board_id: BoardId,
}

impl Command for DeleteBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let before = context.boards.len();
        context.boards.retain(|b| b.id != self.board_id);
        if context.boards.len() == before {
            return Ok(CommandOutcome::Unchanged);
        }
        if *context.current_board_id == Some(self.board_id) {
            *context.current_board_id = None;
        }
        Ok(CommandOutcome::BoardsChanged)
    }

    fn description(&self) -> String {
        format!("Delete board {}", self.board_id)
    }
}

/// Point the current-board selection at a board, or at nothing if the id is
/// unknown
pub struct SetCurrentBoard {
    pub board_id: BoardId,
}

impl Command for SetCurrentBoard {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome> {
        let next = context
            .boards
            .iter()
            .any(|b| b.id == self.board_id)
            .then_some(self.board_id);

        if *context.current_board_id == next {
            return Ok(CommandOutcome::Unchanged);
        }
        *context.current_board_id = next;
        Ok(CommandOutcome::SelectionChanged)
    }

    fn description(&self) -> String {
        format!("Select board {}", self.board_id)
    }
}
