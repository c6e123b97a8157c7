use crate::board::{Board, BoardId};
use kanban_core::KanbanResult;

pub mod board_commands;
pub mod card_commands;
pub mod list_commands;

pub use board_commands::*;
pub use card_commands::*;
pub use list_commands::*;

/// What executing a command did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing changed (missing target, same-position move, bad index).
    Unchanged,
    /// Only the current-board pointer moved; the boards are untouched.
    SelectionChanged,
    /// The boards collection changed and must be persisted.
    BoardsChanged,
}

impl CommandOutcome {
    pub fn is_change(self) -> bool {
        !matches!(self, CommandOutcome::Unchanged)
    }
}

/// Trait for store commands.
/// A command is a single named mutation; it either applies completely or
/// reports `Unchanged` without touching the context.
pub trait Command: Send + Sync {
    fn execute(&self, context: &mut CommandContext) -> KanbanResult<CommandOutcome>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Mutable view of the store state handed to commands.
pub struct CommandContext<'a> {
    pub boards: &'a mut Vec<Board>,
    pub current_board_id: &'a mut Option<BoardId>,
}

impl CommandContext<'_> {
    pub(crate) fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| b.id == id)
    }
}
