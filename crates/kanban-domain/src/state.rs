use crate::board::{Board, BoardId};
use serde::Serialize;

/// Snapshot of everything the store holds. The current board is kept as an
/// id and resolved on read, so it can never drift from the boards sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardsState {
    pub(crate) boards: Vec<Board>,
    pub(crate) current_board_id: Option<BoardId>,
}

impl BoardsState {
    pub fn new(boards: Vec<Board>) -> Self {
        Self {
            boards,
            current_board_id: None,
        }
    }

    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    pub fn current_board_id(&self) -> Option<BoardId> {
        self.current_board_id
            .filter(|id| self.boards.iter().any(|b| b.id == *id))
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.current_board_id.and_then(|id| self.board(id))
    }
}
