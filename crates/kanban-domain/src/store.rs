//! The board store: single source of truth for boards, lists and cards.
//!
//! Every mutation is expressed as a [`Command`], executed against a copy of
//! the current state, persisted through [`LocalStorage`] and then published
//! to subscribers as one new immutable snapshot. Observers holding an older
//! snapshot keep seeing it unchanged.

use crate::board::{Board, BoardId};
use crate::card::{Card, CardId, CardUpdate};
use crate::commands::{
    Command, CommandContext, CommandOutcome, CreateBoard, CreateCard, CreateList, DeleteBoard,
    DeleteCard, DeleteList, MoveCard, MoveList, SetCurrentBoard, UpdateBoard, UpdateCard,
    UpdateList,
};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::list::{List, ListId};
use crate::state::BoardsState;
use kanban_core::DEFAULT_STORAGE_KEY;
use kanban_persistence::LocalStorage;
use std::sync::Arc;
use tokio::sync::watch;

pub struct BoardStore {
    state: Arc<BoardsState>,
    storage: LocalStorage,
    storage_key: String,
    ids: Arc<dyn IdGenerator>,
    publisher: watch::Sender<Arc<BoardsState>>,
    last_write_ok: bool,
}

impl BoardStore {
    /// Load boards saved under `storage_key`. Missing or unreadable data
    /// yields an empty store.
    pub fn load(storage: LocalStorage, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let boards: Vec<Board> = storage.get(&storage_key, Vec::new());
        tracing::info!(
            "Loaded {} board(s) from storage key '{}'",
            boards.len(),
            storage_key
        );

        let state = Arc::new(BoardsState::new(boards));
        let (publisher, _) = watch::channel(state.clone());
        Self {
            state,
            storage,
            storage_key,
            ids: Arc::new(UuidGenerator),
            publisher,
            last_write_ok: true,
        }
    }

    /// A store that never touches storage.
    pub fn in_memory() -> Self {
        Self::load(LocalStorage::detached(), DEFAULT_STORAGE_KEY)
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn state(&self) -> Arc<BoardsState> {
        self.state.clone()
    }

    pub fn boards(&self) -> &[Board] {
        self.state.boards()
    }

    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.state.board(id)
    }

    pub fn current_board(&self) -> Option<&Board> {
        self.state.current_board()
    }

    /// Whether the most recent command's write reached storage. Commands
    /// that wrote nothing, and stores without a backend, count as saved.
    pub fn last_write_ok(&self) -> bool {
        self.last_write_ok
    }

    /// Receive every snapshot published after this call.
    ///
    /// Observer hook for code that does not own the store; the TUI owns its
    /// store and reads [`BoardStore::state`] on every frame instead.
    pub fn subscribe(&self) -> watch::Receiver<Arc<BoardsState>> {
        self.publisher.subscribe()
    }

    /// Run a command. Storage failures are logged inside [`LocalStorage`]
    /// and reported through [`BoardStore::last_write_ok`]; the new state is
    /// kept in memory regardless.
    pub fn execute(&mut self, command: &dyn Command) -> CommandOutcome {
        self.last_write_ok = true;
        let mut next = (*self.state).clone();
        let result = {
            let mut context = CommandContext {
                boards: &mut next.boards,
                current_board_id: &mut next.current_board_id,
            };
            command.execute(&mut context)
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!("{} failed: {}", command.description(), e);
                return CommandOutcome::Unchanged;
            }
        };

        match outcome {
            CommandOutcome::Unchanged => {
                tracing::debug!("{}: no change", command.description());
                return outcome;
            }
            CommandOutcome::BoardsChanged => {
                let saved = self.storage.set(&self.storage_key, next.boards());
                self.last_write_ok = saved || !self.storage.is_attached();
            }
            CommandOutcome::SelectionChanged => {}
        }

        tracing::debug!("{}", command.description());
        self.state = Arc::new(next);
        self.publisher.send_replace(self.state.clone());
        outcome
    }

    pub fn create_board(&mut self, title: impl Into<String>) -> Board {
        let board = Board::new(self.ids.next_id(), title.into());
        self.execute(&CreateBoard {
            board: board.clone(),
        });
        board
    }

    pub fn update_board(&mut self, board_id: BoardId, title: impl Into<String>) -> bool {
        self.execute(&UpdateBoard {
            board_id,
            title: title.into(),
        })
        .is_change()
    }

    pub fn delete_board(&mut self, board_id: BoardId) -> bool {
        self.execute(&DeleteBoard { board_id }).is_change()
    }

    pub fn set_current_board(&mut self, board_id: BoardId) {
        self.execute(&SetCurrentBoard { board_id });
    }

    pub fn add_list(&mut self, board_id: BoardId, title: impl Into<String>) -> Option<List> {
        let list_id = self.ids.next_id();
        self.execute(&CreateList {
            board_id,
            list_id,
            title: title.into(),
        });
        self.board(board_id)?.list(list_id).cloned()
    }

    pub fn update_list(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        title: impl Into<String>,
    ) -> bool {
        self.execute(&UpdateList {
            board_id,
            list_id,
            title: title.into(),
        })
        .is_change()
    }

    pub fn delete_list(&mut self, board_id: BoardId, list_id: ListId) -> bool {
        self.execute(&DeleteList { board_id, list_id })
            .is_change()
    }

    pub fn move_list(&mut self, board_id: BoardId, source_index: usize, dest_index: usize) -> bool {
        self.execute(&MoveList {
            board_id,
            source_index,
            dest_index,
        })
        .is_change()
    }

    pub fn add_card(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        title: impl Into<String>,
        description: Option<String>,
    ) -> Option<Card> {
        let card_id = self.ids.next_id();
        self.execute(&CreateCard {
            board_id,
            list_id,
            card_id,
            title: title.into(),
            description,
        });
        self.board(board_id)?.list(list_id)?.card(card_id).cloned()
    }

    pub fn update_card(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        card_id: CardId,
        updates: CardUpdate,
    ) -> bool {
        self.execute(&UpdateCard {
            board_id,
            list_id,
            card_id,
            updates,
        })
        .is_change()
    }

    pub fn delete_card(&mut self, board_id: BoardId, list_id: ListId, card_id: CardId) -> bool {
        self.execute(&DeleteCard {
            board_id,
            list_id,
            card_id,
        })
        .is_change()
    }

    pub fn move_card(
        &mut self,
        board_id: BoardId,
        source_list_id: ListId,
        dest_list_id: ListId,
        source_index: usize,
        dest_index: usize,
    ) -> bool {
        self.execute(&MoveCard {
            board_id,
            source_list_id,
            dest_list_id,
            source_index,
            dest_index,
        })
        .is_change()
    }
}
