use kanban_core::{AppConfig, KanbanError, KanbanResult};
use kanban_domain::{Board, BoardId, BoardStore, Card, CardId, CardUpdate, List, ListId};
use kanban_persistence::{FileStorage, LocalStorage};
use std::path::PathBuf;
use std::sync::Arc;

/// Where a card sits inside its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLocation {
    pub list_id: ListId,
    pub index: usize,
}

/// One-shot access to the saved boards. Every mutation is written through
/// before the call returns, and a write that fails is reported as an error.
pub struct CliContext {
    store: BoardStore,
}

impl CliContext {
    pub fn load(data_dir: Option<PathBuf>) -> Self {
        let mut config = AppConfig::load();
        if data_dir.is_some() {
            config.data_dir = data_dir;
        }
        let dir = config.effective_data_dir();
        tracing::debug!("CLI using data directory {}", dir.display());

        let storage = LocalStorage::new(Arc::new(FileStorage::new(dir)));
        Self::from_store(BoardStore::load(storage, config.effective_storage_key()))
    }

    pub fn from_store(store: BoardStore) -> Self {
        Self { store }
    }

    pub fn boards(&self) -> &[Board] {
        self.store.boards()
    }

    pub fn board(&self, id: BoardId) -> KanbanResult<&Board> {
        self.store
            .board(id)
            .ok_or_else(|| KanbanError::not_found(format!("Board {id}")))
    }

    pub fn list(&self, board_id: BoardId, list_id: ListId) -> KanbanResult<&List> {
        self.board(board_id)?
            .list(list_id)
            .ok_or_else(|| KanbanError::not_found(format!("List {list_id}")))
    }

    pub fn locate_card(&self, board_id: BoardId, card_id: CardId) -> KanbanResult<CardLocation> {
        self.board(board_id)?
            .lists
            .iter()
            .find_map(|list| {
                list.card_index(card_id).map(|index| CardLocation {
                    list_id: list.id,
                    index,
                })
            })
            .ok_or_else(|| KanbanError::not_found(format!("Card {card_id}")))
    }

    pub fn card(&self, board_id: BoardId, card_id: CardId) -> KanbanResult<&Card> {
        let location = self.locate_card(board_id, card_id)?;
        self.list(board_id, location.list_id)?
            .card(card_id)
            .ok_or_else(|| KanbanError::not_found(format!("Card {card_id}")))
    }

    pub fn create_board(&mut self, title: &str) -> KanbanResult<Board> {
        let title = require_title(title)?;
        let board = self.store.create_board(title);
        self.ensure_saved()?;
        Ok(board)
    }

    pub fn update_board(&mut self, id: BoardId, title: &str) -> KanbanResult<Board> {
        let title = require_title(title)?;
        self.board(id)?;
        self.store.update_board(id, title);
        self.ensure_saved()?;
        self.board(id).cloned()
    }

    pub fn delete_board(&mut self, id: BoardId) -> KanbanResult<()> {
        self.board(id)?;
        self.store.delete_board(id);
        self.ensure_saved()
    }

    pub fn add_list(&mut self, board_id: BoardId, title: &str) -> KanbanResult<List> {
        let title = require_title(title)?;
        self.board(board_id)?;
        let list = self
            .store
            .add_list(board_id, title)
            .ok_or_else(|| KanbanError::Internal("List was created but not found".into()))?;
        self.ensure_saved()?;
        Ok(list)
    }

    pub fn update_list(&mut self, board_id: BoardId, list_id: ListId, title: &str) -> KanbanResult<List> {
        let title = require_title(title)?;
        self.list(board_id, list_id)?;
        self.store.update_list(board_id, list_id, title);
        self.ensure_saved()?;
        self.list(board_id, list_id).cloned()
    }

    pub fn delete_list(&mut self, board_id: BoardId, list_id: ListId) -> KanbanResult<()> {
        self.list(board_id, list_id)?;
        self.store.delete_list(board_id, list_id);
        self.ensure_saved()
    }

    /// Move a list to `position`, returning the board's new list order.
    pub fn move_list(&mut self, board_id: BoardId, list_id: ListId, position: usize) -> KanbanResult<Board> {
        let board = self.board(board_id)?;
        let source_index = board
            .list_index(list_id)
            .ok_or_else(|| KanbanError::not_found(format!("List {list_id}")))?;
        let len = board.lists.len();
        if position >= len {
            return Err(KanbanError::validation(format!(
                "Position {position} is out of range for {len} list(s)"
            )));
        }
        self.store.move_list(board_id, source_index, position);
        self.ensure_saved()?;
        self.board(board_id).cloned()
    }

    pub fn add_card(
        &mut self,
        board_id: BoardId,
        list_id: ListId,
        title: &str,
        description: Option<String>,
    ) -> KanbanResult<Card> {
        let title = require_title(title)?;
        self.list(board_id, list_id)?;
        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        let card = self
            .store
            .add_card(board_id, list_id, title, description)
            .ok_or_else(|| KanbanError::Internal("Card was created but not found".into()))?;
        self.ensure_saved()?;
        Ok(card)
    }

    pub fn update_card(&mut self, board_id: BoardId, card_id: CardId, updates: CardUpdate) -> KanbanResult<Card> {
        if let Some(title) = &updates.title {
            require_title(title)?;
        }
        let location = self.locate_card(board_id, card_id)?;
        self.store
            .update_card(board_id, location.list_id, card_id, updates);
        self.ensure_saved()?;
        self.card(board_id, card_id).cloned()
    }

    pub fn delete_card(&mut self, board_id: BoardId, card_id: CardId) -> KanbanResult<()> {
        let location = self.locate_card(board_id, card_id)?;
        self.store.delete_card(board_id, location.list_id, card_id);
        self.ensure_saved()
    }

    /// Move a card to `position` in `dest_list_id`. Without a position the
    /// card goes to the end of the destination list.
    pub fn move_card(
        &mut self,
        board_id: BoardId,
        card_id: CardId,
        dest_list_id: Option<ListId>,
        position: Option<usize>,
    ) -> KanbanResult<(CardLocation, Card)> {
        let source = self.locate_card(board_id, card_id)?;
        let dest_list_id = dest_list_id.unwrap_or(source.list_id);
        let dest_len = self.list(board_id, dest_list_id)?.card_count();

        // Within one list the card is removed first, so the last slot is len - 1.
        let max = if dest_list_id == source.list_id {
            dest_len.saturating_sub(1)
        } else {
            dest_len
        };
        let dest_index = position.unwrap_or(max);
        if dest_index > max {
            return Err(KanbanError::validation(format!(
                "Position {dest_index} is out of range, expected at most {max}"
            )));
        }

        self.store
            .move_card(board_id, source.list_id, dest_list_id, source.index, dest_index);
        self.ensure_saved()?;
        let location = self.locate_card(board_id, card_id)?;
        Ok((location, self.card(board_id, card_id)?.clone()))
    }

    /// Fail the command when its write did not reach the data directory.
    fn ensure_saved(&self) -> KanbanResult<()> {
        if self.store.last_write_ok() {
            Ok(())
        } else {
            Err(KanbanError::Storage(
                "Changes could not be saved to the data directory".into(),
            ))
        }
    }
}

fn require_title(title: &str) -> KanbanResult<&str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(KanbanError::validation("Title must not be empty"));
    }
    Ok(trimmed)
}
