use kanban_domain::{BoardStore, CardUpdate, FieldUpdate};
use kanban_persistence::{FileStorage, KeyValueStorage, LocalStorage};
use std::sync::Arc;
use tempfile::TempDir;

const KEY: &str = "kanban-boards";

fn open(dir: &TempDir) -> BoardStore {
    let storage = FileStorage::new(dir.path());
    BoardStore::load(LocalStorage::new(Arc::new(storage)), KEY)
}

#[test]
fn test_board_survives_reload() {
    let dir = TempDir::new().unwrap();
    let created = open(&dir).create_board("Sprint 1");

    let reloaded = open(&dir);
    assert_eq!(reloaded.boards().len(), 1);
    assert_eq!(reloaded.boards()[0].id, created.id);
    assert_eq!(reloaded.boards()[0].title, "Sprint 1");
}

#[test]
fn test_full_tree_survives_reload() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let board = store.create_board("Release");
    let todo = store.add_list(board.id, "To Do").unwrap();
    let done = store.add_list(board.id, "Done").unwrap();
    let card = store
        .add_card(board.id, todo.id, "Ship it", Some("tag and push".to_string()))
        .unwrap();
    store.move_card(board.id, todo.id, done.id, 0, 0);
    store.update_card(
        board.id,
        done.id,
        card.id,
        CardUpdate {
            title: None,
            description: FieldUpdate::Clear,
        },
    );

    let reloaded = open(&dir);
    let saved = reloaded.board(board.id).unwrap();
    assert_eq!(*saved, *store.board(board.id).unwrap());
    assert!(saved.lists[0].cards.is_empty());
    assert_eq!(saved.lists[1].cards[0].title, "Ship it");
    assert!(saved.lists[1].cards[0].description.is_none());
}

#[test]
fn test_current_board_is_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut store = open(&dir);
    let board = store.create_board("Sprint 1");
    store.set_current_board(board.id);
    assert!(store.current_board().is_some());

    assert!(open(&dir).current_board().is_none());
}

#[test]
fn test_corrupt_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    FileStorage::new(dir.path())
        .set_item(KEY, "[{\"broken\":")
        .unwrap();

    let mut store = open(&dir);
    assert!(store.boards().is_empty());

    store.create_board("Fresh");
    assert_eq!(open(&dir).boards()[0].title, "Fresh");
}
