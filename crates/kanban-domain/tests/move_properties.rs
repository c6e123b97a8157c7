//! Property tests for list and card reordering.

use kanban_domain::reorder::{move_within, transfer};
use kanban_domain::{Board, BoardId, BoardStore, ListId};
use proptest::prelude::*;

const MAX_ITEMS: usize = 8;

/// A length and two valid positions within it.
fn within() -> impl Strategy<Value = (usize, usize, usize)> {
    (1..=MAX_ITEMS).prop_flat_map(|len| (Just(len), 0..len, 0..len))
}

/// Source and destination lengths, a source position and an insert slot.
fn across() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (1..=MAX_ITEMS, 0..=MAX_ITEMS)
        .prop_flat_map(|(src, dst)| (Just(src), Just(dst), 0..src, 0..=dst))
}

/// Board with two lists holding `left` and `right` cards, titled by position.
fn two_lists(left: usize, right: usize) -> (BoardStore, BoardId, ListId, ListId) {
    let mut store = BoardStore::in_memory();
    let board = store.create_board("Props");
    let a = store.add_list(board.id, "Left").unwrap();
    let b = store.add_list(board.id, "Right").unwrap();
    for i in 0..left {
        store.add_card(board.id, a.id, format!("L{i}"), None).unwrap();
    }
    for i in 0..right {
        store.add_card(board.id, b.id, format!("R{i}"), None).unwrap();
    }
    (store, board.id, a.id, b.id)
}

fn card_titles(board: &Board) -> Vec<Vec<String>> {
    board
        .lists
        .iter()
        .map(|l| l.cards.iter().map(|c| c.title.clone()).collect())
        .collect()
}

proptest! {
    #[test]
    fn test_move_within_is_undone_by_reverse_move((len, from, to) in within()) {
        let original: Vec<usize> = (0..len).collect();
        let mut items = original.clone();

        move_within(&mut items, from, to).unwrap();
        prop_assert_eq!(items.len(), len);
        prop_assert_eq!(items[to], original[from]);

        move_within(&mut items, to, from).unwrap();
        prop_assert_eq!(items, original);
    }

    #[test]
    fn test_transfer_is_undone_by_reverse_transfer((src_len, dst_len, from, to) in across()) {
        let source_before: Vec<usize> = (0..src_len).collect();
        let dest_before: Vec<usize> = (100..100 + dst_len).collect();
        let mut source = source_before.clone();
        let mut dest = dest_before.clone();

        transfer(&mut source, &mut dest, from, to).unwrap();
        prop_assert_eq!(source.len() + dest.len(), src_len + dst_len);
        prop_assert_eq!(dest[to], source_before[from]);

        transfer(&mut dest, &mut source, to, from).unwrap();
        prop_assert_eq!(source, source_before);
        prop_assert_eq!(dest, dest_before);
    }

    #[test]
    fn test_store_move_list_is_undone_by_reverse_move((len, from, to) in within()) {
        let mut store = BoardStore::in_memory();
        let board = store.create_board("Lists");
        for i in 0..len {
            store.add_list(board.id, format!("List {i}")).unwrap();
        }
        let before = store.board(board.id).unwrap().clone();

        store.move_list(board.id, from, to);
        store.move_list(board.id, to, from);

        let after = store.board(board.id).unwrap();
        let ids = |b: &Board| b.lists.iter().map(|l| l.id).collect::<Vec<_>>();
        prop_assert_eq!(ids(after), ids(&before));
    }

    #[test]
    fn test_store_move_card_within_list_is_undone_by_reverse_move((len, from, to) in within()) {
        let (mut store, board_id, left, _) = two_lists(len, 0);
        let before = card_titles(store.board(board_id).unwrap());

        store.move_card(board_id, left, left, from, to);
        store.move_card(board_id, left, left, to, from);

        prop_assert_eq!(card_titles(store.board(board_id).unwrap()), before);
    }

    #[test]
    fn test_store_move_card_across_lists_keeps_every_card_once(
        (src_len, dst_len, from, to) in across()
    ) {
        let (mut store, board_id, left, right) = two_lists(src_len, dst_len);
        let before = card_titles(store.board(board_id).unwrap());
        let moved_id = store.board(board_id).unwrap().lists[0].cards[from].id;

        prop_assert!(store.move_card(board_id, left, right, from, to));

        let board = store.board(board_id).unwrap();
        prop_assert_eq!(board.card_count(), src_len + dst_len);
        let holders = board
            .lists
            .iter()
            .filter(|l| l.cards.iter().any(|c| c.id == moved_id))
            .count();
        prop_assert_eq!(holders, 1);
        prop_assert_eq!(board.lists[1].cards[to].id, moved_id);

        store.move_card(board_id, right, left, to, from);
        prop_assert_eq!(card_titles(store.board(board_id).unwrap()), before);
    }

    #[test]
    fn test_store_move_card_to_own_position_changes_nothing((len, index, _) in within()) {
        let (mut store, board_id, left, _) = two_lists(len, 0);
        let before = store.board(board_id).unwrap().clone();

        prop_assert!(!store.move_card(board_id, left, left, index, index));

        let after = store.board(board_id).unwrap();
        prop_assert_eq!(card_titles(after), card_titles(&before));
        prop_assert_eq!(after.updated_at, before.updated_at);
        prop_assert_eq!(after.lists[0].updated_at, before.lists[0].updated_at);
    }

    #[test]
    fn test_store_move_list_to_own_position_changes_nothing((len, index, _) in within()) {
        let mut store = BoardStore::in_memory();
        let board = store.create_board("Lists");
        for i in 0..len {
            store.add_list(board.id, format!("List {i}")).unwrap();
        }
        let before = store.board(board.id).unwrap().clone();

        prop_assert!(!store.move_list(board.id, index, index));

        let after = store.board(board.id).unwrap();
        prop_assert_eq!(after.updated_at, before.updated_at);
        prop_assert_eq!(
            after.lists.iter().map(|l| l.id).collect::<Vec<_>>(),
            before.lists.iter().map(|l| l.id).collect::<Vec<_>>()
        );
    }
}
