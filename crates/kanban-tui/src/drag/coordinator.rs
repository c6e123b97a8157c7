use super::activation::{Activation, ActivationPolicy, PointerKind, Point, Press};
use super::effects::{DragEffects, DragGuard};
use super::hover::{compute_hover, initial_hover, step_hover, Direction, DragItem, DropTarget, Hover};
use kanban_domain::{Board, BoardId, BoardStore, ListId};
use std::time::Instant;

/// A press on a draggable item that has not turned into a drag yet.
#[derive(Debug)]
pub struct PendingDrag {
    pub item: DragItem,
    pub board_id: BoardId,
    pub source_index: usize,
    pub press: Press,
}

#[derive(Debug)]
pub struct ActiveDrag {
    pub item: DragItem,
    pub board_id: BoardId,
    pub source_index: usize,
    pub hover: Option<Hover>,
    _effects: DragGuard,
}

#[derive(Debug, Default)]
pub enum DragState {
    #[default]
    Idle,
    Pending(PendingDrag),
    Dragging(ActiveDrag),
}

/// The single store call a drop turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAction {
    MoveList {
        board_id: BoardId,
        source_index: usize,
        dest_index: usize,
    },
    MoveCard {
        board_id: BoardId,
        source_list_id: ListId,
        dest_list_id: ListId,
        source_index: usize,
        dest_index: usize,
    },
}

impl DropAction {
    pub fn apply(self, store: &mut BoardStore) -> bool {
        match self {
            DropAction::MoveList {
                board_id,
                source_index,
                dest_index,
            } => store.move_list(board_id, source_index, dest_index),
            DropAction::MoveCard {
                board_id,
                source_list_id,
                dest_list_id,
                source_index,
                dest_index,
            } => store.move_card(board_id, source_list_id, dest_list_id, source_index, dest_index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// The press never became a drag.
    Click(DragItem),
    Drop(DropAction),
    /// Drag ended without anything to do.
    Nothing,
}

/// Turns pointer and keyboard gestures into at most one move per drag.
pub struct DragCoordinator {
    state: DragState,
    policy: ActivationPolicy,
    effects: DragEffects,
}

impl DragCoordinator {
    pub fn new(policy: ActivationPolicy, effects: DragEffects) -> Self {
        Self {
            state: DragState::Idle,
            policy,
            effects,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn effects(&self) -> &DragEffects {
        &self.effects
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.active().and_then(|drag| drag.hover.as_ref())
    }

    /// Pointer or touch press on a draggable item. Ignored unless idle.
    pub fn press(
        &mut self,
        item: DragItem,
        board_id: BoardId,
        source_index: usize,
        kind: PointerKind,
        position: Point,
        now: Instant,
    ) {
        if !self.is_idle() {
            return;
        }
        tracing::trace!("Press on {:?} at {:?}", item, position);
        self.state = DragState::Pending(PendingDrag {
            item,
            board_id,
            source_index,
            press: Press {
                kind,
                origin: position,
                at: now,
            },
        });
    }

    /// Keyboard pick-up: starts dragging at once, hovering the item's own
    /// position.
    pub fn pick_up(&mut self, board: &Board, item: DragItem, source_index: usize) {
        if !self.is_idle() {
            return;
        }
        let hover = initial_hover(board, &item, source_index);
        self.start(item, board.id, source_index, hover);
    }

    fn start(&mut self, item: DragItem, board_id: BoardId, source_index: usize, hover: Option<Hover>) {
        tracing::debug!("Drag started: {:?} from index {}", item, source_index);
        self.state = DragState::Dragging(ActiveDrag {
            item,
            board_id,
            source_index,
            hover,
            _effects: self.effects.acquire(),
        });
    }

    /// Pointer moved. `target` is what the pointer is over in the rendered
    /// `board`, if anything.
    pub fn pointer_move(&mut self, board: &Board, position: Point, target: Option<DropTarget>, now: Instant) {
        match &mut self.state {
            DragState::Idle => {}
            DragState::Pending(pending) => match self.policy.check(&pending.press, position, now) {
                Activation::Wait => {}
                Activation::Abandon => {
                    tracing::trace!("Touch drifted before hold delay, drag abandoned");
                    self.state = DragState::Idle;
                }
                Activation::Start => {
                    let (item, board_id, source_index) =
                        (pending.item, pending.board_id, pending.source_index);
                    let hover = target.and_then(|t| compute_hover(board, &item, source_index, &t));
                    self.start(item, board_id, source_index, hover);
                }
            },
            DragState::Dragging(drag) => {
                drag.hover = target.and_then(|t| compute_hover(board, &drag.item, drag.source_index, &t));
            }
        }
    }

    /// Time passed without pointer movement; a held touch may activate.
    pub fn tick(&mut self, now: Instant) {
        let DragState::Pending(pending) = &self.state else {
            return;
        };
        if self.policy.check_elapsed(&pending.press, now) == Activation::Start {
            let (item, board_id, source_index) = (pending.item, pending.board_id, pending.source_index);
            self.start(item, board_id, source_index, None);
        }
    }

    /// Keyboard step of the destination. Steps past the board's edge are
    /// ignored.
    pub fn step(&mut self, board: &Board, direction: Direction) {
        let DragState::Dragging(drag) = &mut self.state else {
            return;
        };
        let current = match drag.hover {
            Some(hover) => Some(hover),
            None => initial_hover(board, &drag.item, drag.source_index),
        };
        if let Some(next) = current.and_then(|h| step_hover(board, &drag.item, drag.source_index, &h, direction)) {
            drag.hover = Some(next);
        }
    }

    /// Pointer released or keyboard drop.
    pub fn release(&mut self) -> Release {
        match std::mem::take(&mut self.state) {
            DragState::Idle => Release::Nothing,
            DragState::Pending(pending) => Release::Click(pending.item),
            DragState::Dragging(drag) => {
                let action = drop_action(&drag);
                tracing::debug!("Drag released: {:?}", action);
                action.map_or(Release::Nothing, Release::Drop)
            }
        }
    }

    /// Abort any gesture without touching the store.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            tracing::debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }
}

fn drop_action(drag: &ActiveDrag) -> Option<DropAction> {
    let hover = drag.hover?;
    if hover.is_own_position {
        return None;
    }
    Some(match drag.item {
        DragItem::List { .. } => DropAction::MoveList {
            board_id: drag.board_id,
            source_index: drag.source_index,
            dest_index: hover.dest_index,
        },
        DragItem::Card { list_id, .. } => DropAction::MoveCard {
            board_id: drag.board_id,
            source_list_id: list_id,
            dest_list_id: hover.list_id,
            source_index: drag.source_index,
            dest_index: hover.dest_index,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_domain::SequentialIds;
    use std::sync::Arc;
    use std::time::Duration;

    struct Fixture {
        store: BoardStore,
        board_id: BoardId,
    }

    /// To Do = [A, B], Done = [].
    fn fixture() -> Fixture {
        let mut store = BoardStore::in_memory().with_id_generator(Arc::new(SequentialIds::new()));
        let board = store.create_board("Sprint 1");
        let todo = store.add_list(board.id, "To Do").unwrap();
        store.add_list(board.id, "Done").unwrap();
        store.add_card(board.id, todo.id, "A", None);
        store.add_card(board.id, todo.id, "B", None);
        Fixture {
            store,
            board_id: board.id,
        }
    }

    impl Fixture {
        fn board(&self) -> Board {
            self.store.board(self.board_id).unwrap().clone()
        }

        fn card(&self, list: usize, card: usize) -> DragItem {
            let board = self.board();
            DragItem::Card {
                id: board.lists[list].cards[card].id,
                list_id: board.lists[list].id,
            }
        }

        fn list_target(&self, list: usize) -> DropTarget {
            DropTarget::List {
                list_id: self.board().lists[list].id,
            }
        }

        fn titles(&self, list: usize) -> Vec<String> {
            self.board().lists[list]
                .cards
                .iter()
                .map(|c| c.title.clone())
                .collect()
        }
    }

    fn coordinator() -> (DragCoordinator, DragEffects) {
        let effects = DragEffects::new();
        (DragCoordinator::new(ActivationPolicy::default(), effects.clone()), effects)
    }

    fn at(x: u16, y: u16) -> Point {
        Point::from((x, y))
    }

    #[test]
    fn test_mouse_drag_moves_card_once() {
        let mut fx = fixture();
        let (mut drag, effects) = coordinator();
        let board = fx.board();
        let now = Instant::now();

        drag.press(fx.card(0, 0), fx.board_id, 0, PointerKind::Mouse, at(5, 5), now);
        assert!(!drag.is_dragging());

        drag.pointer_move(&board, at(6, 5), Some(fx.list_target(0)), now);
        assert!(!drag.is_dragging());

        drag.pointer_move(&board, at(30, 5), Some(fx.list_target(1)), now);
        assert!(drag.is_dragging());
        assert!(effects.scroll_locked());
        assert!(effects.drag_active());

        let Release::Drop(action) = drag.release() else {
            panic!("expected a drop");
        };
        assert!(action.apply(&mut fx.store));

        assert_eq!(fx.titles(0), vec!["B"]);
        assert_eq!(fx.titles(1), vec!["A"]);
        assert!(drag.is_idle());
        assert!(!effects.scroll_locked());
        assert!(!effects.drag_active());
    }

    #[test]
    fn test_release_before_threshold_is_click() {
        let fx = fixture();
        let (mut drag, effects) = coordinator();
        let item = fx.card(0, 1);

        drag.press(item, fx.board_id, 1, PointerKind::Mouse, at(5, 5), Instant::now());
        assert_eq!(drag.release(), Release::Click(item));
        assert!(!effects.drag_active());
    }

    #[test]
    fn test_release_over_nothing_issues_no_call() {
        let fx = fixture();
        let (mut drag, effects) = coordinator();
        let board = fx.board();
        let now = Instant::now();

        drag.press(fx.card(0, 0), fx.board_id, 0, PointerKind::Mouse, at(5, 5), now);
        drag.pointer_move(&board, at(30, 5), Some(fx.list_target(1)), now);
        assert!(drag.hover().is_some());

        drag.pointer_move(&board, at(90, 40), None, now);
        assert!(drag.is_dragging());
        assert!(drag.hover().is_none());

        assert_eq!(drag.release(), Release::Nothing);
        assert!(!effects.scroll_locked());
    }

    #[test]
    fn test_drop_on_own_position_issues_no_call() {
        let fx = fixture();
        let (mut drag, _) = coordinator();
        let board = fx.board();
        let now = Instant::now();

        // B is last in To Do; hovering its own list appends, i.e. stays put.
        drag.press(fx.card(0, 1), fx.board_id, 1, PointerKind::Mouse, at(5, 5), now);
        drag.pointer_move(&board, at(5, 20), Some(fx.list_target(0)), now);
        assert!(drag.hover().unwrap().placeholder().is_none());
        assert_eq!(drag.release(), Release::Nothing);
    }

    #[test]
    fn test_cancel_clears_everything() {
        let fx = fixture();
        let (mut drag, effects) = coordinator();
        let board = fx.board();
        let now = Instant::now();

        drag.press(fx.card(0, 0), fx.board_id, 0, PointerKind::Mouse, at(5, 5), now);
        drag.pointer_move(&board, at(30, 5), Some(fx.list_target(1)), now);
        assert!(effects.drag_active());

        drag.cancel();
        assert!(drag.is_idle());
        assert!(!effects.drag_active());
        assert!(!effects.scroll_locked());
        assert_eq!(drag.release(), Release::Nothing);
    }

    #[test]
    fn test_dropping_coordinator_releases_effects() {
        let fx = fixture();
        let (mut drag, effects) = coordinator();
        drag.pick_up(&fx.board(), fx.card(0, 0), 0);
        assert!(effects.scroll_locked());

        drop(drag);
        assert!(!effects.scroll_locked());
        assert!(!effects.drag_active());
    }

    #[test]
    fn test_touch_hold_then_drag() {
        let mut fx = fixture();
        let (mut drag, _) = coordinator();
        let board = fx.board();
        let start = Instant::now();

        drag.press(fx.card(0, 0), fx.board_id, 0, PointerKind::Touch, at(5, 5), start);
        drag.tick(start + Duration::from_millis(100));
        assert!(!drag.is_dragging());

        drag.tick(start + Duration::from_millis(260));
        assert!(drag.is_dragging());

        drag.pointer_move(&board, at(40, 5), Some(fx.list_target(1)), start + Duration::from_millis(400));
        let Release::Drop(action) = drag.release() else {
            panic!("expected a drop");
        };
        action.apply(&mut fx.store);
        assert_eq!(fx.titles(1), vec!["A"]);
    }

    #[test]
    fn test_touch_scroll_abandons() {
        let fx = fixture();
        let (mut drag, effects) = coordinator();
        let board = fx.board();
        let start = Instant::now();

        drag.press(fx.card(0, 0), fx.board_id, 0, PointerKind::Touch, at(5, 5), start);
        drag.pointer_move(&board, at(5, 20), Some(fx.list_target(0)), start + Duration::from_millis(50));

        assert!(drag.is_idle());
        assert!(!effects.scroll_locked());
        drag.tick(start + Duration::from_secs(1));
        assert!(drag.is_idle());
    }

    #[test]
    fn test_keyboard_drag_list() {
        let mut fx = fixture();
        let (mut drag, _) = coordinator();
        let board = fx.board();
        let list_id = board.lists[0].id;

        drag.pick_up(&board, DragItem::List { id: list_id }, 0);
        drag.step(&board, Direction::Right);
        drag.step(&board, Direction::Right);

        let release = drag.release();
        assert_eq!(
            release,
            Release::Drop(DropAction::MoveList {
                board_id: fx.board_id,
                source_index: 0,
                dest_index: 1,
            })
        );
        if let Release::Drop(action) = release {
            action.apply(&mut fx.store);
        }
        assert_eq!(fx.board().lists[1].id, list_id);
    }

    #[test]
    fn test_keyboard_pick_up_and_drop_in_place() {
        let fx = fixture();
        let (mut drag, _) = coordinator();
        drag.pick_up(&fx.board(), fx.card(0, 0), 0);
        assert_eq!(drag.release(), Release::Nothing);
    }

    #[test]
    fn test_second_press_is_ignored_while_busy() {
        let fx = fixture();
        let (mut drag, _) = coordinator();
        let now = Instant::now();
        let first = fx.card(0, 0);

        drag.press(first, fx.board_id, 0, PointerKind::Mouse, at(5, 5), now);
        drag.press(fx.card(0, 1), fx.board_id, 1, PointerKind::Mouse, at(5, 9), now);
        assert_eq!(drag.release(), Release::Click(first));
    }
}
