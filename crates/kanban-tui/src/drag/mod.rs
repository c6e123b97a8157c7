//! Drag and drop for lists and cards.
//!
//! [`DragCoordinator`] is an explicit state machine (`Idle`, `Pending`,
//! `Dragging`) driven by pointer, touch-style and keyboard input. It never
//! mutates the board itself: a successful release yields one
//! [`DropAction`] for the caller to apply to the store.

pub mod activation;
pub mod coordinator;
pub mod effects;
pub mod hover;

pub use activation::{ActivationPolicy, PointerKind, Point};
pub use coordinator::{ActiveDrag, DragCoordinator, DragState, DropAction, Release};
pub use effects::DragEffects;
pub use hover::{Direction, DragItem, DropTarget, Hover};
