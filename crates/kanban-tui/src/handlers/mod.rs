pub mod board_handlers;
pub mod card_handlers;
pub mod drag_handlers;
pub mod list_handlers;
pub mod navigation_handlers;
