pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod selection;

pub use config::{AppConfig, DragConfig, DEFAULT_STORAGE_KEY};
pub use error::KanbanError;
pub use input::InputState;
pub use result::KanbanResult;
pub use selection::SelectionState;
