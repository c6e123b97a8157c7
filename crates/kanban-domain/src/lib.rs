pub mod board;
pub mod card;
pub mod commands;
pub mod field_update;
pub mod ids;
pub mod list;
pub mod reorder;
pub mod state;
pub mod store;

pub use board::{Board, BoardId};
pub use card::{Card, CardId, CardUpdate};
pub use commands::{Command, CommandContext, CommandOutcome};
pub use field_update::FieldUpdate;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use list::{List, ListId};
pub use reorder::OutOfRange;
pub use state::BoardsState;
pub use store::BoardStore;
