pub mod local_storage;
pub mod save_queue;
pub mod store;
pub mod traits;

pub use local_storage::LocalStorage;
pub use save_queue::{SaveQueue, SaveWorker};
pub use store::*;
pub use traits::*;
