pub mod app;
pub mod components;
pub mod dialog;
pub mod drag;
pub mod editor;
pub mod events;
pub mod handlers;
pub mod layout;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode, Deferred, View};
