use kanban_core::{KanbanError, KanbanResult};

/// String key/value storage with the shape of browser local storage.
///
/// Values are opaque strings; typing and fail-soft handling live in
/// [`crate::LocalStorage`]. Implementations are synchronous and must be
/// cheap enough to call once per user action.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` if nothing is stored.
    fn get_item(&self, key: &str) -> KanbanResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()>;

    /// Remove `key`. Removing a missing key succeeds.
    fn remove_item(&self, key: &str) -> KanbanResult<()>;
}

/// Keys become file names, so they are limited to a portable character set.
pub fn validate_key(key: &str) -> KanbanResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(KanbanError::validation(format!("invalid storage key: {key:?}")))
    }
}
