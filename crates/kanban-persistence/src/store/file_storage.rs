use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{validate_key, KeyValueStorage};
use kanban_core::KanbanResult;
use std::path::{Path, PathBuf};

/// Directory-backed key/value storage: each key lives in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File that holds the value for `key`.
    pub fn path_for(&self, key: &str) -> KanbanResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> KanbanResult<Option<String>> {
        let path = self.path_for(key)?;
        AtomicWriter::read_to_string(&path)
    }

    fn set_item(&self, key: &str, value: &str) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        AtomicWriter::write_atomic(&path, value.as_bytes())?;
        tracing::info!("Saved {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> KanbanResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_core::KanbanError;
    use tempfile::tempdir;

    #[test]
    fn test_set_then_get() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert!(storage.get_item("kanban-boards").unwrap().is_none());

        storage.set_item("kanban-boards", r#"[{"title":"A"}]"#).unwrap();
        assert_eq!(
            storage.get_item("kanban-boards").unwrap().as_deref(),
            Some(r#"[{"title":"A"}]"#)
        );
        assert!(dir.path().join("kanban-boards.json").exists());
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        storage.set_item("one", "1").unwrap();
        storage.set_item("two", "2").unwrap();
        storage.remove_item("one").unwrap();

        assert!(storage.get_item("one").unwrap().is_none());
        assert_eq!(storage.get_item("two").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_missing_key_succeeds() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        assert!(storage.remove_item("never-written").is_ok());
    }

    #[test]
    fn test_path_traversal_rejected() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let err = storage.set_item("../outside", "x").unwrap_err();
        assert!(matches!(err, KanbanError::Validation(_)));
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("fresh"));

        storage.set_item("kanban-boards", "[]").unwrap();
        assert_eq!(storage.get_item("kanban-boards").unwrap().as_deref(), Some("[]"));
    }
}
