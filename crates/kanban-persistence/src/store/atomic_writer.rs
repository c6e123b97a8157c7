use kanban_core::{KanbanError, KanbanResult};
use std::io::Write;
use std::path::Path;

/// Atomic file writer that prevents data corruption
/// Uses write-to-temp-file → atomic-rename pattern for safety
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating the parent directory if needed.
    /// A crash mid-write leaves either the old file or the new one, never a mix.
    pub fn write_atomic(path: &Path, data: &[u8]) -> KanbanResult<()> {
        // Temp file in the same directory keeps the rename on one filesystem
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(data)?;
        temp_file.as_file().sync_all()?;
        temp_file
            .persist(path)
            .map_err(|e| KanbanError::Io(e.error))?;

        tracing::debug!(
            "Atomically wrote {} bytes to {}",
            data.len(),
            path.display()
        );
        Ok(())
    }

    /// Read a whole file as UTF-8, `None` when it does not exist.
    pub fn read_to_string(path: &Path) -> KanbanResult<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write_creates_parent() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("boards.json");

        AtomicWriter::write_atomic(&file_path, b"[]").unwrap();

        let read = AtomicWriter::read_to_string(&file_path).unwrap();
        assert_eq!(read.as_deref(), Some("[]"));
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("boards.json");

        AtomicWriter::write_atomic(&file_path, b"First").unwrap();
        AtomicWriter::write_atomic(&file_path, b"Second").unwrap();

        let read = AtomicWriter::read_to_string(&file_path).unwrap();
        assert_eq!(read.as_deref(), Some("Second"));

        // No temp files left behind
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let read = AtomicWriter::read_to_string(&dir.path().join("missing.json")).unwrap();
        assert!(read.is_none());
    }
}
