use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Storage key the board collection is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "kanban-boards";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding persisted values, one `<key>.json` file per key.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub storage_key: Option<String>,
    #[serde(default)]
    pub drag: DragConfig,
}

/// Activation thresholds that tell a drag apart from a click or a scroll.
///
/// Distances are in the pointer's own units (terminal cells for mouse
/// input). The touch tolerance is deliberately larger than the pointer
/// distance so a slow touch-scroll is not taken over by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub pointer_distance: f64,
    pub touch_delay_ms: u64,
    pub touch_tolerance: f64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            pointer_distance: 2.0,
            touch_delay_ms: 250,
            touch_tolerance: 8.0,
        }
    }
}

impl DragConfig {
    pub fn touch_delay(&self) -> Duration {
        Duration::from_millis(self.touch_delay_ms)
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir().map(|config| config.join("kanban").join("config.toml"))
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to read config {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn effective_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("kanban"))
            .unwrap_or_else(|| PathBuf::from(".kanban"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml"));

        assert_eq!(config.effective_storage_key(), DEFAULT_STORAGE_KEY);
        assert_eq!(config.drag, DragConfig::default());
    }

    #[test]
    fn test_partial_drag_section() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "storage_key = \"work\"\n[drag]\ntouch_delay_ms = 400\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_storage_key(), "work");
        assert_eq!(config.drag.touch_delay(), Duration::from_millis(400));
        assert_eq!(config.drag.pointer_distance, 2.0);
        assert_eq!(config.drag.touch_tolerance, 8.0);
    }

    #[test]
    fn test_invalid_toml_falls_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "drag = [not valid").unwrap();

        let config = AppConfig::load_from(&path);
        assert!(config.data_dir.is_none());
        assert_eq!(config.drag, DragConfig::default());
    }

    #[test]
    fn test_touch_tolerance_exceeds_pointer_distance() {
        let drag = DragConfig::default();
        assert!(drag.touch_tolerance > drag.pointer_distance);
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/tmp/boards")),
            ..Default::default()
        };
        assert_eq!(config.effective_data_dir(), PathBuf::from("/tmp/boards"));
    }
}
