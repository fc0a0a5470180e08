use crate::config::SessionConfig;
use std::path::{Path, PathBuf};

/// Runtime options derived from the `[session]` configuration table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub marker_file: PathBuf,
}

impl SessionOptions {
    pub fn new(marker_file: impl Into<PathBuf>) -> Self {
        Self {
            marker_file: marker_file.into(),
        }
    }

    /// Builds options from configuration, expanding a leading `~/`.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(expand_path(&config.marker_file))
    }

    pub fn marker_file(&self) -> &Path {
        &self.marker_file
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}

fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(text) => expand_tilde(text),
        None => path.to_path_buf(),
    }
}

/// Expands a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
