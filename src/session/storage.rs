use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Literal written to the marker file on a clean shutdown.
pub const MARKER_TEXT: &str = "I Closed Cleanly and wrote out some data";

/// Failure to write the shutdown marker.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Overwrites `path` with [`MARKER_TEXT`], creating parent directories.
pub fn write_marker(path: &Path) -> Result<(), PersistError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PersistError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, MARKER_TEXT).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote session marker to {}", path.display());
    Ok(())
}

/// Reads the marker file back, `None` when it does not exist.
pub fn read_marker(path: &Path) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("No session marker at {}", path.display());
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
