//! JSON snapshot persistence for the application state.
//!
//! The core state is memory-resident; the CLI shell loads a snapshot
//! before dispatching a command and writes it back afterwards. A missing
//! snapshot simply yields a fresh default state.

use std::path::Path;

use nutriplan_core::AppState;

pub fn load_state(path: &Path) -> Result<AppState, StorageError> {
    if !path.exists() {
        tracing::debug!("No snapshot at {}, starting fresh", path.display());
        return Ok(AppState::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| StorageError::ReadError(path.to_path_buf(), e))?;
    let state = serde_json::from_str(&contents)
        .map_err(|e| StorageError::ParseError(path.to_path_buf(), e))?;
    Ok(state)
}

pub fn save_state(path: &Path, state: &AppState) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| StorageError::WriteError(parent.to_path_buf(), e))?;
    }
    let contents = serde_json::to_string_pretty(state).map_err(StorageError::EncodeError)?;
    std::fs::write(path, contents).map_err(|e| StorageError::WriteError(path.to_path_buf(), e))?;
    tracing::debug!("Saved snapshot to {}", path.display());
    Ok(())
}

#[derive(Debug)]
pub enum StorageError {
    ReadError(std::path::PathBuf, std::io::Error),
    WriteError(std::path::PathBuf, std::io::Error),
    ParseError(std::path::PathBuf, serde_json::Error),
    EncodeError(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::ReadError(path, e) => {
                write!(f, "Failed to read state file '{}': {}", path.display(), e)
            }
            StorageError::WriteError(path, e) => {
                write!(f, "Failed to write state file '{}': {}", path.display(), e)
            }
            StorageError::ParseError(path, e) => {
                write!(f, "Failed to parse state file '{}': {}", path.display(), e)
            }
            StorageError::EncodeError(e) => write!(f, "Failed to encode state: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}
