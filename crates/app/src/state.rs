use std::{fs, path::PathBuf};

use common::grant::GrantStoreError;

pub const APP_NAME: &str = "arbor";
pub const GRANTS_FILE_NAME: &str = "grants.toml";

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("could not determine a home directory")]
    NoHomeDirectory,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("grant store error: {0}")]
    GrantStore(#[from] GrantStoreError),
}

#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the arbor directory (~/.arbor)
    pub state_dir: PathBuf,
    /// Path to the grant table inside it
    pub grants_path: PathBuf,
}

impl AppState {
    /// The arbor state directory (custom or default ~/.arbor).
    pub fn state_dir(custom_path: Option<PathBuf>) -> Result<PathBuf, StateError> {
        if let Some(path) = custom_path {
            return Ok(path);
        }
        let home = dirs::home_dir().ok_or(StateError::NoHomeDirectory)?;
        Ok(home.join(format!(".{}", APP_NAME)))
    }

    /// Load the state directory, creating it on first use.
    pub fn load(custom_path: Option<PathBuf>) -> Result<Self, StateError> {
        let state_dir = Self::state_dir(custom_path)?;
        if !state_dir.exists() {
            fs::create_dir_all(&state_dir)?;
        }
        let grants_path = state_dir.join(GRANTS_FILE_NAME);
        Ok(Self {
            state_dir,
            grants_path,
        })
    }
}
