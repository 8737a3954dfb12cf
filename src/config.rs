//! Runtime configuration
//!
//! Passed explicitly to the loader and the session; nothing is read from
//! flags or the environment.

use std::path::{Path, PathBuf};

use crate::consts::DEFAULT_PATH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File the address book is loaded from and saved to
    pub path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl Config {
    /// Default config pointed at a different storage file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
