//! Loader errors

use std::path::PathBuf;

/// Why a configuration file could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist
    #[error("File '{}' not found.", path.display())]
    NotFound {
        /// The path we were asked to read
        path: PathBuf,
    },
    /// Any other failure opening, reading or decoding the file
    #[error("reading '{}': {source}", path.display())]
    Read {
        /// The path we were asked to read
        path: PathBuf,
        /// The underlying failure
        source: std::io::Error,
    },
}

impl LoadError {
    pub(super) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }
}
