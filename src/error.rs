//! Error type shared across fie.
//!
//! Only failures that abort the whole invocation live here. Problems with a single
//! entry are kept per column as [FieldError](crate::core::FieldError) instead.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieError {
    #[error("No such path in filesystem.")]
    PathNotFound { path: PathBuf },

    #[error("Cannot list '{}': {source}", .path.display())]
    EnumerationDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Config file already exists at {}", .path.display())]
    ConfigExists { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, FieError>;

impl FieError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
