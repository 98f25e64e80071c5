//! Error types for asset conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting an asset to C source.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: input is not valid UTF-8", path.display())]
    Utf8 { path: PathBuf },

    #[error("not a valid C identifier: {0:?}")]
    InvalidIdentifier(String),
}

pub type Result<T> = std::result::Result<T, Error>;
