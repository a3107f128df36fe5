use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// The persisted ledger could not be read or written.
#[derive(Debug, ThisError)]
pub enum StorageError {
    #[error("could not read ledger {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse ledger {}: {source}", .path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("could not encode ledger: {source}")]
    Encode { source: serde_json::Error },
    #[error("could not write ledger {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("member stored under {key} carries the code {code}")]
    Inconsistent { key: String, code: String },
}

/// Ledger operation errors
#[derive(Debug, ThisError)]
pub enum LedgerError {
    #[error("no member with code {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

