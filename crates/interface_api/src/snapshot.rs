//! Expense book snapshots
//!
//! The server keeps its book in memory. When `snapshot_path` is configured
//! the book is restored from that file at startup and written back on
//! graceful shutdown.

use std::path::Path;

use thiserror::Error;
use tracing::info;

use domain_split::{ExpenseBook, SplitError};

/// Snapshot persistence errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Book(#[from] SplitError),
}

/// Restores a book from `path`, or starts empty if the file does not exist
pub async fn restore(path: &Path) -> Result<ExpenseBook, SnapshotError> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => Ok(ExpenseBook::from_json(&json)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "No snapshot found, starting empty");
            Ok(ExpenseBook::new())
        }
        Err(e) => Err(e.into()),
    }
}

/// Writes `book` to `path`, replacing any previous snapshot
pub async fn persist(path: &Path, book: &ExpenseBook) -> Result<(), SnapshotError> {
    let json = book.to_json()?;
    tokio::fs::write(path, json).await?;
    info!(path = %path.display(), "Snapshot written");
    Ok(())
}
