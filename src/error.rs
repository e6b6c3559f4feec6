use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the element store. Opening a store and preparing a
/// query never produce one of these; those paths log and degrade to "no data".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("malformed element row: {0}")]
    Decode(#[source] rusqlite::Error),
    #[error("cannot sample {requested} distinct elements from a pool of {available}")]
    SampleTooLarge { requested: usize, available: usize },
    #[error("wanted {wanted} elements but the store returned {found}")]
    NotEnoughData { wanted: usize, found: usize },
    #[error("failed to prepare store directory {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
