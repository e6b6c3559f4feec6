use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use rusqlite::Connection;

use super::connection::store_path;
use crate::error::StoreError;

/// Schema plus all 118 element rows, compiled into the binary.
pub const SEED_SQL: &str = include_str!("../../data/elements.sql");

/// Run the bundled seed against an already open connection. Used for
/// in-memory stores in tests and by [`install_store`].
pub fn load_seed(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(SEED_SQL)?;
    Ok(())
}

/// Materialize the bundled store at `<dir>/<name>.db` if it does not exist
/// yet. An existing file is never touched, so this is safe on every start.
pub fn install_store(dir: &Path, name: &str) -> Result<PathBuf, StoreError> {
    let path = store_path(dir, name);
    if path.exists() {
        return Ok(path);
    }

    fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    // Build under a temporary name so a crash never leaves a half-seeded store
    // where `open_store` would find it.
    let partial = dir.join(format!("{name}.db.partial"));
    if partial.exists() {
        fs::remove_file(&partial).map_err(|source| StoreError::Io {
            path: partial.clone(),
            source,
        })?;
    }

    {
        let mut conn = Connection::open(&partial)?;
        let tx = conn.transaction()?;
        tx.execute_batch(SEED_SQL)?;
        tx.commit()?;
    }

    fs::rename(&partial, &path).map_err(|source| StoreError::Io {
        path: path.clone(),
        source,
    })?;

    info!("installed element store at {}", path.display());
    Ok(path)
}
