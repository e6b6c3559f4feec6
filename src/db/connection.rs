use std::path::{Path, PathBuf};

use log::{debug, warn};
use rusqlite::{Connection, OpenFlags};

use crate::config::default_data_dir;

/// Extension appended to a logical store name to find its file.
const STORE_EXTENSION: &str = "db";

/// Open the named store from the default data directory.
///
/// Any failure (missing home directory, missing file, unreadable database)
/// is logged and reported as `None` so callers can render an empty view.
pub fn open_store(name: &str) -> Option<Connection> {
    match default_data_dir() {
        Ok(dir) => open_store_in(&dir, name),
        Err(err) => {
            warn!("cannot resolve data directory for store `{name}`: {err:#}");
            None
        }
    }
}

/// Open `<dir>/<name>.db` read-only. The file must already exist; SQLite is
/// never allowed to create an empty store here.
pub fn open_store_in(dir: &Path, name: &str) -> Option<Connection> {
    let path = store_path(dir, name);
    if !path.is_file() {
        warn!("element store {} does not exist", path.display());
        return None;
    }

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    match Connection::open_with_flags(&path, flags) {
        Ok(conn) => {
            debug!("opened element store {}", path.display());
            Some(conn)
        }
        Err(err) => {
            warn!("failed to open element store {}: {err}", path.display());
            None
        }
    }
}

/// Resolve the file backing a logical store name.
pub fn store_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.{STORE_EXTENSION}"))
}
