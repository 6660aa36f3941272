//! Default on-disk locations.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "echo-notes";

/// Get the data directory (`$XDG_DATA_HOME/echo-notes`).
///
/// Falls back to `~/.local/share`, and to the working directory when
/// `HOME` is unset.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            env::var("HOME")
                .map(|home| PathBuf::from(home).join(".local/share"))
                .unwrap_or_else(|_| PathBuf::from("."))
        });

    data_home.join(APP_DIR)
}

/// Get the default database file path.
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("notes.db")
}
