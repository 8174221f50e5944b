//! Backing-file discovery and loading.
//!
//! # Discovery
//!
//! The default location of the backing file depends on the context's
//! [`Basis`](crate::Basis):
//!
//! - `RelativeToUser`: `{user config dir}/{app_name}/{file_base}.toml`, where the
//!   user config dir comes from the `directories` crate (`$XDG_CONFIG_HOME` or
//!   `~/.config` on Linux, `~/Library/Application Support` on macOS,
//!   `%APPDATA%` on Windows).
//! - `RelativeToExecutable`: `{directory of the running executable}/{file_base}.toml`.
//!
//! Callers may also hand [`find_first`] their own ordered list. The first path
//! that exists wins. Empty paths are ignored. An I/O error while checking a
//! path is reported through the error callback and the search moves on to the
//! next candidate.
//!
//! # Loading
//!
//! [`load_table`] reads the whole file and parses it as TOML. The file handle
//! is released before parsing starts, on every exit path.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::error::ChainfigError;

/// Extension appended to the file base name.
pub const FILE_EXTENSION: &str = "toml";

pub(crate) fn file_name(file_base: &str) -> String {
    format!("{file_base}.{FILE_EXTENSION}")
}

/// The user's home directory as reported by the OS.
pub fn home_dir() -> Option<PathBuf> {
    let user = directories::UserDirs::new()?;
    Some(user.home_dir().to_path_buf())
}

/// The per-user configuration directory as reported by the OS.
pub fn user_config_dir() -> Option<PathBuf> {
    let base = directories::BaseDirs::new()?;
    Some(base.config_dir().to_path_buf())
}

/// The directory containing the running executable.
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// `{user config dir}/{app_name}/{file_base}.toml`, or `None` when the OS
/// reports no config directory.
pub fn user_config_file(app_name: &str, file_base: &str) -> Option<PathBuf> {
    user_config_dir().map(|dir| dir.join(app_name).join(file_name(file_base)))
}

/// `{executable dir}/{file_base}.toml`.
pub fn executable_file(file_base: &str) -> std::io::Result<PathBuf> {
    executable_dir().map(|dir| dir.join(file_name(file_base)))
}

/// Return the first path in `paths` that exists on disk.
///
/// Absent (`None`) and empty entries are skipped. Errors while checking a
/// path are handed to `on_error` and do not stop the search.
pub fn find_first<I>(paths: I, mut on_error: impl FnMut(ChainfigError)) -> Option<PathBuf>
where
    I: IntoIterator,
    I::Item: Into<Option<PathBuf>>,
{
    for path in paths.into_iter().filter_map(Into::<Option<PathBuf>>::into) {
        if path.as_os_str().is_empty() {
            continue;
        }
        match path.try_exists() {
            Ok(true) => {
                debug!(path = %path.display(), "found config file");
                return Some(path);
            }
            Ok(false) => {
                debug!(path = %path.display(), "config file not found, skipping");
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not check config file");
                on_error(ChainfigError::Io { path, source: e });
            }
        }
    }
    None
}

/// Read and parse the TOML file at `path`.
pub fn load_table(path: &Path) -> Result<Table, ChainfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ChainfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ChainfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Look up a key in a parsed file.
///
/// A literal top-level key wins (`"a.b" = 1`); otherwise the key is treated
/// as a dotted path through nested tables (`[a]` / `b = 1`).
pub fn table_get<'a>(table: &'a Table, dotted_key: &str) -> Option<&'a Value> {
    if let Some(value) = table.get(dotted_key) {
        return Some(value);
    }

    let (path, leaf) = dotted_key.rsplit_once('.')?;
    let mut current = table;
    for segment in path.split('.') {
        current = current.get(segment)?.as_table()?;
    }
    current.get(leaf)
}
