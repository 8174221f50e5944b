use std::path::{Path, PathBuf};

/// One possible source value for a setting.
///
/// `Some(text)` is a present candidate, `None` an absent one. Providers
/// always produce text; conversion to the target type happens only in the
/// resolvers, so the same candidate list can feed any of them.
pub type Candidate = Option<String>;

/// Where the default config file is looked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Basis {
    /// `<user config dir>/<app_name>/<file_base>.toml`
    #[default]
    RelativeToUser,
    /// `<directory of the running executable>/<file_base>.toml`
    RelativeToExecutable,
}

/// Load state of the backing file.
///
/// A context starts in `NotAttempted`. The first load attempt, lazy or
/// explicit, moves it to `Loaded` or `Failed`. Lazy lookups never retry a
/// `Failed` state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FileState {
    #[default]
    NotAttempted,
    Loaded { path: PathBuf, table: toml::Table },
    Failed,
}

impl FileState {
    pub fn is_attempted(&self) -> bool {
        !matches!(self, FileState::NotAttempted)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, FileState::Loaded { .. })
    }

    /// Path of the successfully loaded file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FileState::Loaded { path, .. } => Some(path),
            _ => None,
        }
    }

    pub(crate) fn table(&self) -> Option<&toml::Table> {
        match self {
            FileState::Loaded { table, .. } => Some(table),
            _ => None,
        }
    }
}
