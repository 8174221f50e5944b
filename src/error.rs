use std::path::PathBuf;
use thiserror::Error;

/// A problem recorded while locating, loading or resolving configuration.
///
/// Providers and resolvers never return these through `?`. They append them
/// to the context's error list and hand back an absent candidate or a zero
/// value, so one bad setting does not hide the others.
#[derive(Debug, Error)]
pub enum ChainfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Couldn't locate home directory")]
    HomeDirUnavailable,

    #[error("Couldn't locate user config directory")]
    ConfigDirUnavailable,

    #[error("Couldn't locate executable: {0}")]
    ExecutableUnavailable(std::io::Error),

    #[error("Unexpected data type {type_name} for key '{key}'")]
    UnexpectedType { key: String, type_name: &'static str },

    #[error("Unrecognized numeric value '{value}': {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("Unrecognized bool value '{0}'")]
    InvalidBool(String),

    #[error("Missing default {0} value")]
    MissingValue(&'static str),
}
