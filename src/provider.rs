//! Candidate providers.
//!
//! Each provider turns one source into a [`Candidate`]. Providers never fail
//! loudly: problems are recorded on the context and the candidate is absent.

use toml::Value;

use crate::coerce::scalar_to_text;
use crate::context::Chainfig;
use crate::error::ChainfigError;
use crate::file;
use crate::types::Candidate;

impl Chainfig {
    /// The value of environment variable `name`. Present (possibly empty) iff
    /// the variable is set. Non-UTF-8 bytes are replaced with `U+FFFD`.
    pub fn from_env(&self, name: &str) -> Candidate {
        self.from_env_with(name, |key| {
            std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Like [`from_env`](Self::from_env) with a caller-supplied lookup, for
    /// tests and sandboxed environments.
    pub fn from_env_with(
        &self,
        name: &str,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Candidate {
        lookup(name)
    }

    /// The value stored under `key` (dotted for nested tables) in the backing
    /// file, as text.
    ///
    /// The first call on a fresh context loads the default config file for
    /// the context's [`Basis`](crate::Basis). Absent when the file could not
    /// be loaded or has no such key. Arrays, tables and datetimes are
    /// recorded as [`ChainfigError::UnexpectedType`] and yield absent.
    pub fn from_file(&self, key: &str) -> Candidate {
        self.ensure_loaded();
        let state = self.file_state.borrow();
        let value = file::table_get(state.table()?, key)?;
        match scalar_to_text(key, value) {
            Ok(text) => Some(text),
            Err(e) => {
                self.record(e);
                None
            }
        }
    }

    /// The user's home directory.
    pub fn user_home_dir(&self) -> Candidate {
        match file::home_dir() {
            Some(dir) => Some(dir.to_string_lossy().into_owned()),
            None => {
                self.record(ChainfigError::HomeDirUnavailable);
                None
            }
        }
    }

    /// The user's configuration directory.
    pub fn user_config_dir(&self) -> Candidate {
        match file::user_config_dir() {
            Some(dir) => Some(dir.to_string_lossy().into_owned()),
            None => {
                self.record(ChainfigError::ConfigDirUnavailable);
                None
            }
        }
    }

    /// The directory containing the running executable (not the executable
    /// itself).
    pub fn executable_dir(&self) -> Candidate {
        match file::executable_dir() {
            Ok(dir) => Some(dir.to_string_lossy().into_owned()),
            Err(e) => {
                self.record(ChainfigError::ExecutableUnavailable(e));
                None
            }
        }
    }

    /// Wrap a literal bool, integer or string as a present candidate.
    ///
    /// Other values (floats, arrays, tables, datetimes) give `None` without
    /// recording anything; they are programming mistakes, not user input.
    pub fn default_value(value: impl Into<Value>) -> Candidate {
        match value.into() {
            Value::Boolean(b) => Some(b.to_string()),
            Value::Integer(i) => Some(i.to_string()),
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Method form of [`default_value`](Self::default_value).
    pub fn default(&self, value: impl Into<Value>) -> Candidate {
        Self::default_value(value)
    }
}
