use std::cell::{Ref, RefCell};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::coerce::BoolVocabulary;
use crate::error::ChainfigError;
use crate::file;
use crate::types::{Basis, FileState};

/// A resolution context for one application's settings.
///
/// Holds the application identity, the boolean vocabulary, the backing-file
/// state and the list of errors recorded so far. Nothing is global: several
/// contexts with different search rules can live side by side.
///
/// Providers and resolvers take `&self` so that candidate lists can be
/// written inline:
///
/// ```no_run
/// use chainfig::Chainfig;
///
/// let conf = Chainfig::new("myapp");
/// let port = conf.resolve_int([
///     conf.from_env("MYAPP_PORT"),
///     conf.from_file("port"),
///     Chainfig::default_value(8080),
/// ]);
/// for err in conf.errors().iter() {
///     eprintln!("config: {err}");
/// }
/// # let _ = port;
/// ```
///
/// The error list and the file state use interior mutability, so a context
/// is `!Sync`. Share one between threads only behind a lock.
#[derive(Debug)]
pub struct Chainfig {
    app_name: String,
    file_base: String,
    basis: Basis,
    vocabulary: BoolVocabulary,
    pub(crate) file_state: RefCell<FileState>,
    pub(crate) errors: RefCell<Vec<ChainfigError>>,
}

impl Chainfig {
    /// Create a context for `app_name` with file base `"config"`, the
    /// user-relative basis and the `["true"]` / `["false"]` vocabulary.
    pub fn new(app_name: &str) -> Self {
        Self {
            app_name: app_name.to_string(),
            file_base: "config".to_string(),
            basis: Basis::default(),
            vocabulary: BoolVocabulary::default(),
            file_state: RefCell::new(FileState::NotAttempted),
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Override the config file base name (default: `"config"`).
    pub fn file_base(mut self, base: &str) -> Self {
        self.file_base = base.to_string();
        self
    }

    /// Set where the default config file is looked for.
    pub fn location(mut self, basis: Basis) -> Self {
        self.basis = basis;
        self
    }

    /// Replace the strings accepted as `true` (case-insensitive).
    pub fn true_strings<S: AsRef<str>>(mut self, strings: impl IntoIterator<Item = S>) -> Self {
        self.vocabulary.true_strings = to_owned_strings(strings);
        self
    }

    /// Replace the strings accepted as `false` (case-insensitive).
    pub fn false_strings<S: AsRef<str>>(mut self, strings: impl IntoIterator<Item = S>) -> Self {
        self.vocabulary.false_strings = to_owned_strings(strings);
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn file_base_name(&self) -> &str {
        &self.file_base
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn vocabulary(&self) -> &BoolVocabulary {
        &self.vocabulary
    }

    // --- error list ---

    /// Errors recorded so far, oldest first.
    pub fn errors(&self) -> Ref<'_, [ChainfigError]> {
        Ref::map(self.errors.borrow(), Vec::as_slice)
    }

    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.borrow().is_empty()
    }

    /// Drain the error list, leaving it empty.
    pub fn take_errors(&self) -> Vec<ChainfigError> {
        self.errors.take()
    }

    pub fn clear_errors(&self) {
        self.errors.borrow_mut().clear();
    }

    pub(crate) fn record(&self, err: ChainfigError) {
        self.errors.borrow_mut().push(err);
    }

    // --- backing file ---

    /// Config file path next to the running executable.
    ///
    /// Records an error and returns `None` if the executable can't be located.
    pub fn file_from_executable(&self) -> Option<PathBuf> {
        match file::executable_file(&self.file_base) {
            Ok(path) => Some(path),
            Err(e) => {
                self.record(ChainfigError::ExecutableUnavailable(e));
                None
            }
        }
    }

    /// Config file path in the user's config directory:
    /// `{config dir}/{app_name}/{file_base}.toml`.
    ///
    /// Records an error and returns `None` if the OS reports no config directory.
    pub fn file_from_home(&self) -> Option<PathBuf> {
        let path = file::user_config_file(&self.app_name, &self.file_base);
        if path.is_none() {
            self.record(ChainfigError::ConfigDirUnavailable);
        }
        path
    }

    /// The default config file path for this context's [`Basis`].
    pub fn default_file_path(&self) -> Option<PathBuf> {
        match self.basis {
            Basis::RelativeToUser => self.file_from_home(),
            Basis::RelativeToExecutable => self.file_from_executable(),
        }
    }

    /// Return the first path in `paths` that exists.
    ///
    /// `None` and empty entries are skipped. Errors while checking a path are
    /// recorded and the search continues.
    pub fn find<I>(&self, paths: I) -> Option<PathBuf>
    where
        I: IntoIterator,
        I::Item: Into<Option<PathBuf>>,
    {
        file::find_first(paths, |e| self.record(e))
    }

    /// Load and parse the file at `path` as the backing file. Returns whether
    /// this call loaded it.
    ///
    /// On failure the error is recorded; a table loaded earlier is kept,
    /// otherwise the state becomes [`FileState::Failed`].
    pub fn load(&self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        match file::load_table(&path) {
            Ok(table) => {
                info!(path = %path.display(), "loaded config file");
                *self.file_state.borrow_mut() = FileState::Loaded { path, table };
                true
            }
            Err(e) => {
                warn!(error = %e, "config file not loaded");
                self.record(e);
                let mut state = self.file_state.borrow_mut();
                if !state.is_loaded() {
                    *state = FileState::Failed;
                }
                false
            }
        }
    }

    /// [`find`](Self::find) followed by [`load`](Self::load).
    ///
    /// Returns the path loaded by this call, or `None` if no candidate
    /// existed or the one found failed to load. Either way the backing file
    /// counts as attempted, so later [`from_file`](Self::from_file) calls
    /// won't search again.
    pub fn find_and_load<I>(&self, paths: I) -> Option<PathBuf>
    where
        I: IntoIterator,
        I::Item: Into<Option<PathBuf>>,
    {
        match self.find(paths) {
            Some(path) => self.load(path.clone()).then_some(path),
            None => {
                let mut state = self.file_state.borrow_mut();
                if !state.is_attempted() {
                    *state = FileState::Failed;
                }
                None
            }
        }
    }

    /// Run the default discover-and-load once, if nothing has been attempted.
    pub(crate) fn ensure_loaded(&self) {
        if self.file_state.borrow().is_attempted() {
            return;
        }
        let default = self.default_file_path();
        self.find_and_load([default]);
    }

    /// Path of the loaded backing file, if any.
    pub fn loaded_path(&self) -> Option<PathBuf> {
        self.file_state.borrow().path().map(PathBuf::from)
    }

    /// A snapshot of the backing-file state.
    pub fn file_state(&self) -> Ref<'_, FileState> {
        self.file_state.borrow()
    }
}

fn to_owned_strings<S: AsRef<str>>(strings: impl IntoIterator<Item = S>) -> Vec<String> {
    strings.into_iter().map(|s| s.as_ref().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{SAMPLE_TOML, write_config};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn new_sets_defaults() {
        let conf = Chainfig::new("myapp");
        assert_eq!(conf.app_name(), "myapp");
        assert_eq!(conf.file_base_name(), "config");
        assert_eq!(conf.basis(), Basis::RelativeToUser);
        assert_eq!(conf.vocabulary(), &BoolVocabulary::default());
        assert!(!conf.has_errors());
        assert!(!conf.file_state().is_attempted());
    }

    #[test]
    fn builder_overrides() {
        let conf = Chainfig::new("myapp")
            .file_base("settings")
            .location(Basis::RelativeToExecutable)
            .true_strings(["true", "yes"])
            .false_strings(vec!["false".to_string(), "no".to_string()]);
        assert_eq!(conf.file_base_name(), "settings");
        assert_eq!(conf.basis(), Basis::RelativeToExecutable);
        assert_eq!(conf.vocabulary().true_strings, ["true", "yes"]);
        assert_eq!(conf.vocabulary().false_strings, ["false", "no"]);
    }

    #[test]
    fn file_from_executable_uses_file_base() {
        let conf = Chainfig::new("myapp").file_base("cloud");
        let path = conf.file_from_executable().unwrap();
        assert_eq!(path.file_name().unwrap(), "cloud.toml");
        assert!(!conf.has_errors());
    }

    #[test]
    fn default_path_follows_basis() {
        let conf = Chainfig::new("myapp").location(Basis::RelativeToExecutable);
        assert_eq!(conf.default_file_path(), conf.file_from_executable());
    }

    #[test]
    fn take_and_clear_errors() {
        let conf = Chainfig::new("myapp");
        conf.record(ChainfigError::MissingValue("int"));
        conf.record(ChainfigError::MissingValue("bool"));
        assert_eq!(conf.error_count(), 2);

        let taken = conf.take_errors();
        assert_eq!(taken.len(), 2);
        assert!(!conf.has_errors());

        conf.record(ChainfigError::MissingValue("string"));
        conf.clear_errors();
        assert_eq!(conf.error_count(), 0);
    }

    #[test]
    fn find_and_load_returns_used_path() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "app.toml", SAMPLE_TOML);

        let conf = Chainfig::new("myapp");
        let used = conf.find_and_load([dir.path().join("missing.toml"), path.clone()]);
        assert_eq!(used, Some(path.clone()));
        assert_eq!(conf.loaded_path(), Some(path));
        assert!(!conf.has_errors());
    }

    #[test]
    fn find_and_load_with_no_match_marks_failed() {
        let dir = TempDir::new().unwrap();
        let conf = Chainfig::new("myapp");
        let used = conf.find_and_load([dir.path().join("missing.toml")]);
        assert!(used.is_none());
        assert_eq!(*conf.file_state(), FileState::Failed);
        assert!(!conf.has_errors());
    }

    #[test]
    fn failed_load_records_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "bad.toml", "alpha = = 1\n");

        let conf = Chainfig::new("myapp");
        conf.load(&path);
        assert_eq!(*conf.file_state(), FileState::Failed);
        assert!(matches!(conf.errors()[0], ChainfigError::Parse { .. }));
    }

    #[test]
    fn failed_load_keeps_earlier_table() {
        let dir = TempDir::new().unwrap();
        let good = write_config(dir.path(), "good.toml", SAMPLE_TOML);

        let conf = Chainfig::new("myapp");
        conf.load(&good);
        conf.load(dir.path().join("absent.toml"));

        assert_eq!(conf.loaded_path(), Some(good));
        assert_eq!(conf.error_count(), 1);
        assert!(matches!(conf.errors()[0], ChainfigError::Io { .. }));
    }

    #[test]
    fn find_and_load_reports_only_its_own_success() {
        let dir = TempDir::new().unwrap();
        let good = write_config(dir.path(), "good.toml", SAMPLE_TOML);
        let bad = write_config(dir.path(), "bad.toml", "alpha = = 1\n");

        let conf = Chainfig::new("myapp");
        assert!(conf.load(&good));
        assert_eq!(conf.find_and_load([bad]), None);
        assert_eq!(conf.loaded_path(), Some(good));
        assert!(matches!(conf.errors()[0], ChainfigError::Parse { .. }));
    }

    #[test]
    fn explicit_load_replaces_table() {
        let dir = TempDir::new().unwrap();
        let first = write_config(dir.path(), "first.toml", "beta = 1\n");
        let second = dir.path().join("second.toml");
        fs::write(&second, "beta = 2\n").unwrap();

        let conf = Chainfig::new("myapp");
        assert!(conf.load(&first));
        assert!(conf.load(&second));
        assert_eq!(conf.loaded_path(), Some(second));
        assert_eq!(conf.from_file("beta").as_deref(), Some("2"));
    }
}
