//! Clap adapter for chainfig.
//!
//! Chainfig does not parse flags. It resolves values that become the
//! *defaults* of a flag parser, so a flag given on the command line still
//! wins over everything chainfig found. This module, behind the `clap`
//! feature (on by default), provides the two seams needed for that with
//! [clap](https://docs.rs/clap):
//!
//! - [`ConfigFileArgs`]: a `--config <PATH>` option to embed in your
//!   `#[derive(Parser)]` struct, which takes priority over the computed
//!   config file locations.
//! - [`ResolvedDefault`]: sets a resolved value as a builder-API
//!   [`Arg`]'s default.
//!
//! ```ignore
//! let conf = Chainfig::new("myapp");
//! let cmd = Command::new("myapp").arg(
//!     Arg::new("age")
//!         .long("age")
//!         .value_parser(value_parser!(i64))
//!         .resolved_default(conf.resolve_int([
//!             conf.from_env("USER_AGE"),
//!             conf.from_file("age"),
//!             conf.default(16),
//!         ])),
//! );
//! ```

use std::path::PathBuf;

use clap::{Arg, Args};

use crate::context::Chainfig;

/// Clap-derived args selecting the backing file.
///
/// Flatten into your parser:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     file: ConfigFileArgs,
/// }
/// ```
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigFileArgs {
    /// Read settings from this file instead of the default locations.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

impl ConfigFileArgs {
    /// Load the backing file into `conf`.
    ///
    /// An explicit `--config` path is loaded directly, so a missing or broken
    /// file is recorded as an error rather than skipped. Without one,
    /// `fallbacks` are searched in order as by
    /// [`Chainfig::find_and_load`]. Returns the path loaded by this call.
    pub fn load_into<I>(&self, conf: &Chainfig, fallbacks: I) -> Option<PathBuf>
    where
        I: IntoIterator,
        I::Item: Into<Option<PathBuf>>,
    {
        match &self.config {
            Some(path) => conf.load(path.clone()).then(|| path.clone()),
            None => conf.find_and_load(fallbacks),
        }
    }
}

/// Use a resolved value as a clap argument's default.
pub trait ResolvedDefault {
    fn resolved_default(self, value: impl ToString) -> Self;
}

impl ResolvedDefault for Arg {
    fn resolved_default(self, value: impl ToString) -> Self {
        self.default_value(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::write_config;
    use crate::types::FileState;
    use clap::{ArgAction, Command, Parser, value_parser};
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        file: ConfigFileArgs,
    }

    fn parse(args: &[&str]) -> ConfigFileArgs {
        TestCli::try_parse_from(args).unwrap().file
    }

    #[test]
    fn parse_without_config() {
        assert_eq!(parse(&["test"]).config, None);
    }

    #[test]
    fn parse_config_path() {
        let args = parse(&["test", "--config", "/etc/myapp.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/etc/myapp.toml")));
    }

    #[test]
    fn explicit_path_beats_fallbacks() {
        let dir = TempDir::new().unwrap();
        let explicit = write_config(dir.path(), "explicit.toml", "beta = 1\n");
        let fallback = write_config(dir.path(), "fallback.toml", "beta = 2\n");

        let conf = Chainfig::new("test");
        let args = ConfigFileArgs {
            config: Some(explicit.clone()),
        };
        assert_eq!(args.load_into(&conf, [fallback]), Some(explicit));
        assert_eq!(conf.from_file("beta").as_deref(), Some("1"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let fallback = write_config(dir.path(), "fallback.toml", "beta = 2\n");

        let conf = Chainfig::new("test");
        let args = ConfigFileArgs {
            config: Some(dir.path().join("typo.toml")),
        };
        assert_eq!(args.load_into(&conf, [fallback]), None);
        assert_eq!(*conf.file_state(), FileState::Failed);
        assert_eq!(conf.error_count(), 1);
    }

    #[test]
    fn broken_explicit_path_keeps_earlier_table_but_returns_none() {
        let dir = TempDir::new().unwrap();
        let good = write_config(dir.path(), "good.toml", "beta = 1\n");
        let broken = write_config(dir.path(), "broken.toml", "beta = = 2\n");

        let conf = Chainfig::new("test");
        assert!(conf.load(&good));
        let args = ConfigFileArgs {
            config: Some(broken),
        };
        assert_eq!(args.load_into(&conf, Vec::<PathBuf>::new()), None);
        assert_eq!(conf.loaded_path(), Some(good));
        assert_eq!(conf.from_file("beta").as_deref(), Some("1"));
    }

    #[test]
    fn no_explicit_path_searches_fallbacks() {
        let dir = TempDir::new().unwrap();
        let fallback = write_config(dir.path(), "fallback.toml", "beta = 2\n");

        let conf = Chainfig::new("test");
        let search = [dir.path().join("missing.toml"), fallback.clone()];
        let used = ConfigFileArgs::default().load_into(&conf, search);
        assert_eq!(used, Some(fallback));
        assert_eq!(conf.from_file("beta").as_deref(), Some("2"));
    }

    #[test]
    fn resolved_default_applies_when_flag_absent() {
        let conf = Chainfig::new("test");
        let cmd = Command::new("test")
            .arg(
                Arg::new("age")
                    .long("age")
                    .value_parser(value_parser!(i64))
                    .resolved_default(conf.resolve_int([None, conf.default(16)])),
            )
            .arg(
                Arg::new("debug")
                    .long("debug")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(bool))
                    .resolved_default(conf.resolve_bool([conf.default(true)])),
            );

        let m = cmd.clone().try_get_matches_from(["test"]).unwrap();
        assert_eq!(m.get_one::<i64>("age"), Some(&16));
        assert_eq!(m.get_one::<bool>("debug"), Some(&true));

        let m = cmd.try_get_matches_from(["test", "--age", "30"]).unwrap();
        assert_eq!(m.get_one::<i64>("age"), Some(&30));
    }
}
