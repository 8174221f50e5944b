//! Ordered, typed resolution of single configuration values.
//!
//! Chainfig answers one question per setting: "try these sources in this
//! order, and turn whatever is found first into a bool, int, float or
//! string". It is the glue between a flag parser, the environment, a config
//! file and compiled defaults, without a search-and-parse loop per setting.
//!
//! ```no_run
//! use chainfig::Chainfig;
//!
//! let conf = Chainfig::new("myapp")
//!     .true_strings(["true", "yes"])
//!     .false_strings(["false", "no"]);
//!
//! conf.find_and_load([
//!     conf.file_from_executable(),
//!     conf.file_from_home(),
//!     Some("/etc/myapp.toml".into()),
//! ]);
//!
//! let debug = conf.resolve_bool([
//!     conf.from_env("DEBUG"),
//!     conf.from_file("debug"),
//!     conf.default(false),
//! ]);
//!
//! for err in conf.errors().iter() {
//!     eprintln!("config: {err}");
//! }
//! # let _ = debug;
//! ```
//!
//! # Candidates
//!
//! Every source is reduced to a [`Candidate`], an `Option<String>`. Providers
//! produce text only; the resolver for the target type does the parsing. The
//! same candidate list can therefore feed any resolver.
//!
//! | Provider | Present when |
//! |----------|--------------|
//! | [`from_env`](Chainfig::from_env) | the variable is set (even to `""`) |
//! | [`from_file`](Chainfig::from_file) | the backing file has a scalar under the key |
//! | [`default`](Chainfig::default) | the literal is a bool, integer or string |
//! | [`user_home_dir`](Chainfig::user_home_dir) | the OS reports a home directory |
//! | [`user_config_dir`](Chainfig::user_config_dir) | the OS reports a config directory |
//! | [`executable_dir`](Chainfig::executable_dir) | the executable can be located |
//!
//! # Resolution
//!
//! [`resolve_string`](Chainfig::resolve_string),
//! [`resolve_int`](Chainfig::resolve_int),
//! [`resolve_float`](Chainfig::resolve_float) and
//! [`resolve_bool`](Chainfig::resolve_bool) take the first present candidate
//! and coerce it. The walk stops there even if coercion fails, so a
//! malformed environment variable is reported instead of being silently
//! replaced by the file value. Put a literal default last.
//!
//! - Integers accept `0x`, `0o`, `0b` and leading-`0` octal prefixes. Text with
//!   a decimal point is parsed as a float and truncated toward zero
//!   (`"2.7"` → `2`, `"-2.7"` → `-2`).
//! - Booleans match the context's true/false strings after trimming,
//!   ignoring case. Defaults are `["true"]` and `["false"]`.
//!
//! # The backing file
//!
//! A single TOML file, loaded at most once per context. Either call
//! [`find_and_load`](Chainfig::find_and_load) with your own ordered list, or
//! let the first [`from_file`](Chainfig::from_file) load the default location
//! for the context's [`Basis`]:
//!
//! ```text
//! RelativeToUser        {user config dir}/{app_name}/{file_base}.toml
//! RelativeToExecutable  {executable dir}/{file_base}.toml
//! ```
//!
//! A failed attempt is not retried by later lookups; they resolve to absent.
//!
//! # Errors
//!
//! Nothing here returns `Err` or panics on bad input. Every problem (an
//! unreadable file, a malformed number, a setting with no candidate at all)
//! is appended to the context's error list and a zero value is returned, so
//! one bad setting does not hide the rest. Inspect
//! [`errors()`](Chainfig::errors) once everything is resolved and decide
//! whether to stop.
//!
//! Diagnostics are also emitted as [`tracing`](https://docs.rs/tracing)
//! events; install a subscriber to see them.

pub mod coerce;
pub mod error;
pub mod file;
pub mod types;

#[cfg(feature = "clap")]
mod cli;
mod context;
mod provider;
mod resolve;

#[cfg(test)]
mod fixtures;

#[cfg(feature = "clap")]
pub use cli::{ConfigFileArgs, ResolvedDefault};
pub use coerce::BoolVocabulary;
pub use context::Chainfig;
pub use error::ChainfigError;
pub use types::{Basis, Candidate, FileState};
