//! # chainfig demo application
//!
//! Shows the intended use of chainfig: resolve each setting from the
//! environment, the config file and a literal, then hand the result to clap
//! as the flag's default. A flag on the command line still wins.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example flags_demo
//! DEBUG=yes USER_AGE=0x20 cargo run --example flags_demo
//! cargo run --example flags_demo -- --age 40
//! ```
//!
//! The config file is looked for next to the executable, then in
//! `{user config dir}/MyAppName/config.toml`, then at `/tmp/test.toml`:
//!
//! ```toml
//! debug = true
//! home = "/srv/myapp"
//! age = 21
//! ```

use clap::{Arg, ArgAction, Command, value_parser};

use chainfig::{Chainfig, ResolvedDefault};

fn main() {
    let conf = Chainfig::new("MyAppName")
        .true_strings(["true", "yes"])
        .false_strings(["false", "no"]);

    let location = conf.find_and_load([
        conf.file_from_executable(),
        conf.file_from_home(),
        Some("/tmp/test.toml".into()),
    ]);
    if let Some(path) = &location {
        println!("Loaded config from {}", path.display());
    }

    // --debug, else DEBUG, else `debug` in the file, else false.
    let debug = conf.resolve_bool([
        conf.from_env("DEBUG"),
        conf.from_file("debug"),
        conf.default(false),
    ]);

    // --base-dir, else APP_DIR, else `home` in the file, else the OS home
    // directory, else the executable's directory, else HOME, else a literal.
    let base_dir = conf.resolve_string([
        conf.from_env("APP_DIR"),
        conf.from_file("home"),
        conf.user_home_dir(),
        conf.executable_dir(),
        conf.from_env("HOME"),
        conf.default("/home/meta"),
    ]);

    // --age, else USER_AGE, else `age` in the file, else 16.
    let age = conf.resolve_int([
        conf.from_env("USER_AGE"),
        conf.from_file("age"),
        conf.default(16),
    ]);

    let matches = Command::new("flags_demo")
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Whether to run in debug mode")
                .action(ArgAction::Set)
                .value_parser(value_parser!(bool))
                .resolved_default(debug),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Base directory for application")
                .resolved_default(base_dir),
        )
        .arg(
            Arg::new("age")
                .long("age")
                .help("Age of user")
                .value_parser(value_parser!(i64))
                .resolved_default(age),
        )
        .get_matches();

    // Stopping on any error is up to the application; the demo just reports.
    for err in conf.errors().iter() {
        eprintln!("error: {err}");
    }

    let debug = matches.get_one::<bool>("debug").copied().unwrap_or_default();
    let base_dir = matches
        .get_one::<String>("base-dir")
        .cloned()
        .unwrap_or_default();
    let age = matches.get_one::<i64>("age").copied().unwrap_or_default();

    println!("debug = {debug}");
    println!("baseDir = {base_dir}");
    println!("age = {age}");
}
