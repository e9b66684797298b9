//! `sort` command line front end
//!
//! Parses GNU style options into a [`SortConfig`] and hands it to the
//! library.

use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::process;

use keysort::{config::SortConfig, error::SortResult, sort};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;

    init_logging(config.debug);
    log::debug!("configuration: {:?}", config);

    sort(&config)
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("sort: failed to initialize logging: {}", e);
    }
}

fn build_cli() -> Command {
    Command::new("sort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("sort [OPTION]... [FILE]...")
        .about("Sort lines of text files")
        .long_about("Sort lines of text files by the whole line or by a single field.\n\nWith no FILE, or when FILE is -, read standard input.")
        .disable_help_flag(true)  // We use -h for human-numeric-sort
        .disable_version_flag(true)

        // Input files
        .arg(Arg::new("files")
            .help("Input files to sort (use '-' or omit for stdin)")
            .num_args(0..)
            .value_name("FILE"))

        // Ordering modes (may be combined)
        .arg(Arg::new("numeric-sort")
            .short('n')
            .long("numeric-sort")
            .help("Compare according to string numerical value")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("human-numeric-sort")
            .short('h')
            .long("human-numeric-sort")
            .help("Compare human readable numbers (e.g., 2K 1G)")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("month-sort")
            .short('M')
            .long("month-sort")
            .help("Compare (unknown) < 'JAN' < ... < 'DEC'")
            .action(ArgAction::SetTrue))

        // Sort modifiers
        .arg(Arg::new("reverse")
            .short('r')
            .long("reverse")
            .help("Reverse the result of comparisons")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("unique")
            .short('u')
            .long("unique")
            .help("Output only the first of identical adjacent lines")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("ignore-leading-blanks")
            .short('b')
            .long("ignore-leading-blanks")
            .help("Ignore leading blanks")
            .action(ArgAction::SetTrue))

        // Field options
        .arg(Arg::new("field-separator")
            .short('t')
            .long("field-separator")
            .help("Use SEP instead of non-blank to blank transition")
            .value_name("SEP"))
        .arg(Arg::new("key")
            .short('k')
            .long("key")
            .help("Sort by field N (origin 1); the rest of a KEYDEF is ignored")
            .value_name("KEYDEF"))

        // I/O options
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .help("Write result to FILE instead of standard output")
            .value_name("FILE"))

        // Operation modes
        .arg(Arg::new("check")
            .short('c')
            .long("check")
            .help("Check for sorted input; do not sort")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("debug")
            .long("debug")
            .help("Log diagnostics to stderr")
            .action(ArgAction::SetTrue))

        // Add explicit help and version options since we disabled the automatic ones
        .arg(Arg::new("help")
            .long("help")
            .help("Display this help and exit")
            .action(ArgAction::Help))
        .arg(Arg::new("version")
            .long("version")
            .help("Output version information and exit")
            .action(ArgAction::Version))
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut config = SortConfig::new()
        .with_numeric(matches.get_flag("numeric-sort"))
        .with_human_numeric(matches.get_flag("human-numeric-sort"))
        .with_month(matches.get_flag("month-sort"))
        .with_reverse(matches.get_flag("reverse"))
        .with_unique(matches.get_flag("unique"))
        .with_ignore_leading_blanks(matches.get_flag("ignore-leading-blanks"))
        .with_check(matches.get_flag("check"))
        .with_debug(matches.get_flag("debug"));

    if let Some(sep) = matches.get_one::<String>("field-separator") {
        config.set_separator_from_string(sep)?;
    }

    if let Some(keydef) = matches.get_one::<String>("key") {
        config.set_key_from_string(keydef)?;
    }

    config.output_file = matches.get_one::<String>("output").cloned();
    config.input_files = matches
        .get_many::<String>("files")
        .unwrap_or_default()
        .cloned()
        .collect();

    config.validate()?;

    Ok(config)
}
