#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Flags are parsed by hand. `UI_STATE_*` environment variables supply
//! defaults that explicit flags override.

use std::env;
use std::process;

use ui_state::SessionConfig;
use ui_state::config::{ENV_BANNER_VISIBLE, parse_flag};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
ui-state demo: drive a UI session from stdin

USAGE:
    ui-state-demo [OPTIONS] < commands.txt

OPTIONS:
    --banner=on|off      Initial banner visibility (default: on)
    --jsonl=PATH         Append snapshots to PATH instead of stdout
    --log=FILTER         tracing filter for stderr logs (default: warn)
    --help, -h           Show this help message
    --version, -V        Show version

COMMANDS (one per line):
    add <type> <status> <message...>   Push a feedback entry
    remove <id>                        Dismiss a feedback entry
    refresh                            Bump the refresh counter
    banner on|off                      Show or hide the banner
    show                               Print the current snapshot
    quit                               Stop reading input

ENVIRONMENT VARIABLES:
    UI_STATE_BANNER_VISIBLE   Initial banner visibility (1/0, true/false, on/off)
    UI_STATE_JSONL            Override --jsonl
    UI_STATE_LOG              Override --log";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Configuration for the session the demo drives.
    pub session: SessionConfig,
    /// Snapshot output file (None = stdout).
    pub jsonl: Option<String>,
    /// `tracing_subscriber::EnvFilter` directive string.
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            jsonl: None,
            log_filter: "warn".into(),
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables, exiting the
    /// process on `--help`, `--version`, or a bad argument.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("ui-state-demo {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = get_env(ENV_BANNER_VISIBLE) {
            opts.session.banner_visible =
                parse_flag(ENV_BANNER_VISIBLE, &val).map_err(|_| ParseError::InvalidValue {
                    flag: ENV_BANNER_VISIBLE,
                    value: val.clone(),
                })?;
        }
        if let Some(val) = get_env("UI_STATE_JSONL")
            && !val.trim().is_empty()
        {
            opts.jsonl = Some(val);
        }
        if let Some(val) = get_env("UI_STATE_LOG")
            && !val.trim().is_empty()
        {
            opts.log_filter = val;
        }

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => return Err(ParseError::Help),
                "--version" | "-V" => return Err(ParseError::Version),
                _ => {}
            }
            if let Some(val) = arg.strip_prefix("--banner=") {
                opts.session.banner_visible =
                    parse_flag("--banner", val).map_err(|_| ParseError::InvalidValue {
                        flag: "--banner",
                        value: val.to_string(),
                    })?;
            } else if let Some(val) = arg.strip_prefix("--jsonl=") {
                if val.trim().is_empty() {
                    return Err(ParseError::InvalidValue {
                        flag: "--jsonl",
                        value: val.to_string(),
                    });
                }
                opts.jsonl = Some(val.to_string());
            } else if let Some(val) = arg.strip_prefix("--log=") {
                opts.log_filter = val.to_string();
            } else {
                return Err(ParseError::UnknownArg(arg.to_string()));
            }
        }

        Ok(opts)
    }
}
