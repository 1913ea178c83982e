#![forbid(unsafe_code)]

//! ui-state demo binary entry point.

mod cli;
mod command;

use std::fs::OpenOptions;
use std::io::{self, BufRead, BufWriter, Write};

use tracing::debug;
use tracing_subscriber::EnvFilter;
use ui_state::UiSession;

use crate::command::{Command, CommandError};

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(OpenOptions::new().create(true).append(true).open(path)?),
        None => Box::new(io::stdout()),
    })
}

fn write_snapshot(out: &mut dyn Write, session: &UiSession) -> io::Result<()> {
    let line = serde_json::to_string(&session.snapshot()).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

fn run(opts: &cli::Opts) -> io::Result<()> {
    let session = UiSession::new(opts.session.clone());
    let mut out = BufWriter::new(open_output(opts.jsonl.as_deref())?);

    let _feedback_sub = session
        .feedback()
        .subscribe(|list| debug!(entries = list.len(), "feedback changed"));
    let _refresh_sub = session
        .refresh()
        .subscribe(|count| debug!(count, "refresh changed"));
    let _banner_sub = session
        .banner()
        .subscribe(|visible| debug!(visible, "banner changed"));

    for line in io::stdin().lock().lines() {
        let line = line?;
        match Command::parse(&line) {
            Ok(cmd) => {
                if !cmd.apply(&session) {
                    break;
                }
                write_snapshot(&mut out, &session)?;
            }
            Err(CommandError::Empty) => {}
            Err(err) => eprintln!("{err}"),
        }
    }
    out.flush()
}

fn main() {
    let opts = cli::Opts::parse();
    init_logging(&opts.log_filter);

    if let Err(e) = run(&opts) {
        eprintln!("I/O error: {e}");
        std::process::exit(1);
    }
}
