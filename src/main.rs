use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use logtally_logs::{LevelFilter, LogIngestor, LogLevel, count_by_level};
use logtally_term::{Config, CountTable, Theme, render_record};

/// logtally - count and filter the records of a log file by severity
#[derive(Parser, Debug)]
#[command(name = "logtally")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log file with `YYYY-MM-DD HH:MM:SS LEVEL message` lines
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Also print every record of this level (INFO, DEBUG, ERROR, WARNING; any case)
    #[arg(value_name = "LEVEL")]
    level: Option<String>,

    /// Disable colored level names
    #[arg(long)]
    no_color: bool,

    /// Display configuration file (defaults to ~/.config/logtally/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

/// How a run ended, when it did not fail outright
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Completed,
    NoRecords,
    UnknownLevel,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let stdout = io::stdout();
    match run_app(&args, &mut stdout.lock()) {
        Ok(outcome) => {
            tracing::debug!(?outcome, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_app(args: &Args, out: &mut impl Write) -> Result<Outcome> {
    let config = Config::load(args.config.as_deref())?;
    let color =
        config.display.color && !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let theme = Theme::from_config(&config)?.with_color(color);

    if config.display.progress {
        writeln!(out, "Analyzing {}...", args.path.display())?;
    }

    let report = LogIngestor::new(&args.path).ingest();
    if report.is_empty() {
        return Ok(Outcome::NoRecords);
    }
    let records = report.into_records();

    let counts = count_by_level(&records);
    let table = CountTable::new(&theme)
        .with_headers(&config.display.level_header, &config.display.count_header)
        .render(&counts);
    writeln!(out)?;
    writeln!(out, "{table}")?;
    writeln!(out)?;

    let Some(requested) = args.level.as_deref() else {
        return Ok(Outcome::Completed);
    };

    if let Err(err) = LogLevel::from_request(requested) {
        tracing::error!("{err}");
        return Ok(Outcome::UnknownLevel);
    }

    let filter = LevelFilter::new(requested);
    for record in filter.apply(&records) {
        writeln!(out, "{}", render_record(record, &theme))?;
    }

    Ok(Outcome::Completed)
}
