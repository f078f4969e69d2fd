use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use maze_encoding::{Grid, ParseError, Report};

mod config;
mod output;

use config::{Config, Settings};
use output::Format;

/// Exit code for malformed input or configuration.
const EXIT_FAILURE: u8 = 2;
/// Exit code when `--deny-violations` is set and the maze is inconsistent.
const EXIT_VIOLATIONS: u8 = 3;

/// Check that neighbouring maze cells agree on their shared walls
#[derive(Parser, Debug)]
#[command(name = "maze-validate", version)]
struct Args {
    /// Maze file: one hexadecimal digit per cell, one row per line
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Exit with a non-zero status when violations are found
    #[arg(long)]
    deny_violations: bool,

    /// TOML file with default options
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log debug diagnostics
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn load_grid(path: &Path) -> Result<Grid> {
    let file = File::open(path)
        .map_err(ParseError::Io)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let grid = Grid::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "parsed maze grid"
    );
    Ok(grid)
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = Settings::resolve(args.format, args.pretty, args.deny_violations, &config);
    debug!(?settings, "resolved settings");

    let grid = load_grid(&args.file)?;
    let report = Report::new(&grid);
    info!(
        violations = report.violations.len(),
        "checked {} cells",
        grid.width() * grid.height()
    );

    let file = args.file.display().to_string();
    output::write_report(&mut io::stdout().lock(), &file, &report, &settings)?;

    if settings.deny_violations && !report.is_consistent() {
        return Ok(ExitCode::from(EXIT_VIOLATIONS));
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // help and version go to stdout and are not usage errors
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_logging(args.log_level());

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
