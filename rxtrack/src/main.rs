//! rxtrack - command-driven prescription tracker.
//!
//! # Commands
//!
//! - `rxtrack` or `rxtrack repl`: Read commands from stdin until `exit` or EOF
//! - `rxtrack exec <WORDS>...`: Run a single command and exit
//!
//! # Environment Variables
//!
//! See the [`config`](rxtrack::config) module for available configuration options.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use rxtrack::config::{Config, LogFormat};
use rxtrack::logic::LogicManager;
use rxtrack::model::{Model, Prescription, PrescriptionList, UserPrefs};
use rxtrack::storage::{self, Storage, StorageError};
use rxtrack::{CommandResult, ListView};

/// rxtrack - command-driven prescription tracker.
///
/// Keeps active and completed prescriptions in JSON files and edits them
/// through one-line commands.
#[derive(Parser, Debug)]
#[command(name = "rxtrack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    RXTRACK_DATA_DIR     Data directory (default: ~/.rxtrack)
    RXTRACK_PREFS_PATH   Preferences file (default: <data dir>/preferences.json)
    RXTRACK_LOG_FORMAT   Log format, text or json (default: text)
    RUST_LOG             Log filter (default: info)

EXAMPLES:
    # Start an interactive session
    rxtrack

    # Add a prescription without entering the REPL
    rxtrack exec add n/Aspirin d/1 tablet f/Daily ts/30

    # Show active prescriptions whose name contains 'asp'
    rxtrack exec find asp
")]
struct Cli {
    /// Preferences file to use instead of RXTRACK_PREFS_PATH.
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Read commands interactively until `exit` or end of input.
    Repl,

    /// Run a single command, e.g. `exec delete 2`.
    Exec {
        /// The command text, split into words by the shell.
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(prefs) = cli.prefs {
        config.prefs_path = prefs;
    }

    init_logging(config.log_format);
    info!(
        data_dir = %config.data_dir.display(),
        prefs = %config.prefs_path.display(),
        "Starting rxtrack"
    );

    let mut logic = load_logic(&config);

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            run_repl(&mut logic)?;
            save_prefs(&config.prefs_path, logic.user_prefs());
            Ok(ExitCode::SUCCESS)
        }
        Command::Exec { words } => Ok(run_exec(&mut logic, &words.join(" "))),
    }
}

/// Builds the façade from whatever is on disk, falling back to defaults
/// for anything missing or unreadable.
fn load_logic(config: &Config) -> LogicManager {
    let prefs = match storage::load_user_prefs(&config.prefs_path) {
        Ok(Some(prefs)) => prefs,
        Ok(None) => {
            info!("No preferences file found, using defaults");
            UserPrefs::for_data_dir(&config.data_dir)
        }
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable preferences file");
            UserPrefs::for_data_dir(&config.data_dir)
        }
    };

    let storage = Storage::from_user_prefs(&prefs);
    let prescriptions = or_empty(storage.load_prescription_list());
    let completed = or_empty(storage.load_completed_list());
    info!(
        active = prescriptions.len(),
        completed = completed.len(),
        "Loaded prescription data"
    );

    LogicManager::new(Model::new(prescriptions, completed, prefs), storage)
}

fn or_empty(loaded: Result<PrescriptionList, StorageError>) -> PrescriptionList {
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Data file could not be loaded, starting with an empty list");
        PrescriptionList::new()
    })
}

fn run_repl(logic: &mut LogicManager) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print_list(&mut stdout, &logic.filtered_prescription_list())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match logic.execute(&line) {
            Ok(result) => {
                print_result(&mut stdout, logic, &result)?;
                if result.exit {
                    break;
                }
            }
            Err(e) => writeln!(stdout, "{e}")?,
        }
    }

    Ok(())
}

fn run_exec(logic: &mut LogicManager, text: &str) -> ExitCode {
    let printed = match logic.execute(text) {
        Ok(result) => print_result(&mut io::stdout(), logic, &result),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match printed {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Failed to write output: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_result(out: &mut impl Write, logic: &LogicManager, result: &CommandResult) -> io::Result<()> {
    writeln!(out, "{}", result.feedback_to_user)?;
    if result.show_help || result.exit {
        return Ok(());
    }
    match result.view {
        ListView::Active => print_list(out, &logic.filtered_prescription_list()),
        ListView::Completed => print_list(out, &logic.filtered_completed_list()),
    }
}

fn print_list(out: &mut impl Write, prescriptions: &[&Prescription]) -> io::Result<()> {
    for (i, prescription) in prescriptions.iter().enumerate() {
        writeln!(out, "{:>3}. {prescription}", i + 1)?;
    }
    Ok(())
}

fn save_prefs(path: &Path, prefs: &UserPrefs) {
    if let Err(e) = storage::save_user_prefs(path, prefs) {
        warn!(error = %e, "Failed to save preferences");
    }
}

/// Initializes the logging subsystem.
///
/// Logs go to stderr so they never interleave with command output.
fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(true)
            .with_level(true)
            .init(),
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_target(true)
                .with_level(true)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .init();
        }
    }
}
