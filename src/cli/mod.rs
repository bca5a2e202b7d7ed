// CLI module
// Command-line arguments, logging setup, and the interactive session

mod args;
pub mod commands;
pub mod session;

pub use args::{CliArgs, Command};
pub use session::Session;

use crate::clock::SystemClock;
use crate::io::FileOrderStore;
use crate::render::{CsvRenderer, OutputFormat, ReportRenderer, TerminalRenderer};
use crate::types::AppError;
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help), clap displays an
/// error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the global tracing subscriber, logging to stderr
///
/// `RUST_LOG` overrides the filter derived from `-v` flags.
pub fn init_logging(args: &CliArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Run the command selected on the command line
///
/// # Returns
///
/// The process exit code: 0 on success, 1 when `verify` finds a torn tail.
pub fn run(args: &CliArgs) -> Result<i32, AppError> {
    let store = FileOrderStore::new(&args.store);
    let color = !args.no_color && io::stdout().is_terminal();
    tracing::debug!(store = %store.path().display(), "using order store");

    match &args.command {
        None => {
            let stdin = io::stdin();
            let renderer = TerminalRenderer::new(io::stdout(), color);
            let mut session = Session::new(stdin.lock(), renderer, store, SystemClock, args.overflow);
            session.run()?;
            Ok(0)
        }
        Some(Command::List { format }) => {
            with_renderer(*format, color, |renderer| {
                commands::list(&store, renderer)
            })?;
            Ok(0)
        }
        Some(Command::Search { name, format }) => {
            with_renderer(*format, color, |renderer| {
                commands::search(&store, name, renderer)
            })?;
            Ok(0)
        }
        Some(Command::Verify) => {
            let report = with_renderer(OutputFormat::Table, color, |renderer| {
                commands::verify(&store, renderer)
            })?;
            Ok(if report.is_aligned() { 0 } else { 1 })
        }
    }
}

fn with_renderer<T>(
    format: OutputFormat,
    color: bool,
    f: impl FnOnce(&mut dyn ReportRenderer) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let stdout = io::stdout();
    let mut renderer: Box<dyn ReportRenderer> = match format {
        OutputFormat::Table => Box::new(TerminalRenderer::new(stdout.lock(), color)),
        OutputFormat::Csv => Box::new(CsvRenderer::new(stdout.lock())),
    };
    let value = f(renderer.as_mut())?;
    renderer.finish()?;
    Ok(value)
}
