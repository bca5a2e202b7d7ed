use crate::io::DEFAULT_STORE_FILE;
use crate::render::OutputFormat;
use crate::types::CapacityPolicy;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Restaurant invoicing with an append-only order store
#[derive(Parser, Debug)]
#[command(name = "spice-symphony")]
#[command(about = "Restaurant invoicing with an append-only order store", long_about = None)]
pub struct CliArgs {
    /// Order store file
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = DEFAULT_STORE_FILE,
        global = true,
        help = "Path to the order store file"
    )]
    pub store: PathBuf,

    /// What to do with orders that exceed a record capacity
    #[arg(
        long = "overflow",
        value_name = "POLICY",
        default_value = "truncate",
        help = "Oversized orders: 'truncate' to cut them down or 'reject' to refuse them"
    )]
    pub overflow: CapacityPolicy,

    /// Disable ANSI colors in terminal output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// One-shot command; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// One-shot commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print every stored invoice
    List {
        #[arg(long = "format", value_name = "FORMAT", default_value = "table")]
        format: OutputFormat,
    },

    /// Print every invoice for one customer (case-insensitive)
    Search {
        #[arg(value_name = "NAME")]
        name: String,

        #[arg(long = "format", value_name = "FORMAT", default_value = "table")]
        format: OutputFormat,
    },

    /// Check that the store file holds only whole records
    Verify,
}

impl CliArgs {
    /// Default log filter for the chosen verbosity
    ///
    /// `RUST_LOG` takes precedence when set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
