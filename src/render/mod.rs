//! Report rendering
//!
//! The core hands renderers structured data only: an [`Invoice`] (the order
//! plus its computed [`Bill`]) or a message tagged with a [`Channel`].
//! Layout, columns, colors, and currency formatting are the renderer's
//! business.
//!
//! # Implementations
//!
//! - `terminal` - Human-readable bill layout with ANSI colors
//! - `csv` - One CSV row per invoice for export

pub mod csv;
pub mod terminal;

pub use self::csv::CsvRenderer;
pub use terminal::TerminalRenderer;

use crate::core::billing::compute_bill;
use crate::types::{Bill, Order};
use clap::ValueEnum;
use std::io;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Ordinary text
    Plain,
    /// Section headers
    Info,
    /// Completed actions
    Success,
    /// Empty results and other non-errors worth noticing
    Warning,
    /// Failed actions
    Error,
}

/// Everything a renderer needs to print one invoice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invoice<'a> {
    pub order: &'a Order,
    pub bill: Bill,
}

impl<'a> Invoice<'a> {
    /// Price an order for display
    pub fn new(order: &'a Order) -> Self {
        Invoice {
            order,
            bill: compute_bill(order.items()),
        }
    }
}

/// Output format of the report commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bill layout for the terminal
    #[default]
    Table,
    /// CSV rows
    Csv,
}

/// Presentation sink for invoices and messages
pub trait ReportRenderer {
    /// Render one priced invoice
    fn invoice(&mut self, invoice: &Invoice<'_>) -> io::Result<()>;

    /// Render a message on the given channel
    fn message(&mut self, channel: Channel, text: &str) -> io::Result<()>;

    /// Ask for input; the answer is read by the caller
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Flush anything buffered
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
