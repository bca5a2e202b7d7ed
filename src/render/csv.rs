//! CSV invoice export
//!
//! Writes one [`InvoiceRow`] per invoice, preceded by a header row. The CSV
//! stream carries data only; messages are routed to the log instead.

use crate::io::InvoiceRow;
use crate::render::{Channel, Invoice, ReportRenderer};
use std::io::{self, Write};

/// Renderer producing CSV rows
#[derive(Debug)]
pub struct CsvRenderer<W: Write> {
    writer: ::csv::Writer<W>,
}

impl<W: Write> CsvRenderer<W> {
    pub fn new(out: W) -> Self {
        CsvRenderer {
            writer: ::csv::Writer::from_writer(out),
        }
    }

    /// Flush and give back the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))
    }
}

impl<W: Write> ReportRenderer for CsvRenderer<W> {
    fn invoice(&mut self, invoice: &Invoice<'_>) -> io::Result<()> {
        self.writer
            .serialize(InvoiceRow::new(invoice.order, &invoice.bill))
            .map_err(io::Error::from)
    }

    fn message(&mut self, channel: Channel, text: &str) -> io::Result<()> {
        match channel {
            Channel::Error => tracing::error!("{}", text),
            Channel::Warning => tracing::warn!("{}", text),
            Channel::Plain | Channel::Info | Channel::Success => tracing::info!("{}", text),
        }
        Ok(())
    }

    fn prompt(&mut self, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
