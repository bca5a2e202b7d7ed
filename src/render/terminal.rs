//! Terminal bill layout
//!
//! Prints each invoice as a restaurant bill:
//!
//! ```text
//!          Spice Symphony
//!          -----------------
//! Date: 2024-01-01    Time: 10:00:00
//! Invoice To: Ana
//! ---------------------------------------
//! Items           Qty             Total
//! ---------------------------------------
//!
//! Soup            2               6.00
//! Bread           1               1.50
//! ---------------------------------------
//! Sub Total                       7.50
//! ...
//! Grand Total                     7.63
//! ---------------------------------------
//! ```
//!
//! Messages are colored by channel unless color is disabled.

use crate::io::format_amount;
use crate::render::{Channel, Invoice, ReportRenderer};
use std::io::{self, Write};

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

const RULE: &str = "---------------------------------------";

/// Human-readable renderer writing to any `Write` sink
#[derive(Debug)]
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        TerminalRenderer { out, color }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn color_code(&self, channel: Channel) -> Option<&'static str> {
        if !self.color {
            return None;
        }
        match channel {
            Channel::Plain => None,
            Channel::Info => Some(BLUE),
            Channel::Success => Some(GREEN),
            Channel::Warning => Some(YELLOW),
            Channel::Error => Some(RED),
        }
    }
}

impl<W: Write> ReportRenderer for TerminalRenderer<W> {
    fn invoice(&mut self, invoice: &Invoice<'_>) -> io::Result<()> {
        let order = invoice.order;
        let bill = &invoice.bill;
        let (date, time) = order.date().split_once(' ').unwrap_or((order.date(), ""));

        writeln!(self.out)?;
        writeln!(self.out, "\t Spice Symphony")?;
        writeln!(self.out, "\t -----------------")?;
        writeln!(self.out, "Date: {}\tTime: {}", date, time)?;
        writeln!(self.out, "Invoice To: {}", order.customer())?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Items\t\tQty\t\tTotal")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out)?;

        for item in order.items() {
            writeln!(
                self.out,
                "{:<15}\t{}\t\t{}",
                item.name(),
                item.quantity(),
                format_amount(item.line_total())
            )?;
        }

        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Sub Total\t\t\t{}", format_amount(bill.subtotal))?;
        writeln!(self.out, "Discount @10%\t\t\t{}", format_amount(bill.discount))?;
        writeln!(self.out, "\t\t\t\t-------")?;
        writeln!(self.out, "Net Total\t\t\t{}", format_amount(bill.net))?;
        writeln!(self.out, "VAT @13%\t\t\t{}", format_amount(bill.tax))?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Grand Total\t\t\t{}", format_amount(bill.grand_total))?;
        writeln!(self.out, "{}", RULE)
    }

    fn message(&mut self, channel: Channel, text: &str) -> io::Result<()> {
        match self.color_code(channel) {
            Some(code) => writeln!(self.out, "{}{}{}", code, text, RESET),
            None => writeln!(self.out, "{}", text),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
