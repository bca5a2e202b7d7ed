//! Spice Symphony invoicing CLI
//!
//! Captures restaurant orders, prints priced bills, and keeps every saved
//! invoice in an append-only record file.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                  # interactive menu
//! cargo run -- list                          # print every invoice
//! cargo run -- search "maria lopez"          # invoices of one customer
//! cargo run -- list --format csv > out.csv   # export as CSV
//! cargo run -- --store other.dat verify      # check the store file
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (store unreadable, output failure, or `verify` found a torn tail)

use restaurant_billing::cli;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(&args);

    match cli::run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
