//! I/O module
//!
//! Handles order persistence and export formats.
//!
//! # Components
//!
//! - `record_format` - Fixed-size binary record layout (encode/decode)
//! - `order_file` - Append-only file store with a lazy scan
//! - `csv_format` - CSV rows for invoice export

pub mod csv_format;
pub mod order_file;
pub mod record_format;

pub use csv_format::{format_amount, InvoiceRow};
pub use order_file::{FileOrderStore, OrderScan, StoreReport, DEFAULT_STORE_FILE};
pub use record_format::{decode_order, encode_order, RecordError, RECORD_SIZE};
