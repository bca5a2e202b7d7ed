//! Restaurant Billing Library
//! # Overview
//!
//! This library provides the order store and invoice engine behind a
//! single-operator restaurant invoicing tool.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Order, LineItem, Bill, errors)
//! - [`core`] - Business logic components:
//!   - [`core::billing`] - Subtotal, discount, tax, and grand total
//!   - [`core::query`] - Full listing and case-insensitive customer search
//! - [`io`] - Fixed-size record format, the append-only order file, CSV rows
//! - [`render`] - Presentation sinks for invoices and messages
//! - [`clock`] - Timestamp provider
//! - [`cli`] - CLI arguments, one-shot commands, and the interactive menu
//!
//! # Bill
//!
//! - **Subtotal**: sum of quantity × unit price
//! - **Discount**: 10% of the subtotal
//! - **Net**: subtotal minus discount
//! - **Tax**: 13% VAT on the net amount
//! - **Grand total**: net plus tax
//!
//! # Store
//!
//! Orders are appended as fixed-size records and never modified. Reading is
//! a sequential scan; an absent store is simply empty.

// Module declarations
pub mod cli;
pub mod clock;
pub mod core;
pub mod io;
pub mod render;
pub mod types;

pub use crate::core::{compute_bill, OrderQuery, OrderStore};
pub use io::{FileOrderStore, OrderScan};
pub use types::{AppError, Bill, CapacityPolicy, LineItem, Order, OrderError, StoreError};
