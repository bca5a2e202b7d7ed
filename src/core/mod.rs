//! Core business logic module
//!
//! This module contains the core invoicing components:
//! - `billing` - Bill calculation (subtotal, discount, tax, grand total)
//! - `traits` - Storage abstraction the query layer is built on
//! - `query` - Listing and customer search over a store scan

pub mod billing;
pub mod query;
pub mod traits;

pub use billing::compute_bill;
pub use query::{CustomerMatches, OrderQuery};
pub use traits::OrderStore;
