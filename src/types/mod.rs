//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `order`: Orders, line items, and record capacities
//! - `bill`: Computed bill totals
//! - `error`: Error types for the store, order validation, and CLI

pub mod bill;
pub mod error;
pub mod order;

pub use bill::Bill;
pub use error::{AppError, OrderError, StoreError};
pub use order::{
    CapacityPolicy, LineItem, Order, CUSTOMER_WIDTH, DATE_WIDTH, ITEM_NAME_WIDTH, MAX_ITEMS,
    TIMESTAMP_FORMAT,
};
