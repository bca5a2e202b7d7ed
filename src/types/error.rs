//! Error types for the restaurant billing tool
//!
//! This module defines all error types that can occur while building orders,
//! persisting them, and driving the command-line front end.
//!
//! # Error Categories
//!
//! - **Store Errors**: the record file cannot be opened, read, or appended to
//! - **Order Errors**: an order or line item violates the record limits
//! - **Application Errors**: everything the CLI layer can report to the user
//!
//! An empty listing or a search with no match is never an error: those are
//! successful, empty results.

use rust_decimal::Decimal;
use thiserror::Error;

/// Failure of the order store
///
/// All store failures are I/O-kind. They are returned to the caller and
/// never treated as fatal to the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The store file could not be opened, or a read/write did not complete
    #[error("I/O failure on {path}: {message}")]
    IoFailure {
        /// Path of the store file
        path: String,
        /// Description of the underlying I/O error
        message: String,
    },
}

impl StoreError {
    /// Create an IoFailure error from an `std::io::Error`
    pub fn io_failure(path: &std::path::Path, error: &std::io::Error) -> Self {
        StoreError::IoFailure {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }
}

/// Validation failure while building an order
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    /// A text field does not fit its fixed-width record slot
    #[error("{field} is {len} bytes long, at most {max} bytes fit")]
    FieldTooLong {
        /// Name of the offending field
        field: String,
        /// Length of the supplied value in bytes
        len: usize,
        /// Capacity of the field in bytes
        max: usize,
    },

    /// More line items than an order record can hold
    #[error("Order has {requested} items, at most {max} are allowed")]
    TooManyItems {
        /// Number of items supplied
        requested: usize,
        /// Capacity of an order record
        max: usize,
    },

    /// Unit prices must be non-negative
    #[error("Item '{item}' has a negative price {price}")]
    NegativePrice {
        /// Name of the offending item
        item: String,
        /// The rejected price
        price: Decimal,
    },

    /// Timestamp is not in `YYYY-MM-DD HH:MM:SS` form
    #[error("Invalid timestamp '{value}', expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp {
        /// The rejected timestamp text
        value: String,
    },
}

impl OrderError {
    /// Create a FieldTooLong error
    pub fn field_too_long(field: &str, len: usize, max: usize) -> Self {
        OrderError::FieldTooLong {
            field: field.to_string(),
            len,
            max,
        }
    }

    /// Create a TooManyItems error
    pub fn too_many_items(requested: usize, max: usize) -> Self {
        OrderError::TooManyItems { requested, max }
    }

    /// Create a NegativePrice error
    pub fn negative_price(item: &str, price: Decimal) -> Self {
        OrderError::NegativePrice {
            item: item.to_string(),
            price,
        }
    }

    /// Create an InvalidTimestamp error
    pub fn invalid_timestamp(value: &str) -> Self {
        OrderError::InvalidTimestamp {
            value: value.to_string(),
        }
    }
}

/// Top-level error type of the command-line application
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Order validation failure
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Terminal or output stream failure
    #[error("Output error: {message}")]
    Output {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Output {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(error: csv::Error) -> Self {
        AppError::Output {
            message: error.to_string(),
        }
    }
}
