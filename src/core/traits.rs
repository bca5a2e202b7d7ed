//! Core traits for order persistence
//!
//! This module defines the storage seam that the query layer is built on,
//! so queries can run over any store that can append and scan orders.

use crate::types::{Order, StoreError};

/// Append-only order storage
///
/// Every call is a self-contained transaction: no handle is held open
/// between calls.
pub trait OrderStore {
    /// Lazy sequence produced by [`OrderStore::scan`]
    type Scan: Iterator<Item = Result<Order, StoreError>>;

    /// Append one order to the end of the store, creating it if absent
    fn save(&self, order: &Order) -> Result<(), StoreError>;

    /// Read all stored orders from the start, in append order
    ///
    /// An absent or empty store yields an empty sequence.
    fn scan(&self) -> Result<Self::Scan, StoreError>;
}
