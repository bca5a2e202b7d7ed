//! Order queries
//!
//! Read-side operations built purely on [`OrderStore::scan`]:
//!
//! - `list_all` passes the scan through unchanged
//! - `find_by_customer` keeps orders whose customer equals the search key,
//!   ignoring ASCII case
//!
//! Both are lazy and restartable; every call starts a fresh scan. An empty
//! result is a normal outcome, while a store that cannot be read is reported
//! through `StoreError`.

use crate::core::traits::OrderStore;
use crate::types::{Order, StoreError};

/// Query facade over an order store
#[derive(Debug)]
pub struct OrderQuery<'a, S: OrderStore> {
    store: &'a S,
}

impl<'a, S: OrderStore> OrderQuery<'a, S> {
    pub fn new(store: &'a S) -> Self {
        OrderQuery { store }
    }

    /// Every stored order, in store order
    pub fn list_all(&self) -> Result<S::Scan, StoreError> {
        self.store.scan()
    }

    /// Every stored order for `name`, in store order
    ///
    /// Matching is exact apart from ASCII case: "MARIA LOPEZ" finds
    /// "Maria Lopez", "Maria" does not. Read failures are passed through
    /// so the caller can tell them apart from "no match".
    pub fn find_by_customer(&self, name: &str) -> Result<CustomerMatches<S::Scan>, StoreError> {
        Ok(CustomerMatches {
            scan: self.store.scan()?,
            name: name.to_string(),
        })
    }
}

/// Whether `order` belongs to the customer `name`
pub fn matches_customer(order: &Order, name: &str) -> bool {
    order.customer().eq_ignore_ascii_case(name)
}

/// Lazy customer filter returned by [`OrderQuery::find_by_customer`]
#[derive(Debug)]
pub struct CustomerMatches<I> {
    scan: I,
    name: String,
}

impl<I> Iterator for CustomerMatches<I>
where
    I: Iterator<Item = Result<Order, StoreError>>,
{
    type Item = Result<Order, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan.find(|result| match result {
            Ok(order) => matches_customer(order, &self.name),
            Err(_) => true,
        })
    }
}
