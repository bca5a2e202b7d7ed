//! Order-related types for the restaurant billing tool
//!
//! This module defines the `Order` and `LineItem` structures together with
//! the fixed capacities every stored order must respect.
//!
//! # Capacities
//!
//! Each text field is persisted in a fixed-width, NUL-terminated slot, so the
//! usable text length is one byte less than the slot width. An order holds at
//! most [`MAX_ITEMS`] line items.

use crate::types::error::OrderError;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use rust_decimal::Decimal;

/// Maximum number of line items per order
pub const MAX_ITEMS: usize = 50;

/// Width in bytes of the customer name slot
pub const CUSTOMER_WIDTH: usize = 50;

/// Width in bytes of the timestamp slot
pub const DATE_WIDTH: usize = 30;

/// Width in bytes of an item name slot
pub const ITEM_NAME_WIDTH: usize = 20;

/// Format of the order timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What to do when an order exceeds a record capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CapacityPolicy {
    /// Silently cut text and item lists down to what fits
    #[default]
    Truncate,
    /// Refuse the order with an `OrderError`
    Reject,
}

impl CapacityPolicy {
    /// Fit a text value into a slot of `width` bytes
    ///
    /// A NUL byte terminates the text, as it does on disk. The remaining
    /// text must fit in `width - 1` bytes; longer text is cut at a character
    /// boundary (`Truncate`) or refused (`Reject`).
    pub fn fit_text(&self, field: &str, value: &str, width: usize) -> Result<String, OrderError> {
        let value = value.split('\0').next().unwrap_or_default();
        let max = width - 1;

        if value.len() <= max {
            return Ok(value.to_string());
        }

        match self {
            CapacityPolicy::Truncate => {
                let mut end = max;
                while !value.is_char_boundary(end) {
                    end -= 1;
                }
                Ok(value[..end].to_string())
            }
            CapacityPolicy::Reject => Err(OrderError::field_too_long(field, value.len(), max)),
        }
    }

    /// Fit a list of items into an order record
    pub fn fit_items(&self, mut items: Vec<LineItem>) -> Result<Vec<LineItem>, OrderError> {
        if items.len() <= MAX_ITEMS {
            return Ok(items);
        }

        match self {
            CapacityPolicy::Truncate => {
                items.truncate(MAX_ITEMS);
                Ok(items)
            }
            CapacityPolicy::Reject => Err(OrderError::too_many_items(items.len(), MAX_ITEMS)),
        }
    }
}

/// One priced, quantified product within an order
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    name: String,
    price: Decimal,
    quantity: u32,
}

impl LineItem {
    /// Create a line item
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NegativePrice` if `price` is below zero.
    pub fn new(name: impl Into<String>, price: Decimal, quantity: u32) -> Result<Self, OrderError> {
        let name = name.into();
        if price.is_sign_negative() && !price.is_zero() {
            return Err(OrderError::negative_price(&name, price));
        }
        Ok(LineItem {
            name,
            price,
            quantity,
        })
    }

    pub(crate) fn from_parts(name: String, price: Decimal, quantity: u32) -> Self {
        LineItem {
            name,
            price,
            quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity, saturating at `Decimal::MAX`
    pub fn line_total(&self) -> Decimal {
        self.price
            .checked_mul(Decimal::from(self.quantity))
            .unwrap_or(Decimal::MAX)
    }
}

/// One invoice transaction: customer, timestamp, line items
///
/// An `Order` built through [`Order::new`] always fits the fixed-size record
/// layout, so it can be saved without further checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    customer: String,
    date: String,
    items: Vec<LineItem>,
}

impl Order {
    /// Build an order that fits the record layout
    ///
    /// # Arguments
    ///
    /// * `customer` - Customer name
    /// * `date` - Timestamp in `YYYY-MM-DD HH:MM:SS` form
    /// * `items` - Line items in the order they were entered
    /// * `policy` - How to handle text or item lists that exceed capacity
    ///
    /// # Errors
    ///
    /// - `InvalidTimestamp` if `date` is not a valid timestamp
    /// - `FieldTooLong` / `TooManyItems` under `CapacityPolicy::Reject`
    pub fn new(
        customer: &str,
        date: &str,
        items: Vec<LineItem>,
        policy: CapacityPolicy,
    ) -> Result<Self, OrderError> {
        NaiveDateTime::parse_from_str(date, TIMESTAMP_FORMAT)
            .map_err(|_| OrderError::invalid_timestamp(date))?;

        let customer = policy.fit_text("customer", customer, CUSTOMER_WIDTH)?;
        let items = policy
            .fit_items(items)?
            .into_iter()
            .map(|item| {
                let name = policy.fit_text("item name", &item.name, ITEM_NAME_WIDTH)?;
                Ok(LineItem { name, ..item })
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        Ok(Order {
            customer,
            date: date.to_string(),
            items,
        })
    }

    pub(crate) fn from_parts(customer: String, date: String, items: Vec<LineItem>) -> Self {
        Order {
            customer,
            date,
            items,
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of line items, always `<= MAX_ITEMS`
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
