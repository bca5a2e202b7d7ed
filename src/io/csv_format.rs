//! CSV format handling for invoice export
//!
//! This module centralizes the CSV shape of an exported invoice:
//! - `InvoiceRow` structure for serialization
//! - Conversion from an order and its bill to a row
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Bill, Order};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// One exported invoice
///
/// Columns: customer, date, items, subtotal, discount, net, tax, grand_total.
/// Amounts are rendered with two decimal places.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct InvoiceRow {
    pub customer: String,
    pub date: String,
    pub items: usize,
    pub subtotal: String,
    pub discount: String,
    pub net: String,
    pub tax: String,
    pub grand_total: String,
}

impl InvoiceRow {
    pub fn new(order: &Order, bill: &Bill) -> Self {
        InvoiceRow {
            customer: order.customer().to_string(),
            date: order.date().to_string(),
            items: order.item_count(),
            subtotal: format_amount(bill.subtotal),
            discount: format_amount(bill.discount),
            net: format_amount(bill.net),
            tax: format_amount(bill.tax),
            grand_total: format_amount(bill.grand_total),
        }
    }
}

/// Format an amount with two decimals, rounding half away from zero
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
