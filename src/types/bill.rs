//! Bill totals for an order

use rust_decimal::Decimal;

/// Priced totals of one order
///
/// Produced by [`crate::core::billing::compute_bill`]. Values carry full
/// precision; rounding to two decimals is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bill {
    /// Sum of all line totals
    pub subtotal: Decimal,

    /// Discount granted on the subtotal
    pub discount: Decimal,

    /// Subtotal minus discount
    pub net: Decimal,

    /// Tax (VAT) charged on the net amount
    pub tax: Decimal,

    /// Net amount plus tax
    pub grand_total: Decimal,
}
