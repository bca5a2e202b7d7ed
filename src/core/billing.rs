//! Bill calculation
//!
//! Turns the line items of an order into subtotal, discount, net amount,
//! tax, and grand total. The calculation is pure and never fails: an empty
//! order yields an all-zero bill.
//!
//! ```text
//! subtotal    = Σ quantity × price
//! discount    = 10% of subtotal
//! net         = subtotal − discount
//! tax         = 13% of net
//! grand_total = net + tax
//! ```

use crate::types::{Bill, LineItem};
use rust_decimal::Decimal;

/// Discount rate applied to every subtotal (10%)
pub fn discount_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// VAT rate applied to the discounted amount (13%)
pub fn tax_rate() -> Decimal {
    Decimal::new(13, 2)
}

/// Compute the bill for a sequence of line items
///
/// All arithmetic is exact decimal arithmetic, saturating at `Decimal::MAX`
/// for absurdly large inputs instead of panicking.
///
/// # Examples
///
/// ```
/// use restaurant_billing::core::billing::compute_bill;
/// use restaurant_billing::types::LineItem;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     LineItem::new("Soup", Decimal::new(300, 2), 2).unwrap(),
///     LineItem::new("Bread", Decimal::new(150, 2), 1).unwrap(),
/// ];
/// let bill = compute_bill(&items);
/// assert_eq!(bill.grand_total, Decimal::new(76275, 4));
/// ```
pub fn compute_bill(items: &[LineItem]) -> Bill {
    let subtotal = items.iter().fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item.line_total()).unwrap_or(Decimal::MAX)
    });

    let discount = scale(subtotal, discount_rate());
    let net = subtotal - discount;
    let tax = scale(net, tax_rate());
    let grand_total = net.checked_add(tax).unwrap_or(Decimal::MAX);

    Bill {
        subtotal,
        discount,
        net,
        tax,
        grand_total,
    }
}

fn scale(amount: Decimal, rate: Decimal) -> Decimal {
    amount.checked_mul(rate).unwrap_or(Decimal::MAX)
}
