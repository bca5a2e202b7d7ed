//! Fixed-size binary record format
//!
//! Every order is stored as a record of exactly [`RECORD_SIZE`] bytes, so the
//! store can be scanned block by block without length prefixes or delimiters.
//!
//! # Layout
//!
//! All integers are little-endian. Text is UTF-8, padded with NUL bytes, and
//! always followed by at least one NUL.
//!
//! ```text
//! offset  width  field
//! 0       50     customer name
//! 50      30     timestamp (YYYY-MM-DD HH:MM:SS)
//! 80      4      item count (u32, 0..=50)
//! 84      2000   50 item slots of 40 bytes each:
//!                  +0   20  item name
//!                  +20  16  unit price (rust_decimal binary form)
//!                  +36  4   quantity (u32)
//! ```
//!
//! Slots past the item count are written as zero bytes and ignored on read.
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{LineItem, Order, CUSTOMER_WIDTH, DATE_WIDTH, ITEM_NAME_WIDTH, MAX_ITEMS};
use rust_decimal::Decimal;
use thiserror::Error;

const COUNT_WIDTH: usize = 4;
const PRICE_WIDTH: usize = 16;
const QUANTITY_WIDTH: usize = 4;

/// Size in bytes of one item slot
pub const ITEM_SLOT_SIZE: usize = ITEM_NAME_WIDTH + PRICE_WIDTH + QUANTITY_WIDTH;

const ITEMS_OFFSET: usize = CUSTOMER_WIDTH + DATE_WIDTH + COUNT_WIDTH;

/// Size in bytes of one serialized order
pub const RECORD_SIZE: usize = ITEMS_OFFSET + MAX_ITEMS * ITEM_SLOT_SIZE;

/// A record block that does not describe a valid order
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Block is not exactly one record long
    #[error("Record block is {len} bytes, expected {}", RECORD_SIZE)]
    WrongSize {
        /// Length of the supplied block
        len: usize,
    },

    /// Stored item count exceeds the slot count
    #[error("Record claims {count} items, at most {} fit", MAX_ITEMS)]
    ItemCountOutOfRange {
        /// The stored count
        count: u32,
    },

    /// Text field is not valid UTF-8
    #[error("Record field {field} is not valid UTF-8")]
    InvalidText {
        /// Name of the offending field
        field: &'static str,
    },

    /// Item slot carries a price below zero
    #[error("Record item slot {slot} has a negative price")]
    NegativePrice {
        /// Index of the offending item slot
        slot: usize,
    },
}

/// Serialize an order into one fixed-size record
///
/// The order must already fit the record capacities, which holds for any
/// [`Order`] built through `Order::new`.
pub fn encode_order(order: &Order) -> Vec<u8> {
    let mut record = vec![0u8; RECORD_SIZE];

    put_text(&mut record[..CUSTOMER_WIDTH], order.customer());
    put_text(
        &mut record[CUSTOMER_WIDTH..CUSTOMER_WIDTH + DATE_WIDTH],
        order.date(),
    );
    let count = order.item_count().min(MAX_ITEMS) as u32;
    record[CUSTOMER_WIDTH + DATE_WIDTH..ITEMS_OFFSET].copy_from_slice(&count.to_le_bytes());

    for (slot, item) in record[ITEMS_OFFSET..]
        .chunks_exact_mut(ITEM_SLOT_SIZE)
        .zip(order.items())
    {
        let (name, rest) = slot.split_at_mut(ITEM_NAME_WIDTH);
        let (price, quantity) = rest.split_at_mut(PRICE_WIDTH);
        put_text(name, item.name());
        price.copy_from_slice(&item.price().serialize());
        quantity.copy_from_slice(&item.quantity().to_le_bytes());
    }

    record
}

/// Deserialize one fixed-size record into an order
///
/// # Errors
///
/// Returns a `RecordError` if the block has the wrong size, claims more
/// items than a record holds, carries text that is not UTF-8, or holds a
/// negative unit price.
pub fn decode_order(record: &[u8]) -> Result<Order, RecordError> {
    if record.len() != RECORD_SIZE {
        return Err(RecordError::WrongSize { len: record.len() });
    }

    let customer = get_text(&record[..CUSTOMER_WIDTH], "customer")?;
    let date = get_text(&record[CUSTOMER_WIDTH..CUSTOMER_WIDTH + DATE_WIDTH], "date")?;
    let count = read_u32(&record[CUSTOMER_WIDTH + DATE_WIDTH..ITEMS_OFFSET]);
    if count as usize > MAX_ITEMS {
        return Err(RecordError::ItemCountOutOfRange { count });
    }

    let items = record[ITEMS_OFFSET..]
        .chunks_exact(ITEM_SLOT_SIZE)
        .take(count as usize)
        .enumerate()
        .map(|(index, slot)| {
            let (name, rest) = slot.split_at(ITEM_NAME_WIDTH);
            let (price, quantity) = rest.split_at(PRICE_WIDTH);
            let mut price_bytes = [0u8; PRICE_WIDTH];
            price_bytes.copy_from_slice(price);
            let price = Decimal::deserialize(price_bytes);
            if price.is_sign_negative() && !price.is_zero() {
                return Err(RecordError::NegativePrice { slot: index });
            }
            Ok(LineItem::from_parts(
                get_text(name, "item name")?,
                price,
                read_u32(quantity),
            ))
        })
        .collect::<Result<Vec<_>, RecordError>>()?;

    Ok(Order::from_parts(customer, date, items))
}

// Leaves at least one trailing NUL.
fn put_text(slot: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(slot.len() - 1);
    slot[..len].copy_from_slice(&bytes[..len]);
}

fn get_text(slot: &[u8], field: &'static str) -> Result<String, RecordError> {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    String::from_utf8(slot[..end].to_vec()).map_err(|_| RecordError::InvalidText { field })
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}
