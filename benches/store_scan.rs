//! Benchmarks for reading the order store
//!
//! Every query is a full sequential scan of the store file, so these
//! benchmarks measure how listing and searching scale with the number of
//! stored invoices.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use restaurant_billing::{
    CapacityPolicy, FileOrderStore, LineItem, Order, OrderQuery, OrderStore,
};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn main() {
    divan::main();
}

/// Build a store holding `count` orders spread over ten customers
fn populated_store(count: usize) -> (TempDir, FileOrderStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = FileOrderStore::new(dir.path().join("SpiceSymphony.dat"));

    for i in 0..count {
        let items = (0..5)
            .map(|j| {
                LineItem::new(format!("Dish {}", j), Decimal::new(250 + j, 2), 2)
                    .expect("Invalid item")
            })
            .collect();
        let order = Order::new(
            &format!("Guest {}", i % 10),
            "2024-01-01 10:00:00",
            items,
            CapacityPolicy::Reject,
        )
        .expect("Invalid order");
        store.save(&order).expect("Save failed");
    }

    (dir, store)
}

/// Scan every stored order
#[divan::bench(args = [100, 1_000, 10_000])]
fn list_all(bencher: divan::Bencher, count: usize) {
    let (_dir, store) = populated_store(count);

    bencher.bench_local(|| {
        OrderQuery::new(&store)
            .list_all()
            .expect("Scan failed")
            .count()
    });
}

/// Scan for one customer's orders
#[divan::bench(args = [100, 1_000, 10_000])]
fn find_by_customer(bencher: divan::Bencher, count: usize) {
    let (_dir, store) = populated_store(count);

    bencher.bench_local(|| {
        OrderQuery::new(&store)
            .find_by_customer("guest 7")
            .expect("Scan failed")
            .count()
    });
}
