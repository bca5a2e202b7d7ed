//! Report commands shared by the interactive menu and the one-shot CLI
//!
//! Each command drives one query against the store and feeds every order
//! through the bill calculation and the renderer. Empty results are reported
//! as warnings and returned as a count of zero; store failures come back as
//! `AppError::Store`.

use crate::core::{OrderQuery, OrderStore};
use crate::io::FileOrderStore;
use crate::io::StoreReport;
use crate::render::{Channel, Invoice, ReportRenderer};
use crate::types::{AppError, Order, StoreError};

/// Render every order of a scan, announcing them with `header`
///
/// The header is only shown once the first order has been read, so a store
/// that fails on open or yields nothing prints no header.
///
/// # Returns
///
/// The number of invoices rendered
pub fn render_orders<I, R>(orders: I, renderer: &mut R, header: &str) -> Result<usize, AppError>
where
    I: Iterator<Item = Result<Order, StoreError>>,
    R: ReportRenderer + ?Sized,
{
    let mut count = 0;
    for result in orders {
        let order = result?;
        if count == 0 {
            renderer.message(Channel::Info, header)?;
        }
        renderer.invoice(&Invoice::new(&order))?;
        count += 1;
    }
    Ok(count)
}

/// Show all stored invoices
pub fn list<S, R>(store: &S, renderer: &mut R) -> Result<usize, AppError>
where
    S: OrderStore,
    R: ReportRenderer + ?Sized,
{
    let orders = OrderQuery::new(store).list_all()?;
    let count = render_orders(orders, renderer, "\n *****Your Previous Invoices*****")?;
    if count == 0 {
        renderer.message(Channel::Warning, "No previous invoices found.")?;
    }
    tracing::debug!(count, "listed invoices");
    Ok(count)
}

/// Show all invoices for one customer
pub fn search<S, R>(store: &S, name: &str, renderer: &mut R) -> Result<usize, AppError>
where
    S: OrderStore,
    R: ReportRenderer + ?Sized,
{
    let orders = OrderQuery::new(store).find_by_customer(name)?;
    let header = format!("\t*****Invoice of {}*****", name);
    let count = render_orders(orders, renderer, &header)?;
    if count == 0 {
        renderer.message(
            Channel::Warning,
            &format!("Sorry, no invoice found for {}", name),
        )?;
    }
    tracing::debug!(count, customer = name, "searched invoices");
    Ok(count)
}

/// Report how many whole records the store holds and whether it has a torn tail
pub fn verify<R>(store: &FileOrderStore, renderer: &mut R) -> Result<StoreReport, AppError>
where
    R: ReportRenderer + ?Sized,
{
    let report = store.inspect()?;
    renderer.message(
        Channel::Info,
        &format!("{}: {} records", store.path().display(), report.records),
    )?;

    if report.is_aligned() {
        renderer.message(Channel::Success, "Store is intact.")?;
    } else {
        tracing::warn!(
            trailing_bytes = report.trailing_bytes,
            "store ends with a partial record"
        );
        renderer.message(
            Channel::Warning,
            &format!(
                "{} trailing bytes after the last complete record; they are ignored when reading.",
                report.trailing_bytes
            ),
        )?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TerminalRenderer;
    use crate::types::{CapacityPolicy, LineItem};
    use rust_decimal::Decimal;
    use std::fs;
    use tempfile::TempDir;

    fn order(customer: &str) -> Order {
        let items = vec![LineItem::new("Soup", Decimal::new(300, 2), 2).unwrap()];
        Order::new(customer, "2024-01-01 10:00:00", items, CapacityPolicy::Reject).unwrap()
    }

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), false)
    }

    fn text(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_list_empty_store_warns() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path().join("orders.dat"));
        let mut out = renderer();

        assert_eq!(list(&store, &mut out).unwrap(), 0);

        let output = text(out);
        assert_eq!(output, "No previous invoices found.\n");
    }

    #[test]
    fn test_list_renders_header_and_invoices() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path().join("orders.dat"));
        store.save(&order("Ana")).unwrap();
        store.save(&order("Bob")).unwrap();
        let mut out = renderer();

        assert_eq!(list(&store, &mut out).unwrap(), 2);

        let output = text(out);
        assert_eq!(output.matches("Your Previous Invoices").count(), 1);
        assert!(output.find("Invoice To: Ana").unwrap() < output.find("Invoice To: Bob").unwrap());
        assert!(!output.contains("No previous invoices"));
    }

    #[test]
    fn test_search_without_match_warns() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path().join("orders.dat"));
        store.save(&order("Ana")).unwrap();
        let mut out = renderer();

        assert_eq!(search(&store, "Bob", &mut out).unwrap(), 0);
        assert_eq!(text(out), "Sorry, no invoice found for Bob\n");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path().join("orders.dat"));
        store.save(&order("Ana")).unwrap();
        store.save(&order("Bob")).unwrap();
        let mut out = renderer();

        assert_eq!(search(&store, "ANA", &mut out).unwrap(), 1);

        let output = text(out);
        assert!(output.contains("*****Invoice of ANA*****"));
        assert!(output.contains("Invoice To: Ana"));
        assert!(!output.contains("Invoice To: Bob"));
    }

    #[test]
    fn test_unreadable_store_is_an_error_not_an_empty_result() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());
        let mut out = renderer();

        let result = list(&store, &mut out);

        assert!(matches!(result, Err(AppError::Store(StoreError::IoFailure { .. }))));
        assert!(!text(out).contains("No previous invoices"));
    }

    #[test]
    fn test_verify_reports_torn_tail() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path().join("orders.dat"));
        store.save(&order("Ana")).unwrap();
        let mut bytes = fs::read(store.path()).unwrap();
        bytes.extend_from_slice(&[1, 2, 3]);
        fs::write(store.path(), bytes).unwrap();
        let mut out = renderer();

        let report = verify(&store, &mut out).unwrap();

        assert_eq!(report.records, 1);
        assert_eq!(report.trailing_bytes, 3);
        assert!(text(out).contains("3 trailing bytes"));
    }

    #[test]
    fn test_verify_intact_store() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path().join("orders.dat"));
        store.save(&order("Ana")).unwrap();
        let mut out = renderer();

        assert!(verify(&store, &mut out).unwrap().is_aligned());
        assert!(text(out).ends_with("Store is intact.\n"));
    }
}
