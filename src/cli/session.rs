//! Interactive menu session
//!
//! Drives the menu loop over any line-based input and any renderer:
//!
//! ```text
//! 1. Create New Invoice
//! 2. View All Invoices
//! 3. Search Invoice
//! 4. Exit System
//! ```
//!
//! After every action the user is asked whether to continue. End of input
//! ends the session the same way choosing "Exit" does.
//!
//! Store failures are shown to the user and the session carries on; only a
//! failure of the terminal itself ends the session with an error.

use crate::cli::commands;
use crate::clock::Clock;
use crate::core::OrderStore;
use crate::render::{Channel, Invoice, ReportRenderer};
use crate::types::{AppError, CapacityPolicy, LineItem, Order, MAX_ITEMS};
use rust_decimal::Decimal;
use std::io::BufRead;
use std::str::FromStr;

const FAREWELL: &str = "\n\t Culinary Journey Ends Here! 🍽️\n";

/// What the menu loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive invoicing session
pub struct Session<In, R, S, C> {
    input: In,
    renderer: R,
    store: S,
    clock: C,
    policy: CapacityPolicy,
}

impl<In, R, S, C> Session<In, R, S, C>
where
    In: BufRead,
    R: ReportRenderer,
    S: OrderStore,
    C: Clock,
{
    pub fn new(input: In, renderer: R, store: S, clock: C, policy: CapacityPolicy) -> Self {
        Session {
            input,
            renderer,
            store,
            clock,
            policy,
        }
    }

    /// Give back the renderer, e.g. to inspect captured output
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.show_menu()?;

            let Some(choice) = self.ask("\nYour Choice: ")? else {
                break;
            };
            tracing::debug!(choice = choice.trim(), "menu selection");

            let flow = match choice.trim() {
                "1" => self.create_order()?,
                "2" => self.list_all()?,
                "3" => self.search()?,
                "4" => Flow::Quit,
                _ => {
                    self.renderer
                        .message(Channel::Error, "Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }

            match self.ask("\nContinue? (y/n): ")? {
                Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {}
                _ => break,
            }
        }

        self.renderer.message(Channel::Success, FAREWELL)?;
        self.renderer.finish()?;
        Ok(())
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        self.renderer
            .message(Channel::Info, "\n\t====== SPICE SYMPHONY ======")?;
        self.renderer.message(
            Channel::Plain,
            "\nSelect Operation:\n\
             1. Create New Invoice\n\
             2. View All Invoices\n\
             3. Search Invoice\n\
             4. Exit System",
        )?;
        Ok(())
    }

    fn create_order(&mut self) -> Result<Flow, AppError> {
        let date = self.clock.timestamp();

        let Some(customer) = self.ask("Enter customer name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(mut count) = self.ask_parsed::<usize>("Enter number of items: ")? else {
            return Ok(Flow::Quit);
        };

        if count > MAX_ITEMS {
            match self.policy {
                CapacityPolicy::Truncate => {
                    self.renderer.message(
                        Channel::Warning,
                        &format!("Only the first {} items will be recorded.", MAX_ITEMS),
                    )?;
                    count = MAX_ITEMS;
                }
                CapacityPolicy::Reject => {
                    self.renderer.message(
                        Channel::Error,
                        &format!("An invoice holds at most {} items.", MAX_ITEMS),
                    )?;
                    return Ok(Flow::Continue);
                }
            }
        }

        let mut items = Vec::with_capacity(count);
        for i in 0..count {
            let Some(name) = self.ask(&format!("\nEnter item {} name: ", i + 1))? else {
                return Ok(Flow::Quit);
            };
            let Some(quantity) = self.ask_parsed::<u32>("Enter quantity: ")? else {
                return Ok(Flow::Quit);
            };
            let Some(price) = self.ask_price("Enter unit price: ")? else {
                return Ok(Flow::Quit);
            };
            items.push(LineItem::new(name, price, quantity)?);
        }

        let entered: Vec<String> = items.iter().map(|item| item.name().to_string()).collect();
        let order = match Order::new(&customer, &date, items, self.policy) {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(error = %e, "order rejected");
                self.renderer.message(Channel::Error, &e.to_string())?;
                return Ok(Flow::Continue);
            }
        };
        self.warn_shortened(&customer, &entered, &order)?;

        self.renderer.invoice(&Invoice::new(&order))?;

        let Some(answer) = self.ask("Save invoice? (y/n): ")? else {
            return Ok(Flow::Quit);
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            match self.store.save(&order) {
                Ok(()) => {
                    tracing::info!(
                        customer = order.customer(),
                        items = order.item_count(),
                        "invoice saved"
                    );
                    self.renderer
                        .message(Channel::Success, "Successfully saved invoice.")?;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to save invoice");
                    self.renderer.message(Channel::Error, "Error saving invoice.")?;
                }
            }
        }

        Ok(Flow::Continue)
    }

    // Names cut down by the capacity policy are announced before the bill.
    fn warn_shortened(
        &mut self,
        customer: &str,
        entered: &[String],
        order: &Order,
    ) -> Result<(), AppError> {
        if order.customer() != customer {
            self.renderer.message(
                Channel::Warning,
                &format!("Customer name shortened to '{}'.", order.customer()),
            )?;
        }
        for (i, (name, item)) in entered.iter().zip(order.items()).enumerate() {
            if item.name() != name {
                self.renderer.message(
                    Channel::Warning,
                    &format!("Item {} name shortened to '{}'.", i + 1, item.name()),
                )?;
            }
        }
        Ok(())
    }

    fn list_all(&mut self) -> Result<Flow, AppError> {
        let result = commands::list(&self.store, &mut self.renderer).map(|_| ());
        self.recover_store_failure(result)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, AppError> {
        let Some(name) = self.ask("Enter the customer name: ")? else {
            return Ok(Flow::Quit);
        };
        let result = commands::search(&self.store, &name, &mut self.renderer).map(|_| ());
        self.recover_store_failure(result)?;
        Ok(Flow::Continue)
    }

    // Store failures are reported; anything else ends the session.
    fn recover_store_failure(&mut self, result: Result<(), AppError>) -> Result<(), AppError> {
        match result {
            Err(AppError::Store(e)) => {
                tracing::warn!(error = %e, "store unreadable");
                self.renderer
                    .message(Channel::Error, &format!("Error reading invoices: {}", e))?;
                Ok(())
            }
            other => other,
        }
    }

    /// Prompt and read one line without its line ending; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.renderer.prompt(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn ask_parsed<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>, AppError> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self
                    .renderer
                    .message(Channel::Error, "Please enter a whole number.")?,
            }
        }
    }

    fn ask_price(&mut self, prompt: &str) -> Result<Option<Decimal>, AppError> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match Decimal::from_str(line.trim()) {
                Ok(price) if !price.is_sign_negative() || price.is_zero() => {
                    return Ok(Some(price))
                }
                _ => self
                    .renderer
                    .message(Channel::Error, "Please enter a non-negative price.")?,
            }
        }
    }
}
