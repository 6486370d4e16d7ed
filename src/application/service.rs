use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use crate::domain::{
    format_cents, Availability, Cents, DailyReport, Menu, MenuItem, Order, OrderReceipt,
    ShopLedger,
};

use super::AppError;

/// Application service around a shop session.
/// This is the primary interface for any client (CLI, scripts, tests).
///
/// The ledger sits behind one lock so a service can be shared between
/// threads. Reports take the lock too since they read live totals.
pub struct ShopService {
    ledger: Mutex<ShopLedger>,
}

impl ShopService {
    /// Open a session with the standard house menu.
    pub fn new() -> Self {
        Self::from_ledger(ShopLedger::new())
    }

    /// Open a session with a custom menu.
    pub fn with_menu(items: Vec<MenuItem>) -> Result<Self, AppError> {
        let menu = Menu::new(items)?;
        Ok(Self::from_ledger(ShopLedger::with_menu(menu)))
    }

    pub fn from_ledger(ledger: ShopLedger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    fn ledger(&self) -> MutexGuard<'_, ShopLedger> {
        // The ledger validates before it mutates, so a panicking holder
        // cannot leave it half-updated.
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================
    // Order operations
    // ========================

    /// Accept an order and log the updated totals.
    pub fn submit_order(&self, customer_name: &str, drink: &str) -> Result<OrderReceipt, AppError> {
        let result = self.ledger().submit_order(customer_name, drink);

        match result {
            Ok(receipt) => {
                tracing::info!(
                    order_id = %receipt.order.id,
                    customer = %receipt.order.customer_name,
                    drink = %receipt.order.drink,
                    price = %format_cents(receipt.price),
                    queue_length = receipt.queue_length,
                    daily_revenue = %format_cents(receipt.daily_revenue),
                    "Order added: {}",
                    receipt.order
                );
                Ok(receipt)
            }
            Err(err) => {
                tracing::info!(customer = customer_name, drink, error = %err, "Order rejected");
                Err(err.into())
            }
        }
    }

    pub fn orders(&self) -> Vec<Order> {
        self.ledger().orders().to_vec()
    }

    pub fn order_count(&self) -> usize {
        self.ledger().order_count()
    }

    pub fn daily_revenue(&self) -> Cents {
        self.ledger().daily_revenue()
    }

    // ========================
    // Menu operations
    // ========================

    pub fn menu(&self) -> Menu {
        self.ledger().menu().clone()
    }

    /// Look up a drink and log the outcome. Blank input is not logged at info.
    pub fn check_availability(&self, drink: &str) -> Option<Availability> {
        let availability = self.ledger().check_availability(drink);

        match &availability {
            Some(Availability::Available { item }) => {
                tracing::info!(
                    drink = %item.name,
                    price = %format_cents(item.price),
                    "{} is available",
                    item.name
                );
            }
            Some(Availability::Unavailable { requested, menu }) => {
                tracing::info!(
                    drink = %requested,
                    available = %menu.join(", "),
                    "{} is not on our menu",
                    requested
                );
            }
            None => tracing::debug!("Ignoring blank availability check"),
        }

        availability
    }

    pub fn is_menu_item_available(&self, drink: &str) -> bool {
        self.check_availability(drink)
            .is_some_and(|availability| availability.is_available())
    }

    // ========================
    // Reporting
    // ========================

    pub fn daily_report(&self, date: NaiveDate) -> DailyReport {
        self.ledger().daily_report(date)
    }

    pub fn generate_daily_report(&self) -> String {
        let ledger = self.ledger();
        tracing::debug!(
            orders = ledger.order_count(),
            revenue = %format_cents(ledger.daily_revenue()),
            "Generating daily report"
        );
        ledger.generate_daily_report()
    }
}

impl Default for ShopService {
    fn default() -> Self {
        Self::new()
    }
}
