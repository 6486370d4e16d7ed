use std::fmt;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use super::{divide_cents, format_cents, Cents, Commentary, DailyReport, Menu, MenuItem, Order};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Customer name cannot be empty")]
    EmptyCustomerName,

    #[error("Drink {0} is not available")]
    UnknownMenuItem(String),

    #[error("Daily revenue would overflow")]
    RevenueOverflow,
}

/// What an accepted order changed: the order itself plus the ledger totals
/// right after it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderReceipt {
    pub order: Order,
    pub price: Cents,
    pub queue_length: usize,
    pub daily_revenue: Cents,
}

impl fmt::Display for OrderReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order added: {} (${})", self.order, format_cents(self.price))?;
        writeln!(f, "Queue length: {}", self.queue_length)?;
        write!(f, "Daily revenue: ${}", format_cents(self.daily_revenue))
    }
}

/// Result of looking up a non-blank drink name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    Available { item: MenuItem },
    Unavailable { requested: String, menu: Vec<String> },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available { item } => {
                write!(f, "{} is available for ${}", item.name, format_cents(item.price))
            }
            Availability::Unavailable { requested, menu } => {
                writeln!(f, "{} is not on our menu", requested)?;
                write!(f, "Available drinks: {}", menu.join(", "))
            }
        }
    }
}

/// A shop session: the menu, every order accepted so far and the running
/// revenue.
///
/// Orders are never removed. The backlog is the full log of the session, and
/// `daily_revenue` always equals the sum of its prices.
#[derive(Debug, Clone, Default)]
pub struct ShopLedger {
    menu: Menu,
    orders: Vec<Order>,
    daily_revenue: Cents,
}

impl ShopLedger {
    /// Open a ledger with the standard house menu.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(menu: Menu) -> Self {
        Self {
            menu,
            orders: Vec::new(),
            daily_revenue: 0,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn daily_revenue(&self) -> Cents {
        self.daily_revenue
    }

    pub fn price_of(&self, drink: &str) -> Option<Cents> {
        self.menu.price_of(drink)
    }

    /// Revenue divided by the number of orders, or 0 with no orders.
    pub fn average_order_value(&self) -> Cents {
        divide_cents(self.daily_revenue, self.orders.len() as i64)
    }

    /// Accept an order and add its price to the day's revenue.
    ///
    /// Rejected orders leave the ledger untouched.
    pub fn submit_order(
        &mut self,
        customer_name: &str,
        drink: &str,
    ) -> Result<OrderReceipt, OrderError> {
        if customer_name.trim().is_empty() {
            return Err(OrderError::EmptyCustomerName);
        }
        let price = self
            .menu
            .price_of(drink)
            .ok_or_else(|| OrderError::UnknownMenuItem(drink.to_string()))?;

        let daily_revenue = self
            .daily_revenue
            .checked_add(price)
            .ok_or(OrderError::RevenueOverflow)?;

        let order = Order::new(customer_name, drink, price);
        self.orders.push(order.clone());
        self.daily_revenue = daily_revenue;

        Ok(OrderReceipt {
            order,
            price,
            queue_length: self.orders.len(),
            daily_revenue: self.daily_revenue,
        })
    }

    /// Build the report for `date` without touching the backlog.
    pub fn daily_report(&self, date: NaiveDate) -> DailyReport {
        DailyReport {
            date,
            total_revenue: self.daily_revenue,
            order_count: self.orders.len(),
            orders: self.orders.clone(),
            menu: self.menu.items().to_vec(),
            average_order_value: self.average_order_value(),
            commentary: Commentary::for_revenue(self.daily_revenue),
        }
    }

    /// Render today's report as text.
    pub fn generate_daily_report(&self) -> String {
        self.daily_report(Local::now().date_naive()).to_string()
    }

    /// Look up a drink. Blank input yields `None`.
    pub fn check_availability(&self, drink: &str) -> Option<Availability> {
        if drink.trim().is_empty() {
            return None;
        }
        let availability = match self.menu.get(drink) {
            Some(item) => Availability::Available { item: item.clone() },
            None => Availability::Unavailable {
                requested: drink.to_string(),
                menu: self.menu.names(),
            },
        };
        Some(availability)
    }

    pub fn is_menu_item_available(&self, drink: &str) -> bool {
        self.check_availability(drink)
            .is_some_and(|availability| availability.is_available())
    }
}
