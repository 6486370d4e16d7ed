use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{format_cents, Cents, MenuItem, Order};

/// Revenue above which the day counts as a great one (exclusive).
pub const GREAT_DAY_THRESHOLD: Cents = 10_000;
/// Revenue above which the day counts as good progress (exclusive).
pub const GOOD_DAY_THRESHOLD: Cents = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commentary {
    Great,
    Good,
    Slow,
}

impl Commentary {
    /// Pick the commentary for a revenue figure. Ties go to the lower bracket.
    pub fn for_revenue(revenue: Cents) -> Self {
        if revenue > GREAT_DAY_THRESHOLD {
            Commentary::Great
        } else if revenue > GOOD_DAY_THRESHOLD {
            Commentary::Good
        } else {
            Commentary::Slow
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Commentary::Great => "🎉 Great sales day!",
            Commentary::Good => "Good progress today.",
            Commentary::Slow => "Slow day - consider promotions.",
        }
    }
}

impl fmt::Display for Commentary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Snapshot of a ledger for one calendar day.
///
/// `Display` renders the plain text report; the struct itself serializes to
/// JSON for machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub total_revenue: Cents,
    pub order_count: usize,
    pub orders: Vec<Order>,
    pub menu: Vec<MenuItem>,
    pub average_order_value: Cents,
    pub commentary: Commentary,
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== DAILY COFFEE SHOP REPORT ===")?;
        writeln!(f, "Date: {}", self.date.format("%Y-%m-%d"))?;
        writeln!(f, "Total Revenue: ${}", format_cents(self.total_revenue))?;
        writeln!(f, "Orders in Queue: {}", self.order_count)?;
        writeln!(f)?;

        if self.orders.is_empty() {
            writeln!(f, "No pending orders.")?;
        } else {
            writeln!(f, "Pending Orders:")?;
            for (i, order) in self.orders.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, order)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Menu & Prices:")?;
        for item in &self.menu {
            writeln!(f, "- {}: ${}", item.name, format_cents(item.price))?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Average Order Value: ${}",
            format_cents(self.average_order_value)
        )?;
        writeln!(f, "{}", self.commentary)
    }
}
