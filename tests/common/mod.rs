// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use barista::application::ShopService;
use barista::domain::{Cents, ShopLedger};
use chrono::NaiveDate;

pub const MENU_DRINKS: [&str; 5] = ["Espresso", "Latte", "Cappuccino", "Americano", "Mocha"];

/// Helper to parse a date string into a NaiveDate
pub fn parse_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Helper to place a batch of (customer, drink) orders
pub fn place_orders(ledger: &mut ShopLedger, orders: &[(&str, &str)]) {
    for (customer, drink) in orders {
        ledger.submit_order(customer, drink).unwrap();
    }
}

/// Helper to place `count` orders of the same drink through a service
pub fn place_repeated(service: &ShopService, drink: &str, count: usize) {
    for i in 0..count {
        service
            .submit_order(&format!("Customer {}", i + 1), drink)
            .unwrap();
    }
}

/// Snapshot of the two totals every test cares about
pub fn totals(ledger: &ShopLedger) -> (usize, Cents) {
    (ledger.order_count(), ledger.daily_revenue())
}
