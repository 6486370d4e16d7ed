mod common;

use barista::domain::{Commentary, OrderError, ShopLedger};
use chrono::NaiveDate;
use common::MENU_DRINKS;
use proptest::prelude::*;

fn menu_drink() -> impl Strategy<Value = &'static str> {
    prop::sample::select(MENU_DRINKS.to_vec())
}

fn customer_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

fn blank_name() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn off_menu_drink() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,12}".prop_filter("must not be a menu item", |drink| {
        !MENU_DRINKS.contains(&drink.as_str())
    })
}

fn order_batch() -> impl Strategy<Value = Vec<(String, &'static str)>> {
    prop::collection::vec((customer_name(), menu_drink()), 0..40)
}

fn ledger_with(orders: &[(String, &str)]) -> ShopLedger {
    let mut ledger = ShopLedger::new();
    for (customer, drink) in orders {
        ledger.submit_order(customer, drink).unwrap();
    }
    ledger
}

proptest! {
    #[test]
    fn valid_order_adds_one_order_and_its_price(
        existing in order_batch(),
        customer in customer_name(),
        drink in menu_drink(),
    ) {
        let mut ledger = ledger_with(&existing);
        let (count, revenue) = (ledger.order_count(), ledger.daily_revenue());
        let price = ledger.price_of(drink).unwrap();

        ledger.submit_order(&customer, drink).unwrap();

        prop_assert_eq!(ledger.order_count(), count + 1);
        prop_assert_eq!(ledger.daily_revenue(), revenue + price);
    }

    #[test]
    fn blank_name_is_always_rejected(
        existing in order_batch(),
        name in blank_name(),
        drink in menu_drink(),
    ) {
        let mut ledger = ledger_with(&existing);
        let (count, revenue) = (ledger.order_count(), ledger.daily_revenue());

        prop_assert_eq!(ledger.submit_order(&name, drink), Err(OrderError::EmptyCustomerName));
        prop_assert_eq!(ledger.order_count(), count);
        prop_assert_eq!(ledger.daily_revenue(), revenue);
    }

    #[test]
    fn off_menu_drink_is_always_rejected(
        existing in order_batch(),
        customer in customer_name(),
        drink in off_menu_drink(),
    ) {
        let mut ledger = ledger_with(&existing);
        let (count, revenue) = (ledger.order_count(), ledger.daily_revenue());

        prop_assert_eq!(
            ledger.submit_order(&customer, &drink),
            Err(OrderError::UnknownMenuItem(drink.clone()))
        );
        prop_assert_eq!(ledger.order_count(), count);
        prop_assert_eq!(ledger.daily_revenue(), revenue);
    }

    #[test]
    fn availability_matches_menu_exactly(drink in "[A-Za-z ]{0,12}") {
        let ledger = ShopLedger::new();
        let expected = MENU_DRINKS.contains(&drink.as_str());
        prop_assert_eq!(ledger.is_menu_item_available(&drink), expected);
    }

    #[test]
    fn revenue_is_sum_of_order_prices(existing in order_batch()) {
        let ledger = ledger_with(&existing);
        let sum: i64 = ledger.orders().iter().map(|order| order.price).sum();
        prop_assert_eq!(ledger.daily_revenue(), sum);
    }

    #[test]
    fn report_is_read_only_and_consistent(existing in order_batch()) {
        let ledger = ledger_with(&existing);
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let first = ledger.daily_report(date);
        let second = ledger.daily_report(date);

        prop_assert_eq!(first.order_count, existing.len());
        prop_assert_eq!(first.total_revenue, second.total_revenue);
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(ledger.order_count(), existing.len());
        prop_assert_eq!(first.commentary, Commentary::for_revenue(first.total_revenue));
    }

    #[test]
    fn average_is_revenue_over_count(existing in order_batch()) {
        let ledger = ledger_with(&existing);
        let average = ledger.average_order_value();

        if existing.is_empty() {
            prop_assert_eq!(average, 0);
        } else {
            // Within half a cent of the exact quotient
            let count = existing.len() as i64;
            let diff = (average * count - ledger.daily_revenue()).abs();
            prop_assert!(diff * 2 <= count);
        }
    }
}
