use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Cents;

/// Highest unit price a menu item may carry ($10,000.00).
pub const MAX_ITEM_PRICE: Cents = 1_000_000;

/// A named drink with a fixed unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Cents,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: Cents) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    #[error("Menu must contain at least one item")]
    Empty,

    #[error("Menu item name cannot be empty")]
    BlankName,

    #[error("Menu item listed more than once: {0}")]
    DuplicateItem(String),

    #[error("Menu item has a negative price: {0}")]
    NegativePrice(String),

    #[error("Menu item price exceeds the maximum: {0}")]
    PriceTooLarge(String),
}

/// The drinks a shop sells.
///
/// Items keep their insertion order for display; price lookups go through a
/// name index. Matching is case-sensitive. A menu never changes once built.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
    index: HashMap<String, usize>,
}

impl Menu {
    /// Build a menu from the given items, rejecting blank names, duplicates
    /// and prices outside `0..=MAX_ITEM_PRICE`.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }

        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(MenuError::BlankName);
            }
            if item.price < 0 {
                return Err(MenuError::NegativePrice(item.name.clone()));
            }
            if item.price > MAX_ITEM_PRICE {
                return Err(MenuError::PriceTooLarge(item.name.clone()));
            }
            if index.insert(item.name.clone(), position).is_some() {
                return Err(MenuError::DuplicateItem(item.name.clone()));
            }
        }

        Ok(Self { items, index })
    }

    /// The house menu: Espresso, Latte, Cappuccino, Americano, Mocha.
    pub fn standard() -> Self {
        let items = vec![
            MenuItem::new("Espresso", 250),
            MenuItem::new("Latte", 400),
            MenuItem::new("Cappuccino", 375),
            MenuItem::new("Americano", 325),
            MenuItem::new("Mocha", 450),
        ];
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.name.clone(), position))
            .collect();
        Self { items, index }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.index.get(name).map(|&position| &self.items[position])
    }

    pub fn price_of(&self, name: &str) -> Option<Cents> {
        self.get(name).map(|item| item.price)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Item names in display order.
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}
