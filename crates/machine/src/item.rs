use serde::{Deserialize, Serialize};

use coinvend_core::MonetaryAmount;

/// A catalog entry: something the machine sells, its price and remaining stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    price: MonetaryAmount,
    stock: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: MonetaryAmount, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> MonetaryAmount {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Takes one unit out of stock. Exhausted items stay at zero.
    pub(crate) fn dispense_one(&mut self) {
        self.stock = self.stock.saturating_sub(1);
    }
}
