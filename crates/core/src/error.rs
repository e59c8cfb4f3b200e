//! Vending domain error model.

use thiserror::Error;

use crate::id::SlotIndex;
use crate::money::MonetaryAmount;

/// Result type used across the vending domain.
pub type VendingResult<T> = Result<T, VendingError>;

/// Why a catalog slot could not be sold from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The position is negative or past the end of the catalog.
    NotListed,
    /// The slot exists but its stock is exhausted.
    OutOfStock,
}

/// Expected, recoverable failures of a single machine operation.
///
/// Each failed operation leaves the machine exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VendingError {
    /// The coin's denomination is not on the accepted list.
    #[error("Coin is not acceptable: {coin}")]
    UnacceptableCoin { coin: MonetaryAmount },

    /// A purchase was attempted before any catalog was set.
    #[error("There are no products in vending machine")]
    EmptyCatalog,

    /// `slot` is the requested position as given, so negative requests are kept.
    #[error("{}", unavailable_message(.slot, .reason))]
    ItemUnavailable {
        slot: i64,
        reason: UnavailableReason,
    },

    #[error("Insufficient money amount. Product price {price}, current balance {balance}.")]
    InsufficientFunds {
        price: MonetaryAmount,
        balance: MonetaryAmount,
    },
}

fn unavailable_message(slot: &i64, reason: &UnavailableReason) -> String {
    match reason {
        UnavailableReason::NotListed => {
            format!("Product with id '{slot}' is not available in product list")
        }
        UnavailableReason::OutOfStock => format!("Product with id '{slot}' is not available"),
    }
}

impl VendingError {
    pub fn unacceptable_coin(coin: MonetaryAmount) -> Self {
        Self::UnacceptableCoin { coin }
    }

    pub fn not_listed(slot: SlotIndex) -> Self {
        Self::not_listed_at(slot.position())
    }

    /// Not-listed error for a raw signed position.
    pub fn not_listed_at(slot: i64) -> Self {
        Self::ItemUnavailable {
            slot,
            reason: UnavailableReason::NotListed,
        }
    }

    pub fn out_of_stock(slot: SlotIndex) -> Self {
        Self::ItemUnavailable {
            slot: slot.position(),
            reason: UnavailableReason::OutOfStock,
        }
    }

    pub fn insufficient_funds(price: MonetaryAmount, balance: MonetaryAmount) -> Self {
        Self::InsufficientFunds { price, balance }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_reasons_render_distinct_messages() {
        let slot = SlotIndex::new(5);
        assert_eq!(
            VendingError::not_listed(slot).to_string(),
            "Product with id '5' is not available in product list"
        );
        assert_eq!(
            VendingError::out_of_stock(slot).to_string(),
            "Product with id '5' is not available"
        );
    }

    #[test]
    fn insufficient_funds_carries_price_and_balance() {
        let err = VendingError::insufficient_funds(
            MonetaryAmount::new(1, 30),
            MonetaryAmount::new(0, 50),
        );
        assert_eq!(
            err.to_string(),
            "Insufficient money amount. Product price 1.30, current balance 0.50."
        );
    }
}
