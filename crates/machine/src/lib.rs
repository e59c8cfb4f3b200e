//! Vending machine domain module.
//!
//! This crate contains the balance/inventory state machine of a coin-operated
//! vending machine, implemented as deterministic domain logic (no IO, no UI,
//! no persistence). Catalog contents are supplied by the host.

pub mod coin;
pub mod config;
pub mod item;
pub mod machine;

pub use coin::CoinPolicy;
pub use config::{DEFAULT_MANUFACTURER, MachineConfig};
pub use item::Item;
pub use machine::{
    Buy, CatalogReplaced, CoinInserted, InsertCoin, ItemVended, MachineCommand, MachineEvent,
    ReplaceCatalog, VendingMachine,
};

pub use coinvend_core::{
    MachineId, MonetaryAmount, SlotIndex, UnavailableReason, VendingError, VendingResult,
};
