//! `coinvend-core` — vending domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod aggregate;
pub mod error;
pub mod id;
pub mod money;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use error::{UnavailableReason, VendingError, VendingResult};
pub use id::{MachineId, SlotIndex};
pub use money::MonetaryAmount;
pub use value_object::ValueObject;
