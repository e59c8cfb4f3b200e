//! Domain events shared by machine aggregates.

pub mod event;

pub use event::Event;
