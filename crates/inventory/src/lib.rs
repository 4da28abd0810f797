//! `vaxtrace-inventory` — vaccine batch entity and store.
//!
//! A batch is one vaccine lot: identifier, vaccine name, expiration date and
//! dose counters. The store owns every live batch, enforces capacity and
//! identifier uniqueness, and implements the oldest-valid-batch selection
//! used by the dose application flow.

pub mod batch;
pub mod store;

pub use batch::Batch;
pub use store::BatchStore;
