//! `vaxtrace-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the inventory and
//! ledger crates: typed identifiers, calendar dates with a comparable integer
//! key, the domain error taxonomy, and the ordering contracts used by every
//! listing operation. No I/O, no clock: callers pass the current date in.

pub mod date;
pub mod entity;
pub mod error;
pub mod id;
pub mod ordering;
pub mod value_object;

pub use date::CalendarDate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{BatchId, VaccineName};
pub use ordering::{Chronological, ExpiryOrdered};
pub use value_object::ValueObject;
