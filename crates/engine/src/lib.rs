//! `vaxtrace-engine` — the inventory and ledger engine.
//!
//! One [`Engine`] value owns the batch store, the application ledger and the
//! daily dedupe index, and implements every cross-store flow: applying a
//! dose, withdrawing a batch, conditional bulk deletion, filtered listings.
//!
//! The clock stays outside: date-sensitive operations take `today` as an
//! argument. Single-threaded by design — the engine is owned by one logical
//! session and every operation runs to completion. Embedding it behind
//! concurrent callers requires wrapping it in explicit synchronization (a
//! single lock over the whole value is sufficient).

pub mod engine;

pub use engine::Engine;
