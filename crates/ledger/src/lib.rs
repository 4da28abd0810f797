//! `vaxtrace-ledger` — vaccination event ledger and daily dedupe index.
//!
//! The ledger is the append-only-by-default sequence of administered doses;
//! the dedupe index is the one-day set of (user, vaccine) pairs that blocks
//! double vaccination. They share a key space but are independent stores:
//! deleting ledger rows never touches the index, and the index never
//! outlives its calendar day.

pub mod dedupe;
pub mod ledger;
pub mod record;

pub use dedupe::DailyDedupeIndex;
pub use ledger::ApplicationLedger;
pub use record::ApplicationRecord;
