//! Ordering contracts shared by the batch store and the application ledger.
//!
//! Two listings, two different guarantees:
//!
//! - **Batch ordering** is a fully-specified total order (expiration key
//!   ascending, then identifier ascending), so an unstable sort is
//!   observably identical to a stable one and is used for speed.
//! - **Application ordering** is keyed by date only. Records sharing a date
//!   must keep their relative insertion order, so the sort **must** be
//!   stable. This is an observable contract, not an implementation detail.

use core::cmp::Ordering;

/// Items carrying an expiration key and a batch identifier, totally ordered
/// by (expiration, identifier).
pub trait ExpiryOrdered {
    fn expiry_key(&self) -> i32;
    fn batch_id_str(&self) -> &str;
}

impl<T: ExpiryOrdered + ?Sized> ExpiryOrdered for &T {
    fn expiry_key(&self) -> i32 {
        (**self).expiry_key()
    }

    fn batch_id_str(&self) -> &str {
        (**self).batch_id_str()
    }
}

/// Total order: expiration key ascending, identifier ascending.
pub fn batch_order<T: ExpiryOrdered>(a: &T, b: &T) -> Ordering {
    a.expiry_key()
        .cmp(&b.expiry_key())
        .then_with(|| a.batch_id_str().cmp(b.batch_id_str()))
}

/// Sort batches into the canonical listing order. Unstable sort: the order
/// is total, so no tie can survive to expose instability.
pub fn sort_batches<T: ExpiryOrdered>(items: &mut [T]) {
    items.sort_unstable_by(batch_order);
}

/// Items carrying a day-resolution date key, partially ordered by date.
pub trait Chronological {
    fn date_key(&self) -> i32;
}

impl<T: Chronological + ?Sized> Chronological for &T {
    fn date_key(&self) -> i32 {
        (**self).date_key()
    }
}

/// Sort chronologically, preserving relative order of same-date items.
///
/// `sort_by_key` is a stable merge sort, which is exactly the guarantee the
/// application listing requires.
pub fn sort_chronological<T: Chronological>(items: &mut [T]) {
    items.sort_by_key(Chronological::date_key);
}
