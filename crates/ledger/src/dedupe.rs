use std::collections::HashSet;

use vaxtrace_core::CalendarDate;

/// Set of (user, vaccine) pairs that already received a dose **today**.
///
/// The whole index is consistent for exactly one calendar day. Every caller
/// must run [`Self::ensure_current_for`] before querying or inserting in the
/// same logical request; observing a different day wipes the index
/// wholesale. Entries are never removed individually.
///
/// Keyed by the composite (user, vaccine) pair under the standard library
/// hasher — the contract only requires deterministic membership semantics,
/// not a specific hash.
#[derive(Debug)]
pub struct DailyDedupeIndex {
    day: CalendarDate,
    seen: HashSet<(String, String)>,
}

impl DailyDedupeIndex {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            day: today,
            seen: HashSet::new(),
        }
    }

    /// Adopt `today`, discarding every entry when the day changed.
    pub fn ensure_current_for(&mut self, today: CalendarDate) {
        if self.day != today {
            tracing::debug!(from = %self.day, to = %today, "dedupe index reset");
            self.seen.clear();
            self.day = today;
        }
    }

    /// O(1) amortized membership test.
    pub fn contains(&self, user: &str, vaccine: &str) -> bool {
        self.seen.contains(&(user.to_owned(), vaccine.to_owned()))
    }

    /// Insert the pair unconditionally. Callers check [`Self::contains`]
    /// first; a duplicate insert is harmless but wasteful.
    pub fn record(&mut self, user: &str, vaccine: &str) {
        self.seen.insert((user.to_owned(), vaccine.to_owned()));
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
