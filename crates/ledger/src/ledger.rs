use vaxtrace_core::{CalendarDate, ordering};

use crate::record::ApplicationRecord;

/// Append-only-by-default sequence of vaccination events.
///
/// Owns its records exclusively. Enforces no uniqueness — the dedupe index
/// handles that before a record is ever created. Internal order is insertion
/// order, which is what makes the stable chronological listing meaningful.
#[derive(Debug, Default)]
pub struct ApplicationLedger {
    records: Vec<ApplicationRecord>,
}

impl ApplicationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one event. The caller has already consumed the dose and
    /// checked the dedupe index.
    pub fn record(&mut self, record: ApplicationRecord) {
        tracing::debug!(
            user = record.user(),
            vaccine = %record.vaccine(),
            batch = %record.batch_id(),
            "application recorded"
        );
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear count of records for a vaccine name. The withdrawal flow uses
    /// this — by name, not by batch id, so batches sharing a vaccine name
    /// are conflated (preserved quirk of the original system).
    pub fn count_by_vaccine_name(&self, vaccine: &str) -> usize {
        self.records
            .iter()
            .filter(|r| r.vaccine().as_str() == vaccine)
            .count()
    }

    /// Whether any record references this user.
    pub fn has_user(&self, user: &str) -> bool {
        self.records.iter().any(|r| r.user() == user)
    }

    /// Remove all records matching `user` exactly, plus the exact `date`
    /// when given, plus the vaccine name when given (derived by the caller
    /// from a batch id). Returns the number removed; 0 for an unknown user —
    /// callers are expected to have validated existence and to report
    /// not-found themselves.
    pub fn delete_matching(
        &mut self,
        user: &str,
        date: Option<CalendarDate>,
        vaccine: Option<&str>,
    ) -> usize {
        let before = self.records.len();
        self.records.retain(|r| {
            let matches = r.user() == user
                && date.is_none_or(|d| r.date() == d)
                && vaccine.is_none_or(|v| r.vaccine().as_str() == v);
            !matches
        });
        let removed = before - self.records.len();
        if removed > 0 {
            tracing::debug!(user, removed, "applications deleted");
        }
        removed
    }

    /// Chronologically ascending listing, optionally filtered to one user.
    /// The sort is stable: same-date records keep their insertion order.
    pub fn list_sorted(&self, user: Option<&str>) -> Vec<&ApplicationRecord> {
        let mut records: Vec<&ApplicationRecord> = self
            .records
            .iter()
            .filter(|r| user.is_none_or(|u| r.user() == u))
            .collect();
        ordering::sort_chronological(&mut records);
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vaxtrace_core::{BatchId, VaccineName};

    fn date(day: u32, month: u32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    fn rec(user: &str, vaccine: &str, batch: &str, d: CalendarDate) -> ApplicationRecord {
        ApplicationRecord::new(
            user,
            VaccineName::parse(vaccine).unwrap(),
            BatchId::parse(batch).unwrap(),
            d,
        )
    }

    #[test]
    fn count_by_vaccine_name_spans_batches() {
        let mut ledger = ApplicationLedger::new();
        ledger.record(rec("Ana", "Gripe", "A1", date(1, 1, 2025)));
        ledger.record(rec("Rui", "Gripe", "B2", date(2, 1, 2025)));
        ledger.record(rec("Ana", "Tetano", "C3", date(3, 1, 2025)));
        assert_eq!(ledger.count_by_vaccine_name("Gripe"), 2);
        assert_eq!(ledger.count_by_vaccine_name("Tetano"), 1);
        assert_eq!(ledger.count_by_vaccine_name("Polio"), 0);
    }

    #[test]
    fn delete_without_filters_removes_exactly_the_users_records() {
        let mut ledger = ApplicationLedger::new();
        ledger.record(rec("Ana", "Gripe", "A1", date(1, 1, 2025)));
        ledger.record(rec("Rui", "Gripe", "A1", date(1, 1, 2025)));
        ledger.record(rec("Ana", "Tetano", "C3", date(2, 1, 2025)));

        assert_eq!(ledger.delete_matching("Ana", None, None), 2);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.has_user("Rui"));
        assert!(!ledger.has_user("Ana"));
    }

    #[test]
    fn delete_with_date_filter_spares_other_days() {
        let mut ledger = ApplicationLedger::new();
        ledger.record(rec("Ana", "Gripe", "A1", date(1, 1, 2025)));
        ledger.record(rec("Ana", "Tetano", "C3", date(2, 1, 2025)));

        assert_eq!(ledger.delete_matching("Ana", Some(date(2, 1, 2025)), None), 1);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.list_sorted(None)[0].vaccine().as_str(), "Gripe");
    }

    #[test]
    fn delete_with_vaccine_filter_matches_by_name_not_batch() {
        let mut ledger = ApplicationLedger::new();
        // Two Gripe batches: filtering on the vaccine name derived from
        // either batch id removes both records.
        ledger.record(rec("Ana", "Gripe", "A1", date(1, 1, 2025)));
        ledger.record(rec("Ana", "Gripe", "B2", date(1, 1, 2025)));
        ledger.record(rec("Ana", "Tetano", "C3", date(1, 1, 2025)));

        let removed = ledger.delete_matching("Ana", Some(date(1, 1, 2025)), Some("Gripe"));
        assert_eq!(removed, 2);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn delete_for_unknown_user_removes_nothing() {
        let mut ledger = ApplicationLedger::new();
        ledger.record(rec("Ana", "Gripe", "A1", date(1, 1, 2025)));
        assert_eq!(ledger.delete_matching("Rui", None, None), 0);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn listing_is_chronological_and_stable() {
        let mut ledger = ApplicationLedger::new();
        ledger.record(rec("Ana", "Gripe", "A1", date(5, 3, 2025)));
        ledger.record(rec("Rui", "Gripe", "B2", date(1, 1, 2025)));
        ledger.record(rec("Ana", "Tetano", "C3", date(5, 3, 2025)));

        let listed = ledger.list_sorted(None);
        let batches: Vec<_> = listed.iter().map(|r| r.batch_id().as_str()).collect();
        // 01-01 first; the two 05-03 records keep insertion order A1, C3.
        assert_eq!(batches, vec!["B2", "A1", "C3"]);
    }

    #[test]
    fn listing_filters_by_exact_user() {
        let mut ledger = ApplicationLedger::new();
        ledger.record(rec("Ana", "Gripe", "A1", date(1, 1, 2025)));
        ledger.record(rec("Ana Silva", "Gripe", "B2", date(1, 1, 2025)));

        let listed = ledger.list_sorted(Some("Ana"));
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].batch_id().as_str(), "A1");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the listing is ascending by date and same-date records
        /// keep their insertion order.
        #[test]
        fn listing_is_stable_chronological(
            days in prop::collection::vec(1u32..=28, 1..50),
        ) {
            let mut ledger = ApplicationLedger::new();
            for (i, day) in days.iter().enumerate() {
                // The user name encodes insertion order.
                ledger.record(rec(&format!("user-{i}"), "Gripe", "A1", date(*day, 1, 2025)));
            }

            let listed = ledger.list_sorted(None);
            prop_assert_eq!(listed.len(), days.len());
            for pair in listed.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!(a.date().date_key() <= b.date().date_key());
                if a.date() == b.date() {
                    let ia: usize = a.user()[5..].parse().unwrap();
                    let ib: usize = b.user()[5..].parse().unwrap();
                    prop_assert!(ia < ib);
                }
            }
        }
    }
}
