use vaxtrace_core::{BatchId, CalendarDate, DomainError, DomainResult, VaccineName};
use vaxtrace_inventory::{Batch, BatchStore};
use vaxtrace_ledger::{ApplicationLedger, ApplicationRecord, DailyDedupeIndex};

/// The inventory and ledger engine.
///
/// Inputs are typed, pre-validated values (the command layer owns format
/// checks); outputs are structured results the caller formats. Every failed
/// operation leaves all three stores untouched.
#[derive(Debug)]
pub struct Engine {
    batches: BatchStore,
    ledger: ApplicationLedger,
    dedupe: DailyDedupeIndex,
}

impl Engine {
    pub fn new(today: CalendarDate) -> Self {
        Self {
            batches: BatchStore::new(),
            ledger: ApplicationLedger::new(),
            dedupe: DailyDedupeIndex::new(today),
        }
    }

    /// Register a new batch. The caller has already validated formats and
    /// that `expiry` is not before the current date.
    pub fn register_batch(
        &mut self,
        id: BatchId,
        vaccine: VaccineName,
        expiry: CalendarDate,
        doses: i32,
    ) -> DomainResult<BatchId> {
        let batch = self.batches.create(id, vaccine, expiry, doses)?;
        Ok(batch.id_typed().clone())
    }

    /// Apply one dose of `vaccine` to `user` on `today`.
    ///
    /// Refreshes the dedupe index for `today`, rejects a second dose of the
    /// same vaccine for the same user on the same day, selects the oldest
    /// valid batch, consumes a dose from it, appends the ledger record and
    /// marks the dedupe pair. Returns the id of the batch used.
    pub fn apply_dose(
        &mut self,
        user: &str,
        vaccine: &str,
        today: CalendarDate,
    ) -> DomainResult<BatchId> {
        self.dedupe.ensure_current_for(today);

        if self.dedupe.contains(user, vaccine) {
            return Err(DomainError::AlreadyVaccinatedToday);
        }

        let (id, vaccine_name) = match self.batches.find_oldest_valid(vaccine, today) {
            Some(batch) => (batch.id_typed().clone(), batch.vaccine().clone()),
            None => return Err(DomainError::OutOfStock),
        };

        self.batches.consume_dose(&id)?;
        self.ledger
            .record(ApplicationRecord::new(user, vaccine_name, id.clone(), today));
        self.dedupe.record(user, vaccine);

        tracing::info!(user, vaccine, batch = %id, "dose applied");
        Ok(id)
    }

    /// Withdraw a batch from availability; returns its application count.
    ///
    /// The count is taken over all ledger records sharing the batch's
    /// **vaccine name** — batches of the same vaccine are conflated here, a
    /// preserved quirk of the original system. Count 0 deletes the batch;
    /// otherwise it is retained with zero remaining doses.
    pub fn withdraw_batch(&mut self, id: &BatchId) -> DomainResult<usize> {
        let batch = self
            .batches
            .get(id)
            .ok_or_else(|| DomainError::no_such_batch(id.as_str()))?;
        let applications = self.ledger.count_by_vaccine_name(batch.vaccine().as_str());
        self.batches.withdraw(id, applications)
    }

    /// Observe a (possibly new) current date, invalidating the dedupe index
    /// on day change. The time-advance flow calls this after moving the
    /// clock forward.
    pub fn observe_date(&mut self, today: CalendarDate) {
        self.dedupe.ensure_current_for(today);
    }

    /// All live batches in canonical order (expiry ascending, id ascending).
    pub fn list_batches(&self) -> Vec<Batch> {
        self.batches.list_sorted().into_iter().cloned().collect()
    }

    /// The live batches for one vaccine name, in canonical order. Errors
    /// when no live batch carries the name.
    pub fn batches_named(&self, vaccine: &str) -> DomainResult<Vec<Batch>> {
        let matches: Vec<Batch> = self
            .batches
            .list_sorted()
            .into_iter()
            .filter(|b| b.vaccine().as_str() == vaccine)
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(DomainError::no_such_vaccine(vaccine));
        }
        Ok(matches)
    }

    /// Bulk-delete application records for `user`, optionally restricted to
    /// an exact date and to a batch id. Returns the number removed.
    ///
    /// The batch filter matches records by the batch's **vaccine name**, not
    /// by the id stored on each record (preserved quirk, mirroring the
    /// withdrawal count).
    pub fn delete_applications(
        &mut self,
        user: &str,
        date: Option<CalendarDate>,
        batch: Option<&BatchId>,
    ) -> DomainResult<usize> {
        if !self.ledger.has_user(user) {
            return Err(DomainError::no_such_user(user));
        }

        let vaccine_filter = match batch {
            Some(id) => {
                let batch = self
                    .batches
                    .get(id)
                    .ok_or_else(|| DomainError::no_such_batch(id.as_str()))?;
                Some(batch.vaccine().clone())
            }
            None => None,
        };

        Ok(self
            .ledger
            .delete_matching(user, date, vaccine_filter.as_ref().map(|v| v.as_str())))
    }

    /// Chronological listing of application records, optionally for one
    /// user. Stable: same-date records keep insertion order.
    pub fn list_applications(&self, user: Option<&str>) -> DomainResult<Vec<ApplicationRecord>> {
        if let Some(u) = user {
            if !self.ledger.has_user(u) {
                return Err(DomainError::no_such_user(u));
            }
        }
        Ok(self
            .ledger
            .list_sorted(user)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Whether any ledger record references this user.
    pub fn has_user(&self, user: &str) -> bool {
        self.ledger.has_user(user)
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    pub fn application_count(&self) -> usize {
        self.ledger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    fn id(raw: &str) -> BatchId {
        BatchId::parse(raw).unwrap()
    }

    fn name(raw: &str) -> VaccineName {
        VaccineName::parse(raw).unwrap()
    }

    fn engine_with_batch(today: CalendarDate) -> Engine {
        let mut engine = Engine::new(today);
        engine
            .register_batch(id("A1"), name("Gripe"), date(31, 12, 2025), 5)
            .unwrap();
        engine
    }

    #[test]
    fn apply_dose_uses_oldest_valid_batch() {
        let today = date(1, 1, 2025);
        let mut engine = engine_with_batch(today);
        engine
            .register_batch(id("B2"), name("Gripe"), date(30, 6, 2025), 5)
            .unwrap();

        let used = engine.apply_dose("Ana", "Gripe", today).unwrap();
        assert_eq!(used.as_str(), "B2");
    }

    #[test]
    fn second_dose_same_day_is_rejected() {
        let today = date(1, 1, 2025);
        let mut engine = engine_with_batch(today);

        engine.apply_dose("Ana", "Gripe", today).unwrap();
        let err = engine.apply_dose("Ana", "Gripe", today).unwrap_err();
        assert_eq!(err, DomainError::AlreadyVaccinatedToday);
        // Failed operation leaves the stores untouched.
        assert_eq!(engine.application_count(), 1);
        assert_eq!(engine.list_batches()[0].doses_remaining(), 4);
    }

    #[test]
    fn same_pair_is_allowed_again_on_a_later_day() {
        let mut engine = engine_with_batch(date(1, 1, 2025));
        engine.apply_dose("Ana", "Gripe", date(1, 1, 2025)).unwrap();
        assert!(engine.apply_dose("Ana", "Gripe", date(2, 1, 2025)).is_ok());
    }

    #[test]
    fn out_of_stock_when_no_batch_qualifies() {
        let today = date(1, 1, 2025);
        let mut engine = Engine::new(today);
        let err = engine.apply_dose("Ana", "Gripe", today).unwrap_err();
        assert_eq!(err, DomainError::OutOfStock);
        assert_eq!(engine.application_count(), 0);
    }

    #[test]
    fn withdraw_counts_by_vaccine_name_across_batches() {
        let today = date(1, 1, 2025);
        let mut engine = engine_with_batch(today);
        engine
            .register_batch(id("B2"), name("Gripe"), date(30, 6, 2025), 5)
            .unwrap();

        // Dose comes from B2 (older expiry); A1 has zero applications of its
        // own, but the count conflates all Gripe applications.
        engine.apply_dose("Ana", "Gripe", today).unwrap();

        assert_eq!(engine.withdraw_batch(&id("A1")).unwrap(), 1);
        // Retained with zero doses, not deleted.
        let batches = engine.list_batches();
        assert!(batches.iter().any(|b| b.id_typed().as_str() == "A1"
            && b.doses_remaining() == 0));
    }

    #[test]
    fn withdraw_unknown_batch_reports_not_found() {
        let mut engine = Engine::new(date(1, 1, 2025));
        let err = engine.withdraw_batch(&id("FF")).unwrap_err();
        assert_eq!(err, DomainError::no_such_batch("FF"));
    }

    #[test]
    fn batches_named_errors_for_unknown_vaccine() {
        let engine = engine_with_batch(date(1, 1, 2025));
        assert!(engine.batches_named("Gripe").is_ok());
        assert_eq!(
            engine.batches_named("Polio").unwrap_err(),
            DomainError::no_such_vaccine("Polio")
        );
    }

    #[test]
    fn delete_applications_validates_user_then_batch() {
        let today = date(1, 1, 2025);
        let mut engine = engine_with_batch(today);
        engine.apply_dose("Ana", "Gripe", today).unwrap();

        // Unknown user wins over unknown batch: user is checked first.
        let err = engine
            .delete_applications("Rui", Some(today), Some(&id("FF")))
            .unwrap_err();
        assert_eq!(err, DomainError::no_such_user("Rui"));

        let err = engine
            .delete_applications("Ana", Some(today), Some(&id("FF")))
            .unwrap_err();
        assert_eq!(err, DomainError::no_such_batch("FF"));
    }

    #[test]
    fn delete_by_batch_filter_conflates_same_vaccine_batches() {
        let today = date(1, 1, 2025);
        let mut engine = engine_with_batch(today);
        engine
            .register_batch(id("B2"), name("Gripe"), date(30, 6, 2025), 5)
            .unwrap();

        engine.apply_dose("Ana", "Gripe", today).unwrap(); // from B2
        engine.observe_date(date(2, 1, 2025));
        engine.apply_dose("Ana", "Gripe", date(2, 1, 2025)).unwrap(); // from B2

        // Filtering on A1 still deletes the B2 record: the filter resolves
        // to the vaccine name.
        let removed = engine
            .delete_applications("Ana", Some(today), Some(&id("A1")))
            .unwrap();
        assert_eq!(removed, 1);
        assert_eq!(engine.application_count(), 1);
    }

    #[test]
    fn list_applications_for_unknown_user_errors() {
        let engine = Engine::new(date(1, 1, 2025));
        assert_eq!(
            engine.list_applications(Some("Ana")).unwrap_err(),
            DomainError::no_such_user("Ana")
        );
        // No filter: empty listing is fine.
        assert!(engine.list_applications(None).unwrap().is_empty());
    }

    #[test]
    fn batch_snapshots_serialize_for_embedding() {
        let engine = engine_with_batch(date(1, 1, 2025));
        let json = serde_json::to_string(&engine.list_batches()).unwrap();
        assert!(json.contains("\"A1\""));
        assert!(json.contains("Gripe"));
    }
}
