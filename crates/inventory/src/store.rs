use std::collections::HashMap;

use vaxtrace_core::{
    BatchId, CalendarDate, DomainError, DomainResult, VaccineName, ordering,
};

use crate::batch::Batch;

/// In-memory store of live vaccine batches.
///
/// Owns every batch exclusively; enforces the capacity limit and identifier
/// uniqueness. Lookups by id are map-keyed; name-filtered queries stay linear
/// scans, which the access patterns allow.
#[derive(Debug, Default)]
pub struct BatchStore {
    batches: HashMap<BatchId, Batch>,
}

impl BatchStore {
    /// System limit for live batches.
    pub const CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new batch.
    ///
    /// Check order is observable through which error gets reported first:
    /// capacity, then duplicate id, then quantity.
    pub fn create(
        &mut self,
        id: BatchId,
        vaccine: VaccineName,
        expiry: CalendarDate,
        doses: i32,
    ) -> DomainResult<&Batch> {
        if self.batches.len() >= Self::CAPACITY {
            return Err(DomainError::CapacityExceeded);
        }
        if self.batches.contains_key(&id) {
            return Err(DomainError::DuplicateBatchId);
        }
        if doses <= 0 {
            return Err(DomainError::InvalidQuantity);
        }

        tracing::debug!(batch = %id, vaccine = %vaccine, doses, "batch registered");
        let batch = Batch::new(id.clone(), vaccine, expiry, doses);
        Ok(self.batches.entry(id).or_insert(batch))
    }

    pub fn get(&self, id: &BatchId) -> Option<&Batch> {
        self.batches.get(id)
    }

    pub fn contains(&self, id: &BatchId) -> bool {
        self.batches.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Select the batch a new dose of `vaccine` must come from: usable on
    /// `today` (doses remaining, not expired), smallest expiration; exact
    /// expiration ties break to the lexicographically smallest id, matching
    /// the listing order.
    pub fn find_oldest_valid(&self, vaccine: &str, today: CalendarDate) -> Option<&Batch> {
        self.batches
            .values()
            .filter(|b| b.vaccine().as_str() == vaccine && b.is_usable_on(today))
            .min_by(|a, b| ordering::batch_order(a, b))
    }

    /// Consume one dose from a batch just selected by
    /// [`Self::find_oldest_valid`]. No re-validation of expiry or stock.
    pub fn consume_dose(&mut self, id: &BatchId) -> DomainResult<()> {
        let batch = self
            .batches
            .get_mut(id)
            .ok_or_else(|| DomainError::no_such_batch(id.as_str()))?;
        batch.consume_dose();
        Ok(())
    }

    /// Withdraw a batch from availability.
    ///
    /// `application_count` is computed by the caller from the ledger —
    /// counting by **vaccine name**, not batch id (preserved quirk of the
    /// original system). A never-used batch is deleted outright; a used one
    /// is kept with zero remaining doses so ledger rows can still be
    /// displayed against its id.
    pub fn withdraw(&mut self, id: &BatchId, application_count: usize) -> DomainResult<usize> {
        if !self.batches.contains_key(id) {
            return Err(DomainError::no_such_batch(id.as_str()));
        }

        if application_count == 0 {
            self.batches.remove(id);
            tracing::debug!(batch = %id, "batch removed");
        } else {
            if let Some(batch) = self.batches.get_mut(id) {
                batch.exhaust();
            }
            tracing::debug!(batch = %id, application_count, "batch exhausted");
        }

        Ok(application_count)
    }

    /// Materialize the canonical listing order: expiration ascending, id
    /// ascending. Recomputed per call against current state.
    pub fn list_sorted(&self) -> Vec<&Batch> {
        let mut batches: Vec<&Batch> = self.batches.values().collect();
        ordering::sort_batches(&mut batches);
        batches
    }
}
