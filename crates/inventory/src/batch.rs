use serde::{Deserialize, Serialize};

use vaxtrace_core::{BatchId, CalendarDate, Entity, ExpiryOrdered, VaccineName};

/// One vaccine lot.
///
/// Mutated in exactly two ways after creation: a successful dose application
/// (remaining −1, applied +1) and a withdrawal (remaining forced to 0).
/// Both go through [`crate::BatchStore`]; nothing else touches the counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    id: BatchId,
    vaccine: VaccineName,
    expiry: CalendarDate,
    doses_remaining: i32,
    doses_applied: i32,
}

impl Batch {
    pub(crate) fn new(id: BatchId, vaccine: VaccineName, expiry: CalendarDate, doses: i32) -> Self {
        Self {
            id,
            vaccine,
            expiry,
            doses_remaining: doses,
            doses_applied: 0,
        }
    }

    pub fn id_typed(&self) -> &BatchId {
        &self.id
    }

    pub fn vaccine(&self) -> &VaccineName {
        &self.vaccine
    }

    pub fn expiry(&self) -> CalendarDate {
        self.expiry
    }

    pub fn doses_remaining(&self) -> i32 {
        self.doses_remaining
    }

    /// Total doses ever applied from this batch. Monotonically non-decreasing.
    pub fn doses_applied(&self) -> i32 {
        self.doses_applied
    }

    /// A batch qualifies for selection when it still has doses and has not
    /// expired as of `today` (expiring today still qualifies).
    pub fn is_usable_on(&self, today: CalendarDate) -> bool {
        self.doses_remaining > 0 && self.expiry.date_key() >= today.date_key()
    }

    pub(crate) fn consume_dose(&mut self) {
        self.doses_remaining -= 1;
        self.doses_applied += 1;
    }

    pub(crate) fn exhaust(&mut self) {
        self.doses_remaining = 0;
    }
}

impl Entity for Batch {
    type Id = BatchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl ExpiryOrdered for Batch {
    fn expiry_key(&self) -> i32 {
        self.expiry.date_key()
    }

    fn batch_id_str(&self) -> &str {
        self.id.as_str()
    }
}
