use serde::{Deserialize, Serialize};

use vaxtrace_core::{BatchId, CalendarDate, Chronological, VaccineName};

/// One administered dose. Immutable from creation until bulk deletion.
///
/// `batch_id` references the batch whose doses were decremented at creation
/// time; the batch keeps no back-reference (matching records are discovered
/// by linear scan when needed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    user: String,
    vaccine: VaccineName,
    batch_id: BatchId,
    date: CalendarDate,
}

impl ApplicationRecord {
    pub fn new(
        user: impl Into<String>,
        vaccine: VaccineName,
        batch_id: BatchId,
        date: CalendarDate,
    ) -> Self {
        Self {
            user: user.into(),
            vaccine,
            batch_id,
            date,
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn vaccine(&self) -> &VaccineName {
        &self.vaccine
    }

    pub fn batch_id(&self) -> &BatchId {
        &self.batch_id
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }
}

impl Chronological for ApplicationRecord {
    fn date_key(&self) -> i32 {
        self.date.date_key()
    }
}
