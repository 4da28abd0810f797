//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic business or validation failure: the
/// operation aborts with no partial mutation and the caller reports it.
/// Display strings are the neutral English forms; the command layer owns
/// localization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The live batch count has reached the system limit.
    #[error("too many vaccines")]
    CapacityExceeded,

    /// A batch with this identifier already exists.
    #[error("duplicate batch number")]
    DuplicateBatchId,

    /// A dose count was zero or negative.
    #[error("invalid quantity")]
    InvalidQuantity,

    /// No live batch carries this identifier.
    #[error("{0}: no such batch")]
    NoSuchBatch(String),

    /// No application record references this user.
    #[error("{0}: no such user")]
    NoSuchUser(String),

    /// No live batch carries this vaccine name.
    #[error("{0}: no such vaccine")]
    NoSuchVaccine(String),

    /// The (user, vaccine) pair already received a dose today.
    #[error("already vaccinated")]
    AlreadyVaccinatedToday,

    /// No valid batch with remaining doses exists for the vaccine.
    #[error("no stock")]
    OutOfStock,

    /// A date failed calendar validation or violated an ordering rule.
    #[error("invalid date")]
    InvalidDate,

    /// A batch identifier failed format validation.
    #[error("invalid batch")]
    InvalidBatchId(String),

    /// A vaccine name failed format validation.
    #[error("invalid name")]
    InvalidName(String),

    /// Allocation failure surfaced at the boundary. The process treats
    /// exhaustion as fatal; this variant only exists so callers can render
    /// the condition before termination.
    #[error("no memory")]
    OutOfMemory,
}

impl DomainError {
    pub fn no_such_batch(id: impl Into<String>) -> Self {
        Self::NoSuchBatch(id.into())
    }

    pub fn no_such_user(name: impl Into<String>) -> Self {
        Self::NoSuchUser(name.into())
    }

    pub fn no_such_vaccine(name: impl Into<String>) -> Self {
        Self::NoSuchVaccine(name.into())
    }

    pub fn invalid_batch_id(raw: impl Into<String>) -> Self {
        Self::InvalidBatchId(raw.into())
    }

    pub fn invalid_name(raw: impl Into<String>) -> Self {
        Self::InvalidName(raw.into())
    }
}
