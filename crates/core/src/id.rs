//! Strongly-typed identifiers and names used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Identifier of a vaccine batch: uppercase hexadecimal, 1–20 characters,
/// globally unique across live batches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(String);

impl BatchId {
    pub const MAX_LEN: usize = 20;

    /// Validate and wrap a raw identifier.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(DomainError::invalid_batch_id(raw));
        }
        if !raw.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)) {
            return Err(DomainError::invalid_batch_id(raw));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for BatchId {}

impl core::fmt::Display for BatchId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BatchId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Name of a vaccine: at most 50 bytes, no `"` characters.
///
/// Embedded whitespace is legal here; the command layer only produces a
/// whitespace-carrying name when the source token was quoted end-to-end, and
/// the quotes are stripped before the value reaches this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VaccineName(String);

impl VaccineName {
    pub const MAX_LEN: usize = 50;

    /// Validate and wrap a raw (already unquoted) name.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(DomainError::invalid_name(raw));
        }
        if raw.contains('"') {
            return Err(DomainError::invalid_name(raw));
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for VaccineName {}

impl core::fmt::Display for VaccineName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VaccineName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
