//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product in the catalog.
///
/// Ids are positive integers handed out by the ledger; `0` is never a valid
/// product id.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// The id given to the first product of an empty catalog.
    pub const FIRST: ProductId = ProductId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` past `u64::MAX`.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Id for a new product given the ids already in use: `max + 1`, or `1`
    /// when there are none. `None` once `u64::MAX` is taken.
    pub fn after_max(existing: impl IntoIterator<Item = ProductId>) -> Option<Self> {
        match existing.into_iter().max() {
            Some(max) => max.checked_next(),
            None => Some(Self::FIRST),
        }
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        if raw == 0 {
            return Err(DomainError::invalid_id("ProductId: must be positive"));
        }
        Ok(Self(raw))
    }
}
