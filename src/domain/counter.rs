use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a [`Counter`] from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Counter value cannot be negative (got {value})")]
    Negative { value: i64 },

    #[error("Counter value {value} is out of range")]
    OutOfRange { value: i64 },
}

/// A non-negative integer counter.
///
/// Counters are immutable values: [`Counter::incremented`] and
/// [`Counter::decremented`] return a new instance and leave `self` alone.
/// On the wire a counter is `{"value": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCounter")]
pub struct Counter {
    value: u32,
}

#[derive(Deserialize)]
struct RawCounter {
    value: i64,
}

impl TryFrom<RawCounter> for Counter {
    type Error = DomainError;

    fn try_from(raw: RawCounter) -> Result<Self, Self::Error> {
        Counter::try_from(raw.value)
    }
}

impl Counter {
    /// Create a counter holding `value`.
    pub const fn new(value: u32) -> Self {
        Self { value }
    }

    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The counter one step up. Saturates at `u32::MAX`.
    pub const fn incremented(&self) -> Self {
        Self::new(self.value.saturating_add(1))
    }

    /// The counter one step down. A counter at zero stays at zero.
    pub const fn decremented(&self) -> Self {
        Self::new(self.value.saturating_sub(1))
    }

    pub const fn can_decrement(&self) -> bool {
        self.value > 0
    }
}

impl TryFrom<i64> for Counter {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DomainError::Negative { value });
        }
        u32::try_from(value)
            .map(Counter::new)
            .map_err(|_| DomainError::OutOfRange { value })
    }
}

impl From<u32> for Counter {
    fn from(value: u32) -> Self {
        Counter::new(value)
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
