// crates/oliva-shipping-core/src/core/time.rs
// ============================================================================
// Module: Shipping Time Model
// Description: Timestamps recorded on configuration snapshots.
// Purpose: Keep commit times explicit so snapshots replay deterministically.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The engine never reads wall-clock time on its own; callers pass the commit
//! time into admin operations. Hosts that want the current time use
//! [`Timestamp::now`], which is the only clock read in the crate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Time Values
// ============================================================================

/// Timestamp stored on shipping configuration snapshots.
///
/// # Invariants
/// - Values are explicitly provided by callers.
/// - No validation is performed; monotonicity is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Timestamp {
    /// Unix epoch milliseconds.
    UnixMillis(i64),
    /// Monotonic logical time value (tests and replays).
    Logical(u64),
}

impl Timestamp {
    /// Returns the current UTC wall-clock time in unix milliseconds.
    #[must_use]
    pub fn now() -> Self {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self::UnixMillis(i64::try_from(nanos).unwrap_or(i64::MAX))
    }

    /// Returns the timestamp as unix milliseconds when available.
    #[must_use]
    pub const fn as_unix_millis(&self) -> Option<i64> {
        match self {
            Self::UnixMillis(value) => Some(*value),
            Self::Logical(_) => None,
        }
    }

    /// Returns the timestamp as logical time when available.
    #[must_use]
    pub const fn as_logical(&self) -> Option<u64> {
        match self {
            Self::UnixMillis(_) => None,
            Self::Logical(value) => Some(*value),
        }
    }
}
