// crates/oliva-shipping-core/src/core/money.rs
// ============================================================================
// Module: Shipping Prices
// Description: Minor-unit prices and rate descriptors.
// Purpose: Represent display prices without floating point.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Prices are whole minor currency units (euro cents). The type is signed so
//! that negative admin input can be rejected with a precise error instead of
//! failing to parse.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::RateId;

// ============================================================================
// SECTION: Minor Units
// ============================================================================

/// Price in minor currency units.
///
/// # Invariants
/// - Committed configurations only hold non-negative values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct MinorUnits(i64);

impl MinorUnits {
    /// Zero price.
    pub const ZERO: Self = Self(0);

    /// Wraps a raw minor-unit amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the raw minor-unit amount.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns true when the amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for MinorUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

// ============================================================================
// SECTION: Rate Descriptor
// ============================================================================

/// Result of a resolution: carrier rate identifier plus display price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateDescriptor {
    /// Carrier rate identifier.
    pub rate_id: RateId,
    /// Display price in minor units.
    pub display_price: MinorUnits,
}

impl RateDescriptor {
    /// Creates a rate descriptor.
    #[must_use]
    pub fn new(rate_id: impl Into<RateId>, display_price: MinorUnits) -> Self {
        Self {
            rate_id: rate_id.into(),
            display_price,
        }
    }

    /// Returns the placeholder descriptor created for cells awaiting a price.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self {
            rate_id: RateId::placeholder(),
            display_price: MinorUnits::ZERO,
        }
    }
}
