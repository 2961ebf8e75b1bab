// crates/oliva-shipping-core/src/core/home_zone.rs
// ============================================================================
// Module: Home Zone Rule
// Description: Subtotal threshold rule for home-country shipping.
// Purpose: Resolve home shipping independent of parcel weight.
// Dependencies: crate::core::{error, identifiers, money}, bigdecimal, serde
// ============================================================================

//! ## Overview
//! Home-country shipping is a two-state decision: a flat standard cost below
//! the free-shipping threshold, free at or above it. The threshold is an
//! exact decimal in major currency units; subtotals are compared without
//! floating point.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde::Serialize;

use crate::core::error::InvariantError;
use crate::core::identifiers::RateId;
use crate::core::money::MinorUnits;
use crate::core::money::RateDescriptor;

// ============================================================================
// SECTION: Rule
// ============================================================================

/// Home-country shipping rule.
///
/// # Invariants
/// - `free_threshold >= 0` and `standard_cost >= 0` once validated.
/// - A subtotal equal to the threshold ships free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeZoneRule {
    /// Cart subtotal (major units) at or above which shipping is free.
    pub free_threshold: BigDecimal,
    /// Standard shipping cost in minor units.
    pub standard_cost: MinorUnits,
    /// Rate identifier charged below the threshold.
    pub standard_rate_id: RateId,
    /// Rate identifier used at or above the threshold.
    pub free_rate_id: RateId,
}

impl HomeZoneRule {
    /// Resolves the descriptor for a cart subtotal in major units.
    #[must_use]
    pub fn resolve(&self, cart_subtotal: &BigDecimal) -> RateDescriptor {
        if *cart_subtotal >= self.free_threshold {
            RateDescriptor {
                rate_id: self.free_rate_id.clone(),
                display_price: MinorUnits::ZERO,
            }
        } else {
            RateDescriptor {
                rate_id: self.standard_rate_id.clone(),
                display_price: self.standard_cost,
            }
        }
    }

    /// Validates threshold and cost fields.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::NegativeThreshold`] or
    /// [`InvariantError::NegativeCost`].
    pub fn validate(&self) -> Result<(), InvariantError> {
        if self.free_threshold < BigDecimal::from(0) {
            return Err(InvariantError::NegativeThreshold);
        }
        if self.standard_cost.is_negative() {
            return Err(InvariantError::NegativeCost);
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
