// crates/oliva-shipping-core/src/runtime/resolver.rs
// ============================================================================
// Module: Shipping Rate Resolver
// Description: Pure (zone, weight, subtotal) -> rate descriptor resolution.
// Purpose: Answer checkout and cart queries from one configuration snapshot.
// Dependencies: crate::core, bigdecimal, thiserror
// ============================================================================

//! ## Overview
//! Resolution is a pure function of one [`ShippingConfig`] snapshot. The home
//! zone is priced by subtotal alone; every other zone is priced by locating
//! the weight tier and reading the zone cost cell. Errors split into request
//! validation failures and configuration integrity failures; only the latter
//! indicate a defect in committed data.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use thiserror::Error;

use crate::core::InvariantError;
use crate::core::RateDescriptor;
use crate::core::ShippingConfig;
use crate::core::UnknownZoneError;
use crate::core::Zone;
use crate::core::tiers::find_tier;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Resolution failures.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// Requested weight is negative.
    #[error("weight must not be negative: {weight_grams} g")]
    NegativeWeight {
        /// Requested weight in grams.
        weight_grams: i64,
    },
    /// Zone identifier is not recognized.
    #[error(transparent)]
    UnknownZone(#[from] UnknownZoneError),
    /// No tier covers the requested weight.
    #[error("no weight tier covers {weight_grams} g")]
    WeightOutOfRange {
        /// Requested weight in grams.
        weight_grams: i64,
    },
    /// Committed configuration violates an invariant.
    #[error("shipping configuration integrity failure: {0}")]
    Integrity(InvariantError),
}

impl ResolutionError {
    /// Returns true when the error points at corrupted configuration rather
    /// than a bad request.
    #[must_use]
    pub const fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::Integrity(_))
    }
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Resolves the rate descriptor for one shipment against `config`.
///
/// The home zone ignores `weight_grams` entirely. For other zones a negative
/// weight is rejected before any tier lookup. An unpriced placeholder cell
/// resolves to [`RateDescriptor::placeholder`], an empty rate id at zero
/// price, which is not free shipping.
///
/// # Errors
///
/// Returns [`ResolutionError::NegativeWeight`],
/// [`ResolutionError::WeightOutOfRange`], or
/// [`ResolutionError::Integrity`] when the matched cell is missing.
pub fn resolve(
    config: &ShippingConfig,
    zone: Zone,
    weight_grams: i64,
    cart_subtotal: &BigDecimal,
) -> Result<RateDescriptor, ResolutionError> {
    if zone.is_home() {
        return Ok(config.home_zone_rule.resolve(cart_subtotal));
    }
    let Ok(weight) = u64::try_from(weight_grams) else {
        return Err(ResolutionError::NegativeWeight {
            weight_grams,
        });
    };
    let tier_index =
        find_tier(&config.weight_tiers, weight).ok_or(ResolutionError::WeightOutOfRange {
            weight_grams,
        })?;
    config.zone_costs.lookup(zone, tier_index).map_err(ResolutionError::Integrity)
}

/// Parses `zone_name` and resolves the rate descriptor.
///
/// # Errors
///
/// Returns [`ResolutionError::UnknownZone`] for an unrecognized zone name,
/// otherwise the errors of [`resolve`].
pub fn resolve_named(
    config: &ShippingConfig,
    zone_name: &str,
    weight_grams: i64,
    cart_subtotal: &BigDecimal,
) -> Result<RateDescriptor, ResolutionError> {
    let zone: Zone = zone_name.parse()?;
    resolve(config, zone, weight_grams, cart_subtotal)
}

// ============================================================================
// SECTION: Tests
// ============================================================================
