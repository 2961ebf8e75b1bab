// crates/oliva-shipping-core/src/core/zone.rs
// ============================================================================
// Module: Shipping Zones
// Description: Closed enumeration of shipping destination zones.
// Purpose: Give every destination grouping a stable wire name.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Zones are a closed set: the seller's home country plus a small fixed set
//! of broader regions. Adding a zone is a schema change, so parsing an
//! unknown name fails instead of falling back to a default.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Zone
// ============================================================================

/// Shipping destination zone.
///
/// # Invariants
/// - Variants and their `snake_case` names are stable for persistence.
/// - Declaration order is the display order for zone tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The seller's home country; priced by cart subtotal, not weight.
    Home,
    /// Second zone: neighbouring European countries.
    Europe,
    /// Third zone: the rest of Europe.
    ExtendedEurope,
    /// Fourth zone: everywhere else.
    World,
}

/// Zones priced through the weight tier table, in display order.
const NON_HOME_ZONES: [Zone; 3] = [Zone::Europe, Zone::ExtendedEurope, Zone::World];

impl Zone {
    /// Returns every zone in display order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Home, Self::Europe, Self::ExtendedEurope, Self::World]
    }

    /// Returns the zones priced by weight tier (all zones except [`Zone::Home`]).
    #[must_use]
    pub const fn non_home() -> &'static [Self] {
        &NON_HOME_ZONES
    }

    /// Returns true for the home country.
    #[must_use]
    pub const fn is_home(self) -> bool {
        matches!(self, Self::Home)
    }

    /// Returns the stable wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Europe => "europe",
            Self::ExtendedEurope => "extended_europe",
            Self::World => "world",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a zone name is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shipping zone: {0}")]
pub struct UnknownZoneError(pub String);

impl FromStr for Zone {
    type Err = UnknownZoneError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|zone| zone.as_str() == value)
            .ok_or_else(|| UnknownZoneError(value.to_string()))
    }
}
