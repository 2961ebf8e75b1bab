// crates/oliva-shipping-core/src/core/config.rs
// ============================================================================
// Module: Shipping Configuration Aggregate
// Description: Versioned singleton configuration composing tiers, zone costs,
//              and the home zone rule.
// Purpose: Define the snapshot that resolution reads and admin edits replace.
// Dependencies: crate::core::{error, home_zone, identifiers, tiers, time,
// zone_costs}, serde
// ============================================================================

//! ## Overview
//! [`ShippingConfig`] is the aggregate root. Each committed edit produces a
//! new snapshot with `version + 1`; older snapshots are kept inactive for
//! audit. [`ShippingConfigDraft`] carries the editable parts without any
//! lifecycle metadata and is what validation and bootstrap operate on.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::InvariantError;
use crate::core::home_zone::HomeZoneRule;
use crate::core::identifiers::ConfigId;
use crate::core::identifiers::ConfigVersion;
use crate::core::tiers::TierLabel;
use crate::core::tiers::WeightTier;
use crate::core::tiers::validate_tiers;
use crate::core::time::Timestamp;
use crate::core::zone_costs::ZoneCostRow;
use crate::core::zone_costs::ZoneCostTable;

// ============================================================================
// SECTION: Draft
// ============================================================================

/// Editable content of a shipping configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingConfigDraft {
    /// Ordered weight tier catalog.
    pub weight_tiers: Vec<WeightTier>,
    /// Zone cost table aligned with the catalog.
    pub zone_costs: ZoneCostTable,
    /// Home-country rule.
    pub home_zone_rule: HomeZoneRule,
}

impl ShippingConfigDraft {
    /// Runs full-aggregate validation: catalog, coverage, then home rule.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`InvariantError`].
    pub fn validate(&self) -> Result<(), InvariantError> {
        validate_content(&self.weight_tiers, &self.zone_costs, &self.home_zone_rule)
    }
}

/// Validates tiers, zone cost coverage, and the home rule in that order.
fn validate_content(
    weight_tiers: &[WeightTier],
    zone_costs: &ZoneCostTable,
    home_zone_rule: &HomeZoneRule,
) -> Result<(), InvariantError> {
    validate_tiers(weight_tiers)?;
    zone_costs.validate_coverage(weight_tiers.len())?;
    home_zone_rule.validate()
}

// ============================================================================
// SECTION: Aggregate
// ============================================================================

/// Versioned shipping configuration snapshot.
///
/// # Invariants
/// - At most one snapshot per lineage is active.
/// - `version` increases by exactly one per commit and is never reused.
/// - `created_at` is carried over from the first version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Lineage identifier shared by every version.
    pub config_id: ConfigId,
    /// Ordered weight tier catalog.
    pub weight_tiers: Vec<WeightTier>,
    /// Zone cost table aligned with the catalog.
    pub zone_costs: ZoneCostTable,
    /// Home-country rule.
    pub home_zone_rule: HomeZoneRule,
    /// Whether this snapshot is the active one.
    pub is_active: bool,
    /// Snapshot version.
    pub version: ConfigVersion,
    /// Creation time of the lineage.
    pub created_at: Timestamp,
    /// Commit time of this snapshot.
    pub updated_at: Timestamp,
}

impl ShippingConfig {
    /// Creates the first active version of a lineage.
    #[must_use]
    pub fn initial(config_id: ConfigId, draft: ShippingConfigDraft, at: Timestamp) -> Self {
        Self {
            config_id,
            weight_tiers: draft.weight_tiers,
            zone_costs: draft.zone_costs,
            home_zone_rule: draft.home_zone_rule,
            is_active: true,
            version: ConfigVersion::INITIAL,
            created_at: at,
            updated_at: at,
        }
    }

    /// Builds the active snapshot that supersedes this one.
    ///
    /// Returns `None` when the version counter would overflow.
    #[must_use]
    pub fn successor(&self, draft: ShippingConfigDraft, at: Timestamp) -> Option<Self> {
        Some(Self {
            config_id: self.config_id.clone(),
            weight_tiers: draft.weight_tiers,
            zone_costs: draft.zone_costs,
            home_zone_rule: draft.home_zone_rule,
            is_active: true,
            version: self.version.next()?,
            created_at: self.created_at,
            updated_at: at,
        })
    }

    /// Returns the editable content of the snapshot.
    #[must_use]
    pub fn draft(&self) -> ShippingConfigDraft {
        ShippingConfigDraft {
            weight_tiers: self.weight_tiers.clone(),
            zone_costs: self.zone_costs.clone(),
            home_zone_rule: self.home_zone_rule.clone(),
        }
    }

    /// Validates the snapshot content with the same checks as
    /// [`ShippingConfigDraft::validate`].
    ///
    /// # Errors
    ///
    /// Returns the first violated [`InvariantError`].
    pub fn validate(&self) -> Result<(), InvariantError> {
        validate_content(&self.weight_tiers, &self.zone_costs, &self.home_zone_rule)
    }

    /// Renders the full tier/zone grid for storefront display.
    #[must_use]
    pub fn display_table(&self) -> DisplayTable {
        DisplayTable {
            version: self.version,
            tiers: self
                .weight_tiers
                .iter()
                .enumerate()
                .map(|(index, tier)| DisplayTier {
                    index,
                    min_grams: tier.min_grams,
                    max_grams: tier.max_grams(),
                    label: tier.label.clone(),
                })
                .collect(),
            zones: self.zone_costs.grid(self.weight_tiers.len()),
            home_zone_rule: self.home_zone_rule.clone(),
        }
    }
}

// ============================================================================
// SECTION: Display Table
// ============================================================================

/// Tier column header in the display table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTier {
    /// Tier index.
    pub index: usize,
    /// Inclusive minimum weight in grams.
    pub min_grams: u64,
    /// Inclusive maximum weight in grams; `None` for the unbounded tier.
    pub max_grams: Option<u64>,
    /// Display label.
    pub label: TierLabel,
}

/// Full tier/zone grid rendered from one configuration snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTable {
    /// Version the table was rendered from.
    pub version: ConfigVersion,
    /// Tier headers.
    pub tiers: Vec<DisplayTier>,
    /// One row per non-home zone.
    pub zones: Vec<ZoneCostRow>,
    /// Home-country rule.
    pub home_zone_rule: HomeZoneRule,
}
