// crates/oliva-shipping-core/src/core/error.rs
// ============================================================================
// Module: Shipping Invariant Errors
// Description: Configuration-integrity violations for shipping configurations.
// Purpose: Report the first violated invariant with enough context to fix it.
// Dependencies: crate::core::zone, serde, thiserror
// ============================================================================

//! ## Overview
//! Every structural rule of the shipping configuration maps to one variant.
//! Validation stops at the first violation, so callers always receive a
//! single actionable error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;
use thiserror::Error;

use crate::core::zone::Zone;

// ============================================================================
// SECTION: Invariant Errors
// ============================================================================

/// Violations of shipping configuration invariants.
///
/// # Invariants
/// - Variants are stable for programmatic handling and audit labels.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvariantError {
    /// The weight tier catalog has no tiers.
    #[error("weight tier catalog is empty")]
    EmptyCatalog,
    /// A tier's maximum is below its minimum.
    #[error("weight tier {index} has max_grams below min_grams")]
    InvertedTier {
        /// Offending tier index.
        index: usize,
    },
    /// More than one tier is unbounded.
    #[error("weight tier catalog has more than one unbounded tier")]
    MultipleUnboundedTiers,
    /// A tier starts at or before the end of the previous tier.
    #[error("weight tier {index} overlaps the previous tier")]
    TierOverlap {
        /// Index of the tier that overlaps its predecessor.
        index: usize,
    },
    /// A tier starts after the gram following the previous tier's maximum.
    #[error("weight tier {index} leaves a gap after the previous tier")]
    TierGap {
        /// Index of the tier that follows the gap.
        index: usize,
    },
    /// A tier index does not exist in the catalog.
    #[error("unknown weight tier index {index} (catalog has {tier_count} tiers)")]
    UnknownTierIndex {
        /// Requested tier index.
        index: usize,
        /// Number of tiers in the catalog.
        tier_count: usize,
    },
    /// A tier cannot be inserted after a tier without a maximum.
    #[error("cannot insert a tier after unbounded tier {index}")]
    InsertAfterUnbounded {
        /// Index of the unbounded tier.
        index: usize,
    },
    /// Removing the tier would leave the catalog empty.
    #[error("cannot remove the last remaining weight tier")]
    LastTier,
    /// No cost entry exists for a zone and tier.
    #[error("missing zone cost for {zone} at tier {tier_index}")]
    MissingZoneCost {
        /// Zone lacking a cost entry.
        zone: Zone,
        /// Tier index lacking a cost entry.
        tier_index: usize,
    },
    /// More than one cost entry exists for a zone and tier.
    #[error("duplicate zone cost for {zone} at tier {tier_index}")]
    DuplicateZoneCost {
        /// Zone with duplicate entries.
        zone: Zone,
        /// Tier index with duplicate entries.
        tier_index: usize,
    },
    /// A cost entry references a tier index outside the catalog.
    #[error("zone cost for {zone} references removed tier {tier_index}")]
    OrphanZoneCost {
        /// Zone of the orphan entry.
        zone: Zone,
        /// Tier index the orphan entry references.
        tier_index: usize,
    },
    /// A cost entry targets the home zone, which is priced by subtotal.
    #[error("home zone is priced by the home zone rule, not by weight tier")]
    HomeZoneCostEntry,
    /// The free-shipping threshold is negative.
    #[error("home zone free threshold must not be negative")]
    NegativeThreshold,
    /// A cost is negative.
    #[error("shipping cost must not be negative")]
    NegativeCost,
}

impl InvariantError {
    /// Returns a stable label for audit records.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::EmptyCatalog => "empty_catalog",
            Self::InvertedTier {
                ..
            } => "inverted_tier",
            Self::MultipleUnboundedTiers => "multiple_unbounded_tiers",
            Self::TierOverlap {
                ..
            } => "tier_overlap",
            Self::TierGap {
                ..
            } => "tier_gap",
            Self::UnknownTierIndex {
                ..
            } => "unknown_tier_index",
            Self::InsertAfterUnbounded {
                ..
            } => "insert_after_unbounded",
            Self::LastTier => "last_tier",
            Self::MissingZoneCost {
                ..
            } => "missing_zone_cost",
            Self::DuplicateZoneCost {
                ..
            } => "duplicate_zone_cost",
            Self::OrphanZoneCost {
                ..
            } => "orphan_zone_cost",
            Self::HomeZoneCostEntry => "home_zone_cost_entry",
            Self::NegativeThreshold => "negative_threshold",
            Self::NegativeCost => "negative_cost",
        }
    }
}
