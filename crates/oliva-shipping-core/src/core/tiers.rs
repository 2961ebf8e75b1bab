// crates/oliva-shipping-core/src/core/tiers.rs
// ============================================================================
// Module: Weight Tier Catalog
// Description: Ordered, contiguous gram ranges with bilingual labels.
// Purpose: Hold and validate the weight bands used to price parcels.
// Dependencies: crate::core::error, serde
// ============================================================================

//! ## Overview
//! A catalog is a list of [`WeightTier`] values identified by position. The
//! list must be sorted, contiguous (`max + 1 == next.min`), and may end in a
//! single [`TierUpperBound::Unbounded`] tier. The helpers in this module
//! never repair contiguity; callers re-run [`validate_tiers`] after edits.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::InvariantError;

// ============================================================================
// SECTION: Tier Types
// ============================================================================

/// Upper bound of a weight tier.
///
/// # Invariants
/// - `Bounded` maxima are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierUpperBound {
    /// Inclusive maximum in grams.
    Bounded {
        /// Inclusive maximum weight in grams.
        max_grams: u64,
    },
    /// No maximum; matches every weight at or above the tier minimum.
    Unbounded,
}

/// Display label in the storefront's two languages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TierLabel {
    /// Label in the primary storefront language (Italian).
    pub primary: String,
    /// Label in the secondary storefront language (English).
    pub secondary: String,
}

impl TierLabel {
    /// Creates a label from both language variants.
    #[must_use]
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }
}

/// A single weight band.
///
/// # Invariants
/// - Bounds are inclusive; `max_grams >= min_grams` once validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightTier {
    /// Inclusive minimum weight in grams.
    pub min_grams: u64,
    /// Upper bound of the band.
    pub upper: TierUpperBound,
    /// Display label.
    pub label: TierLabel,
}

impl WeightTier {
    /// Creates a tier covering `[min_grams, max_grams]`.
    #[must_use]
    pub const fn bounded(min_grams: u64, max_grams: u64, label: TierLabel) -> Self {
        Self {
            min_grams,
            upper: TierUpperBound::Bounded {
                max_grams,
            },
            label,
        }
    }

    /// Creates a tier covering every weight from `min_grams` upward.
    #[must_use]
    pub const fn unbounded(min_grams: u64, label: TierLabel) -> Self {
        Self {
            min_grams,
            upper: TierUpperBound::Unbounded,
            label,
        }
    }

    /// Returns the inclusive maximum, or `None` for an unbounded tier.
    #[must_use]
    pub const fn max_grams(&self) -> Option<u64> {
        match self.upper {
            TierUpperBound::Bounded {
                max_grams,
            } => Some(max_grams),
            TierUpperBound::Unbounded => None,
        }
    }

    /// Returns true when the tier has no maximum.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self.upper, TierUpperBound::Unbounded)
    }

    /// Returns true when `weight_grams` falls inside the tier.
    #[must_use]
    pub const fn contains(&self, weight_grams: u64) -> bool {
        if weight_grams < self.min_grams {
            return false;
        }
        match self.upper {
            TierUpperBound::Bounded {
                max_grams,
            } => weight_grams <= max_grams,
            TierUpperBound::Unbounded => true,
        }
    }
}

// ============================================================================
// SECTION: Validation
// ============================================================================

/// Validates catalog ordering, contiguity, and the unbounded-tail rule.
///
/// Checks run in a fixed order (empty, inverted, unbounded count, then
/// pairwise overlap/gap) and the first violation wins.
///
/// # Errors
///
/// Returns [`InvariantError`] describing the first violated invariant.
pub fn validate_tiers(tiers: &[WeightTier]) -> Result<(), InvariantError> {
    if tiers.is_empty() {
        return Err(InvariantError::EmptyCatalog);
    }
    for (index, tier) in tiers.iter().enumerate() {
        if let Some(max_grams) = tier.max_grams()
            && max_grams < tier.min_grams
        {
            return Err(InvariantError::InvertedTier {
                index,
            });
        }
    }
    if tiers.iter().filter(|tier| tier.is_unbounded()).count() > 1 {
        return Err(InvariantError::MultipleUnboundedTiers);
    }
    for (offset, pair) in tiers.windows(2).enumerate() {
        let index = offset + 1;
        let [previous, next] = pair else {
            continue;
        };
        let Some(previous_max) = previous.max_grams() else {
            return Err(InvariantError::TierOverlap {
                index,
            });
        };
        if next.min_grams <= previous_max {
            return Err(InvariantError::TierOverlap {
                index,
            });
        }
        // previous_max < next.min_grams <= u64::MAX, so the increment cannot overflow.
        if next.min_grams > previous_max + 1 {
            return Err(InvariantError::TierGap {
                index,
            });
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Catalog Edits
// ============================================================================

/// Returns a new catalog with a tier inserted right after `after_index`.
///
/// The new tier starts at `previous.max_grams + 1` and spans `width_grams`
/// grams. A zero width yields an inverted tier that [`validate_tiers`]
/// rejects. The result is not validated.
///
/// # Errors
///
/// Returns [`InvariantError::UnknownTierIndex`] for an out-of-range index and
/// [`InvariantError::InsertAfterUnbounded`] when the predecessor has no maximum.
pub fn insert_tier(
    tiers: &[WeightTier],
    after_index: usize,
    width_grams: u64,
    label: TierLabel,
) -> Result<Vec<WeightTier>, InvariantError> {
    let previous = tiers.get(after_index).ok_or(InvariantError::UnknownTierIndex {
        index: after_index,
        tier_count: tiers.len(),
    })?;
    let previous_max = previous.max_grams().ok_or(InvariantError::InsertAfterUnbounded {
        index: after_index,
    })?;
    let min_grams = previous_max.saturating_add(1);
    let max_grams = min_grams.saturating_add(width_grams).saturating_sub(1);
    let mut next = tiers.to_vec();
    next.insert(after_index + 1, WeightTier::bounded(min_grams, max_grams, label));
    Ok(next)
}

/// Returns a new catalog without the tier at `index`.
///
/// Contiguity is not repaired; dependent zone costs must be re-indexed by
/// the caller.
///
/// # Errors
///
/// Returns [`InvariantError::UnknownTierIndex`] for an out-of-range index.
pub fn remove_tier(tiers: &[WeightTier], index: usize) -> Result<Vec<WeightTier>, InvariantError> {
    if index >= tiers.len() {
        return Err(InvariantError::UnknownTierIndex {
            index,
            tier_count: tiers.len(),
        });
    }
    let mut next = tiers.to_vec();
    next.remove(index);
    Ok(next)
}

// ============================================================================
// SECTION: Lookup
// ============================================================================

/// Returns the index of the tier containing `weight_grams`.
#[must_use]
pub fn find_tier(tiers: &[WeightTier], weight_grams: u64) -> Option<usize> {
    tiers.iter().position(|tier| tier.contains(weight_grams))
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::expect_used, reason = "Test-only assertions are permitted.")]
mod tests {
    use super::InvariantError;
    use super::TierLabel;
    use super::WeightTier;
    use super::find_tier;
    use super::insert_tier;
    use super::remove_tier;
    use super::validate_tiers;

    fn label(text: &str) -> TierLabel {
        TierLabel::new(text, text)
    }

    fn catalog() -> Vec<WeightTier> {
        vec![
            WeightTier::bounded(0, 1_000, label("0-1kg")),
            WeightTier::bounded(1_001, 3_000, label("1-3kg")),
            WeightTier::unbounded(3_001, label("3kg+")),
        ]
    }

    #[test]
    fn valid_catalog_passes() {
        assert_eq!(validate_tiers(&catalog()), Ok(()));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(validate_tiers(&[]), Err(InvariantError::EmptyCatalog));
    }

    #[test]
    fn gap_and_overlap_are_distinguished() {
        let mut gap = catalog();
        gap[1].min_grams = 1_002;
        assert_eq!(
            validate_tiers(&gap),
            Err(InvariantError::TierGap {
                index: 1
            })
        );

        let mut overlap = catalog();
        overlap[1].min_grams = 1_000;
        assert_eq!(
            validate_tiers(&overlap),
            Err(InvariantError::TierOverlap {
                index: 1
            })
        );
    }

    #[test]
    fn unbounded_tier_must_be_last() {
        let tiers = vec![
            WeightTier::unbounded(0, label("all")),
            WeightTier::bounded(1, 10, label("late")),
        ];
        assert_eq!(
            validate_tiers(&tiers),
            Err(InvariantError::TierOverlap {
                index: 1
            })
        );

        let tiers =
            vec![WeightTier::unbounded(0, label("a")), WeightTier::unbounded(1, label("b"))];
        assert_eq!(validate_tiers(&tiers), Err(InvariantError::MultipleUnboundedTiers));
    }

    #[test]
    fn insert_after_bounded_tier_starts_at_next_gram() {
        let tiers = vec![WeightTier::bounded(0, 999, label("light"))];
        let tiers = insert_tier(&tiers, 0, 500, label("mid")).expect("insert");
        assert_eq!(tiers[1], WeightTier::bounded(1_000, 1_499, label("mid")));
        assert_eq!(validate_tiers(&tiers), Ok(()));
    }

    #[test]
    fn insert_does_not_repair_following_tiers() {
        let tiers = insert_tier(&catalog(), 0, 100, label("new")).expect("insert");
        assert_eq!(tiers.len(), 4);
        assert_eq!(
            validate_tiers(&tiers),
            Err(InvariantError::TierOverlap {
                index: 2
            })
        );
    }

    #[test]
    fn insert_after_unbounded_is_rejected() {
        assert_eq!(
            insert_tier(&catalog(), 2, 100, label("x")),
            Err(InvariantError::InsertAfterUnbounded {
                index: 2
            })
        );
    }

    #[test]
    fn remove_leaves_gap_for_caller() {
        let tiers = remove_tier(&catalog(), 1).expect("remove");
        assert_eq!(tiers.len(), 2);
        assert_eq!(
            validate_tiers(&tiers),
            Err(InvariantError::TierGap {
                index: 1
            })
        );
        assert!(remove_tier(&catalog(), 3).is_err());
    }

    #[test]
    fn find_tier_uses_inclusive_bounds() {
        let tiers = catalog();
        assert_eq!(find_tier(&tiers, 0), Some(0));
        assert_eq!(find_tier(&tiers, 1_000), Some(0));
        assert_eq!(find_tier(&tiers, 1_001), Some(1));
        assert_eq!(find_tier(&tiers, u64::MAX), Some(2));
    }
}
