// crates/oliva-shipping-core/src/core/zone_costs.rs
// ============================================================================
// Module: Zone Cost Table
// Description: Mapping from (zone, tier index) to carrier rate descriptors.
// Purpose: Price non-home shipments per weight tier.
// Dependencies: crate::core::{error, identifiers, money, zone}, serde
// ============================================================================

//! ## Overview
//! The table holds one [`ZoneCostEntry`] per non-home zone and tier index.
//! Entries are kept sorted by `(zone, tier_index)` so serialized snapshots
//! are byte-stable. Tier removal and insertion shift dependent indices here,
//! keeping the table aligned with the weight tier catalog.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::error::InvariantError;
use crate::core::identifiers::RateId;
use crate::core::money::MinorUnits;
use crate::core::money::RateDescriptor;
use crate::core::zone::Zone;

// ============================================================================
// SECTION: Entries
// ============================================================================

/// Price of one weight tier in one zone.
///
/// # Invariants
/// - `(zone, tier_index)` is unique within a committed table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneCostEntry {
    /// Destination zone (never [`Zone::Home`] in a committed table).
    pub zone: Zone,
    /// Index into the weight tier catalog.
    pub tier_index: usize,
    /// Carrier rate identifier.
    pub rate_id: RateId,
    /// Display price in minor units.
    pub display_price: MinorUnits,
}

impl ZoneCostEntry {
    /// Returns the rate descriptor stored in the entry.
    #[must_use]
    pub fn descriptor(&self) -> RateDescriptor {
        RateDescriptor {
            rate_id: self.rate_id.clone(),
            display_price: self.display_price,
        }
    }

    /// Sort key used to keep the table ordered.
    const fn key(&self) -> (Zone, usize) {
        (self.zone, self.tier_index)
    }
}

/// One display row: a zone with one optional cell per tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCostRow {
    /// Zone of the row.
    pub zone: Zone,
    /// Cells indexed by tier; `None` marks a missing entry.
    pub cells: Vec<Option<RateDescriptor>>,
}

// ============================================================================
// SECTION: Table
// ============================================================================

/// Zone cost table for all non-home zones.
///
/// Serialized as a bare entry array; deserialization re-sorts the entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ZoneCostEntry>", into = "Vec<ZoneCostEntry>")]
pub struct ZoneCostTable {
    /// Entries sorted by `(zone, tier_index)`.
    entries: Vec<ZoneCostEntry>,
}

impl From<Vec<ZoneCostEntry>> for ZoneCostTable {
    fn from(entries: Vec<ZoneCostEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<ZoneCostTable> for Vec<ZoneCostEntry> {
    fn from(table: ZoneCostTable) -> Self {
        table.entries
    }
}

impl ZoneCostTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a table from raw entries without validating coverage.
    ///
    /// Duplicates are preserved so that [`ZoneCostTable::validate_coverage`]
    /// can report them.
    #[must_use]
    pub fn from_entries(mut entries: Vec<ZoneCostEntry>) -> Self {
        entries.sort_by_key(ZoneCostEntry::key);
        Self {
            entries,
        }
    }

    /// Returns the entries in `(zone, tier_index)` order.
    #[must_use]
    pub fn entries(&self) -> &[ZoneCostEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the descriptor for an exact `(zone, tier_index)` key.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError::MissingZoneCost`] when no entry exists.
    pub fn lookup(&self, zone: Zone, tier_index: usize) -> Result<RateDescriptor, InvariantError> {
        self.entries
            .binary_search_by_key(&(zone, tier_index), ZoneCostEntry::key)
            .map(|position| self.entries[position].descriptor())
            .map_err(|_| InvariantError::MissingZoneCost {
                zone,
                tier_index,
            })
    }

    /// Replaces or inserts the entry for `(zone, tier_index)`.
    pub fn upsert(&mut self, zone: Zone, tier_index: usize, descriptor: RateDescriptor) {
        let entry = ZoneCostEntry {
            zone,
            tier_index,
            rate_id: descriptor.rate_id,
            display_price: descriptor.display_price,
        };
        match self.entries.binary_search_by_key(&(zone, tier_index), ZoneCostEntry::key) {
            Ok(position) => self.entries[position] = entry,
            Err(position) => self.entries.insert(position, entry),
        }
    }

    /// Returns a table aligned with a catalog that lost tier `removed_index`.
    ///
    /// Entries at the removed index are dropped; entries above it move down
    /// by one.
    #[must_use]
    pub fn reindex_after_tier_removal(&self, removed_index: usize) -> Self {
        let entries = self
            .entries
            .iter()
            .filter(|entry| entry.tier_index != removed_index)
            .map(|entry| {
                let mut entry = entry.clone();
                if entry.tier_index > removed_index {
                    entry.tier_index -= 1;
                }
                entry
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Returns a table aligned with a catalog that gained a tier at `inserted_index`.
    ///
    /// Entries at or above the inserted index move up by one; no entries are
    /// created for the new index.
    #[must_use]
    pub fn reindex_after_tier_insertion(&self, inserted_index: usize) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                if entry.tier_index >= inserted_index {
                    entry.tier_index += 1;
                }
                entry
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Inserts placeholder entries for every non-home zone at `tier_index`.
    pub fn insert_placeholders(&mut self, tier_index: usize) {
        for zone in Zone::non_home() {
            self.upsert(*zone, tier_index, RateDescriptor::placeholder());
        }
    }

    /// Returns the `(zone, tier_index)` keys still carrying placeholder rates.
    #[must_use]
    pub fn placeholder_cells(&self) -> Vec<(Zone, usize)> {
        self.entries
            .iter()
            .filter(|entry| entry.rate_id.is_placeholder())
            .map(ZoneCostEntry::key)
            .collect()
    }

    /// Checks total coverage against a catalog of `tier_count` tiers.
    ///
    /// # Errors
    ///
    /// Returns the first of [`InvariantError::HomeZoneCostEntry`],
    /// [`InvariantError::OrphanZoneCost`], [`InvariantError::DuplicateZoneCost`],
    /// or [`InvariantError::MissingZoneCost`] found.
    pub fn validate_coverage(&self, tier_count: usize) -> Result<(), InvariantError> {
        for entry in &self.entries {
            if entry.zone.is_home() {
                return Err(InvariantError::HomeZoneCostEntry);
            }
            if entry.tier_index >= tier_count {
                return Err(InvariantError::OrphanZoneCost {
                    zone: entry.zone,
                    tier_index: entry.tier_index,
                });
            }
            if entry.display_price.is_negative() {
                return Err(InvariantError::NegativeCost);
            }
        }
        for pair in self.entries.windows(2) {
            if let [previous, next] = pair
                && previous.key() == next.key()
            {
                return Err(InvariantError::DuplicateZoneCost {
                    zone: next.zone,
                    tier_index: next.tier_index,
                });
            }
        }
        for zone in Zone::non_home() {
            for tier_index in 0 .. tier_count {
                self.lookup(*zone, tier_index)?;
            }
        }
        Ok(())
    }

    /// Returns one row per non-home zone with a cell per tier.
    #[must_use]
    pub fn grid(&self, tier_count: usize) -> Vec<ZoneCostRow> {
        Zone::non_home()
            .iter()
            .map(|zone| ZoneCostRow {
                zone: *zone,
                cells: (0 .. tier_count).map(|index| self.lookup(*zone, index).ok()).collect(),
            })
            .collect()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
