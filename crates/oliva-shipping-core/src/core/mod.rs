// crates/oliva-shipping-core/src/core/mod.rs
// ============================================================================
// Module: Shipping Core Types
// Description: Data model for the shipping-cost configuration.
// Purpose: Group the leaf data structures and the aggregate root.
// Dependencies: bigdecimal, serde, thiserror, time
// ============================================================================

//! ## Overview
//! Leaf structures (tiers, zone costs, home rule) and the
//! [`ShippingConfig`] aggregate that composes them. Nothing in this module
//! performs I/O.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod home_zone;
pub mod identifiers;
pub mod money;
pub mod tiers;
pub mod time;
pub mod zone;
pub mod zone_costs;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::DisplayTable;
pub use config::DisplayTier;
pub use config::ShippingConfig;
pub use config::ShippingConfigDraft;
pub use error::InvariantError;
pub use home_zone::HomeZoneRule;
pub use identifiers::ConfigId;
pub use identifiers::ConfigVersion;
pub use identifiers::RateId;
pub use money::MinorUnits;
pub use money::RateDescriptor;
pub use tiers::TierLabel;
pub use tiers::TierUpperBound;
pub use tiers::WeightTier;
pub use time::Timestamp;
pub use zone::UnknownZoneError;
pub use zone::Zone;
pub use zone_costs::ZoneCostEntry;
pub use zone_costs::ZoneCostRow;
pub use zone_costs::ZoneCostTable;
