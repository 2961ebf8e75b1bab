// crates/oliva-shipping-core/src/lib.rs
// ============================================================================
// Module: Oliva Shipping Core
// Description: Shipping-cost configuration model, resolver, and admin runtime.
// Purpose: Resolve (zone, weight, subtotal) to a carrier rate from a single
//          versioned configuration that only validated commits can replace.
// Dependencies: bigdecimal, serde, serde_json, thiserror, time
// ============================================================================

//! ## Overview
//! The crate is split into three layers:
//! - [`core`]: tiers, zone costs, the home rule, and the versioned aggregate.
//! - [`interfaces`]: the store and audit contracts backends implement.
//! - [`runtime`]: the resolver, admin and query services, and reference
//!   backends.
//!
//! Invariants:
//! - Resolution reads exactly one snapshot per request.
//! - A configuration that fails validation is never activated.
//!
//! Security posture: admin edits and query parameters are untrusted and are
//! validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::ConfigId;
pub use crate::core::ConfigVersion;
pub use crate::core::DisplayTable;
pub use crate::core::DisplayTier;
pub use crate::core::HomeZoneRule;
pub use crate::core::InvariantError;
pub use crate::core::MinorUnits;
pub use crate::core::RateDescriptor;
pub use crate::core::RateId;
pub use crate::core::ShippingConfig;
pub use crate::core::ShippingConfigDraft;
pub use crate::core::TierLabel;
pub use crate::core::TierUpperBound;
pub use crate::core::Timestamp;
pub use crate::core::UnknownZoneError;
pub use crate::core::WeightTier;
pub use crate::core::Zone;
pub use crate::core::ZoneCostEntry;
pub use crate::core::ZoneCostRow;
pub use crate::core::ZoneCostTable;
pub use crate::interfaces::ConfigVersionSummary;
pub use crate::interfaces::ShippingAuditEvent;
pub use crate::interfaces::ShippingAuditSink;
pub use crate::interfaces::ShippingConfigStore;
pub use crate::interfaces::StoreError;
pub use crate::runtime::ActiveRate;
pub use crate::runtime::AdminError;
pub use crate::runtime::ConfigAdmin;
pub use crate::runtime::ConfigEdit;
pub use crate::runtime::EditSession;
pub use crate::runtime::EditState;
pub use crate::runtime::InMemoryShippingConfigStore;
pub use crate::runtime::JsonLinesAuditSink;
pub use crate::runtime::NoopAuditSink;
pub use crate::runtime::QueryError;
pub use crate::runtime::ResolutionError;
pub use crate::runtime::ShippingQuery;
