// crates/oliva-shipping-core/src/runtime/mod.rs
// ============================================================================
// Module: Shipping Runtime
// Description: Resolution, administration, query, and reference backends.
// Purpose: Execute shipping operations over the core data model.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The runtime layers services on top of [`crate::core`]: a pure resolver,
//! the admin service that commits new versions, the read-side query
//! service, an in-memory store, and reference audit sinks.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod admin;
pub mod audit;
pub mod query;
pub mod resolver;
pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use admin::AdminError;
pub use admin::ConfigAdmin;
pub use admin::ConfigEdit;
pub use admin::EditSession;
pub use admin::EditState;
pub use audit::JsonLinesAuditSink;
pub use audit::NoopAuditSink;
pub use query::ActiveRate;
pub use query::QueryError;
pub use query::ShippingQuery;
pub use resolver::ResolutionError;
pub use resolver::resolve;
pub use resolver::resolve_named;
pub use store::InMemoryShippingConfigStore;
