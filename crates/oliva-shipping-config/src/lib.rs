// crates/oliva-shipping-config/src/lib.rs
// ============================================================================
// Module: Oliva Shipping Config Library
// Description: Engine configuration model, validation, and seed conversion.
// Purpose: Single source of truth for oliva-shipping.toml semantics.
// Dependencies: oliva-shipping-core, oliva-shipping-store-sqlite, serde, toml
// ============================================================================

//! ## Overview
//! `oliva-shipping-config` defines the configuration consumed by the
//! operator CLI: which store backs the engine, where audit events go, and
//! the optional seed catalog used to bootstrap version 1. Validation is
//! strict and fails closed.
//!
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::AuditConfig;
pub use config::AuditSinkType;
pub use config::ConfigError;
pub use config::SeedConfig;
pub use config::SeedHomeZoneRule;
pub use config::SeedTier;
pub use config::SeedZoneCost;
pub use config::ShippingEngineConfig;
pub use config::StoreConfig;
pub use config::StoreType;
pub use examples::config_toml_example;
