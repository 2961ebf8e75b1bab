// crates/oliva-shipping-store-sqlite/src/lib.rs
// ============================================================================
// Module: Oliva Shipping SQLite Store
// Description: Durable ShippingConfigStore backed by SQLite.
// Purpose: Persist configuration versions with integrity checks and an
//          atomic activation swap.
// Dependencies: oliva-shipping-core, rusqlite, serde_jcs, sha2
// ============================================================================

//! ## Overview
//! [`SqliteShippingConfigStore`] keeps every configuration version in an
//! append-only table. Payloads are canonical JSON hashed with SHA-256 and
//! verified on every load. Activation checks the expected active version,
//! deactivates it, and inserts the successor inside one immediate
//! transaction; a partial unique index forbids a second active row.
//!
//! Security posture: database contents are untrusted and fail closed on
//! corruption.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod store;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use store::MAX_CONFIG_BYTES;
pub use store::SqliteShippingConfigStore;
pub use store::SqliteStoreConfig;
pub use store::SqliteStoreError;
pub use store::SqliteStoreMode;
pub use store::SqliteSyncMode;
