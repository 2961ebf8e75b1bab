// crates/oliva-shipping-core/src/interfaces/mod.rs
// ============================================================================
// Module: Shipping Interfaces
// Description: Backend-agnostic persistence and audit interfaces.
// Purpose: Define the contract surfaces the shipping runtime depends on.
// Dependencies: crate::core, serde, thiserror
// ============================================================================

//! ## Overview
//! The runtime talks to storage and audit logging only through the traits in
//! this module. Implementations must fail closed: a store that cannot prove
//! the activation swap happened atomically must return an error instead.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::ConfigVersion;
use crate::core::ShippingConfig;
use crate::core::Timestamp;
use crate::core::Zone;

// ============================================================================
// SECTION: Configuration Store
// ============================================================================

/// Configuration store errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Store I/O error.
    #[error("shipping config store io error: {0}")]
    Io(String),
    /// Stored data is corrupted or fails integrity checks.
    #[error("shipping config store corruption: {0}")]
    Corrupt(String),
    /// Stored data version is incompatible.
    #[error("shipping config store version mismatch: {0}")]
    VersionMismatch(String),
    /// Data handed to or read from the store is invalid.
    #[error("shipping config store invalid data: {0}")]
    Invalid(String),
    /// The active version moved since the caller loaded it.
    #[error(
        "shipping config activation conflict: expected active {}, found {}",
        version_label(.expected),
        version_label(.actual)
    )]
    Conflict {
        /// Active version the caller expected.
        expected: Option<ConfigVersion>,
        /// Active version found in the store.
        actual: Option<ConfigVersion>,
    },
    /// Store reported an error.
    #[error("shipping config store error: {0}")]
    Store(String),
}

/// Renders an optional active version for messages.
#[allow(
    clippy::ref_option,
    reason = "Called from thiserror format arguments with field references."
)]
fn version_label(version: &Option<ConfigVersion>) -> String {
    version.map_or_else(|| "none".to_string(), |version| version.to_string())
}

/// Summary of one stored configuration version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigVersionSummary {
    /// Stored version.
    pub version: ConfigVersion,
    /// Whether the version is the active one.
    pub is_active: bool,
    /// Commit time recorded on the snapshot.
    pub updated_at: Timestamp,
}

/// Persistence for shipping configuration snapshots.
///
/// # Invariants
/// - History is append-only; implementations never delete snapshots.
/// - At most one stored snapshot is active at any observable instant.
pub trait ShippingConfigStore {
    /// Loads the active snapshot, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load_active(&self) -> Result<Option<ShippingConfig>, StoreError>;

    /// Loads a specific snapshot version (active or historical).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when loading fails.
    fn load_version(&self, version: ConfigVersion) -> Result<Option<ShippingConfig>, StoreError>;

    /// Lists stored versions, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when listing fails.
    fn list_versions(&self) -> Result<Vec<ConfigVersionSummary>, StoreError>;

    /// Atomically stores `candidate` as the active snapshot.
    ///
    /// The swap succeeds only when the currently active version equals
    /// `expected_active` (`None` meaning no active snapshot) and
    /// `candidate.version` directly follows it. The previous active snapshot
    /// is deactivated in the same step.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the active version moved and
    /// [`StoreError::Invalid`] when the candidate is not a valid successor.
    fn activate(
        &self,
        candidate: &ShippingConfig,
        expected_active: Option<ConfigVersion>,
    ) -> Result<(), StoreError>;

    /// Reports store readiness for liveness/readiness probes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the store is unavailable.
    fn readiness(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Checks that `candidate` may replace the active snapshot `current`.
///
/// Shared by store implementations so that every backend enforces the same
/// activation rules inside its own atomic section.
///
/// # Errors
///
/// Returns [`StoreError::Conflict`] or [`StoreError::Invalid`].
pub fn check_activation(
    candidate: &ShippingConfig,
    expected_active: Option<ConfigVersion>,
    current: Option<ConfigVersion>,
) -> Result<(), StoreError> {
    if current != expected_active {
        return Err(StoreError::Conflict {
            expected: expected_active,
            actual: current,
        });
    }
    if !candidate.is_active {
        return Err(StoreError::Invalid("candidate snapshot is not marked active".to_string()));
    }
    let required = match current {
        None => Some(ConfigVersion::INITIAL),
        Some(version) => version.next(),
    };
    if Some(candidate.version) != required {
        return Err(StoreError::Invalid(format!(
            "candidate version {} does not follow active version {}",
            candidate.version,
            version_label(&current)
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Audit Sink
// ============================================================================

/// Audit events emitted by the shipping runtime.
///
/// # Invariants
/// - Variants and field names are stable for log consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ShippingAuditEvent {
    /// The first configuration version was created.
    ConfigBootstrapped {
        /// Created version.
        version: ConfigVersion,
    },
    /// An edit session was committed.
    ConfigCommitted {
        /// New active version.
        version: ConfigVersion,
        /// Version that was superseded.
        previous_version: ConfigVersion,
        /// Number of edits replayed in the session.
        edits: usize,
    },
    /// An edit session was rejected; nothing was written.
    CommitRejected {
        /// Active version at the time of the attempt, if any.
        active_version: Option<ConfigVersion>,
        /// Stable reason label.
        reason: String,
        /// Human-readable detail.
        message: String,
    },
    /// Checkout resolved to an unpriced placeholder cell.
    PlaceholderRateServed {
        /// Version that was resolved against.
        version: ConfigVersion,
        /// Requested zone.
        zone: Zone,
        /// Requested weight in grams.
        weight_grams: i64,
    },
    /// A committed configuration failed an integrity check during resolution.
    IntegrityFailure {
        /// Version that was being resolved against.
        version: ConfigVersion,
        /// Requested zone.
        zone: Zone,
        /// Requested weight in grams.
        weight_grams: i64,
        /// Stable reason label.
        reason: String,
        /// Human-readable detail.
        message: String,
    },
}

/// Sink for shipping audit events.
///
/// Implementations must not fail the calling operation; write errors are
/// the sink's own concern.
pub trait ShippingAuditSink: Send + Sync {
    /// Records one audit event.
    fn record(&self, event: &ShippingAuditEvent);
}
