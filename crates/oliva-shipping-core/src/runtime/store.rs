// crates/oliva-shipping-core/src/runtime/store.rs
// ============================================================================
// Module: In-Memory Shipping Config Store
// Description: Process-local ShippingConfigStore implementation.
// Purpose: Back tests and single-process deployments without a database.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Keeps every snapshot in memory behind a read/write lock. Activation runs
//! entirely under the write lock, so readers observe either the old or the
//! new active snapshot and never both or neither. Clones share state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::RwLock;

use crate::core::ConfigVersion;
use crate::core::ShippingConfig;
use crate::interfaces::ConfigVersionSummary;
use crate::interfaces::ShippingConfigStore;
use crate::interfaces::StoreError;
use crate::interfaces::check_activation;

// ============================================================================
// SECTION: Store
// ============================================================================

/// In-memory configuration store.
///
/// # Invariants
/// - Snapshots are stored in ascending version order and never removed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShippingConfigStore {
    /// Stored snapshots shared across clones.
    snapshots: Arc<RwLock<Vec<ShippingConfig>>>,
}

impl InMemoryShippingConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Returns the active version among `snapshots`.
fn active_version(snapshots: &[ShippingConfig]) -> Option<ConfigVersion> {
    snapshots.iter().rev().find(|config| config.is_active).map(|config| config.version)
}

impl ShippingConfigStore for InMemoryShippingConfigStore {
    fn load_active(&self) -> Result<Option<ShippingConfig>, StoreError> {
        let guard = self
            .snapshots
            .read()
            .map_err(|_| StoreError::Store("in-memory store lock poisoned".to_string()))?;
        Ok(guard.iter().rev().find(|config| config.is_active).cloned())
    }

    fn load_version(&self, version: ConfigVersion) -> Result<Option<ShippingConfig>, StoreError> {
        let guard = self
            .snapshots
            .read()
            .map_err(|_| StoreError::Store("in-memory store lock poisoned".to_string()))?;
        Ok(guard.iter().find(|config| config.version == version).cloned())
    }

    fn list_versions(&self) -> Result<Vec<ConfigVersionSummary>, StoreError> {
        let guard = self
            .snapshots
            .read()
            .map_err(|_| StoreError::Store("in-memory store lock poisoned".to_string()))?;
        Ok(guard
            .iter()
            .rev()
            .map(|config| ConfigVersionSummary {
                version: config.version,
                is_active: config.is_active,
                updated_at: config.updated_at,
            })
            .collect())
    }

    fn activate(
        &self,
        candidate: &ShippingConfig,
        expected_active: Option<ConfigVersion>,
    ) -> Result<(), StoreError> {
        let mut guard = self
            .snapshots
            .write()
            .map_err(|_| StoreError::Store("in-memory store lock poisoned".to_string()))?;
        check_activation(candidate, expected_active, active_version(&guard))?;
        if guard.iter().any(|config| config.version == candidate.version) {
            return Err(StoreError::Invalid(format!(
                "version {} already stored",
                candidate.version
            )));
        }
        for config in guard.iter_mut() {
            config.is_active = false;
        }
        guard.push(candidate.clone());
        drop(guard);
        Ok(())
    }
}
