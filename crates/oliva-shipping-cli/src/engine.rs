// crates/oliva-shipping-cli/src/engine.rs
// ============================================================================
// Module: CLI Engine Wiring
// Description: Builds the store, audit sink, and services from config.
// Purpose: Give every CLI command one consistently wired shipping engine.
// Dependencies: oliva-shipping-config, oliva-shipping-core,
//               oliva-shipping-store-sqlite, thiserror
// ============================================================================

//! ## Overview
//! [`Engine::open`] turns a validated [`ShippingEngineConfig`] into a store
//! backend, an audit sink, and the admin and query services sharing them.
//! A memory store starts empty, so it is bootstrapped from the config seed
//! when one is present.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::sync::Arc;

use oliva_shipping_config::AuditConfig;
use oliva_shipping_config::AuditSinkType;
use oliva_shipping_config::ConfigError;
use oliva_shipping_config::ShippingEngineConfig;
use oliva_shipping_config::StoreType;
use oliva_shipping_core::AdminError;
use oliva_shipping_core::ConfigAdmin;
use oliva_shipping_core::ConfigVersion;
use oliva_shipping_core::ConfigVersionSummary;
use oliva_shipping_core::InMemoryShippingConfigStore;
use oliva_shipping_core::JsonLinesAuditSink;
use oliva_shipping_core::NoopAuditSink;
use oliva_shipping_core::ShippingAuditSink;
use oliva_shipping_core::ShippingConfig;
use oliva_shipping_core::ShippingConfigStore;
use oliva_shipping_core::ShippingQuery;
use oliva_shipping_core::StoreError;
use oliva_shipping_core::Timestamp;
use oliva_shipping_store_sqlite::SqliteShippingConfigStore;
use oliva_shipping_store_sqlite::SqliteStoreError;
use thiserror::Error;

// ============================================================================
// SECTION: Store Backend
// ============================================================================

/// Store backend selected by configuration.
#[derive(Clone)]
pub(crate) enum ShippingStore {
    /// Process-local store.
    Memory(InMemoryShippingConfigStore),
    /// Durable `SQLite` store.
    Sqlite(SqliteShippingConfigStore),
}

impl ShippingConfigStore for ShippingStore {
    fn load_active(&self) -> Result<Option<ShippingConfig>, StoreError> {
        match self {
            Self::Memory(store) => store.load_active(),
            Self::Sqlite(store) => store.load_active(),
        }
    }

    fn load_version(&self, version: ConfigVersion) -> Result<Option<ShippingConfig>, StoreError> {
        match self {
            Self::Memory(store) => store.load_version(version),
            Self::Sqlite(store) => store.load_version(version),
        }
    }

    fn list_versions(&self) -> Result<Vec<ConfigVersionSummary>, StoreError> {
        match self {
            Self::Memory(store) => store.list_versions(),
            Self::Sqlite(store) => store.list_versions(),
        }
    }

    fn activate(
        &self,
        candidate: &ShippingConfig,
        expected_active: Option<ConfigVersion>,
    ) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.activate(candidate, expected_active),
            Self::Sqlite(store) => store.activate(candidate, expected_active),
        }
    }

    fn readiness(&self) -> Result<(), StoreError> {
        match self {
            Self::Memory(store) => store.readiness(),
            Self::Sqlite(store) => store.readiness(),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Engine wiring failures.
#[derive(Debug, Error)]
pub(crate) enum EngineError {
    /// The sqlite backend was selected without a path.
    #[error("sqlite store requires path")]
    MissingStorePath,
    /// The file audit sink was selected without a path.
    #[error("file audit sink requires path")]
    MissingAuditPath,
    /// The `SQLite` store could not be opened.
    #[error(transparent)]
    Sqlite(#[from] SqliteStoreError),
    /// The store opened but failed its readiness probe.
    #[error("store not ready: {0}")]
    NotReady(StoreError),
    /// The audit log file could not be opened.
    #[error("failed to open audit log {path}: {error}")]
    Audit {
        /// Audit log path.
        path: String,
        /// Underlying I/O error.
        error: String,
    },
    /// The seed could not be converted.
    #[error(transparent)]
    Seed(#[from] ConfigError),
    /// Bootstrapping from the seed failed.
    #[error(transparent)]
    Admin(#[from] AdminError),
}

// ============================================================================
// SECTION: Engine
// ============================================================================

/// Store, audit sink, and services wired from one configuration.
pub(crate) struct Engine {
    /// Loaded configuration.
    config: ShippingEngineConfig,
    /// Admin service.
    admin: ConfigAdmin<ShippingStore>,
    /// Query service.
    query: ShippingQuery<ShippingStore>,
}

impl Engine {
    /// Opens the engine described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError`] when the store or audit sink cannot be opened,
    /// or when bootstrapping a memory store from the seed fails.
    pub(crate) fn open(config: ShippingEngineConfig) -> Result<Self, EngineError> {
        let store = open_store(&config)?;
        store.readiness().map_err(EngineError::NotReady)?;
        let audit = build_audit_sink(&config.audit)?;
        let engine = Self {
            admin: ConfigAdmin::new(store.clone(), Arc::clone(&audit)),
            query: ShippingQuery::new(store, audit),
            config,
        };
        if engine.config.store.store_type == StoreType::Memory {
            engine.bootstrap_from_seed()?;
        }
        Ok(engine)
    }

    /// Returns the admin service.
    pub(crate) const fn admin(&self) -> &ConfigAdmin<ShippingStore> {
        &self.admin
    }

    /// Returns the query service.
    pub(crate) const fn query(&self) -> &ShippingQuery<ShippingStore> {
        &self.query
    }

    /// Returns the store backend.
    pub(crate) fn store(&self) -> &ShippingStore {
        self.admin.store()
    }

    /// Bootstraps version 1 from the config seed.
    ///
    /// Returns `None` when the config has no seed, and the already active
    /// version when a configuration exists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Seed`] or [`EngineError::Admin`].
    pub(crate) fn bootstrap_from_seed(&self) -> Result<Option<ConfigVersion>, EngineError> {
        let Some(seed) = &self.config.seed else {
            return Ok(None);
        };
        let draft = seed.to_draft()?;
        let version = self.admin.bootstrap_as(self.config.config_id(), draft, Timestamp::now())?;
        Ok(Some(version))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Opens the configured store backend.
fn open_store(config: &ShippingEngineConfig) -> Result<ShippingStore, EngineError> {
    match config.store.store_type {
        StoreType::Memory => Ok(ShippingStore::Memory(InMemoryShippingConfigStore::new())),
        StoreType::Sqlite => {
            let sqlite = config.store.sqlite_config().ok_or(EngineError::MissingStorePath)?;
            Ok(ShippingStore::Sqlite(SqliteShippingConfigStore::new(&sqlite)?))
        }
    }
}

/// Builds the configured audit sink.
fn build_audit_sink(config: &AuditConfig) -> Result<Arc<dyn ShippingAuditSink>, EngineError> {
    match config.sink {
        AuditSinkType::None => Ok(Arc::new(NoopAuditSink)),
        AuditSinkType::Stderr => Ok(Arc::new(JsonLinesAuditSink::stderr())),
        AuditSinkType::File => {
            let path = config.path.as_ref().ok_or(EngineError::MissingAuditPath)?;
            let file = OpenOptions::new().create(true).append(true).open(path).map_err(|err| {
                EngineError::Audit {
                    path: path.display().to_string(),
                    error: err.to_string(),
                }
            })?;
            Ok(Arc::new(JsonLinesAuditSink::new(file)))
        }
    }
}
