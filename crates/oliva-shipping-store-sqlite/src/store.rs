// crates/oliva-shipping-store-sqlite/src/store.rs
// ============================================================================
// Module: SQLite Shipping Config Store
// Description: Durable ShippingConfigStore backed by SQLite WAL.
// Purpose: Persist configuration snapshots with deterministic serialization
//          and activate them atomically.
// Dependencies: oliva-shipping-core, rusqlite, serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! This module implements a durable [`ShippingConfigStore`] using `SQLite`.
//! Each activation stores a canonical JSON snapshot in an append-only table.
//! The active flag lives in its own column so that historical payloads and
//! their hashes never change. Loads verify the stored hash before
//! deserializing and fail closed on corruption.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use oliva_shipping_core::ConfigVersion;
use oliva_shipping_core::ConfigVersionSummary;
use oliva_shipping_core::ShippingConfig;
use oliva_shipping_core::ShippingConfigStore;
use oliva_shipping_core::StoreError;
use oliva_shipping_core::Timestamp;
use oliva_shipping_core::interfaces::check_activation;
use rusqlite::Connection;
use rusqlite::OpenFlags;
use rusqlite::OptionalExtension;
use rusqlite::TransactionBehavior;
use rusqlite::params;
use serde::Deserialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// `SQLite` schema version for the store.
const SCHEMA_VERSION: i64 = 1;
/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum configuration snapshot size accepted by the store.
pub const MAX_CONFIG_BYTES: usize = 1024 * 1024;
/// Label of the only supported payload hash algorithm.
const HASH_ALGORITHM_SHA256: &str = "sha256";

// ============================================================================
// SECTION: Config
// ============================================================================

/// `SQLite` journal mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `journal_mode` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteStoreMode {
    /// WAL journal mode (recommended).
    #[default]
    Wal,
    /// Delete journal mode (legacy).
    Delete,
}

impl SqliteStoreMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Wal => "wal",
            Self::Delete => "delete",
        }
    }
}

/// `SQLite` sync mode configuration.
///
/// # Invariants
/// - Values map 1:1 to `SQLite` `synchronous` pragma settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqliteSyncMode {
    /// Full synchronous mode (safest).
    #[default]
    Full,
    /// Normal synchronous mode (balanced).
    Normal,
}

impl SqliteSyncMode {
    /// Returns the `SQLite` pragma value.
    #[must_use]
    pub const fn pragma_value(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Normal => "normal",
        }
    }
}

/// Configuration for the `SQLite` shipping config store.
///
/// # Invariants
/// - `path` must resolve to a file path (not a directory).
/// - `busy_timeout_ms` is interpreted as milliseconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SqliteStoreConfig {
    /// Path to the `SQLite` database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// `SQLite` journal mode.
    #[serde(default)]
    pub journal_mode: SqliteStoreMode,
    /// `SQLite` sync mode.
    #[serde(default)]
    pub sync_mode: SqliteSyncMode,
}

impl SqliteStoreConfig {
    /// Creates a configuration with default pragmas for `path`.
    #[must_use]
    pub const fn for_path(path: PathBuf) -> Self {
        Self {
            path,
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
            journal_mode: SqliteStoreMode::Wal,
            sync_mode: SqliteSyncMode::Full,
        }
    }
}

/// Returns the default busy timeout for `SQLite` connections.
const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// `SQLite` store errors.
///
/// # Invariants
/// - Error messages avoid embedding raw configuration payloads.
#[derive(Debug, Error, Clone)]
pub enum SqliteStoreError {
    /// Store I/O error.
    #[error("sqlite store io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite store db error: {0}")]
    Db(String),
    /// Store corruption or hash mismatch.
    #[error("sqlite store corruption: {0}")]
    Corrupt(String),
    /// Store schema version mismatch.
    #[error("sqlite store version mismatch: {0}")]
    VersionMismatch(String),
    /// Invalid store data.
    #[error("sqlite store invalid data: {0}")]
    Invalid(String),
    /// Payload exceeded the size limit.
    #[error("sqlite store payload too large: {actual_bytes} bytes (max {max_bytes})")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual payload size in bytes.
        actual_bytes: usize,
    },
}

impl From<SqliteStoreError> for StoreError {
    fn from(error: SqliteStoreError) -> Self {
        match error {
            SqliteStoreError::Io(message) => Self::Io(message),
            SqliteStoreError::Db(message) => Self::Store(message),
            SqliteStoreError::Corrupt(message) => Self::Corrupt(message),
            SqliteStoreError::VersionMismatch(message) => Self::VersionMismatch(message),
            SqliteStoreError::Invalid(message) => Self::Invalid(message),
            SqliteStoreError::TooLarge {
                max_bytes,
                actual_bytes,
            } => Self::Invalid(format!(
                "config_json exceeds size limit: {actual_bytes} bytes (max {max_bytes})"
            )),
        }
    }
}

// ============================================================================
// SECTION: Store
// ============================================================================

/// `SQLite`-backed shipping configuration store.
///
/// # Invariants
/// - Loads verify stored hashes before deserialization.
/// - Connection access is serialized through a mutex; clones share it.
#[derive(Clone)]
pub struct SqliteShippingConfigStore {
    /// Shared connection guarded by a mutex.
    connection: Arc<Mutex<Connection>>,
}

impl SqliteShippingConfigStore {
    /// Opens an `SQLite`-backed shipping config store.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteStoreError`] when the path is unsafe or the database
    /// cannot be opened or initialized.
    pub fn new(config: &SqliteStoreConfig) -> Result<Self, SqliteStoreError> {
        validate_store_path(&config.path)?;
        ensure_parent_dir(&config.path)?;
        let mut connection = open_connection(config)?;
        initialize_schema(&mut connection)?;
        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Loads the row matching `filter` (`is_active = 1` or `version = ?1`).
    fn load_where(
        &self,
        filter: &str,
        version: Option<i64>,
    ) -> Result<Option<ShippingConfig>, SqliteStoreError> {
        let guard =
            self.connection.lock().map_err(|_| SqliteStoreError::Db("mutex poisoned".to_string()))?;
        let sql = format!(
            "SELECT version, is_active, config_json, config_hash, hash_algorithm FROM \
             shipping_configs WHERE {filter}"
        );
        let row = guard
            .query_row(&sql, rusqlite::params_from_iter(version), |row| {
                Ok(StoredRow {
                    version: row.get(0)?,
                    is_active: row.get(1)?,
                    bytes: row.get(2)?,
                    hash_value: row.get(3)?,
                    hash_algorithm: row.get(4)?,
                })
            })
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        row.map(StoredRow::decode).transpose()
    }

    /// Performs the activation swap inside one immediate transaction.
    fn activate_config(
        &self,
        candidate: &ShippingConfig,
        expected_active: Option<ConfigVersion>,
    ) -> Result<(), StoreError> {
        let bytes = serde_jcs::to_vec(candidate)
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_BYTES {
            return Err(SqliteStoreError::TooLarge {
                max_bytes: MAX_CONFIG_BYTES,
                actual_bytes: bytes.len(),
            }
            .into());
        }
        let updated_at_json = serde_json::to_string(&candidate.updated_at)
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        let hash = sha256_hex(&bytes);
        let version = version_to_sql(candidate.version)?;

        let mut guard =
            self.connection.lock().map_err(|_| SqliteStoreError::Db("mutex poisoned".to_string()))?;
        let tx = guard
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        let current: Option<i64> = tx
            .query_row(
                "SELECT version FROM shipping_configs WHERE is_active = 1",
                params![],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        let current = current.map(version_from_sql).transpose()?;
        check_activation(candidate, expected_active, current)?;
        let exists: Option<i64> = tx
            .query_row(
                "SELECT 1 FROM shipping_configs WHERE version = ?1",
                params![version],
                |row| row.get(0),
            )
            .optional()
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        if exists.is_some() {
            let message = format!("version {} already stored", candidate.version);
            return Err(StoreError::Invalid(message));
        }
        tx.execute("UPDATE shipping_configs SET is_active = 0 WHERE is_active = 1", params![])
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        tx.execute(
            "INSERT INTO shipping_configs (version, config_id, is_active, config_json, \
             config_hash, hash_algorithm, updated_at_json, saved_at) VALUES (?1, ?2, 1, ?3, ?4, \
             ?5, ?6, ?7)",
            params![
                version,
                candidate.config_id.as_str(),
                bytes.as_slice(),
                hash.as_str(),
                HASH_ALGORITHM_SHA256,
                updated_at_json.as_str(),
                unix_millis()
            ],
        )
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        drop(guard);
        Ok(())
    }

    /// Lists stored version summaries, newest first.
    fn list_summaries(&self) -> Result<Vec<ConfigVersionSummary>, SqliteStoreError> {
        let guard =
            self.connection.lock().map_err(|_| SqliteStoreError::Db("mutex poisoned".to_string()))?;
        let rows: Vec<(i64, i64, String)> = {
            let mut stmt = guard
                .prepare(
                    "SELECT version, is_active, updated_at_json FROM shipping_configs ORDER BY \
                     version DESC",
                )
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            stmt.query_map(params![], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?
                .collect::<Result<_, _>>()
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?
        };
        drop(guard);
        rows.into_iter()
            .map(|(version, is_active, updated_at_json)| {
                let updated_at: Timestamp = serde_json::from_str(&updated_at_json)
                    .map_err(|err| SqliteStoreError::Corrupt(err.to_string()))?;
                Ok(ConfigVersionSummary {
                    version: version_from_sql(version)?,
                    is_active: is_active == 1,
                    updated_at,
                })
            })
            .collect()
    }

    /// Verifies the store can execute a simple SQL statement.
    fn check_connection(&self) -> Result<(), SqliteStoreError> {
        let guard =
            self.connection.lock().map_err(|_| SqliteStoreError::Db("mutex poisoned".to_string()))?;
        guard
            .query_row("SELECT 1", params![], |row| row.get::<_, i64>(0))
            .map(|_| ())
            .map_err(|err| SqliteStoreError::Db(err.to_string()))
    }
}

impl ShippingConfigStore for SqliteShippingConfigStore {
    fn load_active(&self) -> Result<Option<ShippingConfig>, StoreError> {
        Ok(self.load_where("is_active = 1", None)?)
    }

    fn load_version(&self, version: ConfigVersion) -> Result<Option<ShippingConfig>, StoreError> {
        let version = version_to_sql(version)?;
        Ok(self.load_where("version = ?1", Some(version))?)
    }

    fn list_versions(&self) -> Result<Vec<ConfigVersionSummary>, StoreError> {
        Ok(self.list_summaries()?)
    }

    fn activate(
        &self,
        candidate: &ShippingConfig,
        expected_active: Option<ConfigVersion>,
    ) -> Result<(), StoreError> {
        self.activate_config(candidate, expected_active)
    }

    fn readiness(&self) -> Result<(), StoreError> {
        Ok(self.check_connection()?)
    }
}

// ============================================================================
// SECTION: Row Decoding
// ============================================================================

/// Raw row for a stored configuration version.
#[derive(Debug)]
struct StoredRow {
    /// Stored version column.
    version: i64,
    /// Stored active flag.
    is_active: i64,
    /// Stored canonical JSON bytes.
    bytes: Vec<u8>,
    /// Stored hash value for the payload.
    hash_value: String,
    /// Stored hash algorithm label.
    hash_algorithm: String,
}

impl StoredRow {
    /// Verifies the row and decodes the snapshot.
    fn decode(self) -> Result<ShippingConfig, SqliteStoreError> {
        if self.bytes.len() > MAX_CONFIG_BYTES {
            return Err(SqliteStoreError::TooLarge {
                max_bytes: MAX_CONFIG_BYTES,
                actual_bytes: self.bytes.len(),
            });
        }
        if self.hash_algorithm != HASH_ALGORITHM_SHA256 {
            return Err(SqliteStoreError::Invalid(format!(
                "unsupported hash algorithm: {}",
                self.hash_algorithm
            )));
        }
        if sha256_hex(&self.bytes) != self.hash_value {
            return Err(SqliteStoreError::Corrupt(format!(
                "hash mismatch for config version {}",
                self.version
            )));
        }
        let mut config: ShippingConfig = serde_json::from_slice(&self.bytes)
            .map_err(|err| SqliteStoreError::Invalid(err.to_string()))?;
        if config.version != version_from_sql(self.version)? {
            return Err(SqliteStoreError::Invalid(
                "version mismatch between key and payload".to_string(),
            ));
        }
        config.is_active = self.is_active == 1;
        Ok(config)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Ensures the parent directory for the store exists.
fn ensure_parent_dir(path: &Path) -> Result<(), SqliteStoreError> {
    let Some(parent) = path.parent() else {
        return Err(SqliteStoreError::Io("store path missing parent directory".to_string()));
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(parent).map_err(|err| SqliteStoreError::Io(err.to_string()))
}

/// Validates store paths for safety limits.
fn validate_store_path(path: &Path) -> Result<(), SqliteStoreError> {
    if path.as_os_str().is_empty() {
        return Err(SqliteStoreError::Invalid("store path must not be empty".to_string()));
    }
    if path.display().to_string().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SqliteStoreError::Invalid("store path exceeds length limit".to_string()));
    }
    if path
        .components()
        .any(|component| component.as_os_str().to_string_lossy().len() > MAX_PATH_COMPONENT_LENGTH)
    {
        return Err(SqliteStoreError::Invalid(
            "store path contains an overlong component".to_string(),
        ));
    }
    if path.is_dir() {
        return Err(SqliteStoreError::Invalid(
            "store path must be a file, not a directory".to_string(),
        ));
    }
    Ok(())
}

/// Opens an `SQLite` connection with durable defaults.
fn open_connection(config: &SqliteStoreConfig) -> Result<Connection, SqliteStoreError> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
    let connection = Connection::open_with_flags(&config.path, flags)
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA journal_mode = {};", config.journal_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .execute_batch(&format!("PRAGMA synchronous = {};", config.sync_mode.pragma_value()))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    connection
        .busy_timeout(std::time::Duration::from_millis(config.busy_timeout_ms))
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(connection)
}

/// Initializes the `SQLite` schema or validates the existing version.
fn initialize_schema(connection: &mut Connection) -> Result<(), SqliteStoreError> {
    let tx = connection.transaction().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    tx.execute_batch("CREATE TABLE IF NOT EXISTS store_meta (version INTEGER NOT NULL);")
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    let version: Option<i64> = tx
        .query_row("SELECT version FROM store_meta LIMIT 1", params![], |row| row.get(0))
        .optional()
        .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    match version {
        None => {
            tx.execute("INSERT INTO store_meta (version) VALUES (?1)", params![SCHEMA_VERSION])
                .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS shipping_configs (
                    version INTEGER NOT NULL PRIMARY KEY,
                    config_id TEXT NOT NULL,
                    is_active INTEGER NOT NULL CHECK (is_active IN (0, 1)),
                    config_json BLOB NOT NULL,
                    config_hash TEXT NOT NULL,
                    hash_algorithm TEXT NOT NULL,
                    updated_at_json TEXT NOT NULL,
                    saved_at INTEGER NOT NULL
                );
                CREATE UNIQUE INDEX IF NOT EXISTS idx_shipping_configs_single_active
                    ON shipping_configs (is_active) WHERE is_active = 1;",
            )
            .map_err(|err| SqliteStoreError::Db(err.to_string()))?;
        }
        Some(value) if value == SCHEMA_VERSION => {}
        Some(value) => {
            return Err(SqliteStoreError::VersionMismatch(format!(
                "unsupported schema version: {value}"
            )));
        }
    }
    tx.commit().map_err(|err| SqliteStoreError::Db(err.to_string()))?;
    Ok(())
}

/// Converts a configuration version to its column value.
fn version_to_sql(version: ConfigVersion) -> Result<i64, SqliteStoreError> {
    i64::try_from(version.get())
        .map_err(|_| SqliteStoreError::Invalid(format!("version {version} out of range")))
}

/// Converts a version column value to a configuration version.
fn version_from_sql(value: i64) -> Result<ConfigVersion, SqliteStoreError> {
    u64::try_from(value)
        .ok()
        .and_then(ConfigVersion::from_raw)
        .ok_or_else(|| SqliteStoreError::Corrupt(format!("invalid stored version: {value}")))
}

/// Returns the lowercase hex SHA-256 digest of `bytes`.
fn sha256_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push(char::from(HEX[usize::from(byte >> 4)]));
        out.push(char::from(HEX[usize::from(byte & 0x0f)]));
    }
    out
}

/// Returns the current unix epoch in milliseconds.
fn unix_millis() -> i64 {
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    i64::try_from(now.as_millis()).unwrap_or(i64::MAX)
}
