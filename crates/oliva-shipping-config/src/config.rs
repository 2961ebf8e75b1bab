// crates/oliva-shipping-config/src/config.rs
// ============================================================================
// Module: Shipping Engine Configuration
// Description: Configuration loading and validation for the shipping engine.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: oliva-shipping-core, oliva-shipping-store-sqlite, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The optional `[seed]` section is converted into a
//! [`ShippingConfigDraft`] and must pass the same aggregate validation as a
//! committed configuration.
//! Security posture: config inputs are untrusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use oliva_shipping_core::ConfigId;
use oliva_shipping_core::HomeZoneRule;
use oliva_shipping_core::MinorUnits;
use oliva_shipping_core::RateId;
use oliva_shipping_core::ShippingConfigDraft;
use oliva_shipping_core::TierLabel;
use oliva_shipping_core::WeightTier;
use oliva_shipping_core::Zone;
use oliva_shipping_core::ZoneCostEntry;
use oliva_shipping_core::ZoneCostTable;
use oliva_shipping_store_sqlite::SqliteStoreConfig;
use oliva_shipping_store_sqlite::SqliteStoreMode;
use oliva_shipping_store_sqlite::SqliteSyncMode;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "oliva-shipping.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "OLIVA_SHIPPING_CONFIG";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Default `SQLite` busy timeout in milliseconds.
const DEFAULT_STORE_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum `SQLite` busy timeout in milliseconds.
const MAX_STORE_BUSY_TIMEOUT_MS: u64 = 60_000;
/// Maximum number of seed tiers.
const MAX_SEED_TIERS: usize = 256;
/// Maximum length of a configuration or rate identifier.
const MAX_IDENTIFIER_LENGTH: usize = 128;
/// Maximum length of a single tier label.
const MAX_LABEL_LENGTH: usize = 256;

// ============================================================================
// SECTION: Root Config
// ============================================================================

/// Shipping engine configuration loaded from `oliva-shipping.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShippingEngineConfig {
    /// Configuration store backend.
    #[serde(default)]
    pub store: StoreConfig,
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
    /// Optional seed used to bootstrap version 1.
    #[serde(default)]
    pub seed: Option<SeedConfig>,
}

impl ShippingEngineConfig {
    /// Loads configuration from disk using the default resolution rules:
    /// explicit path, then `OLIVA_SHIPPING_CONFIG`, then
    /// `oliva-shipping.toml` in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::parse(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML and
    /// [`ConfigError::Invalid`] when validation fails.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.audit.validate()?;
        if let Some(seed) = &self.seed {
            seed.validate()?;
        }
        Ok(())
    }

    /// Returns the configuration identifier for bootstrapped snapshots.
    #[must_use]
    pub fn config_id(&self) -> ConfigId {
        self.seed
            .as_ref()
            .and_then(|seed| seed.config_id.as_deref())
            .map_or_else(ConfigId::default, |id| ConfigId::new(id.trim()))
    }
}

// ============================================================================
// SECTION: Store Config
// ============================================================================

/// Store backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreType {
    /// Process-local store; contents are lost on exit.
    #[default]
    Memory,
    /// Durable `SQLite` store.
    Sqlite,
}

/// Configuration store settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Store backend type.
    #[serde(rename = "type", default)]
    pub store_type: StoreType,
    /// `SQLite` database path when using the sqlite backend.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_store_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// `SQLite` journal mode.
    #[serde(default)]
    pub journal_mode: SqliteStoreMode,
    /// `SQLite` synchronous mode.
    #[serde(default)]
    pub sync_mode: SqliteSyncMode,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_type: StoreType::default(),
            path: None,
            busy_timeout_ms: default_store_busy_timeout_ms(),
            journal_mode: SqliteStoreMode::default(),
            sync_mode: SqliteSyncMode::default(),
        }
    }
}

impl StoreConfig {
    /// Validates store configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match self.store_type {
            StoreType::Memory => {
                if self.path.is_some() {
                    return Err(ConfigError::Invalid(
                        "memory store must not set path".to_string(),
                    ));
                }
                Ok(())
            }
            StoreType::Sqlite => {
                let path = self.path.as_ref().ok_or_else(|| {
                    ConfigError::Invalid("sqlite store requires path".to_string())
                })?;
                validate_field_path("store path", path)?;
                if self.busy_timeout_ms == 0 || self.busy_timeout_ms > MAX_STORE_BUSY_TIMEOUT_MS {
                    return Err(ConfigError::Invalid(format!(
                        "store busy_timeout_ms must be between 1 and {MAX_STORE_BUSY_TIMEOUT_MS}"
                    )));
                }
                Ok(())
            }
        }
    }

    /// Returns `SQLite` store settings when the sqlite backend is selected.
    #[must_use]
    pub fn sqlite_config(&self) -> Option<SqliteStoreConfig> {
        match (self.store_type, &self.path) {
            (StoreType::Sqlite, Some(path)) => Some(SqliteStoreConfig {
                path: path.clone(),
                busy_timeout_ms: self.busy_timeout_ms,
                journal_mode: self.journal_mode,
                sync_mode: self.sync_mode,
            }),
            _ => None,
        }
    }
}

/// Returns the default busy timeout for the store.
const fn default_store_busy_timeout_ms() -> u64 {
    DEFAULT_STORE_BUSY_TIMEOUT_MS
}

// ============================================================================
// SECTION: Audit Config
// ============================================================================

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkType {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on standard error.
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Audit sink settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Sink type.
    #[serde(default)]
    pub sink: AuditSinkType,
    /// Log file path for the file sink.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates audit configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkType::File, Some(path)) => validate_field_path("audit path", path),
            (AuditSinkType::File, None) => {
                Err(ConfigError::Invalid("file audit sink requires path".to_string()))
            }
            (AuditSinkType::None | AuditSinkType::Stderr, Some(_)) => Err(ConfigError::Invalid(
                "audit path is only valid for the file sink".to_string(),
            )),
            (AuditSinkType::None | AuditSinkType::Stderr, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Seed Config
// ============================================================================

/// Seed catalog used to bootstrap the first configuration version.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    /// Configuration identifier; defaults to `shipping-config`.
    #[serde(default)]
    pub config_id: Option<String>,
    /// Weight tiers in ascending order.
    pub tiers: Vec<SeedTier>,
    /// Zone costs, one per non-home zone and tier.
    #[serde(default)]
    pub zone_costs: Vec<SeedZoneCost>,
    /// Home-country rule.
    pub home_zone_rule: SeedHomeZoneRule,
}

/// Seed weight tier.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedTier {
    /// Inclusive minimum weight in grams.
    pub min_grams: u64,
    /// Inclusive maximum weight in grams; omitted for the open-ended tier.
    #[serde(default)]
    pub max_grams: Option<u64>,
    /// Display label.
    pub label: TierLabel,
}

/// Seed zone cost cell.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedZoneCost {
    /// Priced zone.
    pub zone: Zone,
    /// Tier index the cost applies to.
    pub tier: usize,
    /// Carrier rate identifier.
    pub rate_id: String,
    /// Display price in minor units.
    pub price_minor_units: i64,
}

/// Seed home-country rule.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedHomeZoneRule {
    /// Free-shipping threshold in major units, written as a decimal string.
    pub free_threshold: String,
    /// Standard cost in minor units.
    pub standard_cost_minor_units: i64,
    /// Rate identifier charged below the threshold.
    pub standard_rate_id: String,
    /// Rate identifier used at or above the threshold.
    pub free_rate_id: String,
}

impl SeedConfig {
    /// Validates seed limits and the resulting aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(config_id) = &self.config_id {
            validate_identifier("seed.config_id", config_id)?;
        }
        if self.tiers.len() > MAX_SEED_TIERS {
            return Err(ConfigError::Invalid(format!(
                "seed.tiers exceeds max entries ({MAX_SEED_TIERS})"
            )));
        }
        let max_costs = MAX_SEED_TIERS * Zone::non_home().len();
        if self.zone_costs.len() > max_costs {
            return Err(ConfigError::Invalid(format!(
                "seed.zone_costs exceeds max entries ({max_costs})"
            )));
        }
        for tier in &self.tiers {
            validate_label(&tier.label)?;
        }
        for cost in &self.zone_costs {
            validate_identifier("seed.zone_costs.rate_id", &cost.rate_id)?;
        }
        let rule = &self.home_zone_rule;
        validate_identifier("seed.home_zone_rule.standard_rate_id", &rule.standard_rate_id)?;
        validate_identifier("seed.home_zone_rule.free_rate_id", &rule.free_rate_id)?;
        self.to_draft()?
            .validate()
            .map_err(|err| ConfigError::Invalid(format!("seed is inconsistent: {err}")))
    }

    /// Converts the seed into a configuration draft without validating it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the free threshold is not a
    /// decimal amount.
    pub fn to_draft(&self) -> Result<ShippingConfigDraft, ConfigError> {
        let weight_tiers = self
            .tiers
            .iter()
            .map(|tier| match tier.max_grams {
                Some(max_grams) => {
                    WeightTier::bounded(tier.min_grams, max_grams, tier.label.clone())
                }
                None => WeightTier::unbounded(tier.min_grams, tier.label.clone()),
            })
            .collect();
        let entries = self
            .zone_costs
            .iter()
            .map(|cost| ZoneCostEntry {
                zone: cost.zone,
                tier_index: cost.tier,
                rate_id: RateId::new(cost.rate_id.trim()),
                display_price: MinorUnits::new(cost.price_minor_units),
            })
            .collect();
        Ok(ShippingConfigDraft {
            weight_tiers,
            zone_costs: ZoneCostTable::from_entries(entries),
            home_zone_rule: self.home_zone_rule.to_rule()?,
        })
    }
}

impl SeedHomeZoneRule {
    /// Converts the seed rule into a [`HomeZoneRule`].
    fn to_rule(&self) -> Result<HomeZoneRule, ConfigError> {
        let free_threshold = BigDecimal::from_str(self.free_threshold.trim()).map_err(|_| {
            ConfigError::Invalid(
                "seed.home_zone_rule.free_threshold must be a decimal amount".to_string(),
            )
        })?;
        Ok(HomeZoneRule {
            free_threshold,
            standard_cost: MinorUnits::new(self.standard_cost_minor_units),
            standard_rate_id: RateId::new(self.standard_rate_id.trim()),
            free_rate_id: RateId::new(self.free_rate_id.trim()),
        })
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved config path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a configured file path against length constraints.
fn validate_field_path(field: &str, path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} component too long")));
        }
    }
    Ok(())
}

/// Validates an identifier string is non-empty and bounded.
fn validate_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Validates both label variants are bounded and the primary is set.
fn validate_label(label: &TierLabel) -> Result<(), ConfigError> {
    if label.primary.trim().is_empty() {
        return Err(ConfigError::Invalid("seed.tiers.label.primary must be non-empty".to_string()));
    }
    if label.primary.len() > MAX_LABEL_LENGTH || label.secondary.len() > MAX_LABEL_LENGTH {
        return Err(ConfigError::Invalid("seed.tiers.label exceeds max length".to_string()));
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
