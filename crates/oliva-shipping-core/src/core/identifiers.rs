// crates/oliva-shipping-core/src/core/identifiers.rs
// ============================================================================
// Module: Shipping Identifiers
// Description: Opaque identifiers for shipping configurations and carrier rates.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Identifiers used across the shipping engine. Configuration versions are
//! numeric and 1-based; rate and configuration identifiers are opaque strings
//! that serialize transparently on the wire.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::num::NonZeroU64;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Logical identifier of the shipping configuration lineage.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigId(String);

impl ConfigId {
    /// Creates a new configuration identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConfigId {
    fn default() -> Self {
        Self::new("shipping-config")
    }
}

impl fmt::Display for ConfigId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Committed configuration version.
///
/// # Invariants
/// - Always >= 1 (non-zero, 1-based).
/// - Each commit produces exactly `previous + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigVersion(NonZeroU64);

impl ConfigVersion {
    /// The version assigned to a bootstrapped configuration.
    pub const INITIAL: Self = Self(NonZeroU64::MIN);

    /// Creates a new version from a non-zero value.
    #[must_use]
    pub const fn new(version: NonZeroU64) -> Self {
        Self(version)
    }

    /// Creates a version from a raw value (returns `None` if zero).
    #[must_use]
    pub fn from_raw(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    /// Returns the raw version value (always >= 1).
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the version that follows this one, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ConfigVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.get().fmt(f)
    }
}

/// Carrier rate identifier returned by resolution.
///
/// # Invariants
/// - Opaque UTF-8 string; the empty string marks an unfilled placeholder cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct RateId(String);

impl RateId {
    /// Creates a new rate identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the placeholder identifier used for cells awaiting a price.
    #[must_use]
    pub const fn placeholder() -> Self {
        Self(String::new())
    }

    /// Returns true when the identifier is the empty placeholder.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for RateId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RateId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
