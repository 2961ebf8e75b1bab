// crates/oliva-shipping-core/src/runtime/query.rs
// ============================================================================
// Module: Shipping Query Service
// Description: Read-side entry points for checkout and storefront display.
// Purpose: Resolve rates against the active snapshot and report integrity
//          failures to the audit sink.
// Dependencies: crate::{core, interfaces, runtime::resolver}, bigdecimal
// ============================================================================

//! ## Overview
//! Every call fetches the active snapshot exactly once and answers from it,
//! so a concurrent commit is observed either entirely or not at all.
//! Integrity failures are recorded as `integrity_failure` audit events;
//! request validation failures are returned without an audit record.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::ConfigVersion;
use crate::core::DisplayTable;
use crate::core::RateId;
use crate::core::ShippingConfig;
use crate::core::Zone;
use crate::interfaces::ShippingAuditEvent;
use crate::interfaces::ShippingAuditSink;
use crate::interfaces::ShippingConfigStore;
use crate::interfaces::StoreError;
use crate::runtime::resolver::ResolutionError;
use crate::runtime::resolver::resolve;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Rate returned to checkout.
///
/// A cell added with a new tier and not yet priced yields an empty
/// `rate_id` with a price of zero; callers must not treat it as free
/// shipping. Check [`RateId::is_placeholder`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveRate {
    /// Carrier rate identifier.
    pub rate_id: RateId,
    /// Display price in minor units.
    pub display_price_minor_units: i64,
    /// Configuration version the rate was resolved against.
    pub version: ConfigVersion,
}

/// Query failures.
#[derive(Debug, Error)]
pub enum QueryError {
    /// No configuration has been bootstrapped yet.
    #[error("no active shipping configuration")]
    NoActiveConfig,
    /// Resolution failed.
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ============================================================================
// SECTION: Service
// ============================================================================

/// Read-side shipping service.
pub struct ShippingQuery<S> {
    /// Configuration store.
    store: S,
    /// Audit sink for integrity failures.
    audit: Arc<dyn ShippingAuditSink>,
}

impl<S: ShippingConfigStore> ShippingQuery<S> {
    /// Creates a query service over `store`.
    #[must_use]
    pub fn new(store: S, audit: Arc<dyn ShippingAuditSink>) -> Self {
        Self {
            store,
            audit,
        }
    }

    /// Loads the active snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoActiveConfig`] or [`QueryError::Store`].
    pub fn active_config(&self) -> Result<ShippingConfig, QueryError> {
        self.store.load_active()?.ok_or(QueryError::NoActiveConfig)
    }

    /// Resolves the shipping rate for checkout.
    ///
    /// Placeholder hits are returned as is and recorded as
    /// [`ShippingAuditEvent::PlaceholderRateServed`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Resolution`] for invalid requests and integrity
    /// failures, [`QueryError::NoActiveConfig`], or [`QueryError::Store`].
    pub fn active_rate(
        &self,
        zone_name: &str,
        weight_grams: i64,
        cart_subtotal: &BigDecimal,
    ) -> Result<ActiveRate, QueryError> {
        let zone: Zone = zone_name.parse().map_err(ResolutionError::from)?;
        let config = self.active_config()?;
        match resolve(&config, zone, weight_grams, cart_subtotal) {
            Ok(descriptor) => {
                if descriptor.rate_id.is_placeholder() {
                    self.audit.record(&ShippingAuditEvent::PlaceholderRateServed {
                        version: config.version,
                        zone,
                        weight_grams,
                    });
                }
                Ok(ActiveRate {
                    rate_id: descriptor.rate_id,
                    display_price_minor_units: descriptor.display_price.get(),
                    version: config.version,
                })
            }
            Err(ResolutionError::Integrity(err)) => {
                self.audit.record(&ShippingAuditEvent::IntegrityFailure {
                    version: config.version,
                    zone,
                    weight_grams,
                    reason: err.label().to_string(),
                    message: err.to_string(),
                });
                Err(ResolutionError::Integrity(err).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Renders the active tier/zone grid for storefront display.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoActiveConfig`] or [`QueryError::Store`].
    pub fn display_table(&self) -> Result<DisplayTable, QueryError> {
        Ok(self.active_config()?.display_table())
    }
}
