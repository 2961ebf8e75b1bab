// crates/oliva-shipping-core/tests/common/mod.rs
// ============================================================================
// Module: Common Test Utilities
// Description: Shared fixtures for oliva-shipping-core tests.
// Purpose: Provide the reference three-tier configuration and audit capture.
// Dependencies: oliva-shipping-core, bigdecimal
// ============================================================================

//! ## Overview
//! Builds the storefront's reference configuration (three tiers, every
//! non-home zone priced) and an audit sink that keeps events in memory.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    dead_code,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::str::FromStr;
use std::sync::Arc;
use std::sync::Mutex;

use bigdecimal::BigDecimal;
use oliva_shipping_core::ConfigAdmin;
use oliva_shipping_core::HomeZoneRule;
use oliva_shipping_core::InMemoryShippingConfigStore;
use oliva_shipping_core::MinorUnits;
use oliva_shipping_core::ShippingAuditEvent;
use oliva_shipping_core::ShippingAuditSink;
use oliva_shipping_core::ShippingConfigDraft;
use oliva_shipping_core::TierLabel;
use oliva_shipping_core::Timestamp;
use oliva_shipping_core::WeightTier;
use oliva_shipping_core::Zone;
use oliva_shipping_core::ZoneCostEntry;
use oliva_shipping_core::ZoneCostTable;

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Prices per zone for tiers 0, 1, 2.
const PRICES: [(Zone, [(&str, i64); 3]); 3] = [
    (Zone::Europe, [("R1", 890), ("R2", 1290), ("R3", 1990)]),
    (Zone::ExtendedEurope, [("XE1", 1490), ("XE2", 2190), ("XE3", 3490)]),
    (Zone::World, [("W1", 2490), ("W2", 3990), ("W3", 5990)]),
];

/// Parses a decimal literal.
pub fn decimal(value: &str) -> BigDecimal {
    BigDecimal::from_str(value).expect("decimal literal")
}

/// Home rule: free from 150.00, otherwise 5.90.
pub fn home_rule() -> HomeZoneRule {
    HomeZoneRule {
        free_threshold: decimal("150.00"),
        standard_cost: MinorUnits::new(590),
        standard_rate_id: "IT-STD".into(),
        free_rate_id: "IT-FREE".into(),
    }
}

/// Tiers `[0,1000]`, `[1001,3000]`, `[3001,inf)` with every cell priced.
pub fn reference_draft() -> ShippingConfigDraft {
    let weight_tiers = vec![
        WeightTier::bounded(0, 1000, TierLabel::new("0-1kg", "0-1kg")),
        WeightTier::bounded(1001, 3000, TierLabel::new("1-3kg", "1-3kg")),
        WeightTier::unbounded(3001, TierLabel::new("3kg+", "3kg+")),
    ];
    let mut entries = Vec::new();
    for (zone, cells) in PRICES {
        for (tier_index, (rate, price)) in cells.into_iter().enumerate() {
            entries.push(ZoneCostEntry {
                zone,
                tier_index,
                rate_id: rate.into(),
                display_price: MinorUnits::new(price),
            });
        }
    }
    ShippingConfigDraft {
        weight_tiers,
        zone_costs: ZoneCostTable::from_entries(entries),
        home_zone_rule: home_rule(),
    }
}

/// Admin service over a fresh in-memory store, bootstrapped with the
/// reference draft.
pub fn bootstrapped_admin(
    audit: Arc<RecordingAuditSink>,
) -> ConfigAdmin<InMemoryShippingConfigStore> {
    let admin = ConfigAdmin::new(InMemoryShippingConfigStore::new(), audit);
    admin.bootstrap(reference_draft(), Timestamp::Logical(1)).expect("bootstrap");
    admin
}

// ============================================================================
// SECTION: Audit Capture
// ============================================================================

/// Audit sink keeping every event in memory.
#[derive(Default)]
pub struct RecordingAuditSink {
    /// Recorded events, in order.
    events: Mutex<Vec<ShippingAuditEvent>>,
}

impl RecordingAuditSink {
    /// Returns a snapshot of recorded events.
    pub fn events(&self) -> Vec<ShippingAuditEvent> {
        self.events.lock().expect("audit lock").clone()
    }
}

impl ShippingAuditSink for RecordingAuditSink {
    fn record(&self, event: &ShippingAuditEvent) {
        self.events.lock().expect("audit lock").push(event.clone());
    }
}
