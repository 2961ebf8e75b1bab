// crates/oliva-shipping-core/tests/resolution_scenarios.rs
// ============================================================================
// Module: Resolution Scenario Tests
// Description: Checkout resolution against the reference configuration.
// Purpose: Pin tier boundaries, the home threshold, and integrity reporting.
// ============================================================================

//! Resolution scenarios for tiers, zones, and the home rule.

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
    reason = "Test-only assertions and helpers are permitted."
)]

mod common;

use std::sync::Arc;

use oliva_shipping_core::ConfigId;
use oliva_shipping_core::ConfigVersion;
use oliva_shipping_core::InvariantError;
use oliva_shipping_core::MinorUnits;
use oliva_shipping_core::NoopAuditSink;
use oliva_shipping_core::QueryError;
use oliva_shipping_core::ResolutionError;
use oliva_shipping_core::ShippingAuditEvent;
use oliva_shipping_core::ShippingConfig;
use oliva_shipping_core::ShippingConfigStore;
use oliva_shipping_core::ShippingQuery;
use oliva_shipping_core::TierLabel;
use oliva_shipping_core::Timestamp;
use oliva_shipping_core::Zone;
use oliva_shipping_core::ZoneCostTable;
use oliva_shipping_core::runtime::resolve;

use crate::common::RecordingAuditSink;
use crate::common::bootstrapped_admin;
use crate::common::decimal;
use crate::common::reference_draft;

fn reference_config() -> ShippingConfig {
    ShippingConfig::initial(ConfigId::default(), reference_draft(), Timestamp::Logical(1))
}

// ============================================================================
// SECTION: Tier Resolution
// ============================================================================

#[test]
fn europe_weights_resolve_to_their_tiers() {
    let config = reference_config();
    let subtotal = decimal("0");
    let light = resolve(&config, Zone::Europe, 500, &subtotal).expect("500 g");
    assert_eq!(light.rate_id.as_str(), "R1");
    assert_eq!(light.display_price, MinorUnits::new(890));
    let medium = resolve(&config, Zone::Europe, 3000, &subtotal).expect("3000 g");
    assert_eq!(medium.rate_id.as_str(), "R2");
    assert_eq!(medium.display_price, MinorUnits::new(1290));
    let heavy = resolve(&config, Zone::Europe, 5000, &subtotal).expect("5000 g");
    assert_eq!(heavy.rate_id.as_str(), "R3");
    assert_eq!(heavy.display_price, MinorUnits::new(1990));
}

#[test]
fn tier_maximum_is_inclusive() {
    let config = reference_config();
    let subtotal = decimal("0");
    let rate = resolve(&config, Zone::World, 1000, &subtotal).expect("1000");
    assert_eq!(rate.rate_id.as_str(), "W1");
    let rate = resolve(&config, Zone::World, 1001, &subtotal).expect("1001");
    assert_eq!(rate.rate_id.as_str(), "W2");
    assert_eq!(resolve(&config, Zone::World, 0, &subtotal).expect("0").rate_id.as_str(), "W1");
}

#[test]
fn weight_below_first_tier_is_out_of_range() {
    let mut draft = reference_draft();
    draft.weight_tiers[0].min_grams = 100;
    let config = ShippingConfig::initial(ConfigId::default(), draft, Timestamp::Logical(1));
    let err = resolve(&config, Zone::Europe, 50, &decimal("0")).expect_err("below range");
    assert_eq!(
        err,
        ResolutionError::WeightOutOfRange {
            weight_grams: 50
        }
    );
}

// ============================================================================
// SECTION: Home Zone
// ============================================================================

#[test]
fn home_threshold_is_inclusive() {
    let config = reference_config();
    let below = resolve(&config, Zone::Home, 900, &decimal("149.99")).expect("below");
    assert_eq!(below.rate_id.as_str(), "IT-STD");
    assert_eq!(below.display_price, MinorUnits::new(590));
    let at = resolve(&config, Zone::Home, 900, &decimal("150.00")).expect("at");
    assert_eq!(at.rate_id.as_str(), "IT-FREE");
    assert_eq!(at.display_price, MinorUnits::ZERO);
    let scale_differs = resolve(&config, Zone::Home, 900, &decimal("150")).expect("scale");
    assert_eq!(scale_differs.rate_id.as_str(), "IT-FREE");
}

#[test]
fn home_zone_resolves_any_weight() {
    let config = reference_config();
    for weight in [-1, 0, 999_999_999] {
        let rate = resolve(&config, Zone::Home, weight, &decimal("10")).expect("home");
        assert_eq!(rate.display_price, MinorUnits::new(590));
    }
}

// ============================================================================
// SECTION: Query Service
// ============================================================================

#[test]
fn active_rate_reports_version_and_minor_units() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    let query = ShippingQuery::new(admin.store().clone(), audit);
    let rate = query.active_rate("extended_europe", 2500, &decimal("20")).expect("rate");
    assert_eq!(rate.rate_id.as_str(), "XE2");
    assert_eq!(rate.display_price_minor_units, 2190);
    assert_eq!(rate.version, ConfigVersion::INITIAL);
}

#[test]
fn unknown_zone_name_is_a_request_error() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    let query = ShippingQuery::new(admin.store().clone(), Arc::<RecordingAuditSink>::clone(&audit));
    let err = query.active_rate("atlantis", 100, &decimal("0")).expect_err("zone");
    assert!(matches!(err, QueryError::Resolution(ResolutionError::UnknownZone(_))));
    assert_eq!(audit.events().len(), 1, "only the bootstrap event is recorded");
}

#[test]
fn query_before_bootstrap_has_no_active_config() {
    let store = oliva_shipping_core::InMemoryShippingConfigStore::new();
    let query = ShippingQuery::new(store, Arc::new(NoopAuditSink));
    let err = query.display_table().expect_err("empty store");
    assert!(matches!(err, QueryError::NoActiveConfig));
}

#[test]
fn integrity_failures_are_audited() {
    let store = oliva_shipping_core::InMemoryShippingConfigStore::new();
    let mut draft = reference_draft();
    draft.zone_costs = ZoneCostTable::from_entries(
        draft
            .zone_costs
            .entries()
            .iter()
            .filter(|entry| !(entry.zone == Zone::World && entry.tier_index == 2))
            .cloned()
            .collect(),
    );
    let broken = ShippingConfig::initial(ConfigId::default(), draft, Timestamp::Logical(1));
    store.activate(&broken, None).expect("stores without validation");
    let audit = Arc::new(RecordingAuditSink::default());
    let query = ShippingQuery::new(store, Arc::<RecordingAuditSink>::clone(&audit));

    let err = query.active_rate("world", 4000, &decimal("0")).expect_err("missing cell");
    let QueryError::Resolution(resolution) = err else {
        panic!("expected resolution error");
    };
    assert!(resolution.is_integrity_failure());
    assert_eq!(
        resolution,
        ResolutionError::Integrity(InvariantError::MissingZoneCost {
            zone: Zone::World,
            tier_index: 2,
        })
    );
    let events = audit.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        ShippingAuditEvent::IntegrityFailure { zone: Zone::World, weight_grams: 4000, reason, .. }
            if reason == "missing_zone_cost"
    ));

    query.active_rate("world", -3, &decimal("0")).expect_err("negative weight");
    assert_eq!(audit.events().len(), 1, "request errors are not audited");
}

#[test]
fn unpriced_cells_resolve_to_placeholders_and_are_audited() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    admin
        .add_tier(2000, TierLabel::new("3-5kg", "3-5kg"), Timestamp::Logical(2))
        .expect("add tier");
    let query = ShippingQuery::new(admin.store().clone(), Arc::<RecordingAuditSink>::clone(&audit));
    let before = audit.events().len();

    let rate = query.active_rate("europe", 4000, &decimal("0")).expect("placeholder rate");
    assert!(rate.rate_id.is_placeholder());
    assert_eq!(rate.display_price_minor_units, 0);
    assert_eq!(rate.version.get(), 2);
    let events = audit.events();
    assert_eq!(events.len(), before + 1);
    assert!(matches!(
        events.last(),
        Some(ShippingAuditEvent::PlaceholderRateServed {
            zone: Zone::Europe,
            weight_grams: 4000,
            version,
        }) if version.get() == 2
    ));

    let priced = query.active_rate("europe", 6000, &decimal("0")).expect("priced rate");
    assert_eq!(priced.rate_id.as_str(), "R3");
    assert_eq!(audit.events().len(), before + 1, "priced cells are not audited");
}

#[test]
fn display_table_lists_every_zone_and_tier() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    let query = ShippingQuery::new(admin.store().clone(), audit);
    let table = query.display_table().expect("table");
    assert_eq!(table.version, ConfigVersion::INITIAL);
    assert_eq!(table.tiers.len(), 3);
    assert_eq!(table.tiers[2].max_grams, None);
    assert_eq!(table.tiers[1].label.primary, "1-3kg");
    assert_eq!(table.zones.len(), 3);
    assert!(table.zones.iter().all(|row| row.cells.iter().all(Option::is_some)));
    assert_eq!(table.home_zone_rule.standard_cost, MinorUnits::new(590));
}
