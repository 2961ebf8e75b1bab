// crates/oliva-shipping-core/tests/admin_commit.rs
// ============================================================================
// Module: Admin Commit Tests
// Description: Edit sessions, cascades, versioning, and concurrent commits.
// Purpose: Ensure only validated configurations are ever activated.
// ============================================================================

//! Admin service tests covering edits, commits, and version history.

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

use oliva_shipping_core::AdminError;
use oliva_shipping_core::ConfigAdmin;
use oliva_shipping_core::ConfigId;
use oliva_shipping_core::ConfigVersion;
use oliva_shipping_core::EditState;
use oliva_shipping_core::InMemoryShippingConfigStore;
use oliva_shipping_core::InvariantError;
use oliva_shipping_core::MinorUnits;
use oliva_shipping_core::RateDescriptor;
use oliva_shipping_core::ShippingAuditEvent;
use oliva_shipping_core::ShippingConfig;
use oliva_shipping_core::ShippingConfigStore;
use oliva_shipping_core::TierLabel;
use oliva_shipping_core::TierUpperBound;
use oliva_shipping_core::Timestamp;
use oliva_shipping_core::WeightTier;
use oliva_shipping_core::Zone;
use oliva_shipping_core::ZoneCostEntry;
use oliva_shipping_core::ZoneCostTable;
use oliva_shipping_core::runtime::resolve;

use crate::common::RecordingAuditSink;
use crate::common::bootstrapped_admin;
use crate::common::decimal;
use crate::common::home_rule;
use crate::common::reference_draft;

fn active(admin: &ConfigAdmin<InMemoryShippingConfigStore>) -> ShippingConfig {
    admin.store().load_active().expect("load").expect("active config")
}

fn version(raw: u64) -> ConfigVersion {
    ConfigVersion::from_raw(raw).expect("non-zero version")
}

fn europe_rate(config: &ShippingConfig, weight: i64) -> String {
    resolve(config, Zone::Europe, weight, &decimal("0")).expect("europe rate").rate_id.to_string()
}

// ============================================================================
// SECTION: Tier Edits
// ============================================================================

#[test]
fn removing_a_middle_tier_cascades_zone_costs() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let committed = admin.remove_tier(1, Timestamp::Logical(2)).expect("remove");
    assert_eq!(committed, version(2));

    let config = active(&admin);
    assert_eq!(config.weight_tiers.len(), 2);
    assert_eq!(config.weight_tiers[1].min_grams, 1001);
    assert!(config.weight_tiers[1].is_unbounded());
    for zone in Zone::non_home() {
        let entries: Vec<&ZoneCostEntry> =
            config.zone_costs.entries().iter().filter(|entry| entry.zone == *zone).collect();
        assert_eq!(entries.len(), 2, "zone {zone}");
        assert_eq!(entries[1].tier_index, 1);
    }
    assert_eq!(config.zone_costs.lookup(Zone::Europe, 1).expect("cell").rate_id.as_str(), "R3");
    assert_eq!(europe_rate(&config, 2000), "R3");
}

#[test]
fn removing_the_final_tier_keeps_the_tail_unbounded() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    admin.remove_tier(2, Timestamp::Logical(2)).expect("remove tail");
    let config = active(&admin);
    assert_eq!(config.weight_tiers.len(), 2);
    assert_eq!(config.weight_tiers[1].upper, TierUpperBound::Unbounded);
    assert_eq!(europe_rate(&config, 50_000), "R2");
}

#[test]
fn the_last_remaining_tier_cannot_be_removed() {
    let admin = ConfigAdmin::new(
        InMemoryShippingConfigStore::new(),
        Arc::new(RecordingAuditSink::default()),
    );
    let mut draft = reference_draft();
    draft.weight_tiers = vec![WeightTier::unbounded(0, TierLabel::new("tutto", "all"))];
    draft.zone_costs = ZoneCostTable::from_entries(
        draft.zone_costs.entries().iter().filter(|entry| entry.tier_index == 0).cloned().collect(),
    );
    admin.bootstrap(draft, Timestamp::Logical(1)).expect("bootstrap");

    let err = admin.remove_tier(0, Timestamp::Logical(2)).expect_err("last tier");
    assert!(matches!(err, AdminError::Invariant(InvariantError::LastTier)));
    assert_eq!(active(&admin).version, ConfigVersion::INITIAL);
}

#[test]
fn adding_a_tier_splices_before_the_unbounded_tail() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut session = admin.begin().expect("begin");
    let index = session.add_tier(2000, TierLabel::new("3-5kg", "3-5kg")).expect("add");
    assert_eq!(index, 2);
    assert_eq!(session.state(), EditState::Mutating);
    admin.commit(&mut session, Timestamp::Logical(2)).expect("commit placeholders");

    let config = active(&admin);
    let bounds: Vec<(u64, Option<u64>)> =
        config.weight_tiers.iter().map(|tier| (tier.min_grams, tier.max_grams())).collect();
    assert_eq!(bounds, vec![(0, Some(1000)), (1001, Some(3000)), (3001, Some(5000)), (5001, None)]);
    assert_eq!(
        admin.placeholder_cells().expect("placeholders"),
        vec![(Zone::Europe, 2), (Zone::ExtendedEurope, 2), (Zone::World, 2)]
    );
    assert_eq!(europe_rate(&config, 6000), "R3");
    let placeholder = resolve(&config, Zone::Europe, 4000, &decimal("0")).expect("placeholder");
    assert_eq!(placeholder, RateDescriptor::placeholder());
}

#[test]
fn adding_a_tier_after_a_bounded_tail_appends() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    admin
        .set_tier_upper_bound(
            2,
            TierUpperBound::Bounded {
                max_grams: 10_000,
            },
            Timestamp::Logical(2),
        )
        .expect("bound tail");
    admin
        .add_tier(5000, TierLabel::new("10-15kg", "10-15kg"), Timestamp::Logical(3))
        .expect("append");
    let config = active(&admin);
    assert_eq!(config.weight_tiers[3].min_grams, 10_001);
    assert_eq!(config.weight_tiers[3].max_grams(), Some(15_000));
    assert_eq!(config.zone_costs.lookup(Zone::World, 2).expect("kept").rate_id.as_str(), "W3");
    assert_eq!(config.zone_costs.placeholder_cells().len(), 3);
}

#[test]
fn zero_width_tiers_are_rejected_immediately() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut session = admin.begin().expect("begin");
    let err = session.add_tier(0, TierLabel::default()).expect_err("zero width");
    assert!(matches!(
        err,
        AdminError::Invariant(InvariantError::InvertedTier {
            index: 2
        })
    ));
    assert!(session.edits().is_empty());
    assert_eq!(session.state(), EditState::Loaded);
}

#[test]
fn moving_a_tier_maximum_moves_the_next_minimum() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    admin
        .set_tier_upper_bound(
            0,
            TierUpperBound::Bounded {
                max_grams: 1500,
            },
            Timestamp::Logical(2),
        )
        .expect("move bound");
    let config = active(&admin);
    assert_eq!(config.weight_tiers[1].min_grams, 1501);
    assert_eq!(europe_rate(&config, 1200), "R1");
    assert_eq!(europe_rate(&config, 1501), "R2");
}

#[test]
fn relabeling_changes_only_the_label() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    admin
        .relabel_tier(1, TierLabel::new("da 1 a 3 kg", "1 to 3 kg"), Timestamp::Logical(2))
        .expect("relabel");
    let config = active(&admin);
    assert_eq!(config.weight_tiers[1].label.secondary, "1 to 3 kg");
    assert_eq!(config.weight_tiers[1].min_grams, 1001);
    assert_eq!(config.zone_costs, reference_draft().zone_costs);
}

// ============================================================================
// SECTION: Zone Cost and Home Rule Edits
// ============================================================================

#[test]
fn zone_cost_edits_are_checked_before_recording() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut session = admin.begin().expect("begin");
    let price = RateDescriptor::new("X", MinorUnits::new(100));

    let unknown = session.update_zone_cost(Zone::Europe, 3, price.clone()).expect_err("index");
    assert!(matches!(
        unknown,
        AdminError::Invariant(InvariantError::UnknownTierIndex {
            index: 3,
            tier_count: 3
        })
    ));
    let home = session.update_zone_cost(Zone::Home, 0, price).expect_err("home");
    assert!(matches!(home, AdminError::Invariant(InvariantError::HomeZoneCostEntry)));
    let negative =
        session
            .update_zone_cost(Zone::World, 0, RateDescriptor::new("W", MinorUnits::new(-1)))
            .expect_err("neg");
    assert!(matches!(negative, AdminError::Invariant(InvariantError::NegativeCost)));
    assert!(session.edits().is_empty());
}

#[test]
fn home_rule_replacement_is_validated() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut rule = home_rule();
    rule.free_threshold = decimal("-0.01");
    let err =
        admin.update_home_zone_rule(rule, Timestamp::Logical(2)).expect_err("negative threshold");
    assert!(matches!(err, AdminError::Invariant(InvariantError::NegativeThreshold)));

    let mut rule = home_rule();
    rule.free_threshold = decimal("99.00");
    admin.update_home_zone_rule(rule, Timestamp::Logical(3)).expect("replace");
    let config = active(&admin);
    let rate = resolve(&config, Zone::Home, 0, &decimal("99.00")).expect("home");
    assert_eq!(rate.display_price, MinorUnits::ZERO);
}

// ============================================================================
// SECTION: Commit Semantics
// ============================================================================

#[test]
fn failed_commit_writes_nothing_and_is_audited() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    let mut session = admin.begin().expect("begin");
    session.set_tier_upper_bound(0, TierUpperBound::Unbounded).expect("recorded");

    let err = admin.commit(&mut session, Timestamp::Logical(2)).expect_err("invalid catalog");
    assert!(matches!(err, AdminError::Invariant(InvariantError::MultipleUnboundedTiers)));
    assert_eq!(session.state(), EditState::Rejected);
    assert_eq!(admin.store().list_versions().expect("versions").len(), 1);
    assert_eq!(active(&admin).weight_tiers, reference_draft().weight_tiers);

    let events = audit.events();
    assert!(matches!(
        events.last(),
        Some(ShippingAuditEvent::CommitRejected { active_version: Some(v), reason, .. })
            if *v == ConfigVersion::INITIAL && reason == "multiple_unbounded_tiers"
    ));
}

#[test]
fn versions_increase_and_exactly_one_is_active() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    for (step, price) in [990_i64, 1090, 1190].into_iter().enumerate() {
        let at = Timestamp::Logical(u64::try_from(step).expect("step") + 2);
        let descriptor = RateDescriptor::new("R1", MinorUnits::new(price));
        admin.update_zone_cost(Zone::Europe, 0, descriptor, at).expect("commit");
    }
    let versions = admin.store().list_versions().expect("versions");
    let numbers: Vec<u64> = versions.iter().map(|summary| summary.version.get()).collect();
    assert_eq!(numbers, vec![4, 3, 2, 1]);
    assert_eq!(versions.iter().filter(|summary| summary.is_active).count(), 1);
    assert!(versions[0].is_active);

    let original = admin.store().load_version(ConfigVersion::INITIAL).expect("load").expect("v1");
    assert!(!original.is_active);
    assert_eq!(
        original.zone_costs.lookup(Zone::Europe, 0).expect("cell").display_price,
        MinorUnits::new(890)
    );
    let latest = active(&admin);
    assert_eq!(latest.created_at, Timestamp::Logical(1));
    assert_eq!(latest.updated_at, Timestamp::Logical(4));

    let committed = audit
        .events()
        .into_iter()
        .filter(|event| matches!(event, ShippingAuditEvent::ConfigCommitted { .. }))
        .count();
    assert_eq!(committed, 3);
}

#[test]
fn stale_sessions_replay_on_the_fresh_configuration() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut first = admin.begin().expect("first");
    let mut second = admin.begin().expect("second");
    first
        .update_zone_cost(Zone::Europe, 0, RateDescriptor::new("R1", MinorUnits::new(990)))
        .expect("first edit");
    second
        .update_zone_cost(Zone::World, 1, RateDescriptor::new("W2", MinorUnits::new(4100)))
        .expect("second edit");
    second
        .update_zone_cost(Zone::Europe, 0, RateDescriptor::new("R1", MinorUnits::new(950)))
        .expect("overlap");

    assert_eq!(admin.commit(&mut first, Timestamp::Logical(2)).expect("first commit"), version(2));
    assert_eq!(
        admin.commit(&mut second, Timestamp::Logical(3)).expect("second commit"),
        version(3)
    );

    let config = active(&admin);
    assert_eq!(
        config.zone_costs.lookup(Zone::World, 1).expect("world").display_price,
        MinorUnits::new(4100)
    );
    assert_eq!(
        config.zone_costs.lookup(Zone::Europe, 0).expect("europe").display_price,
        MinorUnits::new(950)
    );
}

#[test]
fn stale_sessions_with_tier_edits_are_rejected_after_catalog_changes() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    let mut first = admin.begin().expect("first");
    let mut second = admin.begin().expect("second");
    first.remove_tier(0).expect("remove light tier");
    second.remove_tier(1).expect("remove middle tier");

    assert_eq!(admin.commit(&mut first, Timestamp::Logical(2)).expect("first commit"), version(2));
    let err = admin.commit(&mut second, Timestamp::Logical(3)).expect_err("stale");
    assert!(matches!(
        err,
        AdminError::StaleSession { base, active } if base == version(1) && active == version(2)
    ));
    assert_eq!(second.state(), EditState::Rejected);

    let config = active(&admin);
    assert_eq!(config.version, version(2));
    let labels: Vec<&str> =
        config.weight_tiers.iter().map(|tier| tier.label.primary.as_str()).collect();
    assert_eq!(labels, ["1-3kg", "3kg+"]);
    assert!(matches!(
        audit.events().last(),
        Some(ShippingAuditEvent::CommitRejected { reason, .. }) if reason == "stale_session"
    ));
}

#[test]
fn stale_home_rule_sessions_replay_after_catalog_changes() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut first = admin.begin().expect("first");
    let mut second = admin.begin().expect("second");
    first.remove_tier(2).expect("remove heavy tier");
    let mut rule = home_rule();
    rule.standard_cost = MinorUnits::new(650);
    second.update_home_zone_rule(rule).expect("home rule");

    admin.commit(&mut first, Timestamp::Logical(2)).expect("first commit");
    assert_eq!(admin.commit(&mut second, Timestamp::Logical(3)).expect("second"), version(3));

    let config = active(&admin);
    assert_eq!(config.weight_tiers.len(), 2);
    assert_eq!(config.home_zone_rule.standard_cost, MinorUnits::new(650));
}

#[test]
fn closed_sessions_reject_further_use() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let mut session = admin.begin().expect("begin");
    session.relabel_tier(0, TierLabel::new("leggero", "light")).expect("relabel");
    admin.commit(&mut session, Timestamp::Logical(2)).expect("commit");
    assert_eq!(session.state(), EditState::Committed);
    assert_eq!(session.base_version(), version(2));

    let edit = session.remove_tier(0).expect_err("closed");
    assert!(matches!(
        edit,
        AdminError::SessionClosed {
            state: EditState::Committed
        }
    ));
    let commit = admin.commit(&mut session, Timestamp::Logical(3)).expect_err("closed");
    assert!(matches!(commit, AdminError::SessionClosed { .. }));
}

#[test]
fn parallel_commits_serialize_without_losing_edits() {
    let admin = bootstrapped_admin(Arc::new(RecordingAuditSink::default()));
    let cells: Vec<(Zone, usize)> = Zone::non_home()
        .iter()
        .flat_map(|zone| (0 .. 3).map(move |index| (*zone, index)))
        .collect();
    std::thread::scope(|scope| {
        for (offset, (zone, index)) in cells.iter().enumerate() {
            let admin = &admin;
            scope.spawn(move || {
                let price = MinorUnits::new(10_000 + i64::try_from(offset).expect("offset"));
                admin
                    .update_zone_cost(
                        *zone,
                        *index,
                        RateDescriptor::new("P", price),
                        Timestamp::Logical(2),
                    )
                    .expect("commit");
            });
        }
    });
    let config = active(&admin);
    assert_eq!(config.version.get(), 1 + u64::try_from(cells.len()).expect("count"));
    for (offset, (zone, index)) in cells.iter().enumerate() {
        let cell = config.zone_costs.lookup(*zone, *index).expect("cell");
        assert_eq!(cell.display_price.get(), 10_000 + i64::try_from(offset).expect("offset"));
    }
}

// ============================================================================
// SECTION: Bootstrap
// ============================================================================

#[test]
fn stored_snapshots_validate_like_drafts() {
    let mut config =
        ShippingConfig::initial(ConfigId::default(), reference_draft(), Timestamp::Logical(1));
    assert_eq!(config.validate(), Ok(()));

    config.zone_costs = ZoneCostTable::new();
    assert!(config.validate().is_err());
    assert_eq!(config.validate(), config.draft().validate());

    config.zone_costs = reference_draft().zone_costs;
    config.home_zone_rule.standard_cost = MinorUnits::new(-1);
    assert_eq!(config.validate(), Err(InvariantError::NegativeCost));
    assert_eq!(config.validate(), config.draft().validate());
}

#[test]
fn bootstrap_is_idempotent_once_active() {
    let audit = Arc::new(RecordingAuditSink::default());
    let admin = bootstrapped_admin(Arc::clone(&audit));
    let mut other = reference_draft();
    other.home_zone_rule.standard_cost = MinorUnits::new(1);
    let again = admin.bootstrap(other, Timestamp::Logical(9)).expect("bootstrap again");
    assert_eq!(again, ConfigVersion::INITIAL);
    assert_eq!(active(&admin).home_zone_rule.standard_cost, MinorUnits::new(590));
    assert_eq!(audit.events().len(), 1);
}

#[test]
fn bootstrap_rejects_invalid_drafts() {
    let admin = ConfigAdmin::new(
        InMemoryShippingConfigStore::new(),
        Arc::new(RecordingAuditSink::default()),
    );
    let mut draft = reference_draft();
    draft.weight_tiers[1].min_grams = 1500;
    let err = admin.bootstrap(draft, Timestamp::Logical(1)).expect_err("gap");
    assert!(matches!(
        err,
        AdminError::Invariant(InvariantError::TierGap {
            index: 1
        })
    ));
    assert!(matches!(admin.begin(), Err(AdminError::NoActiveConfig)));
}

#[test]
fn bootstrap_as_keeps_the_config_id_across_commits() {
    let admin = ConfigAdmin::new(
        InMemoryShippingConfigStore::new(),
        Arc::new(RecordingAuditSink::default()),
    );
    admin
        .bootstrap_as(ConfigId::new("storefront-eu"), reference_draft(), Timestamp::Logical(1))
        .expect("bootstrap");
    admin
        .relabel_tier(0, TierLabel::new("Leggero", "Light"), Timestamp::Logical(2))
        .expect("relabel");
    let config = active(&admin);
    assert_eq!(config.version, version(2));
    assert_eq!(config.config_id.as_str(), "storefront-eu");
}
