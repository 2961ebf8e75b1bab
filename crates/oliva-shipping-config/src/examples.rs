// crates/oliva-shipping-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payload.
// Purpose: Deterministic example for docs and the CLI.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example for `oliva-shipping.toml`: a `SQLite` store, a JSON
//! lines audit file, and the storefront's launch catalog as seed. The
//! example always passes [`crate::ShippingEngineConfig::validate`].

/// Returns a canonical example `oliva-shipping.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r#"[store]
type = "sqlite"
path = "oliva-shipping.db"
journal_mode = "wal"
sync_mode = "full"
busy_timeout_ms = 5000

[audit]
sink = "file"
path = "oliva-shipping-audit.jsonl"

[seed]
config_id = "shipping-config"

[seed.home_zone_rule]
free_threshold = "150.00"
standard_cost_minor_units = 590
standard_rate_id = "IT-STD"
free_rate_id = "IT-FREE"

[[seed.tiers]]
min_grams = 0
max_grams = 1000
label = { primary = "Fino a 1 kg", secondary = "Up to 1 kg" }

[[seed.tiers]]
min_grams = 1001
max_grams = 3000
label = { primary = "Da 1 a 3 kg", secondary = "1 to 3 kg" }

[[seed.tiers]]
min_grams = 3001
label = { primary = "Oltre 3 kg", secondary = "Over 3 kg" }

[[seed.zone_costs]]
zone = "europe"
tier = 0
rate_id = "EU-1"
price_minor_units = 890

[[seed.zone_costs]]
zone = "europe"
tier = 1
rate_id = "EU-2"
price_minor_units = 1290

[[seed.zone_costs]]
zone = "europe"
tier = 2
rate_id = "EU-3"
price_minor_units = 1990

[[seed.zone_costs]]
zone = "extended_europe"
tier = 0
rate_id = "XE-1"
price_minor_units = 1490

[[seed.zone_costs]]
zone = "extended_europe"
tier = 1
rate_id = "XE-2"
price_minor_units = 2190

[[seed.zone_costs]]
zone = "extended_europe"
tier = 2
rate_id = "XE-3"
price_minor_units = 3490

[[seed.zone_costs]]
zone = "world"
tier = 0
rate_id = "WW-1"
price_minor_units = 2490

[[seed.zone_costs]]
zone = "world"
tier = 1
rate_id = "WW-2"
price_minor_units = 3990

[[seed.zone_costs]]
zone = "world"
tier = 2
rate_id = "WW-3"
price_minor_units = 5990
"#,
    )
}
