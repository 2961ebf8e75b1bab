// crates/oliva-shipping-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for oliva-shipping-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use oliva_shipping_config::ConfigError;
use oliva_shipping_config::ShippingEngineConfig;
use oliva_shipping_config::config_toml_example;

/// Parses a TOML string into a `ShippingEngineConfig` without validation.
pub fn config_from_toml(toml_str: &str) -> Result<ShippingEngineConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<ShippingEngineConfig, toml::de::Error> {
    config_from_toml("")
}

/// Returns the canonical example config, which carries a full seed.
pub fn example_config() -> Result<ShippingEngineConfig, toml::de::Error> {
    config_from_toml(&config_toml_example())
}

/// Asserts that a validation result failed with a message containing `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
