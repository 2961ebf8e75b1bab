//! Config load validation tests for oliva-shipping-config.
// crates/oliva-shipping-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding, syntax).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use oliva_shipping_config::ShippingEngineConfig;
use oliva_shipping_config::StoreType;
use oliva_shipping_config::config_toml_example;
use tempfile::NamedTempFile;

mod common;

use common::assert_invalid;

type TestResult = Result<(), String>;

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(ShippingEngineConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(ShippingEngineConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'a'; 1_048_577];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(
        ShippingEngineConfig::load(Some(file.path())),
        "config file exceeds size limit",
    )?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(ShippingEngineConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_reports_missing_file_as_io_error() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let path = dir.path().join("absent.toml");
    assert_invalid(ShippingEngineConfig::load(Some(&path)), "config io error")?;
    Ok(())
}

#[test]
fn load_rejects_malformed_toml() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(b"[store\ntype = ").map_err(|err| err.to_string())?;
    assert_invalid(ShippingEngineConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn parse_rejects_unknown_sections() -> TestResult {
    let result = ShippingEngineConfig::parse("[metrics]\nenabled = true\n");
    assert_invalid(result, "config parse error")?;
    Ok(())
}

#[test]
fn parse_rejects_unknown_store_type() -> TestResult {
    let result = ShippingEngineConfig::parse("[store]\ntype = \"postgres\"\n");
    assert_invalid(result, "config parse error")?;
    Ok(())
}

#[test]
fn load_accepts_empty_file_with_defaults() -> TestResult {
    let file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let config = ShippingEngineConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.store.store_type != StoreType::Memory {
        return Err("expected memory store by default".to_string());
    }
    if config.seed.is_some() {
        return Err("expected no seed by default".to_string());
    }
    Ok(())
}

#[test]
fn load_accepts_canonical_example() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(config_toml_example().as_bytes()).map_err(|err| err.to_string())?;
    let config = ShippingEngineConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.store.store_type != StoreType::Sqlite {
        return Err("expected sqlite store in example".to_string());
    }
    let seed = config.seed.ok_or_else(|| "expected seed in example".to_string())?;
    if seed.tiers.len() != 3 || seed.zone_costs.len() != 9 {
        return Err("example seed has unexpected shape".to_string());
    }
    Ok(())
}
