// crates/oliva-shipping-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog parity and locale parsing.
// Purpose: Ensure CLI localization stays consistent in English and Italian.
// Dependencies: oliva-shipping-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies the CLI message catalogs stay in sync, locale parsing is tolerant,
//! and Italian templates preserve placeholder parity with English.

use std::collections::BTreeSet;

use crate::i18n::Locale;
use crate::i18n::MessageArg;
use crate::i18n::SUPPORTED_LOCALES;
use crate::i18n::catalog_entries_for;
use crate::i18n::catalog_for;
use crate::i18n::translate;
use crate::i18n::translate_in;

fn placeholder_names(template: &str) -> Result<BTreeSet<String>, String> {
    let mut placeholders = BTreeSet::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1 ..];
        let Some(end) = after.find('}') else {
            return Err(format!("unclosed '{{' in '{template}'"));
        };
        let name = &after[.. end];
        if name.is_empty() || !name.chars().all(|ch| ch.is_ascii_lowercase() || ch == '_') {
            return Err(format!("invalid placeholder '{name}' in '{template}'"));
        }
        placeholders.insert(name.to_string());
        rest = &after[end + 1 ..];
    }
    if rest.contains('}') {
        return Err(format!("unmatched '}}' in '{template}'"));
    }
    Ok(placeholders)
}

#[test]
fn catalogs_have_matching_keys() {
    assert!(SUPPORTED_LOCALES.contains(&Locale::En), "English must remain the baseline locale");
    let en_keys: BTreeSet<&'static str> = catalog_for(Locale::En).keys().copied().collect();
    for locale in SUPPORTED_LOCALES {
        let locale_keys: BTreeSet<&'static str> = catalog_for(*locale).keys().copied().collect();
        assert_eq!(en_keys, locale_keys, "locale catalogs must stay in parity ({locale:?})");
    }
}

#[test]
fn catalogs_have_unique_keys_per_locale() {
    for locale in SUPPORTED_LOCALES {
        let entries = catalog_entries_for(*locale);
        let unique: BTreeSet<&str> = entries.iter().map(|(key, _)| *key).collect();
        assert_eq!(unique.len(), entries.len(), "duplicate catalog keys ({locale:?})");
    }
}

#[test]
fn catalogs_have_placeholder_parity_with_english() {
    for (key, en_template) in catalog_entries_for(Locale::En) {
        let en_placeholders = placeholder_names(en_template).unwrap();
        let it_template = catalog_for(Locale::It).get(key).copied().unwrap();
        let it_placeholders = placeholder_names(it_template).unwrap();
        assert_eq!(en_placeholders, it_placeholders, "placeholder mismatch for key '{key}'");
    }
}

#[test]
fn italian_differs_for_curated_keys() {
    const CURATED_KEYS: &[&str] =
        &["config.validate.ok", "zone.home", "zone.world", "table.cell.placeholder"];
    for key in CURATED_KEYS {
        let en = catalog_for(Locale::En).get(key).copied().expect("en key exists");
        let it = catalog_for(Locale::It).get(key).copied().expect("it key exists");
        assert_ne!(en, it, "Italian must differ from English for '{key}'");
    }
}

#[test]
fn locale_parse_accepts_region_tags_and_case() {
    assert_eq!(Locale::parse("en"), Some(Locale::En));
    assert_eq!(Locale::parse("EN"), Some(Locale::En));
    assert_eq!(Locale::parse("en-GB"), Some(Locale::En));
    assert_eq!(Locale::parse("it"), Some(Locale::It));
    assert_eq!(Locale::parse("IT"), Some(Locale::It));
    assert_eq!(Locale::parse("it_IT"), Some(Locale::It));
    assert_eq!(Locale::parse(" it-CH "), Some(Locale::It));
    assert_eq!(Locale::parse(""), None);
    assert_eq!(Locale::parse("de"), None);
}

#[test]
fn translate_in_substitutes_placeholders() {
    let output = translate_in(
        Locale::It,
        "table.cell",
        vec![
            MessageArg::new("index", "2"),
            MessageArg::new("price", "19.90"),
            MessageArg::new("rate_id", "EU-3"),
        ],
    );
    assert_eq!(output, "  Fascia 2: 19.90 [EU-3]");
}

#[test]
fn translate_extra_placeholder_ignored() {
    let output = translate("config.validate.ok", vec![MessageArg::new("extra", "value")]);
    assert!(!output.is_empty());
    assert!(!output.contains("value"));
}

#[test]
fn fallback_chain_en_to_key() {
    let nonexistent_key = "nonexistent.key.does.not.exist";
    assert_eq!(translate(nonexistent_key, vec![]), nonexistent_key);
    assert_eq!(translate_in(Locale::It, nonexistent_key, vec![]), nonexistent_key);
}
