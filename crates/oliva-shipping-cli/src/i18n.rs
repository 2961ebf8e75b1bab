// crates/oliva-shipping-cli/src/i18n.rs
// ============================================================================
// Module: CLI Internationalization Helpers
// Description: Provides message catalog and translation utilities for the CLI.
// Purpose: Keep operator-facing strings available in English and Italian.
// Dependencies: Standard library collections and formatting utilities.
// ============================================================================

//! ## Overview
//! The shipping CLI stores user-facing strings in a small translation
//! catalog so storefront operators can work in English or Italian.
//! All runtime output should be routed through the [`t!`](crate::t) macro.
//!
//! ## Invariants
//! - The catalog is initialized once and read-only thereafter.
//! - Missing keys fall back to English and then to the key itself.
//! - Placeholder substitutions preserve deterministic order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported CLI locales.
///
/// # Invariants
/// - Variants are stable for CLI parsing and catalog lookup.
/// - [`Locale::En`] is the default fallback locale.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Locale {
    /// English (default).
    En,
    /// Italian.
    It,
}

impl Locale {
    /// Returns the canonical locale label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::It => "it",
        }
    }

    /// Attempts to parse a locale value (case-insensitive, tolerant of region tags).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "it" => Some(Self::It),
            _ => None,
        }
    }
}

/// Ordered list of supported CLI locales.
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::It];

/// A formatted message argument captured by the [`macro@crate::t`] macro.
///
/// # Invariants
/// - `key` matches a placeholder name without braces (for example, `zone`).
/// - `value` is preformatted and should be safe for display.
#[derive(Clone)]
pub struct MessageArg {
    /// The placeholder name used in message templates (e.g., `"zone"`).
    pub key: &'static str,
    /// The formatted string value to substitute for this placeholder.
    pub value: String,
}

impl MessageArg {
    /// Constructs a new [`MessageArg`] from a key and displayable value.
    pub fn new(key: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

// ============================================================================
// SECTION: Locale Selection
// ============================================================================

/// Global locale selection for CLI output.
static CURRENT_LOCALE: OnceLock<Locale> = OnceLock::new();

/// Sets the CLI locale. Only the first call wins.
pub fn set_locale(locale: Locale) {
    let _ = CURRENT_LOCALE.set(locale);
}

/// Returns the current CLI locale (defaults to English).
#[must_use]
pub fn current_locale() -> Locale {
    CURRENT_LOCALE.get().copied().unwrap_or(Locale::En)
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Static English catalog entries.
const CATALOG_EN: &[(&str, &str)] = &[
    ("main.version", "oliva-shipping {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Failed to write to {stream}: {error}"),
    ("output.serialize_failed", "Failed to serialize output: {error}"),
    ("config.load_failed", "Failed to load config: {error}"),
    ("config.validate.ok", "Config valid."),
    ("engine.open_failed", "Failed to open shipping engine: {error}"),
    ("bootstrap.seed_missing", "Config has no [seed] section; nothing to bootstrap."),
    ("bootstrap.failed", "Bootstrap failed: {error}"),
    ("resolve.failed", "Failed to resolve shipping rate: {error}"),
    ("query.failed", "Failed to read active configuration: {error}"),
    ("store.failed", "Store error: {error}"),
    ("show.version_invalid", "Version must be 1 or greater."),
    ("show.not_found", "Configuration version {version} not found."),
    ("admin.rejected", "Edit rejected: {error}"),
    ("input.amount_invalid", "Invalid decimal amount: {value}"),
    ("input.zone_invalid", "Invalid zone: {error}"),
    ("tier.set_max.bound_required", "Provide exactly one of --max-grams or --unbounded."),
    ("table.header", "Shipping rates (version {version})"),
    ("table.tier", "  Tier {index}: {range} ({label})"),
    ("table.range.bounded", "{min}-{max} g"),
    ("table.range.unbounded", "{min} g and over"),
    ("table.zone", "{zone}:"),
    ("table.cell", "  Tier {index}: {price} [{rate_id}]"),
    ("table.cell.placeholder", "  Tier {index}: price pending"),
    ("table.cell.missing", "  Tier {index}: missing"),
    (
        "table.home",
        "{zone}: {standard_cost} [{standard_rate_id}], free from {threshold} [{free_rate_id}]",
    ),
    ("zone.home", "Italy"),
    ("zone.europe", "Europe"),
    ("zone.extended_europe", "Extended Europe"),
    ("zone.world", "World"),
    ("history.header", "Configuration versions:"),
    ("history.entry", "  v{version}{active}"),
    ("history.active_marker", " (active)"),
    ("history.none", "No configuration versions stored."),
    ("i18n.lang.invalid_env", "Invalid value for {env}: {value}. Expected 'en' or 'it'."),
];

/// Static Italian catalog entries.
const CATALOG_IT: &[(&str, &str)] = &[
    ("main.version", "oliva-shipping {version}"),
    ("output.stream.stdout", "stdout"),
    ("output.stream.stderr", "stderr"),
    ("output.stream.unknown", "output"),
    ("output.write_failed", "Scrittura su {stream} non riuscita: {error}"),
    ("output.serialize_failed", "Serializzazione dell'output non riuscita: {error}"),
    ("config.load_failed", "Caricamento della configurazione non riuscito: {error}"),
    ("config.validate.ok", "Configurazione valida."),
    ("engine.open_failed", "Apertura del motore di spedizione non riuscita: {error}"),
    (
        "bootstrap.seed_missing",
        "La configurazione non ha una sezione [seed]; nulla da inizializzare.",
    ),
    ("bootstrap.failed", "Inizializzazione non riuscita: {error}"),
    ("resolve.failed", "Calcolo della tariffa di spedizione non riuscito: {error}"),
    ("query.failed", "Lettura della configurazione attiva non riuscita: {error}"),
    ("store.failed", "Errore dell'archivio: {error}"),
    ("show.version_invalid", "La versione deve essere 1 o superiore."),
    ("show.not_found", "Versione di configurazione {version} non trovata."),
    ("admin.rejected", "Modifica respinta: {error}"),
    ("input.amount_invalid", "Importo decimale non valido: {value}"),
    ("input.zone_invalid", "Zona non valida: {error}"),
    ("tier.set_max.bound_required", "Indicare solo uno tra --max-grams e --unbounded."),
    ("table.header", "Tariffe di spedizione (versione {version})"),
    ("table.tier", "  Fascia {index}: {range} ({label})"),
    ("table.range.bounded", "{min}-{max} g"),
    ("table.range.unbounded", "da {min} g in su"),
    ("table.zone", "{zone}:"),
    ("table.cell", "  Fascia {index}: {price} [{rate_id}]"),
    ("table.cell.placeholder", "  Fascia {index}: prezzo da definire"),
    ("table.cell.missing", "  Fascia {index}: mancante"),
    (
        "table.home",
        "{zone}: {standard_cost} [{standard_rate_id}], gratuita da {threshold} [{free_rate_id}]",
    ),
    ("zone.home", "Italia"),
    ("zone.europe", "Europa"),
    ("zone.extended_europe", "Europa estesa"),
    ("zone.world", "Resto del mondo"),
    ("history.header", "Versioni di configurazione:"),
    ("history.entry", "  v{version}{active}"),
    ("history.active_marker", " (attiva)"),
    ("history.none", "Nessuna versione di configurazione salvata."),
    ("i18n.lang.invalid_env", "Valore non valido per {env}: {value}. Atteso 'en' o 'it'."),
];

/// Returns the message catalog for the requested locale.
pub(crate) fn catalog_for(locale: Locale) -> &'static HashMap<&'static str, &'static str> {
    static CATALOG_EN_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static CATALOG_IT_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    match locale {
        Locale::En => CATALOG_EN_MAP.get_or_init(|| CATALOG_EN.iter().copied().collect()),
        Locale::It => CATALOG_IT_MAP.get_or_init(|| CATALOG_IT.iter().copied().collect()),
    }
}

/// Returns the raw catalog entries for the requested locale.
#[cfg(test)]
pub(crate) const fn catalog_entries_for(
    locale: Locale,
) -> &'static [(&'static str, &'static str)] {
    match locale {
        Locale::En => CATALOG_EN,
        Locale::It => CATALOG_IT,
    }
}

// ============================================================================
// SECTION: Translation
// ============================================================================

/// Translates `key` using the selected locale while substituting `args`.
#[must_use]
pub fn translate(key: &str, args: Vec<MessageArg>) -> String {
    translate_in(current_locale(), key, args)
}

/// Translates `key` for an explicit locale while substituting `args`.
#[must_use]
pub fn translate_in(locale: Locale, key: &str, args: Vec<MessageArg>) -> String {
    let template = catalog_for(locale)
        .get(key)
        .copied()
        .or_else(|| catalog_for(Locale::En).get(key).copied())
        .unwrap_or(key);
    if args.is_empty() {
        return template.to_string();
    }

    let mut result = template.to_string();
    for arg in args {
        let placeholder = format!("{{{}}}", arg.key);
        result = result.replace(&placeholder, &arg.value);
    }
    result
}

// ============================================================================
// SECTION: Macro
// ============================================================================

/// Formats a localized message from a key and named arguments.
///
/// # Arguments
///
/// - `$key` must match a catalog entry.
/// - Named arguments are substituted into `{placeholder}` positions.
///
/// # Returns
///
/// A localized [`String`] with placeholders substituted.
#[macro_export]
macro_rules! t {
    ($key:literal $(, $name:ident = $value:expr )* $(,)?) => {{
        let args = ::std::vec![
            $(
                $crate::i18n::MessageArg::new(stringify!($name), $value.to_string()),
            )*
        ];
        $crate::i18n::translate($key, args)
    }};
}
