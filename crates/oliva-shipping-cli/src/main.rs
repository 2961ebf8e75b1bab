// crates/oliva-shipping-cli/src/main.rs
// ============================================================================
// Module: Oliva Shipping CLI Entry Point
// Description: Command dispatcher for shipping rate queries and administration.
// Purpose: Provide a safe, localized CLI over the shipping engine.
// Dependencies: clap, oliva-shipping-config, oliva-shipping-core, serde,
//               serde_jcs, thiserror
// ============================================================================

//! ## Overview
//! The `oliva-shipping` CLI resolves checkout rates, renders the storefront
//! rate table, and applies admin edits that commit new configuration
//! versions. Structured output is canonical JSON; every operator-facing
//! string is routed through the i18n catalog (English or Italian).
//! Security posture: inputs are untrusted and must be validated.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub(crate) mod engine;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use oliva_shipping_cli::i18n::Locale;
use oliva_shipping_cli::i18n::current_locale;
use oliva_shipping_cli::i18n::set_locale;
use oliva_shipping_cli::t;
use oliva_shipping_config::ShippingEngineConfig;
use oliva_shipping_config::config_toml_example;
use oliva_shipping_core::AdminError;
use oliva_shipping_core::ConfigVersion;
use oliva_shipping_core::ConfigVersionSummary;
use oliva_shipping_core::DisplayTable;
use oliva_shipping_core::HomeZoneRule;
use oliva_shipping_core::MinorUnits;
use oliva_shipping_core::RateDescriptor;
use oliva_shipping_core::RateId;
use oliva_shipping_core::ShippingConfigStore;
use oliva_shipping_core::TierLabel;
use oliva_shipping_core::TierUpperBound;
use oliva_shipping_core::Timestamp;
use oliva_shipping_core::Zone;
use serde::Serialize;
use thiserror::Error;

use crate::engine::Engine;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "OLIVA_SHIPPING_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "oliva-shipping", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue)]
    show_version: bool,
    /// Preferred output language (overrides `OLIVA_SHIPPING_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Optional config file path (defaults to oliva-shipping.toml or env override).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the checkout rate for a zone, weight, and cart subtotal.
    Resolve(ResolveCommand),
    /// Print the active tier/zone rate table.
    Table(TableCommand),
    /// Print a stored configuration snapshot.
    Show(ShowCommand),
    /// List stored configuration versions.
    History(HistoryCommand),
    /// Create configuration version 1 from the config seed.
    Bootstrap,
    /// Weight tier administration.
    Tier {
        /// Selected tier subcommand.
        #[command(subcommand)]
        command: TierCommand,
    },
    /// Zone cost administration.
    ZoneCost {
        /// Selected zone cost subcommand.
        #[command(subcommand)]
        command: ZoneCostCommand,
    },
    /// Home zone rule administration.
    HomeRule {
        /// Selected home rule subcommand.
        #[command(subcommand)]
        command: HomeRuleCommand,
    },
    /// List zone cost cells still awaiting a price.
    Placeholders,
    /// Configuration file utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Weight tier subcommands.
#[derive(Subcommand, Debug)]
enum TierCommand {
    /// Add a weight tier (spliced before an open-ended last tier).
    Add(TierAddCommand),
    /// Remove a weight tier and its zone costs.
    Remove(TierRemoveCommand),
    /// Change a tier's maximum weight.
    SetMax(TierSetMaxCommand),
    /// Change a tier's display labels.
    Relabel(TierRelabelCommand),
}

/// Zone cost subcommands.
#[derive(Subcommand, Debug)]
enum ZoneCostCommand {
    /// Set the rate for one zone and tier.
    Set(ZoneCostSetCommand),
}

/// Home zone rule subcommands.
#[derive(Subcommand, Debug)]
enum HomeRuleCommand {
    /// Replace the home zone rule.
    Set(HomeRuleSetCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a shipping configuration file.
    Validate,
    /// Print a canonical example configuration file.
    Example,
}

/// Arguments for `resolve`.
#[derive(Args, Debug)]
struct ResolveCommand {
    /// Destination zone (home, europe, extended_europe, world).
    #[arg(long, value_name = "ZONE")]
    zone: String,
    /// Parcel weight in grams.
    #[arg(long, value_name = "GRAMS", allow_negative_numbers = true)]
    weight_grams: i64,
    /// Cart subtotal in major units (for example 149.99).
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    subtotal: String,
}

/// Arguments for `table`.
#[derive(Args, Debug)]
struct TableCommand {
    /// Output format for the rate table.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Arguments for `show`.
#[derive(Args, Debug)]
struct ShowCommand {
    /// Stored version to print (defaults to the active version).
    #[arg(long, value_name = "VERSION")]
    version: Option<u64>,
}

/// Arguments for `history`.
#[derive(Args, Debug)]
struct HistoryCommand {
    /// Output format for the version listing.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

/// Arguments for `tier add`.
#[derive(Args, Debug)]
struct TierAddCommand {
    /// Width of the new tier in grams.
    #[arg(long, value_name = "GRAMS")]
    width_grams: u64,
    /// Italian display label.
    #[arg(long, value_name = "LABEL")]
    label_it: String,
    /// English display label.
    #[arg(long, value_name = "LABEL")]
    label_en: String,
}

/// Arguments for `tier remove`.
#[derive(Args, Debug)]
struct TierRemoveCommand {
    /// Index of the tier to remove.
    #[arg(long, value_name = "INDEX")]
    index: usize,
}

/// Arguments for `tier set-max`.
#[derive(Args, Debug)]
struct TierSetMaxCommand {
    /// Index of the tier to change.
    #[arg(long, value_name = "INDEX")]
    index: usize,
    /// New inclusive maximum in grams.
    #[arg(long, value_name = "GRAMS", conflicts_with = "unbounded")]
    max_grams: Option<u64>,
    /// Remove the maximum (last tier only).
    #[arg(long, action = ArgAction::SetTrue)]
    unbounded: bool,
}

/// Arguments for `tier relabel`.
#[derive(Args, Debug)]
struct TierRelabelCommand {
    /// Index of the tier to relabel.
    #[arg(long, value_name = "INDEX")]
    index: usize,
    /// Italian display label.
    #[arg(long, value_name = "LABEL")]
    label_it: String,
    /// English display label.
    #[arg(long, value_name = "LABEL")]
    label_en: String,
}

/// Arguments for `zone-cost set`.
#[derive(Args, Debug)]
struct ZoneCostSetCommand {
    /// Priced zone (europe, extended_europe, world).
    #[arg(long, value_name = "ZONE")]
    zone: String,
    /// Tier index.
    #[arg(long, value_name = "INDEX")]
    tier: usize,
    /// Carrier rate identifier.
    #[arg(long, value_name = "RATE_ID")]
    rate_id: String,
    /// Display price in minor units (cents).
    #[arg(long, value_name = "CENTS", allow_negative_numbers = true)]
    price_minor_units: i64,
}

/// Arguments for `home-rule set`.
#[derive(Args, Debug)]
struct HomeRuleSetCommand {
    /// Free-shipping threshold in major units.
    #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
    free_threshold: String,
    /// Standard cost in minor units (cents).
    #[arg(long, value_name = "CENTS", allow_negative_numbers = true)]
    standard_cost_minor_units: i64,
    /// Rate identifier charged below the threshold.
    #[arg(long, value_name = "RATE_ID")]
    standard_rate_id: String,
    /// Rate identifier used at or above the threshold.
    #[arg(long, value_name = "RATE_ID")]
    free_rate_id: String,
}

/// Output formats for structured CLI commands.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum OutputFormat {
    /// Canonical JSON output.
    Json,
    /// Human-readable text output.
    Text,
}

/// Supported CLI languages.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Italian.
    It,
}

// ============================================================================
// SECTION: Output Types
// ============================================================================

/// Output for commands that commit or bootstrap a version.
#[derive(Debug, Serialize)]
struct CommitOutput {
    /// Active version after the command.
    version: ConfigVersion,
}

/// Output for `history`.
#[derive(Debug, Serialize)]
struct HistoryOutput {
    /// Stored versions, newest first.
    versions: Vec<ConfigVersionSummary>,
}

/// One cell awaiting a price.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct PlaceholderCell {
    /// Zone of the cell.
    zone: Zone,
    /// Tier index of the cell.
    tier_index: usize,
}

/// Output for `placeholders`.
#[derive(Debug, Serialize)]
struct PlaceholdersOutput {
    /// Cells still carrying the placeholder rate.
    cells: Vec<PlaceholderCell>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config_path = cli.config.as_deref();
    match command {
        Commands::Config {
            command,
        } => command_config(&command, config_path),
        Commands::Resolve(command) => command_resolve(&open_engine(config_path)?, &command),
        Commands::Table(command) => command_table(&open_engine(config_path)?, &command),
        Commands::Show(command) => command_show(&open_engine(config_path)?, &command),
        Commands::History(command) => command_history(&open_engine(config_path)?, &command),
        Commands::Bootstrap => command_bootstrap(&open_engine(config_path)?),
        Commands::Tier {
            command,
        } => command_tier(&open_engine(config_path)?, command),
        Commands::ZoneCost {
            command,
        } => command_zone_cost(&open_engine(config_path)?, command),
        Commands::HomeRule {
            command,
        } => command_home_rule(&open_engine(config_path)?, command),
        Commands::Placeholders => command_placeholders(&open_engine(config_path)?),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

/// Loads configuration and opens the engine it describes.
fn open_engine(config_path: Option<&Path>) -> CliResult<Engine> {
    let config = ShippingEngineConfig::load(config_path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
    Engine::open(config).map_err(|err| CliError::new(t!("engine.open_failed", error = err)))
}

// ============================================================================
// SECTION: Query Commands
// ============================================================================

/// Executes `resolve`.
fn command_resolve(engine: &Engine, command: &ResolveCommand) -> CliResult<ExitCode> {
    let subtotal = parse_amount(&command.subtotal)?;
    let rate = engine
        .query()
        .active_rate(&command.zone, command.weight_grams, &subtotal)
        .map_err(|err| CliError::new(t!("resolve.failed", error = err)))?;
    write_canonical_json(&rate)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `table`.
fn command_table(engine: &Engine, command: &TableCommand) -> CliResult<ExitCode> {
    let table = engine
        .query()
        .display_table()
        .map_err(|err| CliError::new(t!("query.failed", error = err)))?;
    match command.format {
        OutputFormat::Json => write_canonical_json(&table)?,
        OutputFormat::Text => write_stdout_line(&render_table_text(&table, current_locale()))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?,
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes `show`.
fn command_show(engine: &Engine, command: &ShowCommand) -> CliResult<ExitCode> {
    let config = if let Some(raw) = command.version {
        let version = ConfigVersion::from_raw(raw)
            .ok_or_else(|| CliError::new(t!("show.version_invalid")))?;
        engine
            .store()
            .load_version(version)
            .map_err(|err| CliError::new(t!("store.failed", error = err)))?
            .ok_or_else(|| CliError::new(t!("show.not_found", version = version)))?
    } else {
        engine
            .query()
            .active_config()
            .map_err(|err| CliError::new(t!("query.failed", error = err)))?
    };
    write_canonical_json(&config)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes `history`.
fn command_history(engine: &Engine, command: &HistoryCommand) -> CliResult<ExitCode> {
    let versions = engine
        .store()
        .list_versions()
        .map_err(|err| CliError::new(t!("store.failed", error = err)))?;
    let output = HistoryOutput {
        versions,
    };
    match command.format {
        OutputFormat::Json => write_canonical_json(&output)?,
        OutputFormat::Text => write_stdout_line(&render_history_text(&output))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?,
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Admin Commands
// ============================================================================

/// Executes `bootstrap`.
fn command_bootstrap(engine: &Engine) -> CliResult<ExitCode> {
    let version = engine
        .bootstrap_from_seed()
        .map_err(|err| CliError::new(t!("bootstrap.failed", error = err)))?
        .ok_or_else(|| CliError::new(t!("bootstrap.seed_missing")))?;
    write_commit_output(version)
}

/// Dispatches tier subcommands.
fn command_tier(engine: &Engine, command: TierCommand) -> CliResult<ExitCode> {
    let admin = engine.admin();
    let at = Timestamp::now();
    let result = match command {
        TierCommand::Add(command) => {
            let label = TierLabel::new(command.label_it, command.label_en);
            admin.add_tier(command.width_grams, label, at)
        }
        TierCommand::Remove(command) => admin.remove_tier(command.index, at),
        TierCommand::SetMax(command) => {
            let upper = resolve_upper_bound(command.max_grams, command.unbounded)?;
            admin.set_tier_upper_bound(command.index, upper, at)
        }
        TierCommand::Relabel(command) => {
            let label = TierLabel::new(command.label_it, command.label_en);
            admin.relabel_tier(command.index, label, at)
        }
    };
    finish_commit(result)
}

/// Dispatches zone cost subcommands.
fn command_zone_cost(engine: &Engine, command: ZoneCostCommand) -> CliResult<ExitCode> {
    match command {
        ZoneCostCommand::Set(command) => {
            let zone = parse_zone(&command.zone)?;
            let descriptor = RateDescriptor::new(
                RateId::new(command.rate_id),
                MinorUnits::new(command.price_minor_units),
            );
            let result =
                engine.admin().update_zone_cost(zone, command.tier, descriptor, Timestamp::now());
            finish_commit(result)
        }
    }
}

/// Dispatches home rule subcommands.
fn command_home_rule(engine: &Engine, command: HomeRuleCommand) -> CliResult<ExitCode> {
    match command {
        HomeRuleCommand::Set(command) => {
            let rule = HomeZoneRule {
                free_threshold: parse_amount(&command.free_threshold)?,
                standard_cost: MinorUnits::new(command.standard_cost_minor_units),
                standard_rate_id: RateId::new(command.standard_rate_id),
                free_rate_id: RateId::new(command.free_rate_id),
            };
            finish_commit(engine.admin().update_home_zone_rule(rule, Timestamp::now()))
        }
    }
}

/// Executes `placeholders`.
fn command_placeholders(engine: &Engine) -> CliResult<ExitCode> {
    let cells = engine
        .admin()
        .placeholder_cells()
        .map_err(|err| CliError::new(t!("query.failed", error = err)))?
        .into_iter()
        .map(|(zone, tier_index)| PlaceholderCell {
            zone,
            tier_index,
        })
        .collect();
    write_canonical_json(&PlaceholdersOutput {
        cells,
    })?;
    Ok(ExitCode::SUCCESS)
}

/// Maps a commit result to output or a localized rejection.
fn finish_commit(result: Result<ConfigVersion, AdminError>) -> CliResult<ExitCode> {
    let version = result.map_err(|err| CliError::new(t!("admin.rejected", error = err)))?;
    write_commit_output(version)
}

/// Writes the committed version as canonical JSON.
fn write_commit_output(version: ConfigVersion) -> CliResult<ExitCode> {
    write_canonical_json(&CommitOutput {
        version,
    })?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: &ConfigCommand, config_path: Option<&Path>) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate => {
            ShippingEngineConfig::load(config_path)
                .map_err(|err| CliError::new(t!("config.load_failed", error = err)))?;
            write_stdout_line(&t!("config.validate.ok"))
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
        ConfigCommand::Example => {
            write_stdout_bytes(config_toml_example().as_bytes())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Argument Helpers
// ============================================================================

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Parses a decimal amount in major units.
fn parse_amount(value: &str) -> CliResult<BigDecimal> {
    BigDecimal::from_str(value.trim())
        .map_err(|_| CliError::new(t!("input.amount_invalid", value = value)))
}

/// Parses a zone name.
fn parse_zone(value: &str) -> CliResult<Zone> {
    Zone::from_str(value.trim()).map_err(|err| CliError::new(t!("input.zone_invalid", error = err)))
}

/// Builds a tier upper bound from `--max-grams` / `--unbounded`.
fn resolve_upper_bound(max_grams: Option<u64>, unbounded: bool) -> CliResult<TierUpperBound> {
    match (max_grams, unbounded) {
        (Some(max_grams), false) => Ok(TierUpperBound::Bounded {
            max_grams,
        }),
        (None, true) => Ok(TierUpperBound::Unbounded),
        _ => Err(CliError::new(t!("tier.set_max.bound_required"))),
    }
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::It => Self::It,
        }
    }
}

// ============================================================================
// SECTION: Text Rendering
// ============================================================================

/// Renders the rate table for operators.
fn render_table_text(table: &DisplayTable, locale: Locale) -> String {
    let mut lines = vec![t!("table.header", version = table.version)];
    for tier in &table.tiers {
        let range = tier.max_grams.map_or_else(
            || t!("table.range.unbounded", min = tier.min_grams),
            |max| t!("table.range.bounded", min = tier.min_grams, max = max),
        );
        let label = tier_label(&tier.label, locale);
        lines.push(t!("table.tier", index = tier.index, range = range, label = label));
    }
    for row in &table.zones {
        lines.push(t!("table.zone", zone = zone_name(row.zone)));
        for (index, cell) in row.cells.iter().enumerate() {
            let line = match cell {
                Some(descriptor) if descriptor.rate_id.is_placeholder() => {
                    t!("table.cell.placeholder", index = index)
                }
                Some(descriptor) => t!(
                    "table.cell",
                    index = index,
                    rate_id = descriptor.rate_id,
                    price = descriptor.display_price
                ),
                None => t!("table.cell.missing", index = index),
            };
            lines.push(line);
        }
    }
    let rule = &table.home_zone_rule;
    lines.push(t!(
        "table.home",
        zone = zone_name(Zone::Home),
        standard_rate_id = rule.standard_rate_id,
        standard_cost = rule.standard_cost,
        threshold = rule.free_threshold,
        free_rate_id = rule.free_rate_id
    ));
    lines.join("\n")
}

/// Renders the version history for operators.
fn render_history_text(output: &HistoryOutput) -> String {
    if output.versions.is_empty() {
        return t!("history.none");
    }
    let mut lines = vec![t!("history.header")];
    for summary in &output.versions {
        let marker = if summary.is_active { t!("history.active_marker") } else { String::new() };
        lines.push(t!("history.entry", version = summary.version, active = marker));
    }
    lines.join("\n")
}

/// Picks the tier label for the output language.
fn tier_label(label: &TierLabel, locale: Locale) -> &str {
    match locale {
        Locale::It => &label.primary,
        Locale::En if label.secondary.trim().is_empty() => &label.primary,
        Locale::En => &label.secondary,
    }
}

/// Returns the localized zone name.
fn zone_name(zone: Zone) -> String {
    match zone {
        Zone::Home => t!("zone.home"),
        Zone::Europe => t!("zone.europe"),
        Zone::ExtendedEurope => t!("zone.extended_europe"),
        Zone::World => t!("zone.world"),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Serializes a value as canonical JSON.
fn canonical_output_bytes<T: Serialize>(value: &T) -> CliResult<Vec<u8>> {
    serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(t!("output.serialize_failed", error = err)))
}

/// Writes canonical JSON to stdout with a trailing newline.
fn write_canonical_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = canonical_output_bytes(value)?;
    bytes.push(b'\n');
    write_stdout_bytes(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
