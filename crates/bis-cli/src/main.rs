//! BIS events request tool
//!
//! Builds events endpoint parameters from command line flags and prints the
//! resulting request URL (or the flat parameters as JSON).

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bis_core::config::ClientConfig;
use bis_core::Id;
use bis_models::{EventType, ProgramCode, TargetGroup};
use bis_queries::{EventParameters, FilterPreset, Ordering};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "bis-events-url")]
#[command(about = "Print the BIS events endpoint request for the given criteria")]
struct Args {
    /// Event type slug (repeatable), e.g. `dobr`
    #[arg(long = "type")]
    types: Vec<EventType>,

    /// Program slug (repeatable), e.g. `ap`
    #[arg(long = "program")]
    programs: Vec<ProgramCode>,

    /// Target group slug (repeatable), e.g. `vsichni`
    #[arg(long = "target-group")]
    target_groups: Vec<TargetGroup>,

    /// Organizing unit id (repeatable)
    #[arg(long = "organized-by")]
    organized_by: Vec<Id>,

    /// Preset filter flag (repeatable, flags are combined): club, weekend, camp, ekostan
    #[arg(long = "filter", value_parser = parse_filter_flag)]
    filters: Vec<u32>,

    /// Result ordering: date_from or date_to
    #[arg(long, default_value = "date_to", value_parser = parse_ordering)]
    order: Ordering,

    /// Exclude events which are already running
    #[arg(long)]
    exclude_running: bool,

    /// Print the flat parameters as JSON instead of the URL
    #[arg(long)]
    json: bool,
}

fn parse_filter_flag(s: &str) -> Result<u32, String> {
    match s.to_lowercase().as_str() {
        "club" | "klub" => Ok(FilterPreset::CLUB),
        "weekend" | "vik" => Ok(FilterPreset::WEEKEND),
        "camp" | "tabor" => Ok(FilterPreset::CAMP),
        "ekostan" => Ok(FilterPreset::EKOSTAN),
        other => Err(format!("unknown preset filter `{}`", other)),
    }
}

fn parse_ordering(s: &str) -> Result<Ordering, String> {
    Ordering::from_str(s).ok_or_else(|| format!("unknown ordering `{}`", s))
}

/// Turn parsed arguments into a populated builder
fn build_parameters(args: &Args) -> anyhow::Result<EventParameters> {
    let mut params = EventParameters::new()
        .set_types(args.types.clone())
        .set_programs(args.programs.clone())
        .set_target_groups(args.target_groups.clone())
        .set_organized_by(args.organized_by.clone());

    params = match args.order {
        Ordering::DateFrom => params.order_by_date_from(),
        Ordering::DateTo => params.order_by_date_to(),
    };

    if !args.filters.is_empty() {
        let bits = args.filters.iter().fold(0, |acc, flag| acc | flag);
        params = params.set_filter(bits)?;
    }

    if args.exclude_running {
        params = params.exclude_running();
    }

    Ok(params)
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = ClientConfig::from_env().context("Failed to load client config")?;
    let params = build_parameters(&args)?;

    info!(
        api_url = %config.api_url,
        filter = ?params.filter(),
        "Built events request"
    );

    if args.json {
        let flat = params.flatten();
        println!("{}", serde_json::to_string_pretty(&flat)?);
    } else {
        let url = config.events_url(&params)?;
        println!("{}", url);
    }

    Ok(())
}

/// Initialize tracing/logging on stderr so stdout stays machine-readable
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,bis_cli=info,bis_queries=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
