//! Cost estimation CLI
//!
//! Runs a scenario file through the estimator, or inspects the pricing
//! catalog. Results print as JSON on stdout; diagnostics go to stderr
//! via tracing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use convocost::config::{PricingCatalog, builtin_catalog, default_selection};
use convocost::core::calculate;
use convocost::core::types::inputs::SessionInputs;
use convocost::core::types::result::CalculationResult;
use convocost::core::types::selection::{ModelType, SelectedModels};
use convocost::utils::format::{format_cost, format_count};

#[derive(Parser)]
#[command(name = "cost-tool", version, about = "Conversational-AI cost estimator")]
struct Cli {
    /// Pricing catalog file (YAML); defaults to the built-in catalog
    #[arg(long, global = true, env = "CONVOCOST_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate costs for a scenario file
    Estimate {
        /// Scenario file (YAML)
        scenario: PathBuf,
        /// Skip the required-field check on the inputs
        #[arg(long)]
        no_validate: bool,
        /// Print a human-readable summary instead of JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the pricing catalog as YAML
    Catalog,
    /// List model types and their default model selections
    Models,
}

/// One estimation scenario: what to calculate and with which models
#[derive(Debug, Deserialize)]
struct Scenario {
    model_type: ModelType,
    inputs: SessionInputs,
    /// Selected models; unset roles fall back to the defaults
    #[serde(default)]
    models: Option<SelectedModels>,
}

fn load_catalog(path: Option<&PathBuf>) -> convocost::Result<PricingCatalog> {
    match path {
        Some(path) => PricingCatalog::from_yaml_file(path),
        None => Ok(builtin_catalog()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog(cli.catalog.as_ref())?;

    match cli.command {
        Commands::Estimate {
            scenario,
            no_validate,
            pretty,
        } => {
            let content = std::fs::read_to_string(&scenario)?;
            let scenario: Scenario = serde_yaml::from_str(&content)?;
            debug!(model_type = %scenario.model_type, "running scenario");

            if !no_validate {
                scenario.inputs.validate()?;
            }
            let models = scenario
                .models
                .unwrap_or_else(|| default_selection(scenario.model_type));

            let result = calculate(scenario.model_type, &scenario.inputs, &models, &catalog)?;
            if pretty {
                print_summary(&result, &catalog.display_currency);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Commands::Catalog => {
            println!("{}", catalog.to_yaml()?);
        }
        Commands::Models => {
            let listing: Vec<_> = [
                ModelType::Ttt,
                ModelType::SttTttTts,
                ModelType::OmniTextTts,
                ModelType::Sts,
                ModelType::SttTtt,
                ModelType::SttOmni,
            ]
            .into_iter()
            .map(|mt| {
                serde_json::json!({
                    "model_type": mt.as_str(),
                    "product": mt.product(),
                    "defaults": default_selection(mt),
                })
            })
            .collect();
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
    }
    Ok(())
}

fn print_summary(result: &CalculationResult, currency: &str) {
    let line = |label: &str, value: Option<f64>| {
        if let Some(value) = value {
            println!("  {:<22} {} {}", label, format_cost(value, ""), currency);
        }
    };
    println!("Total: {} {}", format_cost(result.costs.total_cost, ""), currency);
    line("cached input", result.costs.cached_input_cost);
    line("non-cached input", result.costs.non_cached_input_cost);
    line("output", result.costs.output_cost);
    line("transcription", result.costs.stt_cost);
    line("synthesis", result.costs.tts_cost);
    line("audio input", result.costs.audio_input_cost);
    line("audio output", result.costs.audio_output_cost);
    line("text output", result.costs.text_output_cost);

    let usage = |label: &str, value: Option<f64>| {
        if let Some(value) = value {
            println!("  {:<22} {}", label, format_count(value));
        }
    };
    println!("Usage:");
    usage("input tokens", result.usage.input_tokens);
    usage("cached input tokens", result.usage.cached_input_tokens);
    usage("output tokens", result.usage.output_tokens);
    usage("audio input tokens", result.usage.audio_input_tokens);
    usage("audio output tokens", result.usage.audio_output_tokens);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
