//! Seapower - Entry Point
//!
//! Runs one scenario and prints a per-step timeline plus the final debrief,
//! or writes the full output as JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use seapower::core::config::ScenarioConfig;
use seapower::core::error::Result;
use seapower::model::{simulate_with, SeaPowerModel};
use tracing_subscriber::EnvFilter;

/// Sea power simulation: three nations compete for control of the sea
#[derive(Parser, Debug)]
#[command(name = "seapower")]
#[command(about = "Simulate sea control, blockade and naval arms races between three nations")]
struct Args {
    /// Scenario file (TOML). Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Land security burden of the land power, 0.0 to 1.0
    #[arg(long)]
    land_burden: Option<f64>,

    /// Land security burden of the sea power, 0.0 to 1.0
    #[arg(long)]
    sea_burden: Option<f64>,

    /// Number of steps (years) to simulate
    #[arg(long)]
    steps: Option<u32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Write output here instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug logging of every sea-control determination
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "seapower=debug" } else { "seapower=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&args)?;

    let mut timeline = Vec::new();
    let output = simulate_with(&config, |model| timeline.push(timeline_line(model)));

    let rendered = match args.format {
        Format::Json => output.to_json()?,
        Format::Text => {
            let mut text = timeline.join("\n");
            text.push_str("\n\n");
            text.push_str(&output.summary());
            if let Some(message) = &output.final_state.status_message {
                text.push('\n');
                text.push_str(message);
            }
            text.push('\n');
            text
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            tracing::info!("Output written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<ScenarioConfig> {
    let mut config = match &args.config {
        Some(path) => ScenarioConfig::load(path)?,
        None => ScenarioConfig::default(),
    };

    if let Some(burden) = args.land_burden {
        config.land_power_burden = burden;
    }
    if let Some(burden) = args.sea_burden {
        config.sea_power_burden = burden;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }

    config.validate()?;
    Ok(config)
}

fn timeline_line(model: &SeaPowerModel) -> String {
    let nations: Vec<String> = model
        .nations()
        .iter()
        .map(|n| {
            format!(
                "{}{}: power {:>9.1} navy {:>7.1}",
                n.name,
                if n.is_blockaded { " [X]" } else { "" },
                n.total_power(),
                n.navy,
            )
        })
        .collect();

    format!(
        "Year {:>3} | {:<24} | {}",
        model.step_count(),
        model.sea_state().label(),
        nations.join(" | ")
    )
}
