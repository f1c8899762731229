use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use twine_core::Model;
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

use mars_motor_cooling::{
    config::CaseConfig,
    models::thermal::motor_cooling::{
        EquilibriumConfig, FlowRegime, Inputs, MotorCooling, Report, equilibrium_temperature,
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Heat-dissipation budget for a motor flying on Mars")]
struct Cli {
    /// TOML case file overriding the reference inputs.
    #[arg(long, value_name = "FILE")]
    inputs: Option<PathBuf>,

    /// Also solve for the steady motor temperature under each airflow.
    #[arg(long)]
    equilibrium: bool,

    /// Print the reference case as TOML and exit.
    #[arg(long, conflicts_with_all = ["inputs", "equilibrium"])]
    print_defaults: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.print_defaults {
        let text = CaseConfig::default()
            .to_toml()
            .context("failed to serialize the reference case")?;
        print!("{text}");
        return Ok(());
    }

    let inputs = load_inputs(cli.inputs.as_deref())?;
    let budget = MotorCooling.call(&inputs)?;
    print!("{}", Report(&budget));

    if cli.equilibrium {
        for regime in FlowRegime::ALL {
            let equilibrium = equilibrium_temperature(&inputs, regime, EquilibriumConfig::default())
                .with_context(|| format!("failed to find equilibrium temperature ({regime})"))?;
            println!(
                "Equilibrium temperature ({regime}): {:.2} K ({:.2} °C)",
                equilibrium.temperature.get::<kelvin>(),
                equilibrium.temperature.get::<degree_celsius>(),
            );
        }
    }

    Ok(())
}

fn load_inputs(path: Option<&Path>) -> Result<Inputs> {
    let Some(path) = path else {
        return Ok(Inputs::mars_reference());
    };

    info!(path = %path.display(), "loading case file");
    let config = CaseConfig::load(path)
        .with_context(|| format!("failed to load case file {}", path.display()))?;
    config
        .to_inputs()
        .with_context(|| format!("invalid case file {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
