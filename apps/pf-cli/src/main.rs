use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::{Path, PathBuf};

use pf_core::convert::{ALL_KINDS, supported_units};
use pf_engine::{
    BundleInput, LineSizingInput, PumpSizingInput, ReferenceTables, calculate_bundle,
    calculate_line, calculate_pump,
};

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "pipeflow CLI - line, pump, and bundle sizing calculations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a line-sizing calculation
    Line {
        /// Path to the calculation input YAML file
        input_path: PathBuf,
    },
    /// Run a pump-sizing calculation
    Pump {
        /// Path to the calculation input YAML file
        input_path: PathBuf,
    },
    /// Run a tube-bundle geometry calculation
    Bundle {
        /// Path to the calculation input YAML file
        input_path: PathBuf,
    },
    /// List registered units per quantity kind
    Units,
    /// List schedules available for a nominal pipe size
    Schedules {
        /// Nominal size label (e.g. "6", "1-1/2")
        nominal: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let tables = ReferenceTables::standard();

    match cli.command {
        Commands::Line { input_path } => cmd_line(&input_path, &tables),
        Commands::Pump { input_path } => cmd_pump(&input_path, &tables),
        Commands::Bundle { input_path } => cmd_bundle(&input_path, &tables),
        Commands::Units => cmd_units(),
        Commands::Schedules { nominal } => cmd_schedules(&nominal, &tables),
    }
}

fn cmd_line(input_path: &Path, tables: &ReferenceTables) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(input_path)?;
    let input: LineSizingInput = serde_yaml::from_str(&text)?;
    let result = calculate_line(&input, tables)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn cmd_pump(input_path: &Path, tables: &ReferenceTables) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(input_path)?;
    let input: PumpSizingInput = serde_yaml::from_str(&text)?;
    let result = calculate_pump(&input, tables)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn cmd_bundle(input_path: &Path, tables: &ReferenceTables) -> Result<(), Box<dyn Error>> {
    let text = std::fs::read_to_string(input_path)?;
    let input: BundleInput = serde_yaml::from_str(&text)?;
    let result = calculate_bundle(&input, tables)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn cmd_units() -> Result<(), Box<dyn Error>> {
    for kind in ALL_KINDS {
        println!("{kind}: {}", supported_units(kind).join(", "));
    }
    Ok(())
}

fn cmd_schedules(nominal: &str, tables: &ReferenceTables) -> Result<(), Box<dyn Error>> {
    let schedules = tables.schedules.available_schedules(nominal);
    if schedules.is_empty() {
        println!("No schedules for nominal size '{nominal}'");
        println!(
            "Known sizes: {}",
            tables.schedules.nominal_sizes().join(", ")
        );
    } else {
        println!("{}", schedules.join(", "));
    }
    Ok(())
}
