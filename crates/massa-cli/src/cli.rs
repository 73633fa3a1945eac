//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use massa_types::{MassUnit, OutputFormat};

#[derive(Parser)]
#[command(name = "massa-checker")]
#[command(author = "lytec")]
#[command(version)]
#[command(about = "Asphalt application bookkeeping - loads, paving passes, thickness checks")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override (stores loads.json / applications.json)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a delivered load
    RegisterLoad {
        /// Delivery reference (e.g., "CR-2025-041")
        reference: String,

        /// Total delivered mass (kg or tonnes; see --unit)
        #[arg(long, short = 'm')]
        mass: f64,

        /// Explicit unit (kg, t). Heuristic detection if omitted.
        #[arg(long, short = 'u')]
        unit: Option<MassUnit>,

        /// Material name (e.g., "CBUQ")
        #[arg(long)]
        material: Option<String>,

        /// Delivery date (2025-08-26 or 26/08/2025)
        #[arg(long)]
        date: Option<String>,
    },

    /// Record one application pass against a load
    Apply {
        /// Load id or delivery reference
        load: String,

        /// Measured length in meters
        #[arg(long, short = 'l')]
        length: Option<f64>,

        /// Measured average width in meters
        #[arg(long, short = 'w')]
        width: Option<f64>,

        /// Street / logradouro name
        #[arg(long)]
        street: Option<String>,

        /// Explicit applied mass; derived from geometry at 5cm if omitted
        #[arg(long, short = 'm')]
        mass: Option<f64>,

        /// Explicit unit (kg, t). Heuristic detection if omitted.
        #[arg(long, short = 'u')]
        unit: Option<MassUnit>,

        /// Apply all remaining mass of the load
        #[arg(long)]
        all_remaining: bool,

        /// Application temperature in °C
        #[arg(long)]
        temperature: Option<f64>,

        /// Notes from the apontador
        #[arg(long)]
        notes: Option<String>,

        /// Application date (2025-08-26 or 26/08/2025)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show remaining mass and progress for one load, or all loads
    Status {
        /// Load id or delivery reference; all loads if omitted
        load: Option<String>,
    },

    /// Show application history
    History {
        /// Restrict to one load (id or delivery reference)
        #[arg(long)]
        load: Option<String>,

        /// Limit number of entries shown
        #[arg(long, short = 'n', default_value = "20")]
        limit: usize,
    },

    /// Check application CSVs against delivery CSVs and print a report
    Check {
        /// Path to CSV file containing delivered loads
        #[arg(long)]
        loads: PathBuf,

        /// Path to CSV file containing application records
        #[arg(long)]
        applications: PathBuf,

        /// Restrict the report to one delivery reference
        #[arg(long)]
        load: Option<String>,

        /// Explicit unit for CSV masses (kg, t). Heuristic if omitted.
        #[arg(long, short = 'u')]
        unit: Option<MassUnit>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
