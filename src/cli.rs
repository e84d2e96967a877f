//! # CLI Module - Command Line Interface for the LCM Simulation Core
//!
//! The teacher's CLI is a three-stage pipeline (`generate-ensembles` →
//! `simulate` → `analyze`); this crate's scope covers only the one stage
//! that corresponds to the simulation core itself, so the pipeline
//! collapses to a single `Run` subcommand.
//!
//! **Usage**:
//! ```bash
//! lcmsim-rs run --config ./scenario.toml --out-dir ./data
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a simulation to completion from a TOML configuration file.
    Run {
        /// Path to the scenario's TOML configuration.
        #[arg(short, long)]
        config: PathBuf,

        /// Directory the run's bincode/JSON snapshot history is written
        /// to.
        #[arg(short, long, default_value = "./data")]
        out_dir: PathBuf,

        /// Overrides the config file's `seed`, useful for repeated-run
        /// determinism checks.
        #[arg(long)]
        seed: Option<u64>,
    },
}
