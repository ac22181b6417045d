//! FILENAME: app/src/cli.rs
//! Command-line surface: the discrete choices the original selection
//! sidebar offered, expressed as flags.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dataset stem looked for when no --data path is given.
pub const DEFAULT_DATA_STEM: &str = "Data_Market analysis_2025_9";

/// Directory holding country flags and brand logos referenced in the
/// data file.
pub const DEFAULT_IMAGES_DIR: &str = "images";

#[derive(Debug, Parser)]
#[command(name = "market-compare", version, about = "Side-by-side competitor comparison over a market analysis dataset")]
pub struct Cli {
    /// Path to the data file (.xlsx or .csv); the sibling format is
    /// tried as a fallback
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Directory containing flag and logo images
    #[arg(long, global = true)]
    pub images: Option<PathBuf>,

    /// Emit machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show how semantic roles resolved against the dataset's columns
    Columns,

    /// List candidate values for each selection step, narrowed by the
    /// choices already made
    Options {
        #[command(flatten)]
        global: GlobalArgs,

        /// Narrow the per-competitor lists by a chosen country
        #[arg(long)]
        country: Option<String>,

        /// Narrow the per-competitor lists by a chosen brand
        #[arg(long)]
        brand: Option<String>,

        /// Narrow the per-competitor quarter list by a chosen year
        #[arg(long)]
        year: Option<String>,
    },

    /// Resolve the selected competitors and render the comparison
    Compare {
        #[command(flatten)]
        global: GlobalArgs,

        /// Competitor selector "Country/Brand[/Year[/Quarter]]";
        /// repeat for each slot (2-10)
        #[arg(long = "pick", required = true)]
        picks: Vec<String>,

        /// Write the comparison as delimited text
        #[arg(long, num_args = 0..=1, default_missing_value = "market_comparison.csv")]
        export: Option<PathBuf>,

        /// Write the comparison as a spreadsheet
        #[arg(long = "export-xlsx", num_args = 0..=1, default_missing_value = "market_comparison.xlsx")]
        export_xlsx: Option<PathBuf>,
    },
}

/// Optional narrowing shared by all competitors.
#[derive(Debug, Args, Default)]
pub struct GlobalArgs {
    /// Global: restrict every list and slot to one year
    #[arg(long = "global-year")]
    pub global_year: Option<String>,

    /// Global: restrict every list and slot to one quarter
    #[arg(long = "global-quarter")]
    pub global_quarter: Option<String>,

    /// Global: restrict every list and slot to one region
    #[arg(long = "global-region")]
    pub global_region: Option<String>,
}
