use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "orrery", version, about = "Generate, browse and exchange star systems")]
pub struct Cli {
    /// Settings file (defaults to <config dir>/orrery/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Database file, overrides the settings
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// List every system in the catalogue
    List,
    /// Print the star and planet cards of a system
    Show {
        #[arg(long)]
        index: Option<usize>,
    },
    /// Generate a random system and store it
    Generate {
        #[arg(long)]
        min: Option<usize>,
        #[arg(long)]
        max: Option<usize>,
    },
    /// Import a system from a CSV file
    Import { file: PathBuf },
    /// Export a system to a CSV file
    Export {
        file: PathBuf,
        #[arg(long)]
        index: Option<usize>,
    },
    /// Reset the list to the default system
    ClearList,
    /// Delete every stored system
    ClearStore,
    /// Reload the list from the database
    Reload,
    /// Set or clear the image of a planet
    SetImage {
        /// Planet position, 0 = innermost
        planet: usize,
        /// New image path; omit to clear
        path: Option<String>,
        /// System to switch to first (defaults to the current one)
        #[arg(long)]
        system: Option<usize>,
    },
    /// Print the raw database tables
    Dump,
}

/// Planet range for `generate`
///
/// A lone `--min` or `--max` is paired with the configured bound, widened so
/// the range stays valid. Both flags together are taken as given.
pub fn planet_range(
    min: Option<usize>,
    max: Option<usize>,
    (configured_min, configured_max): (usize, usize),
) -> (usize, usize) {
    match (min, max) {
        (Some(min), Some(max)) => (min, max),
        (Some(min), None) => (min, configured_max.max(min)),
        (None, Some(max)) => (configured_min.min(max), max),
        (None, None) => (configured_min, configured_max),
    }
}
