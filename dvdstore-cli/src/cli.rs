//! CLI argument parsing definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Set the log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the query layer against the live database
    Demo {
        /// Actor to look up
        #[arg(long, value_name = "ID", default_value = "1")]
        actor_id: i32,

        /// Only consider films released on or after this year
        #[arg(long, value_name = "YEAR", default_value = "2006")]
        released_on_or_after: i16,

        /// How many of the actor's longest films to show
        #[arg(long, value_name = "N", default_value = "3")]
        top: u64,

        /// Inventory id cutoff for the inventory listing
        #[arg(long, value_name = "ID", default_value = "10")]
        inventory_below: i32,
    },

    /// Print the overdue rentals report
    Overdue {
        /// Report instant as an RFC 3339 timestamp (defaults to now)
        #[arg(long, value_name = "TIMESTAMP")]
        as_of: Option<String>,

        /// Maximum number of rows to print
        #[arg(long, value_name = "N", default_value = "25")]
        limit: u64,
    },
}
