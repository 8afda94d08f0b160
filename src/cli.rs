//! CLI definitions for bidhands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const DEFAULT_SNAPSHOT_URL: &str = "https://www.freelancer.com/projects/saved/snapshot";

/// bidhands CLI.
#[derive(Parser)]
#[command(name = "bidhands")]
#[command(about = "Gemini-assisted bid drafting for freelance job pages")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.bidhands/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a bid draft from a saved project page
    Generate {
        /// HTML snapshot of the project page
        #[arg(long)]
        page: PathBuf,

        /// Address the snapshot was taken from
        #[arg(long, default_value = DEFAULT_SNAPSHOT_URL)]
        url: String,
    },

    /// Fill the bid form on a saved project page, optionally placing the bid
    Bid {
        /// HTML snapshot of the project page
        #[arg(long)]
        page: PathBuf,

        /// Address the snapshot was taken from
        #[arg(long, default_value = DEFAULT_SNAPSHOT_URL)]
        url: String,

        /// Bid description text
        #[arg(long)]
        text: String,

        /// Bid amount
        #[arg(long)]
        amount: Option<f64>,

        /// Delivery time in days
        #[arg(long)]
        days: Option<u32>,

        /// Enable the sponsored upgrade
        #[arg(long)]
        sponsored: bool,

        /// Enable the sealed upgrade
        #[arg(long)]
        sealed: bool,

        /// Enable the highlight upgrade
        #[arg(long)]
        highlight: bool,

        /// Also activate the place-bid button after filling
        #[arg(long)]
        place: bool,
    },

    /// Create the credentials file template
    Configure,
}
