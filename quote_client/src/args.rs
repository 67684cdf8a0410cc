//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};

use crate::model::period::Period;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote server.
    #[clap(long, env = "QUOTE_SERVER_URL", default_value = "http://127.0.0.1:8000")]
    pub server: String,

    /// What to do.
    #[command(subcommand)]
    pub action: Action,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Submit a new quote.
    Submit {
        /// Name shown next to the quote.
        #[clap(long)]
        name: String,
        /// The quote itself.
        #[clap(long)]
        message: String,
    },
    /// List stored quotes, oldest first.
    List {
        /// Preset window.
        #[clap(long, value_enum, default_value_t = Period::All)]
        period: Period,
        /// Explicit window in days; overrides `--period`. `0` means all time.
        #[clap(long, allow_negative_numbers = true)]
        max_age_days: Option<i64>,
    },
}
