//! Command-line and environment configuration for the quote server.
//!
//! Every flag can also be supplied through the environment (a `.env` file in
//! the working directory is loaded first).
use std::path::PathBuf;

use clap::Parser;
use quote_common::MalformedPolicy;
use quote_common::net::{DEFAULT_HOST, DEFAULT_PORT};

/// Parsed server configuration.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Interface to bind.
    #[clap(long, env = "QUOTE_SERVER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// TCP port to listen on.
    #[clap(long, env = "QUOTE_SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path of the JSON data file. Created on first run.
    #[clap(long, env = "QUOTE_DATA_PATH", default_value = "data/database.json")]
    pub data: PathBuf,

    /// Handling of stored quotes whose timestamp cannot be parsed when an age
    /// window is requested.
    #[clap(long, env = "QUOTE_MALFORMED_POLICY", value_enum, default_value_t = MalformedPolicy::Include)]
    pub malformed: MalformedPolicy,
}
