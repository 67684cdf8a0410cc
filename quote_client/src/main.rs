//! Quote Client: a command-line front end for the quote server.
//!
//! Submits quotes and lists them, optionally limited to a recent window.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client submit --name "Peter Anteater" --message "Zot Zot Zot!"
//! quote_client list --period week
//! quote_client --server http://192.168.0.10:8000 list --max-age-days 3
//! ```
#![warn(missing_docs)]
mod args;
mod model;
mod sender;

use crate::args::{Action, Args};
use crate::sender::QuoteSender;
use clap::Parser;
use log::{error, info};
use quote_common::api::AgeQuery;
use quote_common::{Quote, Result};

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    let args = Args::parse();
    let sender = QuoteSender::new(args.server.trim());

    let outcome = match args.action {
        Action::Submit { name, message } => sender.submit(&name, &message).map(|quote| {
            info!("Quote stored at {}", quote.time);
            print_quote(&quote);
        }),
        Action::List { period, max_age_days } => {
            let days = max_age_days.unwrap_or_else(|| period.days());
            let query = AgeQuery {
                max_age_days: (days != 0).then_some(days),
            };
            sender.list(&query).map(|quotes| {
                if quotes.is_empty() {
                    println!("No quotes yet. Be the first to add one!");
                }
                quotes.iter().for_each(print_quote);
            })
        }
    };

    if let Err(e) = &outcome {
        error!("{}", e);
    }
    outcome
}

fn print_quote(quote: &Quote) {
    println!("[{}] \"{}\" - {}", quote.time, quote.message, quote.name);
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
