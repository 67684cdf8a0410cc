//! Quotes HTTP server.
//!
//! Wires a [`QuoteStore`] into an axum router:
//!
//! - `POST /quote`: form fields `name`, `message`; stores and returns the quote.
//! - `GET /quotes`: optional `max_age_days` (alias `maxAgeDays`); returns the
//!   quotes inside the window, oldest first. Negative values are rejected with 400.
//! - `GET /health`: liveness and collection size.
//!
//! The store is opened by the caller, shared through [`AppState`], and flushed by
//! [`shutdown`] once the server has stopped accepting requests.
#![warn(missing_docs)]
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use log::info;
use quote_common::net::{HEALTH_ROUTE, QUOTE_ROUTE, QUOTES_ROUTE};
use quote_common::{QuoteError, QuoteStore, Result};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use routes::AppState;

/// Build the router over `state`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route(QUOTE_ROUTE, post(routes::post_quote))
        .route(QUOTES_ROUTE, get(routes::get_quotes))
        .route(HEALTH_ROUTE, get(routes::health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Flush and close the store once no request can reach it anymore.
pub fn shutdown(state: Arc<AppState>) -> Result<()> {
    match Arc::try_unwrap(state) {
        Ok(state) => {
            let store: QuoteStore = state.store.into_inner()?;
            store.close()?;
        }
        Err(shared) => {
            shared.store.lock().map_err(QuoteError::from)?.flush()?;
        }
    }
    info!("Quote store closed");
    Ok(())
}
