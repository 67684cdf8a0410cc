//! Axum route handlers for the quote API.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::extract::{Form, Query, State};
use axum::response::Json;
use log::{debug, info};
use quote_common::api::{AgeQuery, Health, SubmitForm};
use quote_common::{Quote, QuoteError, QuoteStore};
use tokio::task;

use crate::error::ApiError;

/// Shared state handed to every handler.
pub struct AppState {
    /// The quote store; the mutex gives each request exclusive access.
    pub store: Mutex<QuoteStore>,
    /// Server start, reported as uptime by the health route.
    pub start_time: Instant,
}

impl AppState {
    /// Wrap an opened store.
    pub fn new(store: QuoteStore) -> Self {
        Self {
            store: Mutex::new(store),
            start_time: Instant::now(),
        }
    }
}

/// POST /quote: store a new quote and return it.
///
/// The write to the data file runs on the blocking pool.
pub async fn post_quote(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SubmitForm>,
) -> Result<Json<Quote>, ApiError> {
    let quote = task::spawn_blocking(move || -> Result<Quote, QuoteError> {
        let mut store = state.store.lock()?;
        let quote = store.submit(&form.name, &form.message)?;
        info!("New quote from {:?} ({} stored)", quote.name, store.len());
        Ok(quote)
    })
    .await
    .map_err(|e| QuoteError::Task(e.to_string()))??;
    Ok(Json(quote))
}

/// GET /quotes?max_age_days=N: quotes inside the window, oldest first.
pub async fn get_quotes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AgeQuery>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let max_age = query.max_age()?;
    let store = state.store.lock().map_err(QuoteError::from)?;
    let quotes = store.quotes(max_age)?;
    debug!("Returning {} quote(s) for max_age={:?}", quotes.len(), max_age);
    Ok(Json(quotes))
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<Health>, ApiError> {
    let store = state.store.lock().map_err(QuoteError::from)?;
    Ok(Json(Health {
        status: "ok".to_string(),
        quotes: store.len(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    }))
}
