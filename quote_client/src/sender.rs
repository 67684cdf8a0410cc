//! Sending requests to the quote server over HTTP.
//!
//! `QuoteSender` wraps a blocking `reqwest` client bound to the server's base
//! URL. Non-success responses are turned into `QuoteError::Transport`, carrying
//! the status and the server's `{"error": ...}` message when there is one.
use log::{debug, info};
use quote_common::api::{AgeQuery, ErrorBody, SubmitForm};
use quote_common::net::{QUOTE_ROUTE, QUOTES_ROUTE, url};
use quote_common::{Quote, QuoteError, Result};
use reqwest::blocking::{Client, Response};

/// Helper type for talking to the server.
pub struct QuoteSender {
    http: Client,
    base: String,
}

impl QuoteSender {
    /// Client for the server at `base` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base: &str) -> Self {
        Self {
            http: Client::new(),
            base: base.to_string(),
        }
    }

    /// POST a new quote and return the stored record.
    pub fn submit(&self, name: &str, message: &str) -> Result<Quote> {
        let form = SubmitForm {
            name: name.to_string(),
            message: message.to_string(),
        };
        let target = url(&self.base, QUOTE_ROUTE);
        info!("Submitting quote to {}", target);
        let response = self
            .http
            .post(&target)
            .form(&form)
            .send()
            .map_err(|e| QuoteError::Transport(format!("Failed to reach {}: {}", target, e)))?;
        decode(response)
    }

    /// GET the quotes inside `query`'s window. The window is validated locally first.
    pub fn list(&self, query: &AgeQuery) -> Result<Vec<Quote>> {
        query.max_age()?;
        let target = url(&self.base, QUOTES_ROUTE);
        debug!("Fetching {} with {:?}", target, query);
        let response = self
            .http
            .get(&target)
            .query(query)
            .send()
            .map_err(|e| QuoteError::Transport(format!("Failed to reach {}: {}", target, e)))?;
        decode(response)
    }
}

fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json()
            .map_err(|e| QuoteError::Transport(format!("Invalid response body: {}", e)));
    }
    let reason = response
        .json::<ErrorBody>()
        .map(|body| body.error)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown error").to_string());
    Err(QuoteError::Transport(format!("{}: {}", status, reason)))
}
