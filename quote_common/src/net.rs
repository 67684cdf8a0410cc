//! Shared HTTP constants and helpers used by client and server.

/// Default port of the quote server.
pub const DEFAULT_PORT: u16 = 8000;
/// Default bind host of the quote server.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Submission route (form-encoded `name`, `message`).
pub const QUOTE_ROUTE: &str = "/quote";
/// Retrieval route (optional `max_age_days` query parameter).
pub const QUOTES_ROUTE: &str = "/quotes";
/// Liveness route.
pub const HEALTH_ROUTE: &str = "/health";

/// Helper to format a host with a port like "host:port".
pub fn addr(host: &str, port: u16) -> String {
    format!("{}:{}", host, port)
}

/// Join a base URL such as `http://127.0.0.1:8000/` with a route.
pub fn url(base: &str, route: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_strips_trailing_slash() {
        assert_eq!(url("http://localhost:8000/", QUOTES_ROUTE), "http://localhost:8000/quotes");
        assert_eq!(url("http://localhost:8000", QUOTE_ROUTE), "http://localhost:8000/quote");
    }

    #[test]
    fn addr_joins_host_and_port() {
        assert_eq!(addr(DEFAULT_HOST, DEFAULT_PORT), "127.0.0.1:8000");
    }
}
