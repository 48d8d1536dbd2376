use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid header \"{name}\" in scrape config: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// A fetch came back with a non-success status. One bad response aborts
    /// the whole batch: a non-200 from the catalog strongly suggests the
    /// session is blocked and later requests would fail too.
    #[error("blocked or failed request: {url} returned HTTP {status}")]
    BlockedRequest { url: String, status: u16 },

    #[error("embedded payload script #{element_id} not found in page markup")]
    PayloadNotFound { element_id: &'static str },

    #[error("malformed embedded payload ({context}): {source}")]
    MalformedPayload {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected payload shape: missing \"{segment}\" under {path}")]
    UnexpectedShape { segment: String, path: String },

    #[error("failed to serialize scrape results: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to persist scrape results to {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
