//! Immutable pipeline configuration.
//!
//! The fixed browser header set and the connection ceiling live here as
//! plain values constructed once at process start and passed explicitly
//! into the fetcher, so tests can run with alternate headers or ceilings.

/// Default artifact written by the scrape stage.
pub const DEFAULT_RESULTS_PATH: &str = "walmart_products_with_reviews.json";
/// Default artifact written by the categorize stage.
pub const DEFAULT_CATEGORIZED_PATH: &str = "categorized_products.json";
/// Default artifact written by the export stage and rewritten by the
/// labeling pass.
pub const DEFAULT_REVIEWS_CSV_PATH: &str = "product_reviews.csv";

const BASE_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";
const BASE_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8";
const BASE_ACCEPT_LANGUAGE: &str = "en-US;en;q=0.9";

/// Settings for one scrape batch: the browser-identifying headers sent with
/// every request and the transport ceilings.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Header name/value pairs attached to every request. The defaults
    /// identify a desktop Chrome so the catalog serves a standard HTML
    /// response instead of a bot-challenge page.
    ///
    /// `accept-encoding` is intentionally not listed: the transport
    /// negotiates compression itself, and setting the header manually
    /// would disable its automatic decompression.
    pub headers: Vec<(String, String)>,
    /// Simultaneous connection / in-flight request ceiling. Also bounds the
    /// kept-alive pool.
    pub max_connections: usize,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            headers: vec![
                ("user-agent".to_string(), BASE_USER_AGENT.to_string()),
                ("accept".to_string(), BASE_ACCEPT.to_string()),
                (
                    "accept-language".to_string(),
                    BASE_ACCEPT_LANGUAGE.to_string(),
                ),
            ],
            max_connections: 5,
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
