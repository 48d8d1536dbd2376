//! End-to-end fetch → extract → normalize orchestration for one batch.

use std::path::Path;

use wrp_core::{ScrapeConfig, ScrapeResult};

use crate::client::{PageClient, RawPage};
use crate::error::ScraperError;
use crate::normalize::normalize_payload;
use crate::payload::extract_embedded_state;

/// Requested-vs-produced accounting for one batch, so silent data loss is
/// observable. `produced < requested` means per-URL skips occurred; every
/// skip also leaves a warn-level log record naming the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub requested: usize,
    pub produced: usize,
}

/// Runs the full pipeline over `urls`: one bounded fetch for the whole
/// batch, then sequential extract + normalize per page, preserving input
/// order modulo per-URL skips.
///
/// Fetch-level failures (any non-success status, network errors) abort the
/// batch. Extract/normalize failures are per-URL: logged and skipped.
///
/// # Errors
///
/// Propagates [`ScraperError::BlockedRequest`] and [`ScraperError::Http`]
/// from the fetch stage.
pub async fn scrape_catalog(
    client: &PageClient,
    urls: &[String],
) -> Result<(Vec<ScrapeResult>, BatchSummary), ScraperError> {
    tracing::info!(count = urls.len(), "scraping product pages");
    let pages = client.fetch_pages(urls).await?;

    let (results, summary) = process_pages(pages);
    tracing::info!(
        requested = summary.requested,
        produced = summary.produced,
        "scrape batch complete"
    );
    Ok((results, summary))
}

/// Extracts and normalizes fetched pages in input order. A page whose
/// payload cannot be processed is logged and dropped; it does not abort
/// the batch.
#[must_use]
pub fn process_pages(pages: Vec<RawPage>) -> (Vec<ScrapeResult>, BatchSummary) {
    let requested = pages.len();
    let mut results = Vec::with_capacity(requested);

    for page in pages {
        match extract_embedded_state(&page.body).and_then(|payload| normalize_payload(&payload)) {
            Ok(result) => results.push(result),
            Err(error) => {
                tracing::warn!(
                    url = %page.url,
                    error = %error,
                    "skipping page: embedded payload could not be processed"
                );
            }
        }
    }

    let summary = BatchSummary {
        requested,
        produced: results.len(),
    };
    (results, summary)
}

/// Serializes the batch to pretty-printed UTF-8 JSON and writes it out.
/// Serialization happens fully in memory first; the destination file is
/// only touched on success.
///
/// # Errors
///
/// Returns [`ScraperError::Serialize`] if the batch cannot be serialized,
/// or [`ScraperError::Persist`] if the file cannot be written.
pub fn persist_results(results: &[ScrapeResult], path: &Path) -> Result<(), ScraperError> {
    let json = serde_json::to_string_pretty(results).map_err(ScraperError::Serialize)?;
    std::fs::write(path, json).map_err(|source| ScraperError::Persist {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), count = results.len(), "saved product data with reviews");
    Ok(())
}

/// Convenience entry point: builds a client (and with it the run-scoped
/// connection pool), scrapes the batch, and persists the JSON artifact.
/// The pool is torn down when this returns.
///
/// # Errors
///
/// Propagates client-construction, fetch, and persistence errors.
pub async fn run(
    config: &ScrapeConfig,
    urls: &[String],
    out_path: &Path,
) -> Result<Vec<ScrapeResult>, ScraperError> {
    let client = PageClient::new(config)?;
    let (results, _summary) = scrape_catalog(&client, urls).await?;
    persist_results(&results, out_path)?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_page(name: &str, reviews: serde_json::Value) -> String {
        let state = json!({
            "props": {"pageProps": {"initialData": {"data": {
                "product": {"name": name},
                "reviews": reviews,
            }}}}
        });
        format!("<html><body><script id=\"__NEXT_DATA__\">{state}</script></body></html>")
    }

    fn raw_page(url: &str, body: String) -> RawPage {
        RawPage {
            url: url.to_string(),
            status: 200,
            body,
        }
    }

    #[test]
    fn processes_pages_in_input_order() {
        let pages = vec![
            raw_page("https://a", product_page("First", json!({}))),
            raw_page("https://b", product_page("Second", json!({}))),
            raw_page("https://c", product_page("Third", json!({}))),
        ];
        let (results, summary) = process_pages(pages);
        let names: Vec<_> = results
            .iter()
            .map(|r| r.product.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
        assert_eq!(
            summary,
            BatchSummary {
                requested: 3,
                produced: 3
            }
        );
    }

    #[test]
    fn one_bad_payload_is_skipped_not_fatal() {
        let pages = vec![
            raw_page("https://a", product_page("First", json!({}))),
            raw_page("https://b", "<html>Robot or human?</html>".to_string()),
            raw_page("https://c", product_page("Third", json!({}))),
        ];
        let (results, summary) = process_pages(pages);
        assert_eq!(results.len(), 2);
        assert_eq!(
            summary,
            BatchSummary {
                requested: 3,
                produced: 2
            }
        );
        // Survivors keep their relative order.
        assert_eq!(results[0].product.name.as_deref(), Some("First"));
        assert_eq!(results[1].product.name.as_deref(), Some("Third"));
    }

    #[test]
    fn persist_writes_pretty_json_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        let (results, _) = process_pages(vec![raw_page(
            "https://a",
            product_page("Only", json!({"customerReviews": [{"rating": 5}]})),
        )]);
        persist_results(&results, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains('\n'), "expected indented output");
        let parsed: Vec<ScrapeResult> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].review_count(), 1);

        // A second run replaces the file in full.
        persist_results(&[], &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
