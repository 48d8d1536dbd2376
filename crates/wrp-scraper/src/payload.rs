//! Embedded-payload extraction from rendered page markup.
//!
//! Walmart product pages ship their server-rendered state as one JSON blob
//! inside `<script id="__NEXT_DATA__">`. This module locates that element,
//! parses it, and wraps the result in [`RawPayload`], whose fallible path
//! navigation is the single place where an upstream layout change surfaces
//! as a typed error instead of a panic.

use regex::Regex;
use serde_json::Value;

use crate::error::ScraperError;

/// Element id of the script tag carrying the server-rendered page state.
pub const EMBEDDED_STATE_ELEMENT_ID: &str = "__NEXT_DATA__";

/// The parsed embedded page state. Exists only within the extractor and
/// normalizer boundary; callers get a [`wrp_core::ScrapeResult`] out.
#[derive(Debug, Clone)]
pub struct RawPayload {
    root: Value,
}

/// Locates the embedded-state script element and parses its content.
///
/// # Errors
///
/// - [`ScraperError::PayloadNotFound`] — no script element with the known
///   id in the markup. A blocked/challenge page looks exactly like this.
/// - [`ScraperError::MalformedPayload`] — the element exists but its text
///   is not valid JSON.
pub fn extract_embedded_state(html: &str) -> Result<RawPayload, ScraperError> {
    let script_re = Regex::new(&format!(
        r#"(?is)<script\b[^>]*\bid\s*=\s*["']{}["'][^>]*>(.*?)</script>"#,
        regex::escape(EMBEDDED_STATE_ELEMENT_ID)
    ))
    .expect("valid embedded-state script regex");

    let raw = script_re
        .captures(html)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .ok_or(ScraperError::PayloadNotFound {
            element_id: EMBEDDED_STATE_ELEMENT_ID,
        })?;

    RawPayload::parse(raw)
}

impl RawPayload {
    /// Parses a raw JSON string into a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::MalformedPayload`] if `raw` is not valid JSON.
    pub fn parse(raw: &str) -> Result<Self, ScraperError> {
        let root = serde_json::from_str(raw).map_err(|e| ScraperError::MalformedPayload {
            context: "embedded page state".to_string(),
            source: e,
        })?;
        Ok(Self { root })
    }

    /// Walks `path` object-key by object-key from the payload root.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::UnexpectedShape`] naming the first missing
    /// segment and the path prefix under which it was expected.
    pub fn get(&self, path: &[&str]) -> Result<&Value, ScraperError> {
        let mut node = &self.root;
        for (depth, segment) in path.iter().enumerate() {
            node = node
                .get(segment)
                .ok_or_else(|| ScraperError::UnexpectedShape {
                    segment: (*segment).to_string(),
                    path: if depth == 0 {
                        "$".to_string()
                    } else {
                        format!("$.{}", path[..depth].join("."))
                    },
                })?;
        }
        Ok(node)
    }

    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
