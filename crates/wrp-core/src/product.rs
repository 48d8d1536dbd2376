//! Domain records produced by the scrape pipeline.
//!
//! ## Observed shape of the Walmart `__NEXT_DATA__` product node
//!
//! The embedded page state carries far more fields than we keep. The
//! projection below is the normalizer's whole job: deserializing the raw
//! product node into [`ProductRecord`] drops everything outside the twelve
//! enumerated fields, and every kept field is optional because the upstream
//! payload omits keys rather than sending `null`.
//!
//! ### `imageInfo` / `priceInfo`
//! Nested objects whose internals vary by listing (thumbnail variants,
//! member pricing, strikethrough pricing). We pass them through as raw JSON
//! rather than modeling a shape we don't consume.
//!
//! ### `orderLimit` / `orderMinLimit`
//! Observed as integers on most listings but as display strings on some
//! marketplace items, so they stay raw JSON too.
//!
//! ### `reviews_raw`
//! The sibling `reviews` node is not reshaped at all. The flattener reads
//! `customerReviews[*].{userNickname, rating, reviewText}` out of it at
//! export time; everything else rides along into the JSON artifact.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The product projection kept from a scraped page: a fixed, enumerated set
/// of fields. Absent fields stay absent: they are skipped on
/// serialization, never defaulted to `null`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Walmart item identifier, a decimal string like `"609040889"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Raw image metadata object; internals vary by listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_info: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,

    /// Display name. The sole signal used for categorization; treated as
    /// case-insensitive free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Raw order-limit value; integer or display string upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_limit: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_min_limit: Option<Value>,

    /// Raw pricing object; internals vary by listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_info: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
}

/// One successfully processed product page: the projected product record
/// plus its review collection exactly as found in the page state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub product: ProductRecord,
    /// The page's `reviews` node, unmodified. The flattener consumes
    /// `customerReviews` from it at export time.
    pub reviews_raw: Value,
}

impl ScrapeResult {
    /// Number of customer reviews in the raw review collection, or 0 when
    /// the `customerReviews` array is absent.
    #[must_use]
    pub fn review_count(&self) -> usize {
        self.reviews_raw
            .get("customerReviews")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
