//! Flattening of categorized product + review nests into one row per
//! review.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::buckets::CategorizedCatalog;

/// One row of the final review table. Serde renames match the CSV header
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatReviewRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Customer Name")]
    pub customer_name: String,
    #[serde(rename = "Rating")]
    pub rating: String,
    #[serde(rename = "Review")]
    pub review: String,
}

/// The substitutions applied when a source field is absent, collected in
/// one place so every default is enumerable in tests.
#[derive(Debug, Clone)]
pub struct FieldDefaults {
    pub product_name: String,
    pub customer_name: String,
    pub rating: String,
    pub review: String,
}

impl Default for FieldDefaults {
    fn default() -> Self {
        Self {
            product_name: "Unknown".to_string(),
            customer_name: "Anonymous".to_string(),
            rating: "N/A".to_string(),
            review: "No Review".to_string(),
        }
    }
}

/// Produces one [`FlatReviewRow`] per (product, review) pair: buckets in
/// fixed category order, products in categorized order, reviews in their
/// original collection order. A product whose `reviews_raw` has no
/// `customerReviews` array contributes zero rows.
#[must_use]
pub fn flatten(catalog: &CategorizedCatalog, defaults: &FieldDefaults) -> Vec<FlatReviewRow> {
    let mut rows = Vec::new();
    for (category, result) in catalog.iter() {
        let product_name = result
            .product
            .name
            .clone()
            .unwrap_or_else(|| defaults.product_name.clone());

        let Some(reviews) = result
            .reviews_raw
            .get("customerReviews")
            .and_then(Value::as_array)
        else {
            continue;
        };

        for review in reviews {
            rows.push(FlatReviewRow {
                category: category.to_string(),
                product_name: product_name.clone(),
                customer_name: string_field(review, "userNickname", &defaults.customer_name),
                rating: rating_field(review, &defaults.rating),
                review: string_field(review, "reviewText", &defaults.review),
            });
        }
    }
    rows
}

fn string_field(review: &Value, key: &str, default: &str) -> String {
    review
        .get(key)
        .and_then(Value::as_str)
        .map_or_else(|| default.to_string(), str::to_string)
}

/// Ratings arrive as JSON numbers; keep integer ratings free of a trailing
/// `.0` in the table.
fn rating_field(review: &Value, default: &str) -> String {
    match review.get("rating") {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}
