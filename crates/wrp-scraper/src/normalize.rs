//! Projection of the raw page state into domain records.

use wrp_core::{ProductRecord, ScrapeResult};

use crate::error::ScraperError;
use crate::payload::RawPayload;

/// Where the product object lives inside the embedded page state.
const PRODUCT_PATH: [&str; 5] = ["props", "pageProps", "initialData", "data", "product"];
/// Where the review collection lives. Sibling of the product object.
const REVIEWS_PATH: [&str; 5] = ["props", "pageProps", "initialData", "data", "reviews"];

/// Projects a payload into one [`ScrapeResult`]: the product node reduced
/// to the enumerated [`ProductRecord`] fields, and the reviews node passed
/// through unmodified.
///
/// # Errors
///
/// - [`ScraperError::UnexpectedShape`] — a path segment is missing; the
///   error names it.
/// - [`ScraperError::MalformedPayload`] — the product node exists but does
///   not deserialize into a [`ProductRecord`] (e.g. a non-object).
pub fn normalize_payload(payload: &RawPayload) -> Result<ScrapeResult, ScraperError> {
    let product_node = payload.get(&PRODUCT_PATH)?;
    let product: ProductRecord =
        serde_json::from_value(product_node.clone()).map_err(|e| ScraperError::MalformedPayload {
            context: "product record".to_string(),
            source: e,
        })?;

    let reviews_raw = payload.get(&REVIEWS_PATH)?.clone();

    Ok(ScrapeResult {
        product,
        reviews_raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn payload_with(product: Value, reviews: Value) -> RawPayload {
        RawPayload::parse(
            &json!({
                "props": {"pageProps": {"initialData": {"data": {
                    "product": product,
                    "reviews": reviews,
                }}}}
            })
            .to_string(),
        )
        .unwrap()
    }

    #[test]
    fn projects_the_enumerated_fields_and_drops_the_rest() {
        let payload = payload_with(
            json!({
                "name": "Apple MacBook Air",
                "brand": "Apple",
                "averageRating": 4.6,
                "sellerId": "F55CB8", // not in the enumerated set
            }),
            json!({"customerReviews": []}),
        );
        let result = normalize_payload(&payload).unwrap();
        assert_eq!(result.product.name.as_deref(), Some("Apple MacBook Air"));
        assert_eq!(result.product.average_rating, Some(4.6));

        let reserialized = serde_json::to_value(&result.product).unwrap();
        assert!(reserialized.get("sellerId").is_none());
    }

    #[test]
    fn reviews_pass_through_unmodified() {
        let reviews = json!({
            "customerReviews": [{"userNickname": "sam", "rating": 5}],
            "topNegativeReview": {"rating": 1},
            "roundedAverageOverallRating": 4.2,
        });
        let payload = payload_with(json!({"name": "x"}), reviews.clone());
        let result = normalize_payload(&payload).unwrap();
        assert_eq!(result.reviews_raw, reviews);
    }

    #[test]
    fn missing_product_segment_names_it() {
        let payload = RawPayload::parse(
            &json!({"props": {"pageProps": {"initialData": {"data": {"reviews": {}}}}}})
                .to_string(),
        )
        .unwrap();
        let err = normalize_payload(&payload).unwrap_err();
        assert!(
            matches!(err, ScraperError::UnexpectedShape { ref segment, .. } if segment == "product"),
            "expected UnexpectedShape for \"product\", got: {err:?}"
        );
    }

    #[test]
    fn missing_reviews_segment_names_it() {
        let payload = RawPayload::parse(
            &json!({"props": {"pageProps": {"initialData": {"data": {"product": {"name": "x"}}}}}})
                .to_string(),
        )
        .unwrap();
        let err = normalize_payload(&payload).unwrap_err();
        assert!(
            matches!(err, ScraperError::UnexpectedShape { ref segment, .. } if segment == "reviews"),
            "expected UnexpectedShape for \"reviews\", got: {err:?}"
        );
    }

    #[test]
    fn non_object_product_node_is_malformed() {
        let payload = payload_with(json!("not an object"), json!({}));
        let err = normalize_payload(&payload).unwrap_err();
        assert!(
            matches!(err, ScraperError::MalformedPayload { ref context, .. } if context == "product record"),
            "expected MalformedPayload, got: {err:?}"
        );
    }

    #[test]
    fn absent_optional_fields_stay_absent() {
        let payload = payload_with(json!({"id": "609040889"}), json!({}));
        let result = normalize_payload(&payload).unwrap();
        assert!(result.product.name.is_none());
        assert!(result.product.price_info.is_none());
        let reserialized = serde_json::to_value(&result.product).unwrap();
        assert_eq!(reserialized.as_object().unwrap().len(), 1);
    }
}
