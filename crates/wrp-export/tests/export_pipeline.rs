//! End-to-end test of the transformation stages: categorize → persist →
//! reload → flatten → export → label, over the synthetic two-product
//! catalog.

use serde_json::json;

use wrp_core::{CategoryTable, ProductRecord, ScrapeResult};
use wrp_export::{apply_labels, flatten, write_rows, CategorizedCatalog, FieldDefaults};

fn result(name: &str, reviews: serde_json::Value) -> ScrapeResult {
    ScrapeResult {
        product: ProductRecord {
            name: Some(name.to_string()),
            ..ProductRecord::default()
        },
        reviews_raw: json!({ "customerReviews": reviews }),
    }
}

#[test]
fn categorized_catalog_flattens_and_labels_through_the_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("categorized_products.json");
    let csv_path = dir.path().join("product_reviews.csv");

    let results = vec![
        result(
            "Apple MacBook Air",
            json!([
                {"userNickname": "ana", "rating": 5, "reviewText": "Superb"},
                {"userNickname": "bo", "rating": 2, "reviewText": "Broke, twice"},
            ]),
        ),
        result(
            "CeraVe Moisturizing Lotion",
            json!([
                {"rating": 4},
            ]),
        ),
    ];

    let catalog = CategorizedCatalog::from_results(results, &CategoryTable::default());
    catalog.persist(&catalog_path).unwrap();

    let reloaded = CategorizedCatalog::load(&catalog_path).unwrap();
    assert_eq!(reloaded.electronics.len(), 1);
    assert_eq!(reloaded.beauty.len(), 1);

    let rows = flatten(&reloaded, &FieldDefaults::default());
    assert_eq!(rows.len(), 3);
    let categories: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, ["electronics", "electronics", "beauty"]);
    // The lotion review has no nickname or text, so defaults apply.
    assert_eq!(rows[2].customer_name, "Anonymous");
    assert_eq!(rows[2].review, "No Review");

    write_rows(&rows, &csv_path).unwrap();
    let summary = apply_labels(&csv_path).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.positive, 2); // ratings 5 and 4
    assert_eq!(summary.non_numeric, 0);

    let text = std::fs::read_to_string(&csv_path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Category,Product Name,Customer Name,Rating,Review,label"
    );
    assert!(lines.next().unwrap().starts_with("electronics,Apple MacBook Air,ana,5,"));
    // The embedded comma in the second review stays quoted.
    assert!(text.contains("\"Broke, twice\""));
}
