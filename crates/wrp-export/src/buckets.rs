//! Category buckets for scraped products.
//!
//! The categorized artifact is a JSON object keyed by the six fixed
//! category names; field declaration order below is the artifact key order
//! and the iteration order for flattening.

use std::path::Path;

use serde::{Deserialize, Serialize};

use wrp_core::{Category, CategoryTable, ScrapeResult};

use crate::error::ExportError;

/// Scraped products grouped under the six fixed categories. Every bucket
/// is present in the serialized artifact, empty or not.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategorizedCatalog {
    pub electronics: Vec<ScrapeResult>,
    pub beauty: Vec<ScrapeResult>,
    pub furniture: Vec<ScrapeResult>,
    pub clothing: Vec<ScrapeResult>,
    pub kitchen: Vec<ScrapeResult>,
    pub other: Vec<ScrapeResult>,
}

impl CategorizedCatalog {
    /// Buckets every result by its product name, preserving the incoming
    /// order within each bucket.
    #[must_use]
    pub fn from_results(results: Vec<ScrapeResult>, table: &CategoryTable) -> Self {
        let mut catalog = Self::default();
        for result in results {
            let category = table.categorize(&result.product);
            catalog.bucket_mut(category).push(result);
        }
        catalog
    }

    #[must_use]
    pub fn bucket(&self, category: Category) -> &[ScrapeResult] {
        match category {
            Category::Electronics => &self.electronics,
            Category::Beauty => &self.beauty,
            Category::Furniture => &self.furniture,
            Category::Clothing => &self.clothing,
            Category::Kitchen => &self.kitchen,
            Category::Other => &self.other,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<ScrapeResult> {
        match category {
            Category::Electronics => &mut self.electronics,
            Category::Beauty => &mut self.beauty,
            Category::Furniture => &mut self.furniture,
            Category::Clothing => &mut self.clothing,
            Category::Kitchen => &mut self.kitchen,
            Category::Other => &mut self.other,
        }
    }

    /// Iterates every `(category, result)` pair, buckets in fixed category
    /// order and results in their bucketed order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &ScrapeResult)> + '_ {
        Category::ALL
            .into_iter()
            .flat_map(move |category| self.bucket(category).iter().map(move |r| (category, r)))
    }

    /// Total products across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.bucket(category).len())
            .sum()
    }

    /// Writes the categorized artifact as pretty-printed JSON. Serialized
    /// fully in memory first; the destination is only touched on success.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Json`] on serialization failure or
    /// [`ExportError::Io`] if the file cannot be written.
    pub fn persist(&self, path: &Path) -> Result<(), ExportError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), products = self.total(), "saved categorized products");
        Ok(())
    }

    /// Reads a categorized artifact back.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be read or
    /// [`ExportError::Json`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, ExportError> {
        let text = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Reads the scrape stage's JSON artifact back into memory.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be read or
/// [`ExportError::Json`] if it does not parse.
pub fn load_results(path: &Path) -> Result<Vec<ScrapeResult>, ExportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
