//! Keyword-based product categorization.
//!
//! A product lands in exactly one of six fixed categories. Matching is a
//! case-insensitive substring test of each category's keywords against the
//! product name, in a fixed enumeration order; the first category with a
//! hit wins and `other` is the exhaustive fallback. The order-dependence is
//! a documented policy, not a ranking: a name matching both "tablet" and
//! "table" is electronics because electronics is tested first.

use serde::{Deserialize, Serialize};

use crate::product::ProductRecord;

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Beauty,
    Furniture,
    Clothing,
    Kitchen,
    Other,
}

impl Category {
    /// All categories in enumeration (and artifact) order. `Other` is last
    /// and carries no keywords.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Beauty,
        Category::Furniture,
        Category::Clothing,
        Category::Kitchen,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Beauty => "beauty",
            Category::Furniture => "furniture",
            Category::Clothing => "clothing",
            Category::Kitchen => "kitchen",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable keyword table driving categorization.
///
/// Constructed once at startup and passed explicitly into the pipeline so
/// tests can swap in alternate tables. [`CategoryTable::default`] carries
/// the built-in keyword sets.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    rules: Vec<(Category, Vec<String>)>,
}

impl CategoryTable {
    /// Builds a table from `(category, keywords)` rules, tested in the
    /// given order.
    #[must_use]
    pub fn new(rules: Vec<(Category, Vec<String>)>) -> Self {
        Self { rules }
    }

    /// Assigns the single category for a product. Products without a name
    /// match no keywords and fall through to [`Category::Other`].
    #[must_use]
    pub fn categorize(&self, product: &ProductRecord) -> Category {
        self.categorize_name(product.name.as_deref().unwrap_or(""))
    }

    /// Assigns a category from a bare product name.
    #[must_use]
    pub fn categorize_name(&self, name: &str) -> Category {
        let name = name.to_lowercase();
        for (category, keywords) in &self.rules {
            if keywords.iter().any(|kw| name.contains(kw.as_str())) {
                return *category;
            }
        }
        Category::Other
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let owned = |kws: &[&str]| kws.iter().map(|s| (*s).to_string()).collect();
        Self::new(vec![
            (
                Category::Electronics,
                owned(&["laptop", "macbook", "phone", "tablet", "headphones", "tv"]),
            ),
            (
                Category::Beauty,
                owned(&["moisturizing", "lotion", "skincare", "beauty", "makeup"]),
            ),
            (
                Category::Furniture,
                owned(&["chair", "table", "sofa", "furniture", "bed", "couch"]),
            ),
            (
                Category::Clothing,
                owned(&["shirt", "pants", "dress", "jacket", "jeans"]),
            ),
            (
                Category::Kitchen,
                owned(&[
                    "air fryer",
                    "oven",
                    "microwave",
                    "steamer",
                    "deep fryer",
                    "stove",
                    "grill",
                    "plancha",
                    "wok",
                    "mixer",
                    "blender",
                    "food processor",
                    "mincer",
                    "grater",
                    "mandoline",
                    "juicer",
                    "peeler",
                    "whisk",
                    "rolling pin",
                    "pan",
                    "pot",
                    "casserole",
                    "roasting pan",
                    "baking tin",
                    "baking tray",
                    "grill pan",
                    "plate",
                    "bowl",
                    "glass",
                    "cup",
                    "carafe",
                    "bread basket",
                    "airtight container",
                    "spice rack",
                    "knife block",
                    "chopping board",
                    "wooden spoon",
                    "spatula",
                    "tongs",
                    "ladle",
                    "skimmer",
                    "pastry brush",
                    "meat tongs",
                    "pepper mill",
                    "salt mill",
                    "garlic press",
                    "zester",
                    "pizza cutter",
                    "bottle opener",
                    "wine opener",
                ]),
            ),
        ])
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
