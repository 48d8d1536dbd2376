pub mod buckets;
pub mod error;
pub mod flatten;
pub mod label;
pub mod table;

pub use buckets::{load_results, CategorizedCatalog};
pub use error::ExportError;
pub use flatten::{flatten, FieldDefaults, FlatReviewRow};
pub use label::{apply_labels, LabelSummary};
pub use table::write_rows;
