pub mod client;
pub mod error;
pub mod normalize;
pub mod payload;
pub mod pipeline;

pub use client::{PageClient, RawPage};
pub use error::ScraperError;
pub use normalize::normalize_payload;
pub use payload::{extract_embedded_state, RawPayload, EMBEDDED_STATE_ELEMENT_ID};
pub use pipeline::{scrape_catalog, BatchSummary};
