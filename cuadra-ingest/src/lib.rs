//! cuadra-ingest: the extraction hand-off boundary (page text plus
//! creation metadata) between the external PDF-to-text step and the
//! parsing engine.

pub mod metadata;
pub mod pages;
pub mod types;

pub use metadata::parse_creation_date;
pub use pages::{interior_pages, split_pages};
pub use types::ExtractedDocument;
