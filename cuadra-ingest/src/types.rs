//! The extraction hand-off document.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::metadata::parse_creation_date;
use crate::pages::{interior_pages, split_pages};

/// Output of the page-text extraction step, as handed to the parser.
///
/// `created` stays the raw metadata string (RFC 3339 or a PDF `D:` date)
/// so that any extractor dump deserializes; it is resolved on demand by
/// [`ExtractedDocument::creation_date`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractedDocument {
    pub created: Option<String>,
    pub pages: Vec<String>,
}

impl ExtractedDocument {
    /// Deserialize an extractor JSON dump.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid extraction dump")
    }

    /// Build from raw layout text with form-feed page breaks, dropping
    /// the cover and back pages unless `keep_edge_pages`.
    pub fn from_layout_text(text: &str, created: Option<String>, keep_edge_pages: bool) -> Self {
        let pages = split_pages(text);
        let pages = if keep_edge_pages {
            pages
        } else {
            interior_pages(pages)
        };
        Self { created, pages }
    }

    /// Resolve the creation metadata, if any, to a timestamp.
    pub fn creation_date(&self) -> Result<Option<DateTime<FixedOffset>>> {
        self.created.as_deref().map(parse_creation_date).transpose()
    }
}
