//! Parse failure taxonomy. Every variant aborts the current document;
//! there is no partial-result mode.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed holder header: {line:?}")]
    MalformedHolderHeader { line: String },

    #[error("transaction row before any holder section: {line:?}")]
    RowBeforeHolder { line: String },

    #[error("invalid row shape ({fields} fields): {line:?}")]
    InvalidRowShape { fields: usize, line: String },

    #[error("ambiguous or missing amount: {line:?}")]
    AmbiguousOrMissingAmount { line: String },

    #[error("invalid operation date {token:?}")]
    InvalidDate { token: String },

    #[error("document carries no creation timestamp")]
    MissingCreationMetadata,
}

pub type Result<T> = std::result::Result<T, ParseError>;
