//! cuadra-core: statement model and the EECC text parsing engine.

pub mod assemble;
pub mod classify;
pub mod dates;
pub mod error;
pub mod model;
pub mod row;
pub mod tokenize;

pub use assemble::parse_pages;
pub use classify::{
    LineKind, classify, decode_holder_header, is_holder_header, is_section_end,
    is_transaction_row,
};
pub use dates::resolve_day_month;
pub use error::{ParseError, Result};
pub use model::{Currency, Holder, HolderTotals, Operation, Statement};
pub use row::decode_row;
pub use tokenize::tokenize;
