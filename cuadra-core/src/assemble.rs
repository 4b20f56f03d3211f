//! Single-pass section assembly over classified statement lines.

use chrono::{DateTime, FixedOffset};

use crate::classify::{LineKind, classify, decode_holder_header};
use crate::error::ParseError;
use crate::model::{Holder, Statement};
use crate::row::decode_row;
use crate::tokenize::tokenize;

/// Where the walk currently is relative to the monitored section window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    /// Before the first holder heading.
    Seeking,
    /// The holder at this index is open and accepting rows.
    InSection { holder: usize },
    /// The monthly-limit block was reached; nothing further is read.
    Closed,
}

#[derive(Debug)]
struct Assembler {
    holders: Vec<Holder>,
    state: SectionState,
}

impl Assembler {
    fn new() -> Self {
        Self {
            holders: Vec::new(),
            state: SectionState::Seeking,
        }
    }

    fn closed(&self) -> bool {
        self.state == SectionState::Closed
    }

    /// Advance the machine by one raw line. Once closed, every remaining
    /// line is left unclassified.
    fn feed(&mut self, raw: &str, created: &DateTime<FixedOffset>) -> Result<(), ParseError> {
        if self.closed() {
            return Ok(());
        }

        let tokens = tokenize(raw);
        match classify(&tokens) {
            LineKind::HolderHeader => {
                let (name, card_last4) = decode_holder_header(&tokens, raw)?;
                self.holders.push(Holder {
                    name,
                    card_last4,
                    operations: Vec::new(),
                });
                self.state = SectionState::InSection {
                    holder: self.holders.len() - 1,
                };
            }
            LineKind::SectionEnd => {
                self.state = SectionState::Closed;
            }
            LineKind::TransactionRow => {
                let SectionState::InSection { holder } = self.state else {
                    return Err(ParseError::RowBeforeHolder {
                        line: raw.to_string(),
                    });
                };
                let op = decode_row(&tokens, raw, created)?;
                self.holders[holder].operations.push(op);
            }
            LineKind::Ignored => {}
        }
        Ok(())
    }
}

/// Parse the ordered page texts of one document into a `Statement`.
///
/// `created` is the creation timestamp from the extraction metadata;
/// partial row dates are resolved against it, so its absence fails the
/// parse before any line is inspected. Reaching the end of input without
/// a monthly-limit line is not an error: the marker is optional per
/// document variant.
pub fn parse_pages(
    pages: &[String],
    created: Option<DateTime<FixedOffset>>,
) -> Result<Statement, ParseError> {
    let created = created.ok_or(ParseError::MissingCreationMetadata)?;

    let mut assembler = Assembler::new();
    'pages: for page in pages {
        for raw in page.lines() {
            assembler.feed(raw, &created)?;
            if assembler.closed() {
                break 'pages;
            }
        }
    }

    Ok(Statement {
        holders: assembler.holders,
        creation_date: created,
    })
}
