//! Transaction-row decoding: 5/6-column shapes, dual currency columns.

use chrono::{DateTime, FixedOffset};

use crate::dates::resolve_day_month;
use crate::error::ParseError;
use crate::model::{Currency, Operation};

/// Printed in the currency column a row does not use.
const EMPTY_AMOUNT: &str = "---";

/// Decode one amount cell. The placeholder means the column is not
/// populated; otherwise the cell must be a non-negative decimal, with
/// grouping commas allowed.
fn parse_amount(cell: &str, raw: &str) -> Result<Option<f64>, ParseError> {
    let ambiguous = || ParseError::AmbiguousOrMissingAmount {
        line: raw.to_string(),
    };

    let cell = cell.trim();
    if cell == EMPTY_AMOUNT {
        return Ok(None);
    }

    let value: f64 = cell.replace(',', "").parse().map_err(|_| ambiguous())?;
    if value < 0.0 {
        return Err(ambiguous());
    }
    Ok(Some(value))
}

/// Decode a classified transaction row into an `Operation`.
///
/// Six fields carry a country column, five do not; exactly one of the two
/// trailing amount columns must be populated and it fixes the currency.
pub fn decode_row(
    tokens: &[&str],
    raw: &str,
    created: &DateTime<FixedOffset>,
) -> Result<Operation, ParseError> {
    let (date, description, country, local_cell, foreign_cell) = match tokens {
        [_, date, desc, country, local, foreign] => (*date, *desc, Some(*country), *local, *foreign),
        [_, date, desc, local, foreign] => (*date, *desc, None, *local, *foreign),
        _ => {
            return Err(ParseError::InvalidRowShape {
                fields: tokens.len(),
                line: raw.to_string(),
            });
        }
    };

    let local = parse_amount(local_cell, raw)?;
    let foreign = parse_amount(foreign_cell, raw)?;
    let (amount, currency) = match (local, foreign) {
        (Some(amount), None) => (amount, Currency::Pen),
        (None, Some(amount)) => (amount, Currency::Usd),
        _ => {
            return Err(ParseError::AmbiguousOrMissingAmount {
                line: raw.to_string(),
            });
        }
    };

    Ok(Operation {
        date: resolve_day_month(date, created)?,
        description: description.to_string(),
        country: country.map(str::to_string),
        amount,
        currency,
    })
}
