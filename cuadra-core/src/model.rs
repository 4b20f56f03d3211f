//! Statement model: holders, operations, currencies.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Currency of an operation, fixed when its row is decoded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    /// Local column (Peruvian sol).
    #[serde(rename = "PEN")]
    Pen,
    /// Foreign column (US dollar).
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// ISO 4217 code, as printed on the statement.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Pen => "PEN",
            Currency::Usd => "USD",
        }
    }
}

/// One transaction row, fully decoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    pub date: NaiveDate,
    pub description: String,
    /// Present only on 6-column rows.
    pub country: Option<String>,
    /// Non-negative; which currency column was populated decides `currency`.
    pub amount: f64,
    pub currency: Currency,
}

/// One cardholder section of the statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holder {
    pub name: String,
    /// Last four digits of the card, kept as text (leading zeros matter).
    pub card_last4: String,
    /// Document order; never reordered or deduplicated.
    pub operations: Vec<Operation>,
}

/// Per-currency sums over one holder's operations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HolderTotals {
    pub local: f64,
    pub foreign: f64,
    pub count: usize,
}

impl Holder {
    /// Roll up this holder's operations by currency.
    pub fn totals(&self) -> HolderTotals {
        let mut totals = HolderTotals::default();
        for op in &self.operations {
            match op.currency {
                Currency::Pen => totals.local += op.amount,
                Currency::Usd => totals.foreign += op.amount,
            }
            totals.count += 1;
        }
        totals
    }
}

/// The parsed document: holder sections in document order, plus the
/// creation timestamp the partial row dates were resolved against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Statement {
    pub holders: Vec<Holder>,
    pub creation_date: DateTime<FixedOffset>,
}
