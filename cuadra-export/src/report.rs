//! Per-holder rollups for CLI reporting.

use cuadra_core::{Holder, Statement};

/// One holder's rollup: operation count plus per-currency totals.
#[derive(Debug, Clone, PartialEq)]
pub struct HolderSummary {
    pub name: String,
    pub card_last4: String,
    pub operations: usize,
    pub total_pen: f64,
    pub total_usd: f64,
}

impl HolderSummary {
    fn of(holder: &Holder) -> Self {
        let totals = holder.totals();
        Self {
            name: holder.name.clone(),
            card_last4: holder.card_last4.clone(),
            operations: totals.count,
            total_pen: totals.local,
            total_usd: totals.foreign,
        }
    }
}

/// Summarize every holder, document order.
pub fn summarize(statement: &Statement) -> Vec<HolderSummary> {
    statement.holders.iter().map(HolderSummary::of).collect()
}
