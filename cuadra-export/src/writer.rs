//! CSV export of parsed statements.

use std::io::Write;

use anyhow::Result;
use cuadra_core::Statement;
use serde::Serialize;

/// One exported transaction. Field order is the exchange contract with
/// downstream consumers: holder, card last-4, ISO date, description,
/// country (empty when absent), amount, currency code.
#[derive(Serialize)]
struct ExportRow<'a> {
    holder: &'a str,
    card_last4: &'a str,
    date: String,
    description: &'a str,
    country: &'a str,
    amount: f64,
    currency: &'a str,
}

/// Write every operation of every holder in document order, with a
/// header record.
pub fn write_statement_csv<W: Write>(out: W, statement: &Statement) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);

    for holder in &statement.holders {
        for op in &holder.operations {
            writer.serialize(ExportRow {
                holder: &holder.name,
                card_last4: &holder.card_last4,
                date: op.date.format("%Y-%m-%d").to_string(),
                description: &op.description,
                country: op.country.as_deref().unwrap_or(""),
                amount: op.amount,
                currency: op.currency.code(),
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, TimeZone};
    use cuadra_core::{Currency, Holder, Operation};

    fn statement() -> Statement {
        Statement {
            holders: vec![Holder {
                name: "JUAN PEREZ".to_string(),
                card_last4: "0123".to_string(),
                operations: vec![
                    Operation {
                        date: NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
                        description: "SUPERMARKET ABC".to_string(),
                        country: Some("LIMA".to_string()),
                        amount: 42.5,
                        currency: Currency::Usd,
                    },
                    Operation {
                        date: NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
                        description: "PHARMACY XYZ".to_string(),
                        country: None,
                        amount: 150.0,
                        currency: Currency::Pen,
                    },
                ],
            }],
            creation_date: FixedOffset::west_opt(5 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 1, 20, 9, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_field_order_and_header() {
        let mut buf = Vec::new();
        write_statement_csv(&mut buf, &statement()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("holder,card_last4,date,description,country,amount,currency")
        );
        assert_eq!(
            lines.next(),
            Some("JUAN PEREZ,0123,2023-12-15,SUPERMARKET ABC,LIMA,42.5,USD")
        );
        // Absent country exports as an empty cell.
        assert_eq!(
            lines.next(),
            Some("JUAN PEREZ,0123,2024-02-03,PHARMACY XYZ,,150.0,PEN")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_empty_statement_writes_nothing() {
        let mut buf = Vec::new();
        let statement = Statement {
            holders: Vec::new(),
            ..statement()
        };
        write_statement_csv(&mut buf, &statement).unwrap();
        assert!(buf.is_empty());
    }
}
