//! CSV import of raw subscription records. The importer is the validating
//! boundary: rows with an unusable name, price or frequency are skipped and
//! counted, a bad start date only degrades to an absent one.

use std::path::Path;

use crate::error::{RenewError, Result};
use crate::models::{parse_date, Subscription};

/// Expected header columns, case-insensitive.
const COLUMNS: [&str; 6] = ["name", "price", "frequency", "start date", "category", "commitment"];

#[derive(Debug)]
pub struct ImportOutcome {
    pub subscriptions: Vec<Subscription>,
    pub skipped: usize,
}

/// Lenient price parsing: strips currency symbols and thousands separators.
pub fn parse_price(raw: &str) -> Option<f64> {
    let s: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    s.parse().ok()
}

/// Accepts ISO dates and day/month/year, the format of hand-edited files.
fn parse_start_date(raw: &str) -> Option<chrono::NaiveDate> {
    parse_date(raw).or_else(|| chrono::NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok())
}

pub fn parse_csv(file_path: &Path) -> Result<ImportOutcome> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(file_path)?;

    // Map each expected column to its position in this file's header.
    let headers = reader.headers()?.clone();
    let mut positions = [0usize; COLUMNS.len()];
    for (i, wanted) in COLUMNS.iter().enumerate() {
        positions[i] = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RenewError::Other(format!("missing CSV column: {wanted}")))?;
    }
    let field = |record: &csv::StringRecord, i: usize| -> String {
        record.get(positions[i]).unwrap_or("").to_string()
    };

    let mut subscriptions = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        let name = field(&record, 0);
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        let price = match parse_price(&field(&record, 1)).filter(|p| *p >= 0.0) {
            Some(p) => p,
            None => {
                skipped += 1;
                continue;
            }
        };
        let frequency = match field(&record, 2).parse() {
            Ok(f) => f,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let commitment = match field(&record, 5).parse() {
            Ok(c) => c,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        let category = match field(&record, 4) {
            c if c.is_empty() => "Other".to_string(),
            c => c,
        };

        subscriptions.push(Subscription {
            id: None,
            name,
            price,
            frequency,
            start_date: parse_start_date(&field(&record, 3)),
            category,
            commitment,
        });
    }

    Ok(ImportOutcome {
        subscriptions,
        skipped,
    })
}
