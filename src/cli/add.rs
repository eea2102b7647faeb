use colored::Colorize;

use crate::db::{get_connection, insert_subscription};
use crate::error::{RenewError, Result};
use crate::models::{parse_date, CommitmentTerm, Frequency, Subscription};
use crate::settings::db_path;

pub fn run(
    name: &str,
    price: f64,
    frequency: Frequency,
    start_date: Option<&str>,
    category: &str,
    commitment: CommitmentTerm,
) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RenewError::Other("subscription name must not be empty".to_string()));
    }
    if price < 0.0 {
        return Err(RenewError::Other("price must not be negative".to_string()));
    }

    let parsed_start = start_date.and_then(parse_date);
    if let Some(raw) = start_date {
        if parsed_start.is_none() {
            eprintln!(
                "{}",
                format!("Warning: '{raw}' is not a YYYY-MM-DD date; storing no start date").yellow()
            );
        }
    }

    let conn = get_connection(&db_path())?;
    let sub = Subscription {
        id: None,
        name: name.to_string(),
        price,
        frequency,
        start_date: parsed_start,
        category: category.trim().to_string(),
        commitment,
    };
    let id = insert_subscription(&conn, &sub)?;

    println!("Added subscription '{name}' (id {id})");
    if parsed_start.is_none() {
        println!("No start date set — it will show as Incomplete until one is provided.");
    }
    Ok(())
}
