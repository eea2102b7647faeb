use std::path::Path;

use colored::Colorize;

use crate::db::{get_connection, insert_subscription};
use crate::error::Result;
use crate::importer::parse_csv;
use crate::settings::db_path;

pub fn run(file: &str) -> Result<()> {
    let outcome = parse_csv(Path::new(file))?;

    let conn = get_connection(&db_path())?;
    for sub in &outcome.subscriptions {
        insert_subscription(&conn, sub)?;
    }

    println!("Imported {} subscriptions from {file}", outcome.subscriptions.len());
    if outcome.skipped > 0 {
        eprintln!(
            "{}",
            format!("Skipped {} rows with unusable name, price or frequency", outcome.skipped)
                .yellow()
        );
    }
    Ok(())
}
