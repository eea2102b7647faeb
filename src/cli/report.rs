use comfy_table::{Cell, Table};

use crate::db::{get_connection, list_subscriptions};
use crate::derive::derive_all;
use crate::error::Result;
use crate::fmt::money;
use crate::reports;
use crate::settings::db_path;

pub fn summary() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let subs = list_subscriptions(&conn)?;
    let today = chrono::Local::now().date_naive();
    let derived = derive_all(&subs, today);
    let data = reports::get_summary(&subs, &derived);

    let mut table = Table::new();
    table.set_header(vec!["Item", "Value"]);
    table.add_row(vec![Cell::new("Subscriptions"), Cell::new(data.count)]);
    table.add_row(vec![Cell::new("  Monthly"), Cell::new(data.monthly_count)]);
    table.add_row(vec![Cell::new("  Annual"), Cell::new(data.annual_count)]);
    table.add_row(vec![
        Cell::new("Monthly equivalent total"),
        Cell::new(money(data.monthly_total)),
    ]);
    table.add_row(vec![
        Cell::new("Annual total"),
        Cell::new(money(data.annual_total)),
    ]);
    println!("Spending Summary\n{table}");
    Ok(())
}

pub fn categories() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let subs = list_subscriptions(&conn)?;
    let today = chrono::Local::now().date_naive();
    let derived = derive_all(&subs, today);
    let shares = reports::get_category_breakdown(&subs, &derived);

    if shares.is_empty() {
        println!("No subscriptions found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Monthly", "%", "Count"]);
    for share in &shares {
        table.add_row(vec![
            Cell::new(&share.category),
            Cell::new(money(share.monthly_total)),
            Cell::new(format!("{:.1}%", share.pct)),
            Cell::new(share.count),
        ]);
    }
    println!("Spend by Category\n{table}");
    Ok(())
}
