use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::alerts::{bucket_alerts, AlertTier, ALERT_WINDOW_DAYS};
use crate::db::{get_connection, list_subscriptions};
use crate::derive::derive_all;
use crate::error::Result;
use crate::fmt::money;
use crate::settings::db_path;

fn colorize_tier(tier: AlertTier) -> String {
    let label = tier.to_string();
    match tier {
        AlertTier::Urgent => label.red().bold().to_string(),
        AlertTier::Soon => label.yellow().to_string(),
        AlertTier::WatchClosely => label.yellow().dimmed().to_string(),
        AlertTier::AutoRenewing => label.cyan().to_string(),
    }
}

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    let subs = list_subscriptions(&conn)?;
    let today = chrono::Local::now().date_naive();
    let derived = derive_all(&subs, today);
    let alerts = bucket_alerts(&subs, &derived, today);

    if alerts.is_empty() {
        println!("No subscriptions due in the next {ALERT_WINDOW_DAYS} days.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Name", "Next due", "Days left", "Tier", "Commitment", "Monthly cost",
    ]);
    for alert in &alerts {
        let sub = &subs[alert.index];
        let fields = &derived[alert.index];
        table.add_row(vec![
            Cell::new(&sub.name),
            Cell::new(alert.next_due),
            Cell::new(alert.days_remaining),
            Cell::new(colorize_tier(alert.tier)),
            Cell::new(sub.commitment),
            Cell::new(money(fields.monthly_equivalent)),
        ]);
    }
    println!("Due within {ALERT_WINDOW_DAYS} days ({})\n{table}", alerts.len());
    Ok(())
}
