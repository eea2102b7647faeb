use colored::Colorize;
use comfy_table::{Cell, Table};

use super::SortKey;
use crate::db::{get_connection, list_subscriptions};
use crate::derive::derive_all;
use crate::error::Result;
use crate::fmt::{money, opt_date};
use crate::models::{CommitmentTerm, Status, Subscription};
use crate::settings::db_path;

pub fn colorize_status(status: Status) -> String {
    let label = status.to_string();
    match status {
        Status::Active => label.green().to_string(),
        Status::AutoRenewing => label.cyan().to_string(),
        Status::DueToday => label.yellow().to_string(),
        Status::WatchClosely => label.yellow().to_string(),
        Status::Finished => label.red().to_string(),
        Status::Incomplete => label.red().bold().to_string(),
    }
}

fn apply_filters(
    subs: Vec<Subscription>,
    search: Option<&str>,
    category: Option<&str>,
    commitment: Option<CommitmentTerm>,
) -> Vec<Subscription> {
    subs.into_iter()
        .filter(|s| match search {
            Some(q) => s.name.to_lowercase().contains(&q.to_lowercase()),
            None => true,
        })
        .filter(|s| match category {
            Some(c) => s.category.eq_ignore_ascii_case(c),
            None => true,
        })
        .filter(|s| match commitment {
            Some(c) => s.commitment == c,
            None => true,
        })
        .collect()
}

fn sort_subscriptions(subs: &mut [Subscription], sort: SortKey) {
    match sort {
        SortKey::Name => subs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Price => subs.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::Frequency => subs.sort_by_key(|s| s.frequency.key()),
        SortKey::Category => subs.sort_by(|a, b| a.category.cmp(&b.category)),
        SortKey::Commitment => subs.sort_by_key(|s| s.commitment.key()),
    }
}

pub fn run(
    search: Option<String>,
    category: Option<String>,
    commitment: Option<CommitmentTerm>,
    sort: SortKey,
) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let subs = list_subscriptions(&conn)?;
    let mut subs = apply_filters(subs, search.as_deref(), category.as_deref(), commitment);
    sort_subscriptions(&mut subs, sort);

    if subs.is_empty() {
        println!("No subscriptions found.");
        return Ok(());
    }

    let today = chrono::Local::now().date_naive();
    let derived = derive_all(&subs, today);

    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Name", "Start", "Commitment", "Status", "Price", "Frequency", "Category",
        "Next due", "Days left",
    ]);
    for (sub, fields) in subs.iter().zip(&derived) {
        table.add_row(vec![
            Cell::new(sub.id.unwrap_or_default()),
            Cell::new(&sub.name),
            Cell::new(opt_date(sub.start_date)),
            Cell::new(sub.commitment),
            Cell::new(colorize_status(fields.status)),
            Cell::new(money(sub.price)),
            Cell::new(sub.frequency),
            Cell::new(&sub.category),
            Cell::new(opt_date(fields.next_due)),
            Cell::new(
                fields
                    .days_remaining
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "—".to_string()),
            ),
        ]);
    }

    let monthly_total: f64 = derived.iter().map(|d| d.monthly_equivalent).sum();
    println!("Subscriptions ({})\n{table}", subs.len());
    println!(
        "\nMonthly equivalent: {}   Annual: {}",
        money(monthly_total),
        money(monthly_total * 12.0)
    );
    Ok(())
}
