use chrono::{Duration, Local};

use crate::db::{get_connection, init_db, insert_subscription};
use crate::error::Result;
use crate::models::{CommitmentTerm, Frequency, Subscription};
use crate::settings::db_path;

struct DemoSub {
    name: &'static str,
    price: f64,
    frequency: Frequency,
    /// Days before today the subscription started; None leaves the start
    /// date unset so the Incomplete status is visible in the demo data.
    started_days_ago: Option<i64>,
    category: &'static str,
    commitment: CommitmentTerm,
}

const DEMO_SUBS: &[DemoSub] = &[
    DemoSub { name: "Netflix", price: 13.49, frequency: Frequency::Monthly, started_days_ago: Some(400), category: "Entertainment", commitment: CommitmentTerm::None },
    DemoSub { name: "Spotify", price: 10.99, frequency: Frequency::Monthly, started_days_ago: Some(800), category: "Music", commitment: CommitmentTerm::None },
    DemoSub { name: "iCloud+", price: 2.99, frequency: Frequency::Monthly, started_days_ago: Some(65), category: "Cloud", commitment: CommitmentTerm::None },
    DemoSub { name: "Amazon Prime", price: 69.90, frequency: Frequency::Annual, started_days_ago: Some(200), category: "Entertainment", commitment: CommitmentTerm::None },
    // Due within the alert window: started roughly a month ago, monthly.
    DemoSub { name: "Adobe Creative Cloud", price: 59.99, frequency: Frequency::Monthly, started_days_ago: Some(26), category: "Productivity", commitment: CommitmentTerm::TwelveMonths },
    // Commitment lapsed long ago: shows as Finished.
    DemoSub { name: "Old Gym Contract", price: 35.00, frequency: Frequency::Monthly, started_days_ago: Some(900), category: "Other", commitment: CommitmentTerm::TwelveMonths },
    DemoSub { name: "Mobile Plan", price: 29.99, frequency: Frequency::Monthly, started_days_ago: Some(100), category: "Utilities", commitment: CommitmentTerm::TwentyFourMonths },
    DemoSub { name: "Mystery Box", price: 15.00, frequency: Frequency::Monthly, started_days_ago: None, category: "Other", commitment: CommitmentTerm::None },
];

pub fn run() -> Result<()> {
    let conn = get_connection(&db_path())?;
    init_db(&conn)?;

    let today = Local::now().date_naive();
    for demo in DEMO_SUBS {
        let sub = Subscription {
            id: None,
            name: demo.name.to_string(),
            price: demo.price,
            frequency: demo.frequency,
            start_date: demo.started_days_ago.map(|days| today - Duration::days(days)),
            category: demo.category.to_string(),
            commitment: demo.commitment,
        };
        insert_subscription(&conn, &sub)?;
    }

    println!("Loaded {} demo subscriptions.", DEMO_SUBS.len());
    println!("Try `renew list`, `renew alerts` and `renew report summary`.");
    Ok(())
}
