use std::path::PathBuf;

use crate::db::{get_connection, list_subscriptions};
use crate::error::Result;
use crate::settings::{db_path, get_data_dir};

pub fn run(output: Option<String>) -> Result<()> {
    let conn = get_connection(&db_path())?;
    let subs = list_subscriptions(&conn)?;

    let dest_path = match output {
        Some(p) => PathBuf::from(p),
        None => {
            let exports_dir = get_data_dir().join("exports");
            std::fs::create_dir_all(&exports_dir)?;
            let stamp = chrono::Local::now().format("%Y%m%d");
            exports_dir.join(format!("subscriptions-{stamp}.csv"))
        }
    };

    let mut writer = csv::Writer::from_path(&dest_path)?;
    writer.write_record(["Name", "Price", "Frequency", "Start Date", "Category", "Commitment"])?;
    for sub in &subs {
        writer.write_record([
            sub.name.clone(),
            format!("{:.2}", sub.price),
            sub.frequency.key().to_string(),
            sub.start_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            sub.category.clone(),
            sub.commitment.key().to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Exported {} subscriptions to {}", subs.len(), dest_path.display());
    Ok(())
}
