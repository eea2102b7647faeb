use crate::db::{count_subscriptions, get_connection, list_subscriptions};
use crate::derive::derive_all;
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::models::Status;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join("renew.db");

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if db_path.exists() {
        let size = std::fs::metadata(&db_path)?.len();
        println!("DB size:    {}", format_bytes(size));

        let conn = get_connection(&db_path)?;
        let count = count_subscriptions(&conn)?;

        let subs = list_subscriptions(&conn)?;
        let today = chrono::Local::now().date_naive();
        let derived = derive_all(&subs, today);
        let by_status = |status: Status| derived.iter().filter(|d| d.status == status).count();

        println!();
        println!("Subscriptions:  {count}");
        println!("Active:         {}", by_status(Status::Active));
        println!("Auto-renewing:  {}", by_status(Status::AutoRenewing));
        println!("Finished:       {}", by_status(Status::Finished));
        println!("Incomplete:     {}", by_status(Status::Incomplete));
    } else {
        println!();
        println!("Database not found. Run `renew init` to set up.");
    }

    Ok(())
}
