use crate::db::{delete_subscription, get_connection};
use crate::error::Result;
use crate::settings::db_path;

pub fn run(id: i64) -> Result<()> {
    let conn = get_connection(&db_path())?;
    delete_subscription(&conn, id)?;
    println!("Removed subscription {id}");
    Ok(())
}
