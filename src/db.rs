use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;
use crate::models::{parse_date, Subscription};

pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS subscriptions (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    frequency TEXT NOT NULL,
    start_date TEXT,
    category TEXT NOT NULL,
    commitment TEXT NOT NULL DEFAULT 'none',
    created_at TEXT DEFAULT (datetime('now'))
);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn insert_subscription(conn: &Connection, sub: &Subscription) -> Result<i64> {
    conn.execute(
        "INSERT INTO subscriptions (name, price, frequency, start_date, category, commitment) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        rusqlite::params![
            sub.name,
            sub.price,
            sub.frequency.key(),
            sub.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            sub.category,
            sub.commitment.key(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All subscriptions ordered by id. Frequency and commitment must hold
/// known values (the write path validates them); a start date that fails
/// to parse is treated as absent.
pub fn list_subscriptions(conn: &Connection) -> Result<Vec<Subscription>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, price, frequency, start_date, category, commitment \
         FROM subscriptions ORDER BY id",
    )?;
    let raw: Vec<(i64, String, f64, String, Option<String>, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
            ))
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut subs = Vec::with_capacity(raw.len());
    for (id, name, price, frequency, start_date, category, commitment) in raw {
        subs.push(Subscription {
            id: Some(id),
            name,
            price,
            frequency: frequency.parse()?,
            start_date: start_date.as_deref().and_then(parse_date),
            category,
            commitment: commitment.parse()?,
        });
    }
    Ok(subs)
}

/// Delete by stable row id. Display order never identifies a record.
pub fn delete_subscription(conn: &Connection, id: i64) -> Result<()> {
    let affected = conn.execute("DELETE FROM subscriptions WHERE id = ?1", [id])?;
    if affected == 0 {
        return Err(crate::error::RenewError::UnknownSubscription(id));
    }
    Ok(())
}

pub fn count_subscriptions(conn: &Connection) -> Result<i64> {
    Ok(conn.query_row("SELECT count(*) FROM subscriptions", [], |r| r.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommitmentTerm, Frequency};
    use chrono::NaiveDate;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        init_db(&conn).unwrap();
        (dir, conn)
    }

    fn sample() -> Subscription {
        Subscription {
            id: None,
            name: "Netflix".to_string(),
            price: 13.49,
            frequency: Frequency::Monthly,
            start_date: NaiveDate::from_ymd_opt(2023, 4, 12),
            category: "Entertainment".to_string(),
            commitment: CommitmentTerm::None,
        }
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn).unwrap();
    }

    #[test]
    fn test_insert_and_list_roundtrip() {
        let (_dir, conn) = test_db();
        let id = insert_subscription(&conn, &sample()).unwrap();
        let subs = list_subscriptions(&conn).unwrap();
        assert_eq!(subs.len(), 1);
        let s = &subs[0];
        assert_eq!(s.id, Some(id));
        assert_eq!(s.name, "Netflix");
        assert_eq!(s.price, 13.49);
        assert_eq!(s.frequency, Frequency::Monthly);
        assert_eq!(s.start_date, NaiveDate::from_ymd_opt(2023, 4, 12));
        assert_eq!(s.commitment, CommitmentTerm::None);
    }

    #[test]
    fn test_absent_start_date_survives_roundtrip() {
        let (_dir, conn) = test_db();
        let mut sub = sample();
        sub.start_date = None;
        insert_subscription(&conn, &sub).unwrap();
        let subs = list_subscriptions(&conn).unwrap();
        assert_eq!(subs[0].start_date, None);
    }

    #[test]
    fn test_garbage_start_date_reads_as_absent() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO subscriptions (name, price, frequency, start_date, category, commitment) \
             VALUES ('Broken', 1.0, 'monthly', 'not-a-date', 'Other', 'none')",
            [],
        )
        .unwrap();
        let subs = list_subscriptions(&conn).unwrap();
        assert_eq!(subs[0].start_date, None);
    }

    #[test]
    fn test_unknown_frequency_is_fatal() {
        let (_dir, conn) = test_db();
        conn.execute(
            "INSERT INTO subscriptions (name, price, frequency, category, commitment) \
             VALUES ('Bad', 1.0, 'weekly', 'Other', 'none')",
            [],
        )
        .unwrap();
        assert!(list_subscriptions(&conn).is_err());
    }

    #[test]
    fn test_delete_by_id() {
        let (_dir, conn) = test_db();
        let first = insert_subscription(&conn, &sample()).unwrap();
        let mut other = sample();
        other.name = "Spotify".to_string();
        let second = insert_subscription(&conn, &other).unwrap();

        delete_subscription(&conn, first).unwrap();
        let subs = list_subscriptions(&conn).unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].id, Some(second));
        assert_eq!(subs[0].name, "Spotify");
    }

    #[test]
    fn test_delete_unknown_id_errors() {
        let (_dir, conn) = test_db();
        let err = delete_subscription(&conn, 42).unwrap_err();
        assert!(err.to_string().contains("42"), "got: {err}");
    }

    #[test]
    fn test_count() {
        let (_dir, conn) = test_db();
        assert_eq!(count_subscriptions(&conn).unwrap(), 0);
        insert_subscription(&conn, &sample()).unwrap();
        assert_eq!(count_subscriptions(&conn).unwrap(), 1);
    }
}
