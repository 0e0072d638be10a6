//! Key-value store adapter: load/save the full event collection and the
//! language preference. Owns no validation logic.

use crate::db::initialize::init_db;
use crate::db::pool::StoreDb;
use crate::errors::AppResult;
use crate::models::event::Event;
use rusqlite::{OptionalExtension, params};

const EVENTS_KEY: &str = "relationshipEvents";
const LANGUAGE_KEY: &str = "appLanguage";

fn get(db: &StoreDb, key: &str) -> AppResult<Option<String>> {
    let value = db
        .conn
        .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

fn set(db: &mut StoreDb, key: &str, value: &str) -> AppResult<()> {
    db.conn.execute(
        "INSERT INTO store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Open the store, creating the schema on first use.
pub fn open(path: &str) -> AppResult<StoreDb> {
    let db = StoreDb::new(path)?;
    init_db(&db.conn)?;
    Ok(db)
}

/// Load the full collection. An absent slot means an empty journal.
pub fn load_events(db: &StoreDb) -> AppResult<Vec<Event>> {
    match get(db, EVENTS_KEY)? {
        Some(text) => Ok(serde_json::from_str(&text)?),
        None => Ok(Vec::new()),
    }
}

/// Persist the full collection, overwriting the previous value.
pub fn save_events(db: &mut StoreDb, events: &[Event]) -> AppResult<()> {
    let text = serde_json::to_string(events)?;
    set(db, EVENTS_KEY, &text)
}

pub fn load_language(db: &StoreDb) -> AppResult<Option<String>> {
    get(db, LANGUAGE_KEY)
}

pub fn save_language(db: &mut StoreDb, code: &str) -> AppResult<()> {
    set(db, LANGUAGE_KEY, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn memory_store() -> StoreDb {
        let db = StoreDb {
            conn: rusqlite::Connection::open_in_memory().unwrap(),
        };
        init_db(&db.conn).unwrap();
        db
    }

    #[test]
    fn empty_store_loads_empty_collection() {
        let db = memory_store();
        assert!(load_events(&db).unwrap().is_empty());
        assert!(load_language(&db).unwrap().is_none());
    }

    #[test]
    fn events_round_trip_through_the_slot() {
        let mut db = memory_store();
        let events = vec![Event {
            id: 42,
            description: "Picnic".to_string(),
            score: 6,
            date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            month_only: false,
            display_date: "2024-04-02".to_string(),
        }];

        save_events(&mut db, &events).unwrap();
        let loaded = load_events(&db).unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 42);
        assert_eq!(loaded[0].description, "Picnic");
    }

    #[test]
    fn save_overwrites_the_whole_collection() {
        let mut db = memory_store();
        let one = vec![Event {
            id: 1,
            description: "a".to_string(),
            score: 0,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            month_only: false,
            display_date: "2024-01-01".to_string(),
        }];
        save_events(&mut db, &one).unwrap();
        save_events(&mut db, &[]).unwrap();

        assert!(load_events(&db).unwrap().is_empty());
    }

    #[test]
    fn language_slot_is_independent() {
        let mut db = memory_store();
        save_language(&mut db, "hu").unwrap();
        assert_eq!(load_language(&db).unwrap().as_deref(), Some("hu"));
        assert!(load_events(&db).unwrap().is_empty());
    }
}
