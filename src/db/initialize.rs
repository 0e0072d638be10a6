use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the key-value store schema.
///
/// The whole journal lives in one slot of a `store` table, mirroring the
/// single-slot persistence model the data was designed around: every save
/// rewrites the full collection, every load reads it back whole.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
