use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the history schema if it is not there yet.
/// Safe to call on every process start.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS dates (
            id   INTEGER PRIMARY KEY,
            date TEXT UNIQUE NOT NULL
        );

        CREATE TABLE IF NOT EXISTS openings (
            date_id      INTEGER NOT NULL,
            opening_time INTEGER NOT NULL,
            closing_time INTEGER NOT NULL,
            FOREIGN KEY (date_id) REFERENCES dates(id)
        );

        CREATE INDEX IF NOT EXISTS idx_openings_date_id ON openings(date_id);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_db_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        init_db(&conn).unwrap();

        // all three tables exist
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .filter(|n: &String| !n.starts_with("sqlite_"))
            .collect();
        assert!(names.contains(&"dates".to_string()));
        assert!(names.contains(&"openings".to_string()));
        assert!(names.contains(&"log".to_string()));
    }
}
