//! Inserts and queries on the dates/openings relations.
//!
//! Every completed open→close cycle becomes one immutable `openings` row,
//! keyed through `dates` by its 'dd-mm-yyyy' calendar string. Date rows
//! are created lazily on the first interval of a day and reused after.

use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

/// One completed open→close cycle as stored in `openings`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OpeningInterval {
    pub opened: i64,
    pub closed: i64,
}

/// All intervals recorded for one calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct DayHistory {
    pub date: String,
    pub openings: Vec<OpeningInterval>,
}

/// Append one completed interval for `date_str`.
///
/// The date lookup-or-insert and the interval insert commit as a single
/// transaction, so a failure leaves neither an orphan date row nor a
/// half-written interval behind.
pub fn append_interval(
    conn: &mut Connection,
    date_str: &str,
    opening_time: i64,
    closing_time: i64,
) -> AppResult<()> {
    let tx = conn.transaction()?;

    let date_id: i64 = {
        let existing: Option<i64> = tx
            .query_row("SELECT id FROM dates WHERE date = ?1", [date_str], |row| {
                row.get(0)
            })
            .optional()?;

        match existing {
            Some(id) => id,
            None => {
                tx.execute("INSERT INTO dates (date) VALUES (?1)", [date_str])?;
                tx.last_insert_rowid()
            }
        }
    };

    tx.execute(
        "INSERT INTO openings (date_id, opening_time, closing_time) VALUES (?1, ?2, ?3)",
        params![date_id, opening_time, closing_time],
    )?;

    tx.commit()?;
    Ok(())
}

/// All intervals recorded for one calendar date, in insertion order.
pub fn intervals_for_date(conn: &Connection, date_str: &str) -> AppResult<Vec<OpeningInterval>> {
    let mut stmt = conn.prepare(
        "SELECT o.opening_time, o.closing_time
         FROM openings o
         JOIN dates d ON d.id = o.date_id
         WHERE d.date = ?1
         ORDER BY o.rowid ASC",
    )?;

    let rows = stmt.query_map([date_str], |row| {
        Ok(OpeningInterval {
            opened: row.get(0)?,
            closed: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Full history: every recorded date with its intervals, oldest date first.
pub fn history(conn: &Connection) -> AppResult<Vec<DayHistory>> {
    let mut date_stmt = conn.prepare("SELECT id, date FROM dates ORDER BY id ASC")?;
    let dates = date_stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = Vec::new();
    for d in dates {
        let (id, date) = d?;

        let mut stmt = conn.prepare_cached(
            "SELECT opening_time, closing_time FROM openings WHERE date_id = ?1 ORDER BY rowid ASC",
        )?;
        let rows = stmt.query_map([id], |row| {
            Ok(OpeningInterval {
                opened: row.get(0)?,
                closed: row.get(1)?,
            })
        })?;

        let mut openings = Vec::new();
        for r in rows {
            openings.push(r?);
        }

        out.push(DayHistory { date, openings });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        conn
    }

    #[test]
    fn append_creates_date_row_lazily() {
        let mut conn = test_conn();
        append_interval(&mut conn, "21-08-2026", 100, 105).unwrap();

        let intervals = intervals_for_date(&conn, "21-08-2026").unwrap();
        assert_eq!(
            intervals,
            vec![OpeningInterval {
                opened: 100,
                closed: 105
            }]
        );
    }

    #[test]
    fn same_date_reuses_one_date_row() {
        let mut conn = test_conn();
        append_interval(&mut conn, "21-08-2026", 100, 105).unwrap();
        append_interval(&mut conn, "21-08-2026", 200, 260).unwrap();

        let date_rows: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM dates WHERE date = '21-08-2026'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(date_rows, 1);

        let intervals = intervals_for_date(&conn, "21-08-2026").unwrap();
        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].opened, 100);
        assert_eq!(intervals[1].opened, 200);
    }

    #[test]
    fn different_dates_get_distinct_rows() {
        let mut conn = test_conn();
        append_interval(&mut conn, "21-08-2026", 100, 105).unwrap();
        append_interval(&mut conn, "22-08-2026", 300, 360).unwrap();

        let all = history(&conn).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].date, "21-08-2026");
        assert_eq!(all[1].date, "22-08-2026");
        assert_eq!(all[0].openings.len(), 1);
        assert_eq!(all[1].openings.len(), 1);
    }

    #[test]
    fn unknown_date_yields_empty_list() {
        let conn = test_conn();
        assert!(intervals_for_date(&conn, "01-01-2000").unwrap().is_empty());
    }
}
