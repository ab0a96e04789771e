//! Durable history: SQLite connection wrapper and the dates/openings
//! relations.

pub mod initialize;
pub mod log;
pub mod openings;

use rusqlite::{Connection, Result};
use std::path::Path;

/// Owns the SQLite connection to the history database.
/// The dates/openings tables are written through here and nowhere else.
pub struct EventLog {
    pub conn: Connection,
}

impl EventLog {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
