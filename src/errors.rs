//! Unified application error type.
//! All modules (db, status, core, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Durable log (SQLite)
    // ---------------------------
    // Recoverable at the controller level: a failed interval append is
    // reported and the process continues.
    #[error("Database error: {0}")]
    Storage(#[from] rusqlite::Error),

    // ---------------------------
    // Status snapshot
    // ---------------------------
    // The snapshot file exists but cannot be decoded. Stricter than
    // Storage: callers abort the current operation instead of guessing.
    #[error("Status snapshot unreadable: {0}")]
    Persistence(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid signal: {0} (expected 'opened' or 'closed')")]
    InvalidSignal(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
