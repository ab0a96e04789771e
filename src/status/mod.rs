//! Status snapshot persistence.
//!
//! The StatusStore is the single source of truth for "what is the door
//! doing right now". It owns one JSON file containing the current
//! `StatusSnapshot` and survives process restarts; the durable interval
//! history lives elsewhere (see `db`).

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::models::{StatusFile, StatusSnapshot};

pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current snapshot.
    ///
    /// A missing or empty file is initialized to the zero default and
    /// persisted before returning, so a subsequent load observes the same
    /// values. A file that exists but cannot be decoded is a hard error
    /// (`AppError::Persistence`): we refuse to guess door state and never
    /// silently reset real history to defaults.
    pub fn load(&self) -> AppResult<StatusSnapshot> {
        let missing = match fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        if missing {
            let snapshot = StatusSnapshot::default();
            self.save(&snapshot)?;
            return Ok(snapshot);
        }

        let content = fs::read_to_string(&self.path)?;
        let decoded: StatusFile = serde_json::from_str(&content)
            .map_err(|e| AppError::Persistence(format!("{}: {}", self.path.display(), e)))?;
        Ok(decoded.current_status)
    }

    /// Overwrite the snapshot file in full.
    ///
    /// Writes go to a temp file in the destination directory which is then
    /// renamed over the target, so a crash mid-write never leaves a
    /// truncated snapshot behind. The temp file is removed on every
    /// failure path.
    pub fn save(&self, snapshot: &StatusSnapshot) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AppError::Persistence(format!("{}: not a file path", self.path.display())))?
            .to_string_lossy()
            .to_string();
        let tmp = self.path.with_file_name(format!("{}.tmp", file_name));

        let body = serde_json::to_string(&StatusFile {
            current_status: *snapshot,
        })
        .map_err(|e| AppError::Persistence(e.to_string()))?;

        let written = (|| -> AppResult<()> {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(body.as_bytes())?;
            f.sync_all()?;
            Ok(())
        })();

        if let Err(e) = written {
            fs::remove_file(&tmp).ok();
            return Err(e);
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        Ok(())
    }

    /// Apply one transition and persist it before returning.
    ///
    /// This is the only mutation path: `is_open` tracks the edge, and the
    /// matching timestamp (`last_opened` on open, `last_closed` on close)
    /// is stamped with `now`. `last_opened` is deliberately left intact on
    /// close: it records the start of the most recent interval.
    pub fn record_transition(&self, opened: bool, now: i64) -> AppResult<StatusSnapshot> {
        let mut snapshot = self.load()?;

        snapshot.is_open = opened;
        if opened {
            snapshot.last_opened = now;
        } else {
            snapshot.last_closed = now;
        }

        self.save(&snapshot)?;
        Ok(snapshot)
    }
}
