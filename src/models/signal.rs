use serde::Serialize;

use super::snapshot::StatusSnapshot;

/// Edge notification from the magnetic switch watcher.
/// The switch is released when the door opens and pressed when it closes;
/// debouncing happens upstream.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum DoorSignal {
    Opened,
    Closed,
}

impl DoorSignal {
    pub fn sig_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "opened" | "open" => Some(Self::Opened),
            "closed" | "close" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Outcome of delivering a signal to the controller.
/// A rejection is a no-op, not an error: the signal is discarded without
/// state mutation or log write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied(StatusSnapshot),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Close arrived with no valid opening time to pair with
    /// (fresh store, or a crash wiped the cycle).
    NoOpenRecorded,
    /// Close arrived while the snapshot already says closed
    /// (duplicate or bounced edge).
    AlreadyClosed,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NoOpenRecorded => "door opening time not found, not recording closing time",
            Rejection::AlreadyClosed => "door is already closed, not recording closing time",
        }
    }
}
