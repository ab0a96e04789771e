//! Door state machine.
//!
//! Consumes the two edge signals from the switch watcher, applies the
//! transition guards, updates the status snapshot and, when an interval
//! completes, appends it to the durable history. The snapshot is the
//! operational truth; the history is best-effort.

use std::sync::Mutex;

use crate::db::{EventLog, log as dblog, openings};
use crate::errors::AppResult;
use crate::models::{DoorSignal, Rejection, StatusSnapshot, Transition};
use crate::status::StatusStore;
use crate::ui::messages;
use crate::utils::{date, time};

struct Inner {
    store: StatusStore,
    log: EventLog,
}

/// Applies transitions serially.
///
/// Edge handlers can fire from the GPIO watcher's callback thread while
/// the rest of the process is doing something else, so the snapshot's
/// load→mutate→save is a critical section: all signal handling goes
/// through one mutex. Debounce timing upstream is never relied on for
/// correctness.
pub struct DoorController {
    inner: Mutex<Inner>,
}

impl DoorController {
    pub fn new(store: StatusStore, log: EventLog) -> Self {
        Self {
            inner: Mutex::new(Inner { store, log }),
        }
    }

    /// Tear down into the underlying store and log.
    pub fn into_parts(self) -> (StatusStore, EventLog) {
        let inner = self
            .inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (inner.store, inner.log)
    }

    /// The state the controller starts from: whatever the store reports.
    /// A never-initialized store defaults to closed.
    pub fn startup_state(&self) -> AppResult<StatusSnapshot> {
        self.locked(|inner| inner.store.load())
    }

    /// Deliver one edge using the wall clock and today's calendar date.
    pub fn handle(&self, signal: DoorSignal) -> AppResult<Transition> {
        self.signal(signal, time::now_ts())
    }

    /// Deliver one edge with an explicit timestamp.
    pub fn signal(&self, signal: DoorSignal, now: i64) -> AppResult<Transition> {
        self.locked(|inner| match signal {
            DoorSignal::Opened => Self::on_opened(inner, now),
            DoorSignal::Closed => Self::on_closed(inner, now),
        })
    }

    fn locked<T>(&self, f: impl FnOnce(&mut Inner) -> AppResult<T>) -> AppResult<T> {
        // A poisoned lock means another handler panicked mid-transition;
        // the snapshot on disk is still authoritative, so keep going.
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut inner)
    }

    /// Accepted unconditionally: a repeated open while already open
    /// re-arms `last_opened` (last write wins). Nothing is written to the
    /// history until the close, so the duplicate edge is harmless there,
    /// at the cost of losing the true open time of the running interval.
    fn on_opened(inner: &mut Inner, now: i64) -> AppResult<Transition> {
        let snapshot = inner.store.record_transition(true, now)?;
        Ok(Transition::Applied(snapshot))
    }

    /// Guarded: a close needs a valid opening time to pair with (guard A)
    /// and an actually-open door (guard B). A rejected close is a no-op.
    fn on_closed(inner: &mut Inner, now: i64) -> AppResult<Transition> {
        let current = inner.store.load()?;

        if current.never_opened() {
            return Ok(Transition::Rejected(Rejection::NoOpenRecorded));
        }
        if !current.is_open {
            return Ok(Transition::Rejected(Rejection::AlreadyClosed));
        }

        let opening_time = current.last_opened;
        // Snapshot first: once this returns the close is committed, even
        // if the history append below fails.
        let updated = inner.store.record_transition(false, now)?;
        let closing_time = updated.last_closed;

        if closing_time < opening_time {
            messages::warning(format!(
                "Interval closes before it opens (open {} > close {}), recording anyway",
                opening_time, closing_time
            ));
        }

        let today = date::today_str();
        match openings::append_interval(&mut inner.log.conn, &today, opening_time, closing_time) {
            Ok(()) => {
                messages::success(format!(
                    "[SAVED] {} | Open: {}, Close: {}",
                    today, opening_time, closing_time
                ));
                if let Err(e) = dblog::dlog(
                    &inner.log.conn,
                    "interval",
                    &today,
                    &format!("Open: {}, Close: {}", opening_time, closing_time),
                ) {
                    messages::warning(format!("Failed to write internal log: {}", e));
                }
            }
            // History failure is swallowed: the snapshot update above has
            // already committed and state must not roll back.
            Err(e) => messages::error(format!("Failed to log interval: {}", e)),
        }

        Ok(Transition::Applied(updated))
    }
}
