use std::io::{self, BufRead};

use crate::cli::commands::signal::{build_controller, deliver};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DoorSignal;
use crate::ui::messages;

/// Read edges from stdin, one per line, until EOF.
///
/// Stand-in for the GPIO switch watcher: on the deployed Pi the same two
/// signals come from the debounced magnetic-switch callbacks; here
/// anything that can write lines can drive the controller.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let controller = build_controller(cfg)?;

    let snapshot = controller.startup_state()?;
    messages::info(format!(
        "Watching (door is currently {})",
        if snapshot.is_open { "open" } else { "closed" }
    ));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match DoorSignal::sig_from_str(trimmed) {
            Some(signal) => {
                deliver(&controller, signal)?;
            }
            None => messages::warning(format!("Ignoring unknown edge '{}'", trimmed)),
        }
    }

    Ok(())
}
