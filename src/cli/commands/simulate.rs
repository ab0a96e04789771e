use std::thread;
use std::time::Duration;

use crate::cli::commands::signal::{build_controller, deliver};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::DoorSignal;
use crate::ui::messages;

/// Scripted open/close cycles with sleeps in place of real GPIO edges.
/// Handy when changing the program away from the hardware.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let controller = build_controller(cfg)?;

    messages::info("Simulating door events (no hardware attached)");

    deliver(&controller, DoorSignal::Opened)?;
    thread::sleep(Duration::from_secs(1));
    deliver(&controller, DoorSignal::Closed)?;
    thread::sleep(Duration::from_secs(3));
    deliver(&controller, DoorSignal::Opened)?;
    thread::sleep(Duration::from_secs(1));
    deliver(&controller, DoorSignal::Closed)?;

    messages::success("Simulation complete");
    Ok(())
}
