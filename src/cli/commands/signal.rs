use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::DoorController;
use crate::db::EventLog;
use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use crate::models::{DoorSignal, Transition};
use crate::status::StatusStore;
use crate::ui::messages;

/// Deliver one edge to the controller.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Signal { edge } = cmd {
        let signal = DoorSignal::sig_from_str(edge)
            .ok_or_else(|| AppError::InvalidSignal(edge.to_string()))?;

        let controller = build_controller(cfg)?;
        deliver(&controller, signal)?;
    }
    Ok(())
}

/// Open the store and history, ensure the schema, wire the controller.
/// Schema creation is idempotent and runs on every start.
pub fn build_controller(cfg: &Config) -> AppResult<DoorController> {
    let log = EventLog::open(&cfg.database)?;
    init_db(&log.conn)?;
    let store = StatusStore::new(&cfg.status_file);
    Ok(DoorController::new(store, log))
}

/// Hand a signal to the controller and report the outcome on the console.
pub fn deliver(controller: &DoorController, signal: DoorSignal) -> AppResult<Transition> {
    let outcome = controller.handle(signal)?;

    match &outcome {
        Transition::Applied(snapshot) => {
            if snapshot.is_open {
                messages::info("Door opened");
            } else {
                messages::info("Door closed");
            }
        }
        // Guard rejections are a no-op outcome, reported informationally
        Transition::Rejected(rejection) => messages::info(rejection.reason()),
    }

    Ok(outcome)
}
