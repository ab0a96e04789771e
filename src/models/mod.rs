pub mod signal;
pub mod snapshot;

pub use signal::{DoorSignal, Rejection, Transition};
pub use snapshot::{StatusFile, StatusSnapshot};
