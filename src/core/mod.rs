pub mod controller;

pub use controller::DoorController;
