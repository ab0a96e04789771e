pub mod history;
pub mod init;
pub mod list;
pub mod log;
pub mod signal;
pub mod simulate;
pub mod status;
pub mod watch;
