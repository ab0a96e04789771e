use clap::{Parser, Subcommand};

/// Command-line interface definition for doorlogger
/// Door open/close tracking with a JSON status snapshot and SQLite history
#[derive(Parser)]
#[command(
    name = "doorlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track a room door's open/closed state and log opening intervals to SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override status snapshot path (useful for tests or a custom web root)
    #[arg(global = true, long = "status-file")]
    pub status_file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, status snapshot and database
    Init,

    /// Print the current door status snapshot
    Status,

    /// Deliver a single door edge ('opened' or 'closed')
    Signal {
        /// Edge to deliver: opened | closed
        edge: String,
    },

    /// Read edges from stdin, one per line ('opened' / 'closed'),
    /// in place of the GPIO switch watcher
    Watch,

    /// Run a scripted open/close sequence (debug harness, no hardware)
    Simulate,

    /// List recorded opening intervals for a date (default: today)
    List {
        /// Date in dd-mm-yyyy format
        date: Option<String>,
    },

    /// Show every recorded date with its opening intervals
    History,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
