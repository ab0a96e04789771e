use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::status::StatusStore;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with the dates/openings schema
///  - the status snapshot file with its zero default
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.status_file.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_status) = &cli.status_file {
        cfg.status_file = custom_status.clone();
    }

    println!("⚙️  Initializing doorlogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);
    println!("🚪 Status file : {}", &cfg.status_file);

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;
    println!("✅ Database initialized at {}", &cfg.database);

    // First load seeds the default snapshot on disk
    let store = StatusStore::new(&cfg.status_file);
    store.load()?;
    println!("✅ Status snapshot ready at {}", &cfg.status_file);

    if let Err(e) = log::dlog(&conn, "init", &cfg.database, "Database initialized") {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 doorlogger initialization completed!");
    Ok(())
}
