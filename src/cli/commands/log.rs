use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EventLog;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::errors::AppResult;

/// Print rows from the internal log table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            println!("Nothing to do (use --print to dump the internal log)");
            return Ok(());
        }

        let log = EventLog::open(&cfg.database)?;
        init_db(&log.conn)?;

        let rows = load_log(&log.conn)?;
        if rows.is_empty() {
            println!("Internal log is empty");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{} | {:<10} | {} | {}", date, operation, target, message);
        }
    }
    Ok(())
}
