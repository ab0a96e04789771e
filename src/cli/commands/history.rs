use crate::config::Config;
use crate::db::EventLog;
use crate::db::initialize::init_db;
use crate::db::openings::history;
use crate::errors::AppResult;
use crate::utils::time::format_ts_time;

/// Show every recorded date with its opening intervals, oldest first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let log = EventLog::open(&cfg.database)?;
    init_db(&log.conn)?;

    let days = history(&log.conn)?;

    if days.is_empty() {
        println!("No openings recorded yet");
        return Ok(());
    }

    for day in &days {
        println!("📅 {} | {} opening(s)", day.date, day.openings.len());
        for interval in &day.openings {
            println!(
                "   {} → {}",
                format_ts_time(interval.opened),
                format_ts_time(interval.closed)
            );
        }
    }

    Ok(())
}
