use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EventLog;
use crate::db::initialize::init_db;
use crate::db::openings::intervals_for_date;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::time::format_ts_time;

/// List the opening intervals recorded for one calendar date.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: date_arg } = cmd {
        let date_str = match date_arg {
            Some(s) => {
                date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
                s.clone()
            }
            None => date::today_str(),
        };

        let log = EventLog::open(&cfg.database)?;
        init_db(&log.conn)?;

        let intervals = intervals_for_date(&log.conn, &date_str)?;

        println!("📅 {} | {} opening(s)", date_str, intervals.len());
        for interval in &intervals {
            println!(
                "   {} → {}",
                format_ts_time(interval.opened),
                format_ts_time(interval.closed)
            );
        }
    }
    Ok(())
}
