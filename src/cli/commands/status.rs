use crate::config::Config;
use crate::errors::AppResult;
use crate::status::StatusStore;
use crate::utils::time::format_ts;

/// Print the current snapshot: door state plus the last two transitions.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = StatusStore::new(&cfg.status_file);
    let snapshot = store.load()?;

    let state = if snapshot.is_open { "OPEN" } else { "CLOSED" };
    println!("🚪 Door is {}", state);
    println!("   last opened: {}", format_ts(snapshot.last_opened));
    println!("   last closed: {}", format_ts(snapshot.last_closed));

    Ok(())
}
