pub mod date;
pub mod time;

pub use date::today_str;
pub use time::now_ts;
