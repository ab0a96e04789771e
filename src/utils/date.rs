use chrono::{Local, NaiveDate};

/// Calendar key format used by the `dates` table and the front-end.
pub const DATE_FMT: &str = "%d-%m-%Y";

/// Today's date as the 'dd-mm-yyyy' string the log is keyed by.
pub fn today_str() -> String {
    Local::now().format(DATE_FMT).to_string()
}

/// Parse a 'dd-mm-yyyy' calendar key.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FMT).ok()
}
