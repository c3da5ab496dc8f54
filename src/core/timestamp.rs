//! Timestamp formatting for stream records
//!
//! Stream records carry a compact local-time stamp: day of month, three-letter
//! month, then `hour:minute:second` on a 24-hour clock. No field is zero
//! padded, so 7 January 14:03:05 renders as `7Jan 14:3:5`.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format a timestamp in the stream record layout
pub fn stream_timestamp<Tz: TimeZone>(time: &DateTime<Tz>) -> String {
    format!(
        "{}{} {}:{}:{}",
        time.day(),
        MONTHS[time.month0() as usize],
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// The current local time in the stream record layout
pub fn now_stream_timestamp() -> String {
    stream_timestamp(&Local::now())
}
