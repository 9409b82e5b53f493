//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Utc};

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with binary units
///
/// Picks the largest unit that keeps the value at or above one, rounds to two
/// decimals and drops trailing zeros. Anything past gigabytes stays in GB.
///
/// # Arguments
/// * `bytes` - Size in bytes
///
/// # Returns
/// Formatted string like "0 Bytes", "1.5 KB" or "2.5 MB"
///
/// # Examples
/// ```
/// use lepeva::logic::formatting::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(500), "500 Bytes");
/// assert_eq!(format_file_size(1024), "1 KB");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(5 * 1024 * 1024 / 2), "2.5 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Format a timestamp as a short date like "Mar 7, 2025"
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use lepeva::logic::formatting::format_date;
///
/// let date = Utc.with_ymd_and_hms(2025, 3, 7, 12, 0, 0).unwrap();
/// assert_eq!(format_date(&date), "Mar 7, 2025");
/// ```
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}
