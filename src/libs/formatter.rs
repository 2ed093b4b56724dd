//! Duration and entry formatting for display and export.
//!
//! All durations render as `HH:MM`: hours and minutes zero-padded, no
//! seconds, negative values clamped to `00:00`. Entries are pre-formatted
//! into plain string records so table rendering and CSV/JSON export can
//! consume them without caring about timestamps.

use crate::libs::entry::Entry;
use chrono::{DateTime, Duration, Local, Utc};
use serde::{Deserialize, Serialize};

/// A log entry flattened to display strings.
///
/// Start and end are rendered in the host's local timezone; an open entry
/// shows `-` in the end column, mirroring the log format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedEntry {
    /// Sequential number for ordering and reference, starting from 1.
    pub id: i32,
    /// Local start time, `YYYY-MM-DD HH:MM`.
    pub start: String,
    /// Local end time, `YYYY-MM-DD HH:MM`, or `-` while running.
    pub end: String,
    /// Elapsed time as `HH:MM`.
    pub duration: String,
    /// The raw entry text, tags included.
    pub text: String,
    /// Comma-separated tags extracted from the text.
    pub tags: String,
}

/// Formats a duration as zero-padded `HH:MM`.
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    // Negative durations display as zero rather than leaking a minus sign.
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

fn format_local(instant: DateTime<Utc>) -> String {
    instant.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Formatting a collection of entries for tables and export.
pub trait FormatEntries {
    fn format(&self, now: DateTime<Utc>) -> Vec<FormattedEntry>;
}

impl FormatEntries for [Entry] {
    fn format(&self, now: DateTime<Utc>) -> Vec<FormattedEntry> {
        self.iter()
            .enumerate()
            .map(|(index, entry)| FormattedEntry {
                id: (index + 1) as i32,
                start: format_local(entry.start),
                end: entry.end.map_or_else(|| "-".to_string(), format_local),
                duration: format_duration(&entry.duration(now)),
                text: entry.text.clone(),
                tags: entry.tags().join(", "),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_duration_pads_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_clamps_negative() {
        assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    }

    #[test]
    fn test_format_entries_numbers_and_tags() {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 7, 1, 10, 30, 0).unwrap();
        let entries = vec![
            Entry::closed(start, end, "Write docs #project"),
            Entry::open(end, "Running"),
        ];

        let formatted = entries.format(Utc.with_ymd_and_hms(2025, 7, 1, 11, 0, 0).unwrap());
        assert_eq!(formatted.len(), 2);
        assert_eq!(formatted[0].id, 1);
        assert_eq!(formatted[0].duration, "01:30");
        assert_eq!(formatted[0].tags, "project");
        assert_eq!(formatted[1].id, 2);
        assert_eq!(formatted[1].end, "-");
        assert_eq!(formatted[1].duration, "00:30");
        assert_eq!(formatted[1].tags, "");
    }
}
