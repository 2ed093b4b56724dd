//! The time log entry model and its line-format codec.
//!
//! An [`Entry`] is one tracked interval of work: a UTC start instant, an
//! optional UTC end instant (absent while the interval is still running)
//! and a free-form description that may embed `#tag` tokens. Entries are
//! immutable value records: "closing" an entry means replacing it in the
//! collection and rewriting the log, never editing in place.
//!
//! ## Line format
//!
//! Each entry serializes to a single log line:
//!
//! ```text
//! <RFC3339 start> <RFC3339 end-or-dash>|<free text with optional #tags>
//! ```
//!
//! An open entry writes the single character `-` in the end column:
//!
//! ```text
//! 2025-07-01T07:00:00Z 2025-07-01T08:30:00Z|Write docs #project
//! 2025-07-01T09:00:00Z -|Standup #meetings
//! ```
//!
//! Timestamps are always emitted UTC-normalized with whole seconds, so
//! `parse(format(e))` reproduces `start`, `end` and `text` exactly for any
//! entry whose text is free of `|` and newlines.
//!
//! The codec is deliberately strict on write and used in two modes on
//! read: bulk log reads drop lines that fail to parse (see
//! [`crate::store::log`]), while single-entry validation propagates the
//! error to the caller as the authoritative reason for rejection.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failure to parse a single log line into an [`Entry`].
#[derive(Debug, Error)]
pub enum ParseEntryError {
    /// The line has no `|` between the timestamp columns and the text.
    #[error("entry must contain a '|' separator")]
    MissingSeparator,
    /// The part before `|` does not hold exactly a start and an end column.
    #[error("entry must have a start and an end column")]
    MalformedColumns,
    /// A timestamp column is neither strict RFC 3339 nor the `-` marker.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),
}

/// A single tracked time interval with description text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// When tracking started, UTC-normalized.
    pub start: DateTime<Utc>,
    /// When tracking ended; `None` while the entry is still running.
    pub end: Option<DateTime<Utc>>,
    /// Free-form description, may embed `#tag` tokens.
    pub text: String,
}

impl Entry {
    /// Creates a running entry with no end time.
    pub fn open<S: Into<String>>(start: DateTime<Utc>, text: S) -> Self {
        Self {
            start,
            end: None,
            text: text.into(),
        }
    }

    /// Creates a completed entry.
    pub fn closed<S: Into<String>>(start: DateTime<Utc>, end: DateTime<Utc>, text: S) -> Self {
        Self {
            start,
            end: Some(end),
            text: text.into(),
        }
    }

    /// Whether the entry is still running.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// The end instant used for interval arithmetic, substituting `now`
    /// while the entry is still running.
    pub fn effective_end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end.unwrap_or(now)
    }

    /// Elapsed time of the entry, measuring open entries against `now`.
    ///
    /// The computation does not clamp: a `now` earlier than `start`
    /// legitimately yields a negative duration, which surfaces upstream
    /// as a validation error rather than being hidden here.
    pub fn duration(&self, now: DateTime<Utc>) -> Duration {
        self.effective_end(now) - self.start
    }

    /// Extracts every `#tag` token from the text, in order of appearance.
    ///
    /// A tag is a whitespace-delimited token starting with `#` and at
    /// least one character long after the `#`, which is stripped.
    /// Duplicates are kept; deduplication is the aggregation layer's
    /// business, where map keys dedupe naturally.
    pub fn tags(&self) -> Vec<String> {
        self.text
            .split_whitespace()
            .filter(|word| word.starts_with('#') && word.len() > 1)
            .map(|word| word[1..].to_string())
            .collect()
    }

    /// The description with all `#tag` tokens removed.
    ///
    /// Used as the per-task grouping key in reports, so entries that
    /// differ only in tagging collapse into one task line.
    pub fn task_text(&self) -> String {
        self.text
            .split_whitespace()
            .filter(|word| !word.starts_with('#'))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let start = self.start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end = match self.end {
            Some(end) => end.to_rfc3339_opts(SecondsFormat::Secs, true),
            None => "-".to_string(),
        };
        write!(f, "{} {}|{}", start, end, self.text.trim())
    }
}

impl FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (columns, text) = raw.split_once('|').ok_or(ParseEntryError::MissingSeparator)?;

        let columns: Vec<&str> = columns.split_whitespace().collect();
        if columns.len() != 2 {
            return Err(ParseEntryError::MalformedColumns);
        }

        let start = DateTime::parse_from_rfc3339(columns[0])?.with_timezone(&Utc);
        let end = match columns[1] {
            "-" => None,
            token => Some(DateTime::parse_from_rfc3339(token)?.with_timezone(&Utc)),
        };

        Ok(Entry {
            start,
            end,
            text: text.trim().to_string(),
        })
    }
}
