//! Display implementation for application messages.
//!
//! The single `match` below is the only place user-facing wording lives.
//! Messages with dynamic content interpolate their typed parameters;
//! everything else is a fixed string. Keeping the text in one module makes
//! it easy to audit tone and simple to localize later.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === ENTRY MESSAGES ===
            Message::EntryStarted(text, start) => format!("Started '{}' at {}", text, start),
            Message::EntryStopped(text, elapsed) => format!("Stopped '{}' after {}", text, elapsed),
            Message::EntryAdded {
                duration,
                start,
                end,
                text,
            } => format!("Added {} entry {} -> {}: {}", duration, start, end, text),
            Message::ActiveEntry { text, since, elapsed } => {
                format!("Active: {} (since {}, {} elapsed)", text, since, elapsed)
            }
            Message::NoActiveEntry => "No active entry".to_string(),
            Message::AlreadyActiveEntry => "There is already an active entry. Stop it before starting another".to_string(),
            Message::StopBeforeStart => "Stop time must be after the start time".to_string(),
            Message::EndBeforeStart => "End time must be after the start time".to_string(),
            Message::EntryOverlaps(start, duration) => {
                format!("New entry overlaps with an existing entry starting at {} for {}", start, duration)
            }

            // === REPORT MESSAGES ===
            Message::ReportHeader(from, to) => format!("Report {} to {}", from, to),
            Message::ReportEmpty => "No entries in the selected range".to_string(),
            Message::ReportTotal(total) => format!("Total: {}", total),
            Message::TagTasksHeader(tag) => format!("Tasks for {}", tag),
            Message::ConflictingRangeFlags => "Choose only one of --week, --last-week or --month".to_string(),
            Message::RangeFlagsWithDates => "Cannot combine --week/--last-week/--month with --from/--to".to_string(),
            Message::ReportEndBeforeStart => "Report end date cannot be before start date".to_string(),

            // === TAG MESSAGES ===
            Message::TagsHeader => "Tags found in the log".to_string(),
            Message::NoTagsFound => "No tags found".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleLog => "Log storage configuration".to_string(),
            Message::PromptLogPath => "Log file path (leave empty for the default location)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Entries exported to: {}", path),
            Message::ExportEmpty => "No entries to export".to_string(),
        };
        write!(f, "{}", message)
    }
}
