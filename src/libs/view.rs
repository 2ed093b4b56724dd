//! Terminal table rendering for reports and listings.

use crate::libs::formatter::{format_duration, FormattedEntry};
use crate::libs::summary::TagGroup;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Tag totals for a report window, ranked by duration.
    pub fn report(groups: &[TagGroup]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TAG", "TIME", "ENTRIES"]);
        for group in groups {
            table.add_row(row![group.tag, format_duration(&group.duration), group.entries.len()]);
        }
        table.printstd();

        Ok(())
    }

    /// Per-task breakdown inside one tag group.
    pub fn tasks(group: &TagGroup) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "TIME"]);
        for task in &group.tasks {
            let text = if task.text.is_empty() { "-" } else { task.text.as_str() };
            table.add_row(row![text, format_duration(&task.duration)]);
        }
        table.printstd();

        Ok(())
    }

    /// Chronological entry listing.
    pub fn entries(entries: &[FormattedEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "END", "TIME", "TEXT"]);
        for entry in entries {
            table.add_row(row![entry.id, entry.start, entry.end, entry.duration, entry.text]);
        }
        table.printstd();

        Ok(())
    }

    /// Flat tag listing.
    pub fn tags(tags: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TAG"]);
        for tag in tags {
            table.add_row(row![tag]);
        }
        table.printstd();

        Ok(())
    }
}
