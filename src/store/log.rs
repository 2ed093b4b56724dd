//! Persistence for the entry collection in a single append-only text file.
//!
//! The log is a plain UTF-8 file with one entry per line (see
//! [`crate::libs::entry`] for the line format). It is meant to be
//! hand-editable: blank lines and lines starting with `#` are treated as
//! comments, and lines that fail to parse are dropped with a debug note
//! instead of failing the whole read. The writer only ever emits
//! well-formed lines.
//!
//! Access discipline is read-modify-write of the whole file under a single
//! logical operation. There is no locking: concurrent external processes
//! racing on the same path can lose updates, an accepted limitation for a
//! single-user local tool. The common `start` case appends a single line
//! instead of rewriting, so an interrupted write cannot corrupt existing
//! content.

use crate::libs::entry::Entry;
use crate::msg_debug;
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle on the log file at a fixed path.
///
/// The path is resolved once by the caller (environment override, config,
/// or the per-user default, see [`crate::libs::config`]); the store never
/// consults the environment itself.
pub struct Log {
    path: PathBuf,
}

impl Log {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).with_context(|| format!("failed to create log directory {}", dir.display()))?;
            }
        }
        Ok(())
    }

    /// Reads all entries from the log file.
    ///
    /// Returns an empty collection if the file does not exist. Comment and
    /// blank lines are skipped; malformed lines are dropped so a partially
    /// corrupted or hand-edited log never blocks a read.
    pub fn read(&self) -> Result<Vec<Entry>> {
        self.ensure_parent()?;

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).with_context(|| format!("failed to read log file {}", self.path.display()))?;

        let mut entries = Vec::new();
        for line in content.lines() {
            let stripped = line.trim();
            if stripped.is_empty() || stripped.starts_with('#') {
                continue;
            }
            match stripped.parse::<Entry>() {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    msg_debug!(format!("skipping malformed log line '{}': {}", stripped, err));
                }
            }
        }

        Ok(entries)
    }

    /// Writes the full ordered collection, replacing the file contents.
    ///
    /// An empty collection produces an empty file.
    pub fn write(&self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent()?;

        let mut content = entries.iter().map(Entry::to_string).collect::<Vec<_>>().join("\n");
        if !content.is_empty() {
            content.push('\n');
        }

        fs::write(&self.path, content).with_context(|| format!("failed to write log file {}", self.path.display()))
    }

    /// Appends a single entry without touching existing content.
    pub fn append(&self, entry: &Entry) -> Result<()> {
        self.ensure_parent()?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .with_context(|| format!("failed to open log file {}", self.path.display()))?;
        writeln!(file, "{}", entry).with_context(|| format!("failed to append to log file {}", self.path.display()))
    }
}

/// An existing entry a candidate interval collides with.
#[derive(Debug, Clone)]
pub struct Overlap {
    pub entry: Entry,
    pub duration: Duration,
}

/// Collection-level searches over an ordered, append-ordered entry log.
pub trait EntryLog {
    /// Index of the most recent open entry, or `None` if all are closed.
    fn find_open(&self) -> Option<usize>;
    /// First entry whose interval intersects the candidate's for a
    /// strictly positive duration, with the intersection length.
    fn check_overlap(&self, candidate: &Entry, now: DateTime<Utc>) -> Option<Overlap>;
}

impl EntryLog for [Entry] {
    // Scanning from the end treats the log as append-ordered: at most one
    // open entry is meaningful, and if manual edits ever leave several,
    // the most recently started one wins.
    fn find_open(&self) -> Option<usize> {
        self.iter().rposition(Entry::is_open)
    }

    // Half-open interval intersection with `now` substituted for any
    // absent end. Touching endpoints do not count as overlap.
    fn check_overlap(&self, candidate: &Entry, now: DateTime<Utc>) -> Option<Overlap> {
        let candidate_end = candidate.effective_end(now);

        for existing in self {
            let existing_end = existing.effective_end(now);
            if candidate.start < existing_end && candidate_end > existing.start {
                let overlap_start = candidate.start.max(existing.start);
                let overlap_end = candidate_end.min(existing_end);
                let duration = overlap_end - overlap_start;
                if duration > Duration::zero() {
                    return Some(Overlap {
                        entry: existing.clone(),
                        duration,
                    });
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, h, m, 0).unwrap()
    }

    fn temp_log() -> (tempfile::TempDir, Log) {
        let dir = tempfile::tempdir().unwrap();
        let log = Log::new(dir.path().join("stint").join("log.txt"));
        (dir, log)
    }

    #[test]
    fn test_read_missing_file_returns_empty_and_creates_dir() {
        let (_dir, log) = temp_log();
        assert!(log.read().unwrap().is_empty());
        assert!(log.path().parent().unwrap().exists());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_dir, log) = temp_log();
        let entries = vec![
            Entry::closed(instant(9, 0), instant(10, 0), "Morning #work"),
            Entry::open(instant(10, 30), "Running"),
        ];
        log.write(&entries).unwrap();
        assert_eq!(log.read().unwrap(), entries);
    }

    #[test]
    fn test_write_empty_collection_truncates() {
        let (_dir, log) = temp_log();
        log.write(&[Entry::open(instant(9, 0), "x")]).unwrap();
        log.write(&[]).unwrap();
        assert_eq!(fs::read_to_string(log.path()).unwrap(), "");
        assert!(log.read().unwrap().is_empty());
    }

    #[test]
    fn test_append_keeps_existing_content() {
        let (_dir, log) = temp_log();
        let first = Entry::closed(instant(9, 0), instant(10, 0), "First");
        let second = Entry::open(instant(10, 0), "Second");
        log.append(&first).unwrap();
        log.append(&second).unwrap();
        assert_eq!(log.read().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_read_skips_comments_blanks_and_malformed_lines() {
        let (_dir, log) = temp_log();
        fs::create_dir_all(log.path().parent().unwrap()).unwrap();
        fs::write(
            log.path(),
            "# hand-written comment\n\n2025-07-01T09:00:00Z 2025-07-01T10:00:00Z|Kept #ok\nnot a log line\n2025-07-01T25:00:00Z -|bad timestamp\n",
        )
        .unwrap();

        let entries = log.read().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "Kept #ok");
    }

    #[test]
    fn test_find_open_scans_from_the_end() {
        let closed = Entry::closed(instant(9, 0), instant(10, 0), "a");
        let open = Entry::open(instant(10, 0), "b");
        assert_eq!(vec![closed.clone(), open.clone()].find_open(), Some(1));
        assert_eq!(vec![open, closed.clone()].find_open(), Some(0));
        assert_eq!(vec![closed.clone(), closed].find_open(), None);
        assert_eq!(Vec::<Entry>::new().find_open(), None);
    }

    #[test]
    fn test_check_overlap_reports_first_hit_and_duration() {
        let entries = vec![
            Entry::closed(instant(9, 0), instant(10, 0), "Existing"),
            Entry::closed(instant(9, 15), instant(9, 50), "Also existing"),
        ];
        let candidate = Entry::closed(instant(9, 30), instant(9, 45), "Candidate");
        let overlap = entries.check_overlap(&candidate, instant(12, 0)).unwrap();
        assert_eq!(overlap.entry.text, "Existing");
        assert_eq!(overlap.duration, Duration::minutes(15));
    }

    #[test]
    fn test_check_overlap_ignores_disjoint_and_touching() {
        let entries = vec![Entry::closed(instant(9, 0), instant(10, 0), "Existing")];
        let disjoint = Entry::closed(instant(11, 0), instant(12, 0), "Disjoint");
        assert!(entries.check_overlap(&disjoint, instant(13, 0)).is_none());
        // Touching endpoints are a zero-length intersection, not overlap.
        let touching = Entry::closed(instant(10, 0), instant(11, 0), "Touching");
        assert!(entries.check_overlap(&touching, instant(13, 0)).is_none());
    }

    #[test]
    fn test_check_overlap_extends_open_entries_to_now() {
        let entries = vec![Entry::open(instant(9, 0), "Running")];
        let candidate = Entry::closed(instant(9, 30), instant(9, 45), "Candidate");
        let overlap = entries.check_overlap(&candidate, instant(10, 0)).unwrap();
        assert_eq!(overlap.duration, Duration::minutes(15));
    }
}
