//! Window clamping and tag aggregation over entry collections.
//!
//! Everything the report and export commands show is derived here from
//! one primitive: [`clamp_duration`], the intersection of an entry's
//! effective interval with a half-open reporting window. Grouping builds
//! on it to produce per-tag totals with a per-task breakdown, ranked by
//! duration with the tag or task name as a deterministic tiebreaker.
//!
//! The engine is timezone-agnostic: callers compute window bounds in
//! local time, convert them to UTC and pass UTC-normalized bounds plus a
//! UTC "now". Only absolute instants are ever compared here.

use crate::libs::entry::Entry;
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Synthetic tag assigned to entries whose text carries no `#tag`.
pub const UNTAGGED: &str = "(untagged)";

/// One task line inside a tag group: the tag-stripped entry text with its
/// summed clamped duration and the first observed start/end.
#[derive(Debug, Clone)]
pub struct TaskItem {
    pub text: String,
    pub duration: Duration,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Entries grouped under one tag with their clamped duration total.
#[derive(Debug, Clone)]
pub struct TagGroup {
    pub tag: String,
    pub duration: Duration,
    pub entries: Vec<Entry>,
    /// Per-task breakdown, ranked by duration descending, text ascending.
    pub tasks: Vec<TaskItem>,
}

struct TaskBucket {
    duration: Duration,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

struct TagBucket {
    duration: Duration,
    entries: Vec<Entry>,
    tasks: BTreeMap<String, TaskBucket>,
}

impl TagBucket {
    fn new() -> Self {
        Self {
            duration: Duration::zero(),
            entries: Vec::new(),
            tasks: BTreeMap::new(),
        }
    }
}

/// Duration of the intersection of the entry's effective interval
/// `[start, end_or_now)` with the window `[window_start, window_end)`,
/// or zero if they are disjoint.
pub fn clamp_duration(entry: &Entry, window_start: DateTime<Utc>, window_end: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    let entry_end = entry.effective_end(now);

    let latest_start = entry.start.max(window_start);
    let earliest_end = entry_end.min(window_end);

    if earliest_end <= latest_start {
        return Duration::zero();
    }
    earliest_end - latest_start
}

fn tags_or_untagged(entry: &Entry) -> Vec<String> {
    let tags = entry.tags();
    if tags.is_empty() {
        vec![UNTAGGED.to_string()]
    } else {
        tags
    }
}

/// Groups entries by tag within a window.
///
/// Every entry with a positive clamped duration contributes to each of
/// its tags (or to [`UNTAGGED`]). Groups are ranked by total duration
/// descending with tag name ascending on ties; the per-task breakdown
/// inside each group is ranked the same way by task text. Accumulating
/// into a `BTreeMap` plus the explicit sort keys makes the ordering
/// deterministic across runs.
pub fn group_by_tag(entries: &[Entry], window_start: DateTime<Utc>, window_end: DateTime<Utc>, now: DateTime<Utc>) -> Vec<TagGroup> {
    let mut buckets: BTreeMap<String, TagBucket> = BTreeMap::new();

    for entry in entries {
        let duration = clamp_duration(entry, window_start, window_end, now);
        if duration <= Duration::zero() {
            continue;
        }

        for tag in tags_or_untagged(entry) {
            let bucket = buckets.entry(tag).or_insert_with(TagBucket::new);
            bucket.duration = bucket.duration + duration;
            bucket.entries.push(entry.clone());

            let task = bucket.tasks.entry(entry.task_text()).or_insert_with(|| TaskBucket {
                duration: Duration::zero(),
                start: entry.start,
                end: entry.effective_end(now),
            });
            task.duration = task.duration + duration;
        }
    }

    let mut groups: Vec<TagGroup> = buckets
        .into_iter()
        .map(|(tag, bucket)| {
            let mut tasks: Vec<TaskItem> = bucket
                .tasks
                .into_iter()
                .map(|(text, task)| TaskItem {
                    text,
                    duration: task.duration,
                    start: task.start,
                    end: task.end,
                })
                .collect();
            tasks.sort_by(|a, b| b.duration.cmp(&a.duration).then_with(|| a.text.cmp(&b.text)));

            TagGroup {
                tag,
                duration: bucket.duration,
                entries: bucket.entries,
                tasks,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.duration.cmp(&a.duration).then_with(|| a.tag.cmp(&b.tag)));
    groups
}

/// Flat tag → clamped duration mapping for a window.
///
/// Same clamping and tag-defaulting policy as [`group_by_tag`] without
/// the per-task breakdown; the lighter-weight form for chart rendering.
pub fn calculate_tag_totals(entries: &[Entry], window_start: DateTime<Utc>, window_end: DateTime<Utc>, now: DateTime<Utc>) -> BTreeMap<String, Duration> {
    let mut totals: BTreeMap<String, Duration> = BTreeMap::new();

    for entry in entries {
        let duration = clamp_duration(entry, window_start, window_end, now);
        if duration <= Duration::zero() {
            continue;
        }
        for tag in tags_or_untagged(entry) {
            let total = totals.entry(tag).or_insert_with(Duration::zero);
            *total = *total + duration;
        }
    }

    totals
}

/// Sum of clamped durations over all entries in the window.
///
/// Summed per entry, not per tag, so a multi-tag entry counts once.
pub fn total_in_window(entries: &[Entry], window_start: DateTime<Utc>, window_end: DateTime<Utc>, now: DateTime<Utc>) -> Duration {
    entries.iter().fold(Duration::zero(), |total, entry| {
        total + clamp_duration(entry, window_start, window_end, now)
    })
}

/// Lowercase-normalized, alphabetically sorted set of all tags in the
/// full collection (not window-limited). Drives tag suggestions.
pub fn get_unique_tags(entries: &[Entry]) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();
    for entry in entries {
        for tag in entry.tags() {
            tags.insert(tag.to_lowercase());
        }
    }
    tags.into_iter().collect()
}

/// Entries with a positive clamped duration inside the window.
pub fn filter_entries_by_range(entries: &[Entry], window_start: DateTime<Utc>, window_end: DateTime<Utc>, now: DateTime<Utc>) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| clamp_duration(entry, window_start, window_end, now) > Duration::zero())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, h, m, 0).unwrap()
    }

    fn window() -> (DateTime<Utc>, DateTime<Utc>, DateTime<Utc>) {
        (instant(0, 0), instant(23, 0), instant(22, 0))
    }

    #[test]
    fn test_clamp_inside_window() {
        let entry = Entry::closed(instant(9, 0), instant(11, 0), "x");
        assert_eq!(
            clamp_duration(&entry, instant(10, 0), instant(12, 0), instant(22, 0)),
            Duration::hours(1)
        );
    }

    #[test]
    fn test_clamp_disjoint_window_is_zero() {
        let entry = Entry::closed(instant(9, 0), instant(11, 0), "x");
        assert_eq!(
            clamp_duration(&entry, instant(12, 0), instant(13, 0), instant(22, 0)),
            Duration::zero()
        );
    }

    #[test]
    fn test_clamp_open_entry_extends_to_now() {
        let entry = Entry::open(instant(9, 0), "x");
        assert_eq!(
            clamp_duration(&entry, instant(8, 0), instant(23, 0), instant(10, 30)),
            Duration::minutes(90)
        );
    }

    #[test]
    fn test_group_by_tag_totals_per_tag() {
        let (start, end, now) = window();
        let entries = vec![
            Entry::closed(instant(9, 0), instant(9, 30), "Draft notes #alpha"),
            Entry::closed(instant(10, 0), instant(10, 30), "Review notes #alpha #beta"),
        ];

        let groups = group_by_tag(&entries, start, end, now);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].tag, "alpha");
        assert_eq!(groups[0].duration, Duration::minutes(60));
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].tag, "beta");
        assert_eq!(groups[1].duration, Duration::minutes(30));
        assert!(groups.iter().all(|group| group.tag != UNTAGGED));
    }

    #[test]
    fn test_group_by_tag_defaults_to_untagged() {
        let (start, end, now) = window();
        let entries = vec![Entry::closed(instant(9, 0), instant(9, 45), "No labels here")];

        let groups = group_by_tag(&entries, start, end, now);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tag, UNTAGGED);
        assert_eq!(groups[0].duration, Duration::minutes(45));
    }

    #[test]
    fn test_group_by_tag_orders_ties_by_name() {
        let (start, end, now) = window();
        let entries = vec![
            Entry::closed(instant(9, 0), instant(9, 30), "a #zeta"),
            Entry::closed(instant(10, 0), instant(10, 30), "b #alpha"),
            Entry::closed(instant(11, 0), instant(12, 0), "c #mid"),
        ];

        let groups = group_by_tag(&entries, start, end, now);
        let tags: Vec<&str> = groups.iter().map(|group| group.tag.as_str()).collect();
        assert_eq!(tags, vec!["mid", "alpha", "zeta"]);
    }

    #[test]
    fn test_group_by_tag_task_breakdown() {
        let (start, end, now) = window();
        let entries = vec![
            Entry::closed(instant(9, 0), instant(9, 30), "Write docs #alpha"),
            Entry::closed(instant(10, 0), instant(11, 0), "Write docs #alpha"),
            Entry::closed(instant(11, 0), instant(11, 15), "Fix typo #alpha"),
        ];

        let groups = group_by_tag(&entries, start, end, now);
        assert_eq!(groups.len(), 1);
        let tasks = &groups[0].tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].text, "Write docs");
        assert_eq!(tasks[0].duration, Duration::minutes(90));
        // First observed start is kept for the task line.
        assert_eq!(tasks[0].start, instant(9, 0));
        assert_eq!(tasks[1].text, "Fix typo");
        assert_eq!(tasks[1].duration, Duration::minutes(15));
    }

    #[test]
    fn test_group_by_tag_clamps_to_window() {
        let entries = vec![Entry::closed(instant(9, 0), instant(11, 0), "Edge #alpha")];
        let groups = group_by_tag(&entries, instant(10, 0), instant(12, 0), instant(22, 0));
        assert_eq!(groups[0].duration, Duration::hours(1));
    }

    #[test]
    fn test_calculate_tag_totals_flat_map() {
        let (start, end, now) = window();
        let entries = vec![
            Entry::closed(instant(9, 0), instant(9, 30), "Draft #alpha"),
            Entry::closed(instant(10, 0), instant(10, 30), "Review #alpha #beta"),
            Entry::closed(instant(11, 0), instant(11, 20), "Untagged work"),
        ];

        let totals = calculate_tag_totals(&entries, start, end, now);
        assert_eq!(totals.get("alpha"), Some(&Duration::minutes(60)));
        assert_eq!(totals.get("beta"), Some(&Duration::minutes(30)));
        assert_eq!(totals.get(UNTAGGED), Some(&Duration::minutes(20)));
    }

    #[test]
    fn test_total_in_window_counts_multi_tag_entries_once() {
        let (start, end, now) = window();
        let entries = vec![
            Entry::closed(instant(9, 0), instant(9, 30), "Draft #alpha"),
            Entry::closed(instant(10, 0), instant(10, 30), "Review #alpha #beta"),
        ];
        assert_eq!(total_in_window(&entries, start, end, now), Duration::minutes(60));
    }

    #[test]
    fn test_get_unique_tags_lowercased_and_sorted() {
        let entries = vec![
            Entry::open(instant(9, 0), "#Writing #alpha"),
            Entry::open(instant(10, 0), "#writing #Beta"),
        ];
        assert_eq!(get_unique_tags(&entries), vec!["alpha", "beta", "writing"]);
    }

    #[test]
    fn test_filter_entries_by_range() {
        let entries = vec![
            Entry::closed(instant(9, 0), instant(10, 0), "in"),
            Entry::closed(instant(20, 0), instant(21, 0), "out"),
        ];
        let filtered = filter_entries_by_range(&entries, instant(8, 0), instant(11, 0), instant(22, 0));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].text, "in");
    }
}
