//! Task completion and recent-mood aggregation.
//!
//! # Invariants
//! - The histogram always contains the three known mood buckets.
//! - Only the `RECENT_MOOD_WINDOW` newest journals are counted.
//! - Unknown stored labels get their own bucket instead of failing.

use crate::model::journal::MoodLabel;
use crate::model::task::Task;
use crate::repo::journal_repo::JournalRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of most recent journals included in the mood histogram.
pub const RECENT_MOOD_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub tasks_done: usize,
    pub tasks_total: usize,
    /// Mood label -> count over the recent window.
    pub mood_histogram: BTreeMap<String, usize>,
}

/// Summarizes tasks and the mood of the newest journals.
pub fn aggregate(tasks: &[Task], journals: &[JournalRecord]) -> TaskStats {
    let tasks_done = tasks.iter().filter(|task| task.is_done).count();

    let mut recent: Vec<&JournalRecord> = journals.iter().collect();
    recent.sort_by(|left, right| right.created_at.cmp(&left.created_at));

    let mut mood_histogram: BTreeMap<String, usize> = [
        MoodLabel::Positive,
        MoodLabel::Neutral,
        MoodLabel::Negative,
    ]
    .into_iter()
    .map(|label| (label.as_str().to_string(), 0))
    .collect();

    for journal in recent.into_iter().take(RECENT_MOOD_WINDOW) {
        *mood_histogram.entry(journal.sentiment.clone()).or_insert(0) += 1;
    }

    TaskStats {
        tasks_done,
        tasks_total: tasks.len(),
        mood_histogram,
    }
}
