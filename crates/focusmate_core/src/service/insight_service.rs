//! Suggestions and stats queries.
//!
//! # Invariants
//! - A user without journals is treated as neutral with score 0.0.
//! - The pending high-priority count is read live, never cached.

use crate::model::journal::MoodLabel;
use crate::model::suggestion::Suggestion;
use crate::model::user::UserId;
use crate::recommend::suggest;
use crate::repo::journal_repo::JournalRepository;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoError;
use crate::stats::{aggregate, TaskStats, RECENT_MOOD_WINDOW};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for insight queries.
#[derive(Debug)]
pub enum InsightServiceError {
    Repo(RepoError),
}

impl Display for InsightServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InsightServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for InsightServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Suggestions together with the mood they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionsReport {
    /// Latest stored label, verbatim.
    pub mood: String,
    pub mood_score: f64,
    pub suggestions: Vec<Suggestion>,
}

/// Read-only insight queries over tasks and journals.
pub struct InsightService<T: TaskRepository, J: JournalRepository> {
    tasks: T,
    journals: J,
}

impl<T: TaskRepository, J: JournalRepository> InsightService<T, J> {
    pub fn new(tasks: T, journals: J) -> Self {
        Self { tasks, journals }
    }

    /// Suggestions for the most recent mood and the current backlog.
    pub fn suggestions(&self, user_id: UserId) -> Result<SuggestionsReport, InsightServiceError> {
        let latest = self.journals.list_recent(user_id, 1)?.into_iter().next();
        let (mood, mood_score) = match latest {
            Some(record) => (record.sentiment, record.sentiment_score),
            None => (MoodLabel::Neutral.as_str().to_string(), 0.0),
        };
        let pending = self.tasks.count_pending_high_priority(user_id)?;

        Ok(SuggestionsReport {
            suggestions: suggest(&mood, pending),
            mood,
            mood_score,
        })
    }

    /// Task totals plus the mood histogram of the recent window.
    pub fn stats(&self, user_id: UserId) -> Result<TaskStats, InsightServiceError> {
        let tasks = self.tasks.list_tasks(user_id)?;
        let journals = self
            .journals
            .list_recent(user_id, RECENT_MOOD_WINDOW as u32)?;
        Ok(aggregate(&tasks, &journals))
    }
}
