//! Journal use-case service.
//!
//! # Responsibility
//! - Run the submission pipeline: sentiment, then tags, then persistence.
//! - Serve newest-first journal listings with a normalized limit.
//!
//! # Invariants
//! - Blank text is rejected before any analysis or write.
//! - Sentiment analysis never fails; classifier problems degrade to the
//!   keyword analyzer inside the analyzer itself.
//! - Log records carry metadata only, never journal text.

use crate::model::journal::{JournalEntry, JournalId};
use crate::model::user::UserId;
use crate::model::ValidationError;
use crate::repo::journal_repo::{normalize_journal_limit, JournalRecord, JournalRepository};
use crate::repo::{RepoError, RepoResult};
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use crate::tags::extract_tags;
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Service error for journal use-cases.
#[derive(Debug)]
pub enum JournalServiceError {
    /// Submitted text is empty after trim.
    EmptyText,
    /// Owner does not exist.
    UserNotFound(UserId),
    /// Built entry violated a model invariant.
    Validation(ValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for JournalServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "journal text must not be empty"),
            Self::UserNotFound(user_id) => write!(f, "user not found: {user_id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent journal state: {details}")
            }
        }
    }
}

impl Error for JournalServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for JournalServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound {
                entity: "user",
                id,
            } => Self::UserNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for JournalServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Result of running the pipeline without persisting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalAnalysis {
    pub sentiment: Sentiment,
    pub tags: Vec<String>,
}

/// List result envelope used by service callers.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalsListResult {
    /// Newest first.
    pub items: Vec<JournalRecord>,
    /// Effective normalized limit used by the query.
    pub applied_limit: u32,
}

/// Runs sentiment analysis and tag extraction over one text.
///
/// Rejects text that is empty after trim.
pub fn analyze_journal(
    analyzer: &impl SentimentAnalyzer,
    text: &str,
) -> Result<JournalAnalysis, JournalServiceError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(JournalServiceError::EmptyText);
    }
    Ok(JournalAnalysis {
        sentiment: analyzer.analyze(text),
        tags: extract_tags(text),
    })
}

/// Journal service facade over a repository and a sentiment analyzer.
pub struct JournalService<R: JournalRepository, A: SentimentAnalyzer> {
    repo: R,
    analyzer: A,
}

impl<R: JournalRepository, A: SentimentAnalyzer> JournalService<R, A> {
    pub fn new(repo: R, analyzer: A) -> Self {
        Self { repo, analyzer }
    }

    /// Pipeline only; nothing is written.
    pub fn analyze(&self, text: &str) -> Result<JournalAnalysis, JournalServiceError> {
        analyze_journal(&self.analyzer, text)
    }

    /// Analyzes and stores one journal entry for `user_id`.
    ///
    /// # Side effects
    /// - Inserts one `journals` row and its `journal_tags` rows.
    /// - Emits a `journal_create` event with label, score and tag count.
    pub fn create_journal(
        &self,
        user_id: UserId,
        text: impl Into<String>,
    ) -> Result<JournalRecord, JournalServiceError> {
        let started_at = Instant::now();
        let text = text.into();
        let analysis = self.analyze(&text)?;
        let entry = JournalEntry::new(user_id, text, analysis.sentiment, analysis.tags)?;

        let journal_id = self.repo.create_journal(&entry)?;
        let record = self
            .repo
            .get_journal(user_id, journal_id)?
            .ok_or(JournalServiceError::InconsistentState(
                "created journal not found in read-back",
            ))?;

        info!(
            "event=journal_create module=journal status=ok label={} score={:.2} tag_count={} duration_ms={}",
            record.sentiment,
            record.sentiment_score,
            record.tags.len(),
            started_at.elapsed().as_millis()
        );
        Ok(record)
    }

    /// Gets one journal owned by `user_id`.
    pub fn get_journal(
        &self,
        user_id: UserId,
        journal_id: JournalId,
    ) -> RepoResult<Option<JournalRecord>> {
        self.repo.get_journal(user_id, journal_id)
    }

    /// Lists the newest journals of `user_id`.
    pub fn list_journals(
        &self,
        user_id: UserId,
        limit: Option<u32>,
    ) -> Result<JournalsListResult, JournalServiceError> {
        let applied_limit = normalize_journal_limit(limit);
        let items = self.repo.list_recent(user_id, applied_limit)?;
        Ok(JournalsListResult {
            items,
            applied_limit,
        })
    }
}
