//! Core domain logic for FocusMate.
//! Journal analysis, task tracking and mood-aware suggestions over an
//! embedded SQLite store.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod recommend;
pub mod repo;
pub mod sentiment;
pub mod service;
pub mod stats;
pub mod tags;

pub use config::{ConfigError, CoreConfig};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::journal::{JournalEntry, JournalId, MoodLabel};
pub use model::suggestion::Suggestion;
pub use model::task::{Priority, Task, TaskId};
pub use model::user::{Preferences, User, UserId};
pub use model::ValidationError;
pub use recommend::suggest;
pub use repo::journal_repo::{JournalRecord, JournalRepository, SqliteJournalRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use sentiment::{
    ClassifierError, ClassifierOutput, KeywordSentimentAnalyzer, ModelBackedAnalyzer, Sentiment,
    SentimentAnalyzer, TextClassifier,
};
pub use service::insight_service::{InsightService, InsightServiceError, SuggestionsReport};
pub use service::journal_service::{
    analyze_journal, JournalAnalysis, JournalService, JournalServiceError, JournalsListResult,
};
pub use service::task_service::{NewTask, TaskService, TaskServiceError};
pub use service::user_service::{UserService, UserServiceError};
pub use stats::{aggregate, TaskStats};
pub use tags::extract_tags;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
