//! Task use-case service.
//!
//! # Responsibility
//! - Create, list and complete tasks for one owner.
//! - Supply the live pending high-priority count to the suggestions query.
//!
//! # Invariants
//! - Title is required; priority defaults to `medium`.
//! - A task owned by another user is reported as not found.

use crate::model::task::{Priority, Task, TaskId};
use crate::model::user::UserId;
use crate::model::ValidationError;
use crate::repo::task_repo::TaskRepository;
use crate::repo::RepoError;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for task use-cases.
#[derive(Debug)]
pub enum TaskServiceError {
    /// Title is empty after trim.
    BlankTitle,
    /// Priority is not one of `low|medium|high`.
    InvalidPriority(String),
    /// Task does not exist or belongs to someone else.
    TaskNotFound(TaskId),
    /// Owner does not exist.
    UserNotFound(UserId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "task title must not be blank"),
            Self::InvalidPriority(value) => {
                write!(f, "invalid priority `{value}`; expected low, medium or high")
            }
            Self::TaskNotFound(task_id) => write!(f, "task not found: {task_id}"),
            Self::UserNotFound(user_id) => write!(f, "user not found: {user_id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent task state: {details}"),
        }
    }
}

impl Error for TaskServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for TaskServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { entity: "task", id } => Self::TaskNotFound(id),
            RepoError::NotFound { entity: "user", id } => Self::UserNotFound(id),
            RepoError::Validation(ValidationError::BlankField("task title")) => Self::BlankTitle,
            other => Self::Repo(other),
        }
    }
}

/// Input for `TaskService::create_task`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// Raw priority text; `None` or blank means `medium`.
    pub priority: Option<String>,
    /// Unix epoch milliseconds.
    pub due_at: Option<i64>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

/// Parses optional priority text. `None` and blank input mean `medium`.
pub fn parse_priority(value: Option<&str>) -> Result<Priority, TaskServiceError> {
    match value.map(str::trim) {
        None | Some("") => Ok(Priority::default()),
        Some(text) => Priority::parse(&text.to_ascii_lowercase())
            .ok_or_else(|| TaskServiceError::InvalidPriority(text.to_string())),
    }
}

/// Task service facade over repository implementations.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_task(&self, user_id: UserId, input: NewTask) -> Result<Task, TaskServiceError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(TaskServiceError::BlankTitle);
        }
        let priority = parse_priority(input.priority.as_deref())?;

        let mut task = Task::new(user_id, title, priority);
        task.description = input.description.trim().to_string();
        task.due_at = input.due_at;

        let task_id = self.repo.create_task(&task)?;
        self.repo
            .get_task(user_id, task_id)?
            .ok_or(TaskServiceError::InconsistentState(
                "created task not found in read-back",
            ))
    }

    /// All tasks of `user_id`, newest first.
    pub fn list_tasks(&self, user_id: UserId) -> Result<Vec<Task>, TaskServiceError> {
        Ok(self.repo.list_tasks(user_id)?)
    }

    /// Marks one task done and counts one more pomodoro session.
    ///
    /// Repeating the call on a done task increments the session count again.
    ///
    /// # Side effects
    /// - Emits a `task_mark_done` event.
    pub fn mark_done(&self, user_id: UserId, task_id: TaskId) -> Result<Task, TaskServiceError> {
        self.repo.mark_done(user_id, task_id)?;
        let task = self
            .repo
            .get_task(user_id, task_id)?
            .ok_or(TaskServiceError::InconsistentState(
                "completed task not found in read-back",
            ))?;

        info!(
            "event=task_mark_done module=task status=ok priority={} sessions={}",
            task.priority, task.pomodoro_sessions
        );
        Ok(task)
    }

    pub fn count_pending_high_priority(&self, user_id: UserId) -> Result<u32, TaskServiceError> {
        Ok(self.repo.count_pending_high_priority(user_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_priority, TaskServiceError};
    use crate::model::task::Priority;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(parse_priority(None).expect("none"), Priority::Medium);
        assert_eq!(parse_priority(Some("  ")).expect("blank"), Priority::Medium);
    }

    #[test]
    fn priority_parse_accepts_known_values_case_insensitively() {
        assert_eq!(parse_priority(Some("HIGH")).expect("high"), Priority::High);
        assert_eq!(parse_priority(Some(" low ")).expect("low"), Priority::Low);
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let err = parse_priority(Some("urgent")).expect_err("must reject");
        assert!(matches!(err, TaskServiceError::InvalidPriority(value) if value == "urgent"));
    }
}
