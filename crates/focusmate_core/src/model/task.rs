//! Task domain model.
//!
//! # Responsibility
//! - Define the task record and its priority scale.
//! - Provide the one-way "mark done" transition.
//!
//! # Invariants
//! - `title` is non-blank.
//! - `mark_done` sets `is_done` and adds exactly one pomodoro session.
//! - There is no transition back to pending.

use crate::model::user::UserId;
use crate::model::{now_epoch_ms, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type TaskId = Uuid;

/// Priority scale shared by tasks and suggestions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Stable lowercase wire/storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actionable task tracked with pomodoro sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_done: bool,
    #[serde(default)]
    pub pomodoro_sessions: u32,
    /// Optional due date in Unix epoch milliseconds.
    #[serde(default)]
    pub due_at: Option<i64>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Task {
    /// Creates a pending task with zero sessions, stamped with the current time.
    pub fn new(user_id: UserId, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.into(),
            description: String::new(),
            priority,
            is_done: false,
            pomodoro_sessions: 0,
            due_at: None,
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId("task id"));
        }
        if self.user_id.is_nil() {
            return Err(ValidationError::NilId("task user_id"));
        }
        if self.title.trim().is_empty() {
            return Err(ValidationError::BlankField("task title"));
        }
        Ok(())
    }

    /// Completes the task and records one more pomodoro session.
    pub fn mark_done(&mut self) {
        self.is_done = true;
        self.pomodoro_sessions = self.pomodoro_sessions.saturating_add(1);
    }

    /// Incomplete and high priority.
    pub fn is_pending_high_priority(&self) -> bool {
        !self.is_done && self.priority == Priority::High
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Task};
    use uuid::Uuid;

    #[test]
    fn new_task_starts_pending_with_zero_sessions() {
        let task = Task::new(Uuid::new_v4(), "write report", Priority::High);
        assert!(!task.is_done);
        assert_eq!(task.pomodoro_sessions, 0);
        assert!(task.is_pending_high_priority());
    }

    #[test]
    fn mark_done_sets_flag_and_adds_one_session() {
        let mut task = Task::new(Uuid::new_v4(), "write report", Priority::High);
        task.mark_done();
        assert!(task.is_done);
        assert_eq!(task.pomodoro_sessions, 1);
        assert!(!task.is_pending_high_priority());
    }

    #[test]
    fn priority_defaults_to_medium_and_parses_lowercase_only() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::parse("high"), Some(Priority::High));
        assert_eq!(Priority::parse("HIGH"), None);
    }

    #[test]
    fn serialization_uses_lowercase_priority() {
        let task = Task::new(Uuid::new_v4(), "demo", Priority::Low);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["priority"], "low");
        assert_eq!(json["is_done"], false);
        assert_eq!(json["pomodoro_sessions"], 0);
    }
}
