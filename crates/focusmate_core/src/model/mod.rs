//! Domain model for users, tasks, journal entries and suggestions.
//!
//! # Responsibility
//! - Define canonical data structures shared by pipeline, repositories and
//!   services.
//! - Own field-level validation so every write path enforces one contract.
//!
//! # Invariants
//! - Every persisted object is identified by a non-nil UUID.
//! - Timestamps are Unix epoch milliseconds.
//! - Tasks and journal entries are owned by exactly one user.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub mod journal;
pub mod suggestion;
pub mod task;
pub mod user;

/// Field-level validation failures for domain objects.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Identifier is the nil UUID.
    NilId(&'static str),
    /// Required text field is empty after trim.
    BlankField(&'static str),
    /// Sentiment score is not a finite value in `[0, 1]`.
    ScoreOutOfRange(f64),
    /// Journal carries more tags than allowed.
    TooManyTags { count: usize, max: usize },
    /// Tag is not lowercase or not longer than the minimum length.
    InvalidTag(String),
    /// Email does not look like an address.
    InvalidEmail(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId(field) => write!(f, "{field} must not be the nil uuid"),
            Self::BlankField(field) => write!(f, "{field} must not be blank"),
            Self::ScoreOutOfRange(score) => {
                write!(f, "sentiment score {score} must be within [0, 1]")
            }
            Self::TooManyTags { count, max } => {
                write!(f, "journal has {count} tags; at most {max} are allowed")
            }
            Self::InvalidTag(tag) => write!(f, "invalid tag: `{tag}`"),
            Self::InvalidEmail(email) => write!(f, "invalid email: `{email}`"),
        }
    }
}

impl Error for ValidationError {}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
