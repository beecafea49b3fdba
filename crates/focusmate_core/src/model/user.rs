//! User account model.
//!
//! Credentials arrive already hashed; this crate never sees raw passwords.

use crate::model::{now_epoch_ms, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

pub type UserId = Uuid;

pub const DEFAULT_POMODORO_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Per-user focus timer preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub pomodoro_duration_minutes: u32,
    pub break_duration_minutes: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            pomodoro_duration_minutes: DEFAULT_POMODORO_MINUTES,
            break_duration_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Trimmed, lowercase, unique across users.
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Opaque credential hash supplied by the caller.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(default)]
    pub preferences: Preferences,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl User {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into().trim().to_lowercase(),
            name: name.into().trim().to_string(),
            password_hash: password_hash.into(),
            preferences: Preferences::default(),
            created_at: now_epoch_ms(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId("user id"));
        }
        if self.email.is_empty() {
            return Err(ValidationError::BlankField("email"));
        }
        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        if self.password_hash.trim().is_empty() {
            return Err(ValidationError::BlankField("password_hash"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Preferences, User};
    use crate::model::ValidationError;

    #[test]
    fn new_user_normalizes_email_and_uses_default_preferences() {
        let user = User::new("  Demo@FocusMate.com ", "Demo User", "hash");
        assert_eq!(user.email, "demo@focusmate.com");
        assert_eq!(user.preferences, Preferences::default());
        assert_eq!(user.preferences.pomodoro_duration_minutes, 25);
        assert_eq!(user.preferences.break_duration_minutes, 5);
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let user = User::new("not-an-address", "", "hash");
        assert_eq!(
            user.validate().unwrap_err(),
            ValidationError::InvalidEmail("not-an-address".to_string())
        );
    }

    #[test]
    fn serialization_never_exposes_password_hash() {
        let user = User::new("demo@focusmate.com", "", "secret-hash");
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
