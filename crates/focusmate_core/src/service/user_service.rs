//! User account use-case service.
//!
//! Credential hashing belongs to the caller; this service stores the
//! opaque hash it is given.

use crate::model::user::{User, UserId};
use crate::model::ValidationError;
use crate::repo::user_repo::UserRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for account use-cases.
#[derive(Debug)]
pub enum UserServiceError {
    /// Registration field failed validation.
    Validation(ValidationError),
    /// Another account already uses this email.
    EmailTaken(String),
    UserNotFound(UserId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for UserServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EmailTaken(email) => write!(f, "email already registered: {email}"),
            Self::UserNotFound(user_id) => write!(f, "user not found: {user_id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UserServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for UserServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound { entity: "user", id } => Self::UserNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<ValidationError> for UserServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Account service facade over repository implementations.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an account with default preferences.
    ///
    /// # Side effects
    /// - Emits a `user_register` event (no email or credential in the record).
    pub fn register(
        &self,
        email: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<User, UserServiceError> {
        let user = User::new(email, name, password_hash);
        user.validate()?;

        match self.repo.create_user(&user) {
            Ok(_) => {}
            Err(RepoError::Conflict(_)) => return Err(UserServiceError::EmailTaken(user.email)),
            Err(err) => return Err(err.into()),
        }

        let stored = self
            .repo
            .get_user(user.id)?
            .ok_or(UserServiceError::UserNotFound(user.id))?;
        info!("event=user_register module=user status=ok user_id={}", stored.id);
        Ok(stored)
    }

    pub fn get_user(&self, user_id: UserId) -> RepoResult<Option<User>> {
        self.repo.get_user(user_id)
    }

    /// Case-insensitive lookup for the login flow.
    pub fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.repo.find_by_email(email)
    }
}
