//! User repository contracts and SQLite implementation.

use crate::model::user::{Preferences, User, UserId};
use crate::repo::{is_unique_violation, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const USER_SELECT_SQL: &str = "SELECT
    uuid,
    email,
    name,
    password_hash,
    pomodoro_duration_minutes,
    break_duration_minutes,
    created_at
FROM users";

pub trait UserRepository {
    /// Inserts a user; a taken email yields `RepoError::Conflict`.
    fn create_user(&self, user: &User) -> RepoResult<UserId>;
    fn get_user(&self, id: UserId) -> RepoResult<Option<User>>;
    /// Case-insensitive email lookup.
    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn create_user(&self, user: &User) -> RepoResult<UserId> {
        user.validate()?;

        let result = self.conn.execute(
            "INSERT INTO users (
                uuid,
                email,
                name,
                password_hash,
                pomodoro_duration_minutes,
                break_duration_minutes,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                user.id.to_string(),
                user.email.as_str(),
                user.name.as_str(),
                user.password_hash.as_str(),
                user.preferences.pomodoro_duration_minutes,
                user.preferences.break_duration_minutes,
                user.created_at,
            ],
        );

        match result {
            Ok(_) => Ok(user.id),
            Err(err) if is_unique_violation(&err) => Err(RepoError::Conflict(format!(
                "email already registered: {}",
                user.email
            ))),
            Err(err) => Err(err.into()),
        }
    }

    fn get_user(&self, id: UserId) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }

    fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE email = ?1 COLLATE NOCASE;"))?;
        let mut rows = stmt.query([email.trim()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_user_row(row)?));
        }
        Ok(None)
    }
}

fn parse_user_row(row: &Row<'_>) -> RepoResult<User> {
    let uuid_text: String = row.get("uuid")?;
    Ok(User {
        id: parse_uuid(&uuid_text, "users.uuid")?,
        email: row.get("email")?,
        name: row.get("name")?,
        password_hash: row.get("password_hash")?,
        preferences: Preferences {
            pomodoro_duration_minutes: row.get("pomodoro_duration_minutes")?,
            break_duration_minutes: row.get("break_duration_minutes")?,
        },
        created_at: row.get("created_at")?,
    })
}
