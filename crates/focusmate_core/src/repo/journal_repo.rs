//! Journal repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist analyzed journal entries together with their ordered tags.
//! - Serve newest-first reads for listing, suggestions and stats.
//!
//! # Invariants
//! - An entry and its tags are written in one transaction.
//! - Read paths keep the stored sentiment label verbatim, even when it is not
//!   one of the known mood labels.
//! - Listing order is `created_at DESC`, then insertion order, newest first.

use crate::model::journal::{JournalEntry, JournalId, MoodLabel};
use crate::model::user::UserId;
use crate::repo::{map_owner_error, parse_uuid, RepoResult};
use rusqlite::{params, Connection, Row};
use serde::Serialize;

const JOURNALS_DEFAULT_LIMIT: u32 = 10;
const JOURNALS_LIMIT_MAX: u32 = 50;

const JOURNAL_SELECT_SQL: &str = "SELECT
    uuid,
    user_uuid,
    text,
    sentiment,
    sentiment_score,
    created_at
FROM journals";

/// Read model for persisted journal entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalRecord {
    pub id: JournalId,
    pub user_id: UserId,
    pub text: String,
    /// Stored label, verbatim.
    pub sentiment: String,
    pub sentiment_score: f64,
    /// Tags in stored order.
    pub tags: Vec<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl JournalRecord {
    /// Known mood label, if the stored label is one.
    pub fn mood_label(&self) -> Option<MoodLabel> {
        MoodLabel::parse(&self.sentiment)
    }
}

pub trait JournalRepository {
    fn create_journal(&self, entry: &JournalEntry) -> RepoResult<JournalId>;
    fn get_journal(&self, user_id: UserId, journal_id: JournalId)
        -> RepoResult<Option<JournalRecord>>;
    /// Newest entries of one user, at most `limit` rows.
    fn list_recent(&self, user_id: UserId, limit: u32) -> RepoResult<Vec<JournalRecord>>;
}

/// SQLite-backed journal repository.
pub struct SqliteJournalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteJournalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl JournalRepository for SqliteJournalRepository<'_> {
    fn create_journal(&self, entry: &JournalEntry) -> RepoResult<JournalId> {
        entry.validate()?;

        let entry_id = entry.id.to_string();
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO journals (
                uuid,
                user_uuid,
                text,
                sentiment,
                sentiment_score,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                entry_id.as_str(),
                entry.user_id.to_string(),
                entry.text.as_str(),
                entry.sentiment.as_str(),
                entry.sentiment_score,
                entry.created_at,
            ],
        )
        .map_err(|err| map_owner_error(err, entry.user_id))?;

        for (position, tag) in entry.tags.iter().enumerate() {
            tx.execute(
                "INSERT INTO journal_tags (journal_uuid, position, tag) VALUES (?1, ?2, ?3);",
                params![entry_id.as_str(), position as i64, tag.as_str()],
            )?;
        }

        tx.commit()?;
        Ok(entry.id)
    }

    fn get_journal(
        &self,
        user_id: UserId,
        journal_id: JournalId,
    ) -> RepoResult<Option<JournalRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{JOURNAL_SELECT_SQL}
             WHERE uuid = ?1
               AND user_uuid = ?2;"
        ))?;
        let mut rows = stmt.query(params![journal_id.to_string(), user_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_journal_row(self.conn, row)?));
        }
        Ok(None)
    }

    fn list_recent(&self, user_id: UserId, limit: u32) -> RepoResult<Vec<JournalRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{JOURNAL_SELECT_SQL}
             WHERE user_uuid = ?1
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?2;"
        ))?;
        let mut rows = stmt.query(params![user_id.to_string(), i64::from(limit)])?;
        let mut journals = Vec::new();
        while let Some(row) = rows.next()? {
            journals.push(parse_journal_row(self.conn, row)?);
        }
        Ok(journals)
    }
}

/// Normalizes a journal list limit: default 10, capped at 50.
pub fn normalize_journal_limit(limit: Option<u32>) -> u32 {
    match limit {
        Some(0) | None => JOURNALS_DEFAULT_LIMIT,
        Some(value) if value > JOURNALS_LIMIT_MAX => JOURNALS_LIMIT_MAX,
        Some(value) => value,
    }
}

fn parse_journal_row(conn: &Connection, row: &Row<'_>) -> RepoResult<JournalRecord> {
    let uuid_text: String = row.get("uuid")?;
    let user_text: String = row.get("user_uuid")?;
    let tags = load_tags_for_journal(conn, &uuid_text)?;
    Ok(JournalRecord {
        id: parse_uuid(&uuid_text, "journals.uuid")?,
        user_id: parse_uuid(&user_text, "journals.user_uuid")?,
        text: row.get("text")?,
        sentiment: row.get("sentiment")?,
        sentiment_score: row.get("sentiment_score")?,
        tags,
        created_at: row.get("created_at")?,
    })
}

fn load_tags_for_journal(conn: &Connection, journal_uuid: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT tag
         FROM journal_tags
         WHERE journal_uuid = ?1
         ORDER BY position ASC;",
    )?;
    let mut rows = stmt.query([journal_uuid])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get(0)?);
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::normalize_journal_limit;

    #[test]
    fn journal_limit_defaults_to_10_and_caps_at_50() {
        assert_eq!(normalize_journal_limit(None), 10);
        assert_eq!(normalize_journal_limit(Some(0)), 10);
        assert_eq!(normalize_journal_limit(Some(7)), 7);
        assert_eq!(normalize_journal_limit(Some(500)), 50);
    }
}
