//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the mood label vocabulary produced by sentiment analysis.
//! - Define the immutable journal entry created from one submission.
//!
//! # Invariants
//! - `text` is non-blank.
//! - `sentiment_score` is within `[0, 1]` and always paired with `sentiment`.
//! - `tags` holds at most 6 lowercase values, each longer than 3 characters.

use crate::model::user::UserId;
use crate::model::{now_epoch_ms, ValidationError};
use crate::sentiment::Sentiment;
use crate::tags::{MAX_TAGS, MIN_TAG_CHARS};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type JournalId = Uuid;

/// Three-way mood classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    Positive,
    Neutral,
    Negative,
}

impl MoodLabel {
    /// Stable lowercase wire/storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Parses an exact stored label. Anything else is unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl Display for MoodLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One analyzed journal submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalId,
    pub user_id: UserId,
    /// Submitted text, trimmed.
    pub text: String,
    pub sentiment: MoodLabel,
    pub sentiment_score: f64,
    pub tags: Vec<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl JournalEntry {
    /// Builds a validated entry stamped with the current time.
    pub fn new(
        user_id: UserId,
        text: impl Into<String>,
        sentiment: Sentiment,
        tags: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let entry = Self {
            id: Uuid::new_v4(),
            user_id,
            text: text.into().trim().to_string(),
            sentiment: sentiment.label(),
            sentiment_score: sentiment.score(),
            tags,
            created_at: now_epoch_ms(),
        };
        entry.validate()?;
        Ok(entry)
    }

    /// Checks the entry invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_nil() {
            return Err(ValidationError::NilId("journal id"));
        }
        if self.user_id.is_nil() {
            return Err(ValidationError::NilId("journal user_id"));
        }
        if self.text.trim().is_empty() {
            return Err(ValidationError::BlankField("journal text"));
        }
        Sentiment::from_parts(self.sentiment, self.sentiment_score)?;
        if self.tags.len() > MAX_TAGS {
            return Err(ValidationError::TooManyTags {
                count: self.tags.len(),
                max: MAX_TAGS,
            });
        }
        for tag in &self.tags {
            if tag.chars().count() < MIN_TAG_CHARS || tag.to_lowercase() != *tag {
                return Err(ValidationError::InvalidTag(tag.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{JournalEntry, MoodLabel};
    use crate::model::ValidationError;
    use crate::sentiment::Sentiment;
    use uuid::Uuid;

    #[test]
    fn mood_label_parse_is_exact() {
        assert_eq!(MoodLabel::parse("negative"), Some(MoodLabel::Negative));
        assert_eq!(MoodLabel::parse("Negative"), None);
        assert_eq!(MoodLabel::parse(""), None);
    }

    #[test]
    fn new_entry_trims_text_and_copies_sentiment() {
        let sentiment = Sentiment::from_parts(MoodLabel::Positive, 0.4).expect("valid sentiment");
        let entry = JournalEntry::new(
            Uuid::new_v4(),
            "  calm and focused  ",
            sentiment,
            vec!["calm".to_string()],
        )
        .expect("entry should validate");

        assert_eq!(entry.text, "calm and focused");
        assert_eq!(entry.sentiment, MoodLabel::Positive);
        assert_eq!(entry.sentiment_score, 0.4);
    }

    #[test]
    fn new_entry_rejects_blank_text() {
        let err = JournalEntry::new(Uuid::new_v4(), "   ", Sentiment::neutral(), Vec::new())
            .expect_err("blank text must fail");
        assert_eq!(err, ValidationError::BlankField("journal text"));
    }

    #[test]
    fn validate_rejects_short_or_uppercase_tags() {
        let mut entry =
            JournalEntry::new(Uuid::new_v4(), "some text", Sentiment::neutral(), Vec::new())
                .expect("entry should validate");

        entry.tags = vec!["sad".to_string()];
        assert_eq!(
            entry.validate().unwrap_err(),
            ValidationError::InvalidTag("sad".to_string())
        );

        entry.tags = vec!["Today".to_string()];
        assert_eq!(
            entry.validate().unwrap_err(),
            ValidationError::InvalidTag("Today".to_string())
        );
    }
}
