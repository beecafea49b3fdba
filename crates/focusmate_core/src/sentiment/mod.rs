//! Sentiment classification for journal text.
//!
//! # Responsibility
//! - Define the single `SentimentAnalyzer` contract used by the journal
//!   pipeline.
//! - Provide the deterministic keyword strategy and the model-backed strategy
//!   that falls back to it.
//!
//! # Invariants
//! - `analyze` never fails and never panics.
//! - A `Sentiment` always carries a label and a score in `[0, 1]` together.
//! - The keyword strategy is a pure function of its input.

use crate::model::journal::MoodLabel;
use crate::model::ValidationError;
use serde::Serialize;

pub mod classifier;
pub mod keyword;

pub use classifier::{
    AnalyzedSentiment, ClassifierError, ClassifierOutput, FallbackReason, ModelBackedAnalyzer,
    SentimentSource, TextClassifier, MODEL_INPUT_MAX_CHARS,
};
pub use keyword::{KeywordSentimentAnalyzer, NEGATIVE_KEYWORDS, POSITIVE_KEYWORDS};

/// Mood label with its confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    label: MoodLabel,
    score: f64,
}

impl Sentiment {
    /// Neutral with zero confidence; the answer for empty input.
    pub fn neutral() -> Self {
        Self {
            label: MoodLabel::Neutral,
            score: 0.0,
        }
    }

    /// Pairs a label with a score, rejecting scores outside `[0, 1]`.
    pub fn from_parts(label: MoodLabel, score: f64) -> Result<Self, ValidationError> {
        if !score.is_finite() || !(0.0..=1.0).contains(&score) {
            return Err(ValidationError::ScoreOutOfRange(score));
        }
        Ok(Self { label, score })
    }

    pub fn label(&self) -> MoodLabel {
        self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Text-to-sentiment strategy.
pub trait SentimentAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment;
}

impl<T: SentimentAnalyzer + ?Sized> SentimentAnalyzer for &T {
    fn analyze(&self, text: &str) -> Sentiment {
        (**self).analyze(text)
    }
}

impl<T: SentimentAnalyzer + ?Sized> SentimentAnalyzer for Box<T> {
    fn analyze(&self, text: &str) -> Sentiment {
        (**self).analyze(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Sentiment;
    use crate::model::journal::MoodLabel;
    use crate::model::ValidationError;

    #[test]
    fn from_parts_accepts_closed_unit_interval() {
        assert!(Sentiment::from_parts(MoodLabel::Positive, 0.0).is_ok());
        assert!(Sentiment::from_parts(MoodLabel::Positive, 1.0).is_ok());
    }

    #[test]
    fn from_parts_rejects_out_of_range_and_nan() {
        assert_eq!(
            Sentiment::from_parts(MoodLabel::Negative, 1.5).unwrap_err(),
            ValidationError::ScoreOutOfRange(1.5)
        );
        assert!(Sentiment::from_parts(MoodLabel::Negative, -0.1).is_err());
        assert!(Sentiment::from_parts(MoodLabel::Negative, f64::NAN).is_err());
    }
}
