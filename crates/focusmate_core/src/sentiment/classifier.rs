//! Model-backed sentiment strategy with transparent keyword fallback.
//!
//! # Responsibility
//! - Adapt an injected text-classification model to the `SentimentAnalyzer`
//!   contract.
//! - Replace every model failure with the keyword strategy's answer.
//!
//! # Invariants
//! - The model sees at most `MODEL_INPUT_MAX_CHARS` characters.
//! - Load failures are permanent for the analyzer instance; no retry.
//! - Errors, out-of-range scores and panics from the model never reach
//!   callers of `analyze`.

use crate::model::journal::MoodLabel;
use crate::sentiment::keyword::KeywordSentimentAnalyzer;
use crate::sentiment::{Sentiment, SentimentAnalyzer};
use log::{info, log, warn, Level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

/// Input prefix length handed to the model, in characters.
pub const MODEL_INPUT_MAX_CHARS: usize = 512;

/// Raw answer from a text-classification model.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierOutput {
    /// Model-specific label, e.g. `POSITIVE` or `LABEL_0`.
    pub label: String,
    pub score: f64,
}

impl ClassifierOutput {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// External text-classification model.
pub trait TextClassifier {
    fn classify(&self, text: &str) -> Result<ClassifierOutput, ClassifierError>;
}

/// Model failures. Recovered locally, never surfaced by `analyze`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    /// Model could not be loaded or initialized.
    Unavailable(String),
    /// Model raised an error during inference.
    Inference(String),
    /// Model did not answer within its own deadline.
    Timeout,
}

impl Display for ClassifierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "sentiment model unavailable: {message}"),
            Self::Inference(message) => write!(f, "sentiment model inference failed: {message}"),
            Self::Timeout => write!(f, "sentiment model timed out"),
        }
    }
}

impl Error for ClassifierError {}

/// Why the keyword strategy answered instead of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    ModelUnavailable,
    Classifier(ClassifierError),
    InvalidScore,
    Panicked,
}

impl FallbackReason {
    /// Stable code for log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ModelUnavailable => "model_unavailable",
            Self::Classifier(ClassifierError::Unavailable(_)) => "classifier_unavailable",
            Self::Classifier(ClassifierError::Inference(_)) => "inference_failed",
            Self::Classifier(ClassifierError::Timeout) => "timeout",
            Self::InvalidScore => "invalid_score",
            Self::Panicked => "panicked",
        }
    }
}

/// Which strategy produced a sentiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentSource {
    Model,
    /// Blank input, answered without consulting the model.
    Keyword,
    Fallback(FallbackReason),
}

/// Sentiment plus the substitution signal.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzedSentiment {
    pub sentiment: Sentiment,
    pub source: SentimentSource,
}

/// Model-backed analyzer composing the keyword strategy as its fallback.
pub struct ModelBackedAnalyzer<C> {
    classifier: Option<C>,
    fallback: KeywordSentimentAnalyzer,
}

impl<C: TextClassifier> ModelBackedAnalyzer<C> {
    /// Wraps an already loaded classifier.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier: Some(classifier),
            fallback: KeywordSentimentAnalyzer::new(),
        }
    }

    /// Analyzer that always answers with the keyword strategy.
    pub fn without_model() -> Self {
        Self {
            classifier: None,
            fallback: KeywordSentimentAnalyzer::new(),
        }
    }

    /// Runs the one-time model load, degrading to keyword-only on failure.
    ///
    /// # Side effects
    /// - Emits one `classifier_load` event with duration and status.
    pub fn load_with<F>(loader: F) -> Self
    where
        F: FnOnce() -> Result<C, ClassifierError>,
    {
        let started_at = Instant::now();
        match catch_unwind(AssertUnwindSafe(loader)) {
            Ok(Ok(classifier)) => {
                info!(
                    "event=classifier_load module=sentiment status=ok duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Self::new(classifier)
            }
            Ok(Err(err)) => {
                warn!(
                    "event=classifier_load module=sentiment status=degraded duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Self::without_model()
            }
            Err(_) => {
                warn!(
                    "event=classifier_load module=sentiment status=degraded duration_ms={} error=loader_panicked",
                    started_at.elapsed().as_millis()
                );
                Self::without_model()
            }
        }
    }

    pub fn is_model_active(&self) -> bool {
        self.classifier.is_some()
    }

    /// Analyzes text and reports which strategy answered.
    pub fn analyze_with_source(&self, text: &str) -> AnalyzedSentiment {
        if text.trim().is_empty() {
            return AnalyzedSentiment {
                sentiment: Sentiment::neutral(),
                source: SentimentSource::Keyword,
            };
        }

        let Some(classifier) = self.classifier.as_ref() else {
            return self.fall_back(text, FallbackReason::ModelUnavailable, 0);
        };

        let prefix = model_input_prefix(text);
        let outcome = match catch_unwind(AssertUnwindSafe(|| classifier.classify(prefix))) {
            Ok(Ok(output)) => {
                Sentiment::from_parts(normalize_label(&output.label), output.score)
                    .map_err(|_| FallbackReason::InvalidScore)
            }
            Ok(Err(err)) => Err(FallbackReason::Classifier(err)),
            Err(_) => Err(FallbackReason::Panicked),
        };

        match outcome {
            Ok(sentiment) => AnalyzedSentiment {
                sentiment,
                source: SentimentSource::Model,
            },
            Err(reason) => self.fall_back(text, reason, prefix.chars().count()),
        }
    }

    fn fall_back(
        &self,
        text: &str,
        reason: FallbackReason,
        input_chars: usize,
    ) -> AnalyzedSentiment {
        log!(
            fallback_log_level(&reason),
            "event=sentiment_fallback module=sentiment status=degraded reason={} input_chars={}",
            reason.code(),
            input_chars
        );
        AnalyzedSentiment {
            sentiment: self.fallback.analyze(text),
            source: SentimentSource::Fallback(reason),
        }
    }
}

impl<C: TextClassifier> SentimentAnalyzer for ModelBackedAnalyzer<C> {
    fn analyze(&self, text: &str) -> Sentiment {
        self.analyze_with_source(text).sentiment
    }
}

/// Every substitution is a warning, including a model that never loaded.
fn fallback_log_level(_reason: &FallbackReason) -> Level {
    Level::Warn
}

/// Maps a model label onto the three-way mood vocabulary.
pub fn normalize_label(label: &str) -> MoodLabel {
    let lowered = label.to_lowercase();
    if lowered.contains("pos") {
        MoodLabel::Positive
    } else if lowered.contains("neg") {
        MoodLabel::Negative
    } else {
        MoodLabel::Neutral
    }
}

/// First `MODEL_INPUT_MAX_CHARS` characters of `text`.
pub fn model_input_prefix(text: &str) -> &str {
    match text.char_indices().nth(MODEL_INPUT_MAX_CHARS) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        fallback_log_level, model_input_prefix, normalize_label, ClassifierError,
        FallbackReason, MODEL_INPUT_MAX_CHARS,
    };
    use crate::model::journal::MoodLabel;
    use log::Level;

    #[test]
    fn normalize_label_matches_substrings_case_insensitively() {
        assert_eq!(normalize_label("POSITIVE"), MoodLabel::Positive);
        assert_eq!(normalize_label("Negative"), MoodLabel::Negative);
        assert_eq!(normalize_label("LABEL_1"), MoodLabel::Neutral);
        assert_eq!(normalize_label(""), MoodLabel::Neutral);
    }

    #[test]
    fn prefix_is_bounded_by_characters_not_bytes() {
        let text = "é".repeat(MODEL_INPUT_MAX_CHARS + 10);
        let prefix = model_input_prefix(&text);
        assert_eq!(prefix.chars().count(), MODEL_INPUT_MAX_CHARS);

        let short = "short text";
        assert_eq!(model_input_prefix(short), short);
    }

    #[test]
    fn every_fallback_reason_logs_at_warn() {
        let reasons = [
            FallbackReason::ModelUnavailable,
            FallbackReason::Classifier(ClassifierError::Timeout),
            FallbackReason::InvalidScore,
            FallbackReason::Panicked,
        ];
        for reason in &reasons {
            assert_eq!(fallback_log_level(reason), Level::Warn, "{}", reason.code());
        }
    }
}
