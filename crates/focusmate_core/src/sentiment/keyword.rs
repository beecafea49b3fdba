//! Deterministic keyword-counting sentiment strategy.
//!
//! Each keyword counts at most once (substring presence, not frequency).
//! The net count is scaled by 5 and capped at 1.0.

use crate::model::journal::MoodLabel;
use crate::sentiment::{Sentiment, SentimentAnalyzer};

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "good",
    "happy",
    "calm",
    "focused",
    "relaxed",
    "motivated",
    "great",
    "productive",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "sad",
    "anxious",
    "stressed",
    "overwhelmed",
    "panic",
    "depressed",
    "tired",
    "distracted",
];

/// Net keyword count that maps to full confidence.
const FULL_CONFIDENCE_COUNT: f64 = 5.0;

/// Always-available sentiment strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSentimentAnalyzer;

impl KeywordSentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Positive keywords present minus negative keywords present.
    pub fn raw_score(&self, text: &str) -> i32 {
        let lowered = text.to_lowercase();
        count_present(&lowered, POSITIVE_KEYWORDS) - count_present(&lowered, NEGATIVE_KEYWORDS)
    }
}

impl SentimentAnalyzer for KeywordSentimentAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let raw = self.raw_score(text);
        let label = match raw {
            r if r > 0 => MoodLabel::Positive,
            r if r < 0 => MoodLabel::Negative,
            _ => return Sentiment::neutral(),
        };
        let score = (f64::from(raw.unsigned_abs()) / FULL_CONFIDENCE_COUNT).min(1.0);
        Sentiment::from_parts(label, score).unwrap_or_else(|_| Sentiment::neutral())
    }
}

fn count_present(haystack: &str, keywords: &[&str]) -> i32 {
    keywords
        .iter()
        .filter(|keyword| haystack.contains(*keyword))
        .count() as i32
}

#[cfg(test)]
mod tests {
    use super::KeywordSentimentAnalyzer;
    use crate::model::journal::MoodLabel;
    use crate::sentiment::SentimentAnalyzer;

    #[test]
    fn empty_and_whitespace_text_is_neutral() {
        let analyzer = KeywordSentimentAnalyzer::new();
        for text in ["", "   ", "\n\t"] {
            let sentiment = analyzer.analyze(text);
            assert_eq!(sentiment.label(), MoodLabel::Neutral);
            assert_eq!(sentiment.score(), 0.0);
        }
    }

    #[test]
    fn repeated_keyword_counts_once() {
        let analyzer = KeywordSentimentAnalyzer::new();
        assert_eq!(analyzer.raw_score("happy happy happy"), 1);
        let sentiment = analyzer.analyze("happy happy happy");
        assert_eq!(sentiment.label(), MoodLabel::Positive);
        assert_eq!(sentiment.score(), 0.2);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let analyzer = KeywordSentimentAnalyzer::new();
        // "unproductive" still contains "productive".
        assert_eq!(analyzer.raw_score("An UNPRODUCTIVE day"), 1);
    }

    #[test]
    fn score_caps_at_one() {
        let analyzer = KeywordSentimentAnalyzer::new();
        let sentiment =
            analyzer.analyze("good happy calm focused relaxed motivated great productive");
        assert_eq!(sentiment.label(), MoodLabel::Positive);
        assert_eq!(sentiment.score(), 1.0);
    }

    #[test]
    fn mixed_keywords_are_netted() {
        let analyzer = KeywordSentimentAnalyzer::new();
        let sentiment = analyzer.analyze("good and happy but tired");
        assert_eq!(sentiment.label(), MoodLabel::Positive);
        assert_eq!(sentiment.score(), 0.2);
    }

    #[test]
    fn negative_only_text_is_negative() {
        let analyzer = KeywordSentimentAnalyzer::new();
        assert_eq!(analyzer.raw_score("sad and tired"), -2);
        let sentiment = analyzer.analyze("sad and tired");
        assert_eq!(sentiment.label(), MoodLabel::Negative);
        assert_eq!(sentiment.score(), 0.4);
    }
}
