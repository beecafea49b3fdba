//! Rule-based recommendation engine.
//!
//! # Invariants
//! - Rules append in a fixed order; callers may rely on list order.
//! - Unrecognized mood labels take the neutral path and never fail.
//! - At most `MAX_SUGGESTIONS` entries are returned.

use crate::model::journal::MoodLabel;
use crate::model::suggestion::Suggestion;
use crate::model::task::Priority;

pub const MAX_SUGGESTIONS: usize = 6;
/// Pending high-priority count that triggers the chunking suggestion.
pub const HIGH_PRIORITY_BACKLOG_THRESHOLD: u32 = 3;

/// Builds suggestions from a stored mood label and the live count of
/// incomplete high-priority tasks.
pub fn suggest(mood_label: &str, pending_high_priority: u32) -> Vec<Suggestion> {
    let mood = MoodLabel::parse(mood_label).unwrap_or(MoodLabel::Neutral);
    suggest_for_mood(mood, pending_high_priority)
}

pub fn suggest_for_mood(mood: MoodLabel, pending_high_priority: u32) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    match mood {
        MoodLabel::Negative => {
            suggestions.push(
                Suggestion::new("Take a 5-minute breathing break", Priority::High)
                    .with_reason("Stress detected"),
            );
            suggestions.push(
                Suggestion::new("Go for a short walk", Priority::Medium)
                    .with_reason("Physical movement helps mood"),
            );
        }
        MoodLabel::Positive => {
            suggestions.push(
                Suggestion::new("Start a 25-minute focused session", Priority::High)
                    .with_reason("Good mood, use the momentum"),
            );
        }
        MoodLabel::Neutral => {
            suggestions.push(
                Suggestion::new("Try a short 15-minute focus session", Priority::Medium)
                    .with_reason("Neutral mood, build momentum"),
            );
        }
    }

    if pending_high_priority >= HIGH_PRIORITY_BACKLOG_THRESHOLD {
        suggestions.push(
            Suggestion::new(
                format!("Break {pending_high_priority} high-priority tasks into 10-minute chunks"),
                Priority::High,
            )
            .with_reason("Too many high-priority tasks"),
        );
    }

    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::suggest;
    use crate::model::task::Priority;

    #[test]
    fn negative_mood_yields_breathing_then_walk() {
        let suggestions = suggest("negative", 0);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].text, "Take a 5-minute breathing break");
        assert_eq!(suggestions[0].priority, Priority::High);
        assert_eq!(suggestions[1].text, "Go for a short walk");
        assert_eq!(suggestions[1].priority, Priority::Medium);
    }

    #[test]
    fn backlog_suggestion_interpolates_count() {
        let suggestions = suggest("positive", 5);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].text, "Start a 25-minute focused session");
        assert_eq!(
            suggestions[1].text,
            "Break 5 high-priority tasks into 10-minute chunks"
        );
        assert_eq!(suggestions[1].priority, Priority::High);
    }

    #[test]
    fn threshold_is_inclusive_at_three() {
        assert_eq!(suggest("neutral", 2).len(), 1);
        assert_eq!(suggest("neutral", 3).len(), 2);
    }

    #[test]
    fn unknown_or_empty_label_takes_neutral_path() {
        for label in ["unknown-label", "", "Positive"] {
            let suggestions = suggest(label, 0);
            assert_eq!(suggestions.len(), 1);
            assert_eq!(suggestions[0].text, "Try a short 15-minute focus session");
            assert_eq!(suggestions[0].priority, Priority::Medium);
        }
    }
}
