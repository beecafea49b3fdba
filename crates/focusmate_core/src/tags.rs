//! Keyword tag extraction for journal text.
//!
//! # Invariants
//! - At most `MAX_TAGS` tags are returned.
//! - Every tag is lowercase and longer than 3 characters after trimming
//!   `TRIM_CHARS` from both ends.
//! - Tag order is unspecified; deduplication goes through an unordered set.

use std::collections::HashSet;

pub const MAX_TAGS: usize = 6;
/// Minimum tag length in characters.
pub const MIN_TAG_CHARS: usize = 4;
const TRIM_CHARS: &[char] = &['.', ',', '!', '?', ':', ';'];

/// Derives up to `MAX_TAGS` distinct keywords from free text.
pub fn extract_tags(text: &str) -> Vec<String> {
    let unique: HashSet<String> = text
        .split_whitespace()
        .map(|token| token.trim_matches(TRIM_CHARS).to_lowercase())
        .filter(|token| token.chars().count() >= MIN_TAG_CHARS)
        .collect();

    unique.into_iter().take(MAX_TAGS).collect()
}

#[cfg(test)]
mod tests {
    use super::{extract_tags, MAX_TAGS};

    #[test]
    fn strips_boundary_punctuation_and_lowercases() {
        let mut tags = extract_tags("Deadlines!! Project, (draft) ...");
        tags.sort();
        assert_eq!(
            tags,
            vec![
                "(draft)".to_string(),
                "deadlines".to_string(),
                "project".to_string()
            ]
        );
    }

    #[test]
    fn drops_short_tokens_after_trimming() {
        let tags = extract_tags("sad. ok!! tiny");
        assert_eq!(tags, vec!["tiny".to_string()]);
    }

    #[test]
    fn deduplicates_case_variants() {
        let tags = extract_tags("Focus focus FOCUS focus.");
        assert_eq!(tags, vec!["focus".to_string()]);
    }

    #[test]
    fn caps_at_six_tags() {
        let tags = extract_tags("alpha bravo charlie delta echoes foxtrot golf hotel india");
        assert_eq!(tags.len(), MAX_TAGS);
        assert!(tags.iter().all(|tag| tag.len() > 3));
    }

    #[test]
    fn empty_text_has_no_tags() {
        assert!(extract_tags("   ").is_empty());
    }
}
