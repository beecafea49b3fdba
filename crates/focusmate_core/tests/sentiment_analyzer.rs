use focusmate_core::{extract_tags, KeywordSentimentAnalyzer, MoodLabel, SentimentAnalyzer};

fn analyze(text: &str) -> (MoodLabel, f64) {
    let sentiment = KeywordSentimentAnalyzer::new().analyze(text);
    (sentiment.label(), sentiment.score())
}

#[test]
fn mixed_entry_nets_to_negative() {
    let (label, score) = analyze("I feel sad and tired but also motivated");
    assert_eq!(label, MoodLabel::Negative);
    assert!((score - 0.2).abs() < 1e-9);
}

#[test]
fn score_is_always_within_unit_range() {
    let samples = [
        "",
        "good happy calm focused relaxed motivated great productive",
        "sad anxious stressed overwhelmed panic depressed tired distracted",
        "GOOD good GoOd",
        "nothing to see here",
    ];
    for text in samples {
        let (_, score) = analyze(text);
        assert!((0.0..=1.0).contains(&score), "score {score} for `{text}`");
    }
}

#[test]
fn eight_positive_keywords_saturate_at_one() {
    let (label, score) = analyze("good happy calm focused relaxed motivated great productive");
    assert_eq!(label, MoodLabel::Positive);
    assert_eq!(score, 1.0);
}

#[test]
fn negative_only_text_scales_with_keyword_count() {
    assert_eq!(analyze("sad and tired"), (MoodLabel::Negative, 0.4));
    assert_eq!(analyze("Feeling ANXIOUS today"), (MoodLabel::Negative, 0.2));
}

#[test]
fn eight_negative_keywords_saturate_at_one() {
    let (label, score) =
        analyze("sad anxious stressed overwhelmed panic depressed tired distracted");
    assert_eq!(label, MoodLabel::Negative);
    assert_eq!(score, 1.0);
}

#[test]
fn analyze_is_deterministic_and_agrees_with_raw_score() {
    let analyzer = KeywordSentimentAnalyzer::new();
    let text = "Calm, focused but DISTRACTED";

    let first = analyzer.analyze(text);
    let second = analyzer.analyze(text);
    assert_eq!(first, second);

    let raw = analyzer.raw_score(text);
    assert_eq!(raw, 1);
    assert_eq!(first.label(), MoodLabel::Positive);
    assert_eq!(first.score(), (f64::from(raw.unsigned_abs()) / 5.0).min(1.0));
}

#[test]
fn text_without_keywords_is_neutral_zero() {
    assert_eq!(analyze("walked to the shop"), (MoodLabel::Neutral, 0.0));
    assert_eq!(analyze("   "), (MoodLabel::Neutral, 0.0));
}

#[test]
fn balanced_keywords_are_neutral() {
    assert_eq!(analyze("happy but tired"), (MoodLabel::Neutral, 0.0));
}

#[test]
fn tags_are_lowercase_bounded_and_long_enough() {
    let tags = extract_tags(
        "Morning review: Deadline, Budget, Meeting, Roadmap, Hiring, Planning, Retro, Demo day!",
    );
    assert!(tags.len() <= 6);
    for tag in &tags {
        assert_eq!(tag, &tag.to_lowercase());
        assert!(tag.chars().count() > 3, "tag `{tag}` too short");
        assert!(!tag.ends_with([',', '!', ':']));
    }
}

#[test]
fn short_words_never_become_tags() {
    assert!(extract_tags("a an the cat sat on it").is_empty());
}
