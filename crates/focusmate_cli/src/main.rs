//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `focusmate_core` linkage with deterministic output.
//! - Run the journal pipeline over command-line text without touching a
//!   database.

use focusmate_core::{analyze_journal, suggest, CoreConfig, KeywordSentimentAnalyzer};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("focusmate_core ping={}", focusmate_core::ping());
    println!("focusmate_core version={}", focusmate_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = focusmate_core::init_logging(config.log_level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        return ExitCode::SUCCESS;
    }

    // No inference backend ships with the CLI.
    let analyzer = KeywordSentimentAnalyzer::new();
    let analysis = match analyze_journal(&analyzer, &text) {
        Ok(analysis) => analysis,
        Err(err) => {
            eprintln!("analyze error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut tags = analysis.tags.clone();
    tags.sort();

    println!(
        "sentiment label={} score={:.2} raw_score={}",
        analysis.sentiment.label(),
        analysis.sentiment.score(),
        analyzer.raw_score(&text)
    );
    println!("tags={}", tags.join(","));
    for suggestion in suggest(analysis.sentiment.label().as_str(), 0) {
        println!(
            "suggestion priority={} text={}",
            suggestion.priority, suggestion.text
        );
    }
    ExitCode::SUCCESS
}
