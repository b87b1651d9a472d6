//! Prompt text helpers (pure functions)

use crate::api::{ParsedQuestion, Question};
use regex::Regex;
use std::sync::LazyLock;

/// Leading list markers: "-", "*", "•", "1.", "1)"
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[-*•]|\d+[.)])\s+").expect("list marker pattern is valid")
});

/// Split a submitted block into prompts, one per non-blank line,
/// with list markers stripped.
pub fn parse_prompt_input(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| LIST_MARKER.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Build the save payload: trimmed non-empty prompts numbered by position
pub fn format_questions(questions: &[Question]) -> Vec<ParsedQuestion> {
    questions
        .iter()
        .filter(|q| !q.text.trim().is_empty())
        .enumerate()
        .map(|(i, q)| ParsedQuestion {
            position: i + 1,
            id: q.id,
            text: q.text.trim().to_string(),
            answer: q
                .answer
                .as_ref()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
        })
        .collect()
}
