use crate::model::task::Priority;

pub const HIGH_PRIORITY_KEYWORDS: [&str; 8] = [
    "urgent",
    "asap",
    "important",
    "critical",
    "immediately",
    "now",
    "today",
    "high",
];

pub const MEDIUM_PRIORITY_KEYWORDS: [&str; 5] = ["soon", "normal", "medium", "later", "upcoming"];

/// Lower-cased alphabetic words of `text`. Everything that is not an ASCII
/// letter is a delimiter.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect()
}

/// Keyword-based priority estimate. Works on whole tokens, so "purgent" does
/// not count as "urgent". High keywords win over medium ones.
pub fn classify(text: &str) -> Priority {
    let words = tokenize(text);

    if words.iter().any(|w| HIGH_PRIORITY_KEYWORDS.contains(&w.as_str())) {
        return Priority::High;
    }
    if words.iter().any(|w| MEDIUM_PRIORITY_KEYWORDS.contains(&w.as_str())) {
        return Priority::Medium;
    }
    Priority::Low
}
