//! Text formatting for table cells and notices.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use crate::net::types::{ApiError, Combination, WordRef};

/// `text (id)`, as shown in combination table cells.
pub fn word_ref_label(word: &WordRef) -> String {
    format!("{} ({})", word.text, word.id)
}

/// Object cell text; combinations without an object show `-`.
pub fn object_label(object: Option<&WordRef>) -> String {
    object.map_or_else(|| "-".to_owned(), word_ref_label)
}

/// The upstream's sentence when present, otherwise `subject verb [object]`.
pub fn sentence_preview(combo: &Combination) -> String {
    if let Some(sentence) = combo.sentence.as_deref().filter(|s| !s.trim().is_empty()) {
        return sentence.to_owned();
    }
    match &combo.object {
        Some(object) => format!("{} {} {}", combo.subject.text, combo.verb.text, object.text),
        None => format!("{} {}", combo.subject.text, combo.verb.text),
    }
}

/// Notice text for a failed action, e.g. `Failed to load words: network error: ...`.
pub fn describe_failure(action: &str, err: &ApiError) -> String {
    format!("{action}: {err}")
}

pub fn batch_created_message(count: u64) -> String {
    if count == 1 {
        "Created 1 combination.".to_owned()
    } else {
        format!("Created {count} combinations.")
    }
}
