//! Turn raw form values into request payloads.
//!
//! Only required-field presence is checked here; everything else is the
//! upstream's call. A validation failure returns the message to show and
//! means no request is made.

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;

use super::select::{parse_id, parse_ids};
use crate::net::types::{BatchCombinationRequest, CreateCombinationRequest, CreateWordRequest, WordType};

pub const WORD_FIELDS_REQUIRED: &str = "Enter the word text and choose a type.";
pub const COMBINATION_FIELDS_REQUIRED: &str = "Select a verb and a subject.";
pub const BATCH_FIELDS_REQUIRED: &str = "Please select a verb and at least one subject.";

/// # Errors
///
/// Returns a validation message when the text is blank or no type is chosen.
pub fn word_request(text: &str, kind: &str) -> Result<CreateWordRequest, &'static str> {
    let text = text.trim();
    let kind = WordType::parse(kind).ok_or(WORD_FIELDS_REQUIRED)?;
    if text.is_empty() {
        return Err(WORD_FIELDS_REQUIRED);
    }
    Ok(CreateWordRequest { text: text.to_owned(), kind })
}

/// An empty object selection becomes `None`, never `0`.
///
/// # Errors
///
/// Returns a validation message when the verb or subject is missing.
pub fn combination_request(verb: &str, subject: &str, object: &str) -> Result<CreateCombinationRequest, &'static str> {
    let verb_id = parse_id(verb).ok_or(COMBINATION_FIELDS_REQUIRED)?;
    let subject_id = parse_id(subject).ok_or(COMBINATION_FIELDS_REQUIRED)?;
    Ok(CreateCombinationRequest { verb_id, subject_id, object_id: parse_id(object) })
}

/// # Errors
///
/// Returns a validation message when no verb or no subject is selected.
pub fn batch_request(verb: &str, subjects: &[String], objects: &[String]) -> Result<BatchCombinationRequest, &'static str> {
    let verb_id = parse_id(verb).ok_or(BATCH_FIELDS_REQUIRED)?;
    let subject_ids = parse_ids(subjects);
    if subject_ids.is_empty() {
        return Err(BATCH_FIELDS_REQUIRED);
    }
    Ok(BatchCombinationRequest { verb_id, subject_ids, object_ids: parse_ids(objects) })
}
