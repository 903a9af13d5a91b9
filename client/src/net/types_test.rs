use super::*;
use serde_json::json;

// =============================================================
// WordType
// =============================================================

#[test]
fn word_type_parse_accepts_wire_values() {
    assert_eq!(WordType::parse("VERB"), Some(WordType::Verb));
    assert_eq!(WordType::parse("SUBJECT"), Some(WordType::Subject));
    assert_eq!(WordType::parse("OBJECT"), Some(WordType::Object));
}

#[test]
fn word_type_parse_rejects_empty_and_lowercase() {
    assert_eq!(WordType::parse(""), None);
    assert_eq!(WordType::parse("verb"), None);
}

#[test]
fn word_type_as_str_matches_serde() {
    for kind in WordType::ALL {
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.as_str()));
    }
}

// =============================================================
// Payloads
// =============================================================

#[test]
fn word_deserializes_type_field() {
    let word: Word = serde_json::from_value(json!({ "id": 1, "text": "run", "type": "VERB" })).unwrap();
    assert_eq!(word, Word { id: 1, text: "run".to_owned(), kind: WordType::Verb });
}

#[test]
fn create_word_request_serializes_type_field() {
    let req = CreateWordRequest { text: "farmer".to_owned(), kind: WordType::Subject };
    assert_eq!(serde_json::to_value(req).unwrap(), json!({ "text": "farmer", "type": "SUBJECT" }));
}

#[test]
fn create_combination_without_object_sends_null() {
    let req = CreateCombinationRequest { verb_id: 1, subject_id: 2, object_id: None };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        json!({ "verb_id": 1, "subject_id": 2, "object_id": null })
    );
}

#[test]
fn batch_request_without_objects_sends_empty_list() {
    let req = BatchCombinationRequest { verb_id: 1, subject_ids: vec![2, 3], object_ids: Vec::new() };
    assert_eq!(
        serde_json::to_value(req).unwrap(),
        json!({ "verb_id": 1, "subject_ids": [2, 3], "object_ids": [] })
    );
}

#[test]
fn combination_tolerates_missing_object_and_extra_fields() {
    let combo: Combination = serde_json::from_value(json!({
        "id": 7,
        "verb": { "id": 1, "text": "drives", "type": "VERB" },
        "subject": { "id": 2, "text": "farmer" }
    }))
    .unwrap();
    assert_eq!(combo.object, None);
    assert_eq!(combo.sentence, None);
    assert_eq!(combo.verb.text, "drives");
}

#[test]
fn combination_reads_null_object_and_sentence() {
    let combo: Combination = serde_json::from_value(json!({
        "id": 7,
        "verb": { "id": 1, "text": "drives" },
        "subject": { "id": 2, "text": "farmer" },
        "object": null,
        "sentence": "farmer drives"
    }))
    .unwrap();
    assert_eq!(combo.object, None);
    assert_eq!(combo.sentence.as_deref(), Some("farmer drives"));
}

#[test]
fn batch_created_reads_count_or_created() {
    let a: BatchCreated = serde_json::from_value(json!({ "count": 4 })).unwrap();
    let b: BatchCreated = serde_json::from_value(json!({ "created": 2, "combinations": [] })).unwrap();
    assert_eq!(a.count, 4);
    assert_eq!(b.count, 2);
}

// =============================================================
// Envelope rejection messages
// =============================================================

#[test]
fn rejection_message_prefers_error_field() {
    let env: Envelope = serde_json::from_value(json!({ "success": false, "error": "boom", "data": "other" })).unwrap();
    assert_eq!(env.rejection_message(), "boom");
}

#[test]
fn rejection_message_reads_string_data() {
    let env: Envelope = serde_json::from_value(json!({ "success": false, "data": "Word not found with ID: 9" })).unwrap();
    assert_eq!(env.rejection_message(), "Word not found with ID: 9");
}

#[test]
fn rejection_message_joins_validation_list() {
    let env: Envelope = serde_json::from_value(json!({
        "success": false,
        "data": ["text: Text cannot be empty", "type: Type must be specified"]
    }))
    .unwrap();
    assert_eq!(env.rejection_message(), "text: Text cannot be empty; type: Type must be specified");
}

#[test]
fn rejection_message_falls_back_to_generic() {
    let env: Envelope = serde_json::from_value(json!({ "success": false })).unwrap();
    assert_eq!(env.rejection_message(), "request rejected");
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_messages_are_human_readable() {
    assert_eq!(ApiError::Transport("offline".to_owned()).to_string(), "network error: offline");
    assert_eq!(ApiError::Rejected("duplicate".to_owned()).to_string(), "duplicate");
    assert_eq!(ApiError::Status(404).to_string(), "request failed with status 404");
}
