use super::*;

fn values(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// word_request
// =============================================================

#[test]
fn word_request_trims_text() {
    let req = word_request("  farmer ", "SUBJECT").unwrap();
    assert_eq!(req, CreateWordRequest { text: "farmer".to_owned(), kind: WordType::Subject });
}

#[test]
fn word_request_requires_text() {
    assert_eq!(word_request("   ", "VERB"), Err(WORD_FIELDS_REQUIRED));
}

#[test]
fn word_request_requires_type() {
    assert_eq!(word_request("run", ""), Err(WORD_FIELDS_REQUIRED));
}

// =============================================================
// combination_request
// =============================================================

#[test]
fn combination_request_without_object_is_none() {
    let req = combination_request("1", "2", "").unwrap();
    assert_eq!(req, CreateCombinationRequest { verb_id: 1, subject_id: 2, object_id: None });
}

#[test]
fn combination_request_with_object() {
    let req = combination_request("1", "2", "3").unwrap();
    assert_eq!(req.object_id, Some(3));
}

#[test]
fn combination_request_requires_verb_and_subject() {
    assert_eq!(combination_request("", "2", "3"), Err(COMBINATION_FIELDS_REQUIRED));
    assert_eq!(combination_request("1", "", "3"), Err(COMBINATION_FIELDS_REQUIRED));
}

// =============================================================
// batch_request
// =============================================================

#[test]
fn batch_request_with_two_subjects_and_no_objects() {
    let req = batch_request("1", &values(&["2", "3"]), &[]).unwrap();
    assert_eq!(req, BatchCombinationRequest { verb_id: 1, subject_ids: vec![2, 3], object_ids: Vec::new() });
    assert_eq!(serde_json::to_value(&req).unwrap()["object_ids"], serde_json::json!([]));
}

#[test]
fn batch_request_keeps_selected_objects() {
    let req = batch_request("1", &values(&["2"]), &values(&["4", "5"])).unwrap();
    assert_eq!(req.object_ids, vec![4, 5]);
}

#[test]
fn batch_request_without_verb_is_rejected() {
    assert_eq!(batch_request("", &values(&["2"]), &[]), Err(BATCH_FIELDS_REQUIRED));
}

#[test]
fn batch_request_without_subjects_is_rejected() {
    assert_eq!(batch_request("1", &[], &values(&["4"])), Err(BATCH_FIELDS_REQUIRED));
}
