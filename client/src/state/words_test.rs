use super::*;

fn word(id: i64, text: &str, kind: WordType) -> Word {
    Word { id, text: text.to_owned(), kind }
}

#[test]
fn finish_load_replaces_items() {
    let mut state = WordsState { items: vec![word(1, "old", WordType::Verb)], loading: true, ..WordsState::default() };
    let result = state.finish_load(Ok(vec![word(2, "cat", WordType::Subject), word(3, "fish", WordType::Object)]));
    assert!(result.is_ok());
    assert!(!state.loading);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].text, "cat");
}

#[test]
fn finish_load_with_empty_list_clears_items() {
    let mut state = WordsState { items: vec![word(1, "run", WordType::Verb)], ..WordsState::default() };
    state.finish_load(Ok(Vec::new())).unwrap();
    assert!(state.items.is_empty());
}

#[test]
fn finish_load_failure_keeps_previous_items() {
    let mut state = WordsState { items: vec![word(1, "run", WordType::Verb)], loading: true, ..WordsState::default() };
    let err = state.finish_load(Err(ApiError::Rejected("nope".to_owned()))).unwrap_err();
    assert_eq!(err, ApiError::Rejected("nope".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.items, vec![word(1, "run", WordType::Verb)]);
}
