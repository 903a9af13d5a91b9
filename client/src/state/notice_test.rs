use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "Word created.");
    let b = state.push(NoticeKind::Error, "Failed");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Word created.");
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    let b = state.push(NoticeKind::Error, "two");
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    state.dismiss(a);
    state.dismiss(a);
    assert!(state.items.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NoticeState::default();
    let a = state.push(NoticeKind::Success, "one");
    state.dismiss(a);
    let b = state.push(NoticeKind::Success, "two");
    assert_ne!(a, b);
}

#[test]
fn kind_maps_to_css_modifier() {
    assert_eq!(NoticeKind::Success.css_modifier(), "notice--success");
    assert_eq!(NoticeKind::Error.css_modifier(), "notice--error");
}
