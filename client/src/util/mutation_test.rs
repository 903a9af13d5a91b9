use super::*;
use crate::net::types::{Word, WordType};
use crate::state::notice::NoticeKind;
use crate::state::words::WordsState;

fn listed_words() -> WordsState {
    WordsState {
        items: vec![Word { id: 1, text: "run".to_owned(), kind: WordType::Verb }],
        ..WordsState::default()
    }
}

#[test]
fn success_reloads_with_its_message() {
    let next = followup(Ok(()), |()| "Word deleted.".to_owned(), "Failed to delete word");
    assert_eq!(next, Followup::Reload("Word deleted.".to_owned()));
}

#[test]
fn failure_reports_action_and_cause() {
    let next = followup::<()>(Err(ApiError::Status(404)), |()| String::new(), "Failed to delete word");
    assert_eq!(next, Followup::Report("Failed to delete word: request failed with status 404".to_owned()));
}

#[test]
fn delete_of_unlisted_id_still_refreshes() {
    let owner = Owner::new();
    owner.with(|| {
        let notices = RwSignal::new(NoticeState::default());
        let words = RwSignal::new(listed_words());
        let reloads = RwSignal::new(0_u32);

        // Id 99 is not rendered; the upstream accepted the delete anyway.
        let next = followup(Ok(()), |()| "Word deleted.".to_owned(), "Failed to delete word");
        let ran = settle(notices, next, || reloads.update(|n| *n += 1));

        assert!(ran);
        assert_eq!(reloads.get_untracked(), 1);
        assert_eq!(words.with_untracked(|s| s.items.len()), 1);
        notices.with_untracked(|n| {
            assert_eq!(n.items.len(), 1);
            assert_eq!(n.items[0].kind, NoticeKind::Success);
        });
    });
}

#[test]
fn rejected_delete_keeps_list_and_skips_refresh() {
    let owner = Owner::new();
    owner.with(|| {
        let notices = RwSignal::new(NoticeState::default());
        let words = RwSignal::new(listed_words());

        let next = followup::<()>(Err(ApiError::Status(404)), |()| String::new(), "Failed to delete word");
        let ran = settle(notices, next, || words.update(|s| s.items.clear()));

        assert!(!ran);
        assert_eq!(words.with_untracked(|s| s.items.clone()), listed_words().items);
        notices.with_untracked(|n| {
            assert_eq!(n.items.len(), 1);
            assert_eq!(n.items[0].kind, NoticeKind::Error);
            assert!(n.items[0].message.contains("404"));
        });
    });
}

#[test]
fn callback_runs_while_its_panel_is_mounted() {
    let root = Owner::new();
    root.with(|| {
        let created = RwSignal::new(0_u32);
        let on_created = Callback::new(move |()| created.update(|n| *n += 1));

        assert!(run_if_mounted(on_created));
        assert_eq!(created.get_untracked(), 1);
    });
}

#[test]
fn callback_of_rebuilt_panel_is_skipped() {
    let root = Owner::new();
    root.with(|| {
        let created = RwSignal::new(0_u32);

        let panel = Owner::new();
        let on_created = panel.with(|| Callback::new(move |()| created.update(|n| *n += 1)));
        drop(panel);

        assert!(on_created.try_run(()).is_none());
        assert!(!run_if_mounted(on_created));
        assert_eq!(created.get_untracked(), 0);
    });
}
