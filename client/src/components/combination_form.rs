//! Single-combination creation form.

use leptos::prelude::*;

use super::option_list::OptionList;
use crate::net::api;
use crate::net::types::WordType;
use crate::state::notice::NoticeState;
use crate::state::options::WordOptions;
use crate::util::mutation::{followup, run_if_mounted, settle};
use crate::util::notify::notify_error;
use crate::util::requests::combination_request;
use crate::util::select::{Leading, OBJECT_PLACEHOLDER, SUBJECT_PLACEHOLDER, VERB_PLACEHOLDER, role_options};

/// Submits `POST /combinations`. The object select may stay on its
/// placeholder, which sends `object_id: null`.
#[component]
pub fn CombinationForm(
    options: RwSignal<WordOptions>,
    notices: RwSignal<NoticeState>,
    on_created: Callback<()>,
) -> impl IntoView {
    let verb = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let object = RwSignal::new(String::new());

    let verb_options =
        Signal::derive(move || options.with(|o| role_options(o, WordType::Verb, Leading::Placeholder(VERB_PLACEHOLDER))));
    let subject_options =
        Signal::derive(move || options.with(|o| role_options(o, WordType::Subject, Leading::Placeholder(SUBJECT_PLACEHOLDER))));
    let object_options =
        Signal::derive(move || options.with(|o| role_options(o, WordType::Object, Leading::Placeholder(OBJECT_PLACEHOLDER))));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match combination_request(&verb.get_untracked(), &subject.get_untracked(), &object.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify_error(notices, message);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = api::create_combination(&request).await;
            let next = followup(result, |_| "Combination created.".to_owned(), "Failed to create combination");
            settle(notices, next, || {
                verb.try_set(String::new());
                subject.try_set(String::new());
                object.try_set(String::new());
                run_if_mounted(on_created);
            });
        });
    };

    view! {
        <form class="console-form" on:submit=on_submit>
            <h2 class="console-form__title">"Add combination"</h2>
            <select class="console-form__select" required on:change=move |ev| verb.set(event_target_value(&ev))>
                <OptionList options=verb_options selected=verb/>
            </select>
            <select class="console-form__select" required on:change=move |ev| subject.set(event_target_value(&ev))>
                <OptionList options=subject_options selected=subject/>
            </select>
            <select class="console-form__select" on:change=move |ev| object.set(event_target_value(&ev))>
                <OptionList options=object_options selected=object/>
            </select>
            <button class="btn btn--primary" type="submit">
                "Add combination"
            </button>
        </form>
    }
}
