//! Batch combination creator.
//!
//! The upstream expands one verb and the selected subjects (and objects)
//! into their cross-product; this form only collects the selection and
//! reports how many combinations were created.

use leptos::prelude::*;

use super::option_list::{MultiOptionList, OptionList};
use crate::net::api;
use crate::net::types::WordType;
use crate::state::notice::NoticeState;
use crate::state::options::WordOptions;
use crate::util::display::batch_created_message;
use crate::util::mutation::{followup, run_if_mounted, settle};
use crate::util::notify::notify_error;
use crate::util::requests::batch_request;
use crate::util::select::{Leading, VERB_PLACEHOLDER, role_options, selected_values};

#[component]
pub fn BatchForm(options: RwSignal<WordOptions>, notices: RwSignal<NoticeState>, on_created: Callback<()>) -> impl IntoView {
    let verb = RwSignal::new(String::new());
    let subjects = RwSignal::new(Vec::<String>::new());
    let objects = RwSignal::new(Vec::<String>::new());

    let verb_options =
        Signal::derive(move || options.with(|o| role_options(o, WordType::Verb, Leading::Placeholder(VERB_PLACEHOLDER))));
    let subject_options = Signal::derive(move || options.with(|o| role_options(o, WordType::Subject, Leading::Nothing)));
    let object_options = Signal::derive(move || options.with(|o| role_options(o, WordType::Object, Leading::Nothing)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match batch_request(&verb.get_untracked(), &subjects.get_untracked(), &objects.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify_error(notices, message);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = api::create_combinations_batch(&request).await;
            let next = followup(result, batch_created_message, "Failed to create combinations");
            settle(notices, next, || {
                run_if_mounted(on_created);
            });
        });
    };

    view! {
        <form class="console-form console-form--batch" on:submit=on_submit>
            <h2 class="console-form__title">"Batch create"</h2>
            <select class="console-form__select" on:change=move |ev| verb.set(event_target_value(&ev))>
                <OptionList options=verb_options selected=verb/>
            </select>
            <label class="console-form__label">
                "Subjects"
                <select
                    class="console-form__multi"
                    multiple
                    size="6"
                    on:change=move |ev| subjects.set(selected_values(&ev))
                >
                    <MultiOptionList options=subject_options selected=subjects/>
                </select>
            </label>
            <label class="console-form__label">
                "Objects (optional)"
                <select
                    class="console-form__multi"
                    multiple
                    size="6"
                    on:change=move |ev| objects.set(selected_values(&ev))
                >
                    <MultiOptionList options=object_options selected=objects/>
                </select>
            </label>
            <button class="btn btn--primary" type="submit">
                "Create combinations"
            </button>
        </form>
    }
}
