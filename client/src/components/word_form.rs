//! Word creation form.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::WordType;
use crate::state::notice::NoticeState;
use crate::util::mutation::{followup, run_if_mounted, settle};
use crate::util::notify::notify_error;
use crate::util::requests::word_request;

/// Submits `POST /words`; on success resets itself and runs `on_created`.
#[component]
pub fn WordForm(notices: RwSignal<NoticeState>, on_created: Callback<()>) -> impl IntoView {
    let text = RwSignal::new(String::new());
    let kind = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match word_request(&text.get_untracked(), &kind.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notify_error(notices, message);
                return;
            }
        };
        leptos::task::spawn_local(async move {
            let result = api::create_word(&request).await;
            let next = followup(result, |word| format!("Word \"{}\" created.", word.text), "Failed to create word");
            settle(notices, next, || {
                text.try_set(String::new());
                kind.try_set(String::new());
                run_if_mounted(on_created);
            });
        });
    };

    view! {
        <form class="console-form" on:submit=on_submit>
            <h2 class="console-form__title">"Add word"</h2>
            <input
                class="console-form__input"
                type="text"
                placeholder="Word text"
                required
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <select
                class="console-form__select"
                required
                prop:value=move || kind.get()
                on:change=move |ev| kind.set(event_target_value(&ev))
            >
                <option value="">"Select type..."</option>
                {WordType::ALL
                    .into_iter()
                    .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <button class="btn btn--primary" type="submit">
                "Add word"
            </button>
        </form>
    }
}
