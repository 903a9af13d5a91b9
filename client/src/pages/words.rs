//! Word panel: type filter, creation form, and word table.

use leptos::prelude::*;

use crate::components::word_form::WordForm;
use crate::components::word_table::WordTable;
use crate::net::api;
use crate::net::types::WordType;
use crate::state::notice::NoticeState;
use crate::state::ui::ConsoleTab;
use crate::state::words::WordsState;
use crate::util::confirm::confirm;
use crate::util::display::describe_failure;
use crate::util::mutation::{followup, settle};
use crate::util::notify::notify_error;

/// Word management panel. Loads the list with the current filter on mount.
#[component]
pub fn WordsPanel(words: RwSignal<WordsState>, notices: RwSignal<NoticeState>) -> impl IntoView {
    Effect::new(move || load_words(words, notices));

    let on_created = Callback::new(move |()| load_words(words, notices));

    // No existence check: whatever id the row carried is deleted and the list reloaded.
    let on_delete = Callback::new(move |id: i64| {
        if !confirm("Are you sure you want to delete this word?") {
            return;
        }
        leptos::task::spawn_local(async move {
            let next = followup(api::delete_word(id).await, |()| "Word deleted.".to_owned(), "Failed to delete word");
            settle(notices, next, || load_words(words, notices));
        });
    });

    let on_filter = move |ev: leptos::ev::Event| {
        let filter = WordType::parse(&event_target_value(&ev));
        words.update(|s| s.filter = filter);
        load_words(words, notices);
    };

    let items = Signal::derive(move || words.with(|s| s.items.clone()));

    view! {
        <section class="panel" id=ConsoleTab::Words.dom_id()>
            <div class="panel__toolbar">
                <label class="panel__filter">
                    "Type"
                    <select
                        prop:value=move || words.with(|s| s.filter.map_or("", WordType::as_str).to_owned())
                        on:change=on_filter
                    >
                        <option value="">"All types"</option>
                        {WordType::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <Show when=move || words.with(|s| s.loading)>
                    <span class="panel__loading">"Loading..."</span>
                </Show>
            </div>
            <WordForm notices=notices on_created=on_created/>
            <WordTable words=items on_delete=on_delete/>
        </section>
    }
}

/// Fetch words with the current filter. A failure keeps the rendered list
/// and shows an error notice.
pub(crate) fn load_words(words: RwSignal<WordsState>, notices: RwSignal<NoticeState>) {
    let Some(filter) = words.try_update(|s| {
        s.loading = true;
        s.filter
    }) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::list_words(filter).await;
        if let Some(Err(err)) = words.try_update(|s| s.finish_load(result)) {
            notify_error(notices, describe_failure("Failed to load words", &err));
        }
    });
}
