//! Combination panel: verb filter, single and batch forms, and the table.

use leptos::prelude::*;

use super::option_loader::load_word_options;
use crate::components::batch_form::BatchForm;
use crate::components::combination_form::CombinationForm;
use crate::components::combination_table::CombinationTable;
use crate::components::option_list::OptionList;
use crate::net::api;
use crate::net::types::WordType;
use crate::state::combinations::CombinationsState;
use crate::state::notice::NoticeState;
use crate::state::options::WordOptions;
use crate::state::ui::ConsoleTab;
use crate::util::confirm::confirm;
use crate::util::display::describe_failure;
use crate::util::mutation::{followup, settle};
use crate::util::notify::notify_error;
use crate::util::select::{Leading, VERB_FILTER_ALL, parse_id, role_options};

/// Combination management panel. On mount it loads the list and, in
/// parallel, the word options for every select.
#[component]
pub fn CombinationsPanel(
    combinations: RwSignal<CombinationsState>,
    options: RwSignal<WordOptions>,
    notices: RwSignal<NoticeState>,
) -> impl IntoView {
    Effect::new(move || {
        load_combinations(combinations, notices);
        load_word_options(options, notices);
    });

    let on_created = Callback::new(move |()| load_combinations(combinations, notices));

    let on_delete = Callback::new(move |id: i64| {
        if !confirm("Are you sure you want to delete this combination?") {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::delete_combination(id).await;
            let next = followup(result, |()| "Combination deleted.".to_owned(), "Failed to delete combination");
            settle(notices, next, || load_combinations(combinations, notices));
        });
    });

    let on_delete_for_verb = move |_| {
        let Some(verb_id) = combinations.with_untracked(|s| s.verb_filter) else {
            return;
        };
        if !confirm("Delete every combination for this verb?") {
            return;
        }
        leptos::task::spawn_local(async move {
            let result = api::delete_combinations_by_verb(verb_id).await;
            let next = followup(result, |()| "Combinations for the verb deleted.".to_owned(), "Failed to delete combinations");
            settle(notices, next, || load_combinations(combinations, notices));
        });
    };

    let on_filter = move |ev: leptos::ev::Event| {
        let verb_id = parse_id(&event_target_value(&ev));
        combinations.update(|s| s.verb_filter = verb_id);
        load_combinations(combinations, notices);
    };

    let filter_options = Signal::derive(move || options.with(|o| role_options(o, WordType::Verb, Leading::All(VERB_FILTER_ALL))));
    let filter_value = Signal::derive(move || combinations.with(|s| s.verb_filter.map(|id| id.to_string()).unwrap_or_default()));
    let items = Signal::derive(move || combinations.with(|s| s.items.clone()));

    view! {
        <section class="panel" id=ConsoleTab::Combinations.dom_id()>
            <div class="panel__forms">
                <CombinationForm options=options notices=notices on_created=on_created/>
                <BatchForm options=options notices=notices on_created=on_created/>
            </div>
            <div class="panel__toolbar">
                <label class="panel__filter">
                    "Verb"
                    <select on:change=on_filter>
                        <OptionList options=filter_options selected=filter_value/>
                    </select>
                </label>
                <Show when=move || combinations.with(|s| s.verb_filter.is_some())>
                    <button class="btn btn--danger" on:click=on_delete_for_verb>
                        "Delete all for verb"
                    </button>
                </Show>
                <Show when=move || combinations.with(|s| s.loading)>
                    <span class="panel__loading">"Loading..."</span>
                </Show>
            </div>
            <CombinationTable combinations=items on_delete=on_delete/>
        </section>
    }
}

/// Fetch combinations with the current verb filter. A failure keeps the
/// rendered list and shows an error notice.
pub(crate) fn load_combinations(combinations: RwSignal<CombinationsState>, notices: RwSignal<NoticeState>) {
    let Some(verb_id) = combinations.try_update(|s| {
        s.loading = true;
        s.verb_filter
    }) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = api::list_combinations(verb_id).await;
        if let Some(Err(err)) = combinations.try_update(|s| s.finish_load(result)) {
            notify_error(notices, describe_failure("Failed to load combinations", &err));
        }
    });
}
