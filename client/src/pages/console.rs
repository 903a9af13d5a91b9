//! Console page: tab bar, notices, and the active panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel for the active tab is rebuilt on every tab click. Building a
//! panel is what triggers its loads, and rebuilding disposes the previous
//! panel's reactive scope together with its event bindings.

use leptos::prelude::*;

use super::combinations::CombinationsPanel;
use super::words::WordsPanel;
use crate::components::notice_stack::NoticeStack;
use crate::components::tab_bar::TabBar;
use crate::state::combinations::CombinationsState;
use crate::state::notice::NoticeState;
use crate::state::options::WordOptions;
use crate::state::ui::ConsoleTab;
use crate::state::words::WordsState;

#[component]
pub fn ConsolePage() -> impl IntoView {
    let active = RwSignal::new(ConsoleTab::default());
    let visits = RwSignal::new(0_u64);
    let notices = RwSignal::new(NoticeState::default());
    let words = RwSignal::new(WordsState::default());
    let combinations = RwSignal::new(CombinationsState::default());
    let options = RwSignal::new(WordOptions::default());

    let on_select = Callback::new(move |tab: ConsoleTab| {
        active.set(tab);
        visits.update(|n| *n += 1);
    });

    view! {
        <div class="console-page">
            <header class="console-page__header">
                <h1 class="console-page__title">"Wordbench"</h1>
                <TabBar active=active on_select=on_select/>
            </header>
            <NoticeStack notices=notices/>
            <main class="console-page__body">
                {move || {
                    visits.track();
                    match active.get() {
                        ConsoleTab::Words => view! { <WordsPanel words=words notices=notices/> }.into_any(),
                        ConsoleTab::Combinations => {
                            view! { <CombinationsPanel combinations=combinations options=options notices=notices/> }
                                .into_any()
                        }
                    }
                }}
            </main>
        </div>
    }
}
