//! Tab strip switching between the word and combination panels.

use leptos::prelude::*;

use crate::state::ui::ConsoleTab;

/// Every click reports the tab, including a click on the already active one,
/// so the owner can remount (and thereby reload) the panel.
#[component]
pub fn TabBar(#[prop(into)] active: Signal<ConsoleTab>, on_select: Callback<ConsoleTab>) -> impl IntoView {
    view! {
        <nav class="tabs" role="tablist">
            {ConsoleTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab"
                            class:tab--active=move || active.get() == tab
                            role="tab"
                            aria-controls=tab.dom_id()
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
