//! Combination list table.

use leptos::prelude::*;

use crate::net::types::Combination;
use crate::util::display::{object_label, sentence_preview, word_ref_label};

#[component]
pub fn CombinationTable(#[prop(into)] combinations: Signal<Vec<Combination>>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <Show
            when=move || combinations.with(|c| !c.is_empty())
            fallback=|| view! { <div class="empty-state">"No combinations found"</div> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Subject"</th>
                        <th>"Verb"</th>
                        <th>"Object"</th>
                        <th>"Sentence"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        combinations
                            .get()
                            .into_iter()
                            .map(|combo| {
                                let id = combo.id;
                                view! {
                                    <tr>
                                        <td>{word_ref_label(&combo.subject)}</td>
                                        <td>{word_ref_label(&combo.verb)}</td>
                                        <td>{object_label(combo.object.as_ref())}</td>
                                        <td class="sentence">{sentence_preview(&combo)}</td>
                                        <td class="actions">
                                            <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
