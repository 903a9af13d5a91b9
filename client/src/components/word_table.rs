//! Word list table.

use leptos::prelude::*;

use crate::net::types::Word;

#[component]
pub fn WordTable(#[prop(into)] words: Signal<Vec<Word>>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <Show
            when=move || words.with(|w| !w.is_empty())
            fallback=|| view! { <div class="empty-state">"No words found"</div> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Text"</th>
                        <th>"Type"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        words
                            .get()
                            .into_iter()
                            .map(|word| {
                                let id = word.id;
                                view! {
                                    <tr>
                                        <td>{word.id}</td>
                                        <td>{word.text}</td>
                                        <td>{word.kind.as_str()}</td>
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
