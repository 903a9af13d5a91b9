//! Stack of transient success/error notices.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

/// Renders live notices; clicking one dismisses it early.
#[component]
pub fn NoticeStack(notices: RwSignal<NoticeState>) -> impl IntoView {
    view! {
        <div class="notice-stack" role="status" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class=format!("notice {}", notice.kind.css_modifier())
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                {notice.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
