//! `<option>` lists for single and multiple selects.
//!
//! Options carry `selected` themselves so a select keeps showing the chosen
//! value when its option list is replaced after a reload.

use leptos::prelude::*;

use crate::util::select::SelectOption;

/// Options for a single-value `<select>`.
#[component]
pub fn OptionList(#[prop(into)] options: Signal<Vec<SelectOption>>, #[prop(into)] selected: Signal<String>) -> impl IntoView {
    move || {
        options
            .get()
            .into_iter()
            .map(|opt| {
                let value = opt.value.clone();
                view! {
                    <option value=opt.value prop:selected=move || selected.with(|s| *s == value)>
                        {opt.label}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    }
}

/// Options for a `<select multiple>`.
#[component]
pub fn MultiOptionList(
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<Vec<String>>,
) -> impl IntoView {
    move || {
        options
            .get()
            .into_iter()
            .map(|opt| {
                let value = opt.value.clone();
                view! {
                    <option value=opt.value prop:selected=move || selected.with(|s| s.contains(&value))>
                        {opt.label}
                    </option>
                }
            })
            .collect::<Vec<_>>()
    }
}
