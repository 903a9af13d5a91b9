//! Select-control option building and value parsing.

#[cfg(test)]
#[path = "select_test.rs"]
mod select_test;

use crate::net::types::{Word, WordType};
use crate::state::options::WordOptions;

pub const VERB_FILTER_ALL: &str = "All verbs";
pub const VERB_PLACEHOLDER: &str = "Select verb...";
pub const SUBJECT_PLACEHOLDER: &str = "Select subject...";
pub const OBJECT_PLACEHOLDER: &str = "Select object...";

/// One `<option>` of a select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// What, if anything, precedes the word options in a select.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Leading {
    /// Empty-valued option meaning "no filter".
    All(&'static str),
    /// Empty-valued option meaning "nothing chosen yet".
    Placeholder(&'static str),
    /// Multi-selects carry only the words themselves.
    Nothing,
}

/// Build options for a select: the leading entry (if any), then one option
/// per word with the id as value and the text as label.
pub fn select_options(words: &[Word], leading: Leading) -> Vec<SelectOption> {
    let head = match leading {
        Leading::All(label) | Leading::Placeholder(label) => Some(SelectOption {
            value: String::new(),
            label: label.to_owned(),
        }),
        Leading::Nothing => None,
    };
    head.into_iter()
        .chain(words.iter().map(|w| SelectOption { value: w.id.to_string(), label: w.text.clone() }))
        .collect()
}

/// Options for the select bound to one role's word list.
pub fn role_options(options: &WordOptions, kind: WordType, leading: Leading) -> Vec<SelectOption> {
    select_options(options.for_kind(kind), leading)
}

/// Parse a single select value. The empty sentinel and anything that is not
/// an integer id both mean "nothing selected".
pub fn parse_id(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().ok()
}

/// Parse the values of a multi-select, dropping sentinels.
pub fn parse_ids(values: &[String]) -> Vec<i64> {
    values.iter().filter_map(|v| parse_id(v)).collect()
}

/// Values of the currently selected options of the `<select>` that fired `ev`.
pub fn selected_values(ev: &leptos::ev::Event) -> Vec<String> {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::event_target;
        use wasm_bindgen::JsCast as _;

        let select = event_target::<web_sys::HtmlSelectElement>(ev);
        let selected = select.selected_options();
        (0..selected.length())
            .filter_map(|i| selected.item(i))
            .filter_map(|el| el.dyn_into::<web_sys::HtmlOptionElement>().ok())
            .map(|opt| opt.value())
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        Vec::new()
    }
}
