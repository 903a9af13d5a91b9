//! Loads the verb/subject/object lists behind the combination selects.
//!
//! The three requests run as independent tasks. Each applies its own result
//! when it resolves, so completion order is irrelevant and one failure never
//! blocks the other two roles.

#[cfg(test)]
#[path = "option_loader_test.rs"]
mod option_loader_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::WordType;
use crate::state::notice::NoticeState;
use crate::state::options::WordOptions;
use crate::util::display::describe_failure;
use crate::util::notify::notify_error;

pub(crate) fn load_word_options(options: RwSignal<WordOptions>, notices: RwSignal<NoticeState>) {
    for kind in WordType::ALL {
        leptos::task::spawn_local(async move {
            let result = api::list_words(Some(kind)).await;
            if let Some(Err(err)) = options.try_update(|o| o.apply(kind, result)) {
                notify_error(notices, describe_failure(&failure_action(kind), &err));
            }
        });
    }
}

fn failure_action(kind: WordType) -> String {
    format!("Failed to load {} options", kind.label().to_lowercase())
}
