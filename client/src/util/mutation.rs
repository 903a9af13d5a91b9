//! What a panel or form does once a create or delete request resolves.
//!
//! TRADE-OFFS
//! ==========
//! Requests outlive the panel that issued them: every tab click rebuilds the
//! panel and disposes its callbacks. Follow-up work therefore only touches
//! the console-owned signals, and panel callbacks run through `try_run` so a
//! late result is dropped instead of panicking.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use leptos::prelude::*;

use crate::net::types::ApiError;
use crate::state::notice::NoticeState;
use crate::util::display::describe_failure;
use crate::util::notify::{notify_error, notify_success};

/// Next step after a mutating request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Followup {
    /// Show the success notice, then refresh.
    Reload(String),
    /// Show the error notice. Rendered lists stay as they are.
    Report(String),
}

/// Map a request result to its notice text. No existence check is made
/// against the rendered list; the upstream's answer alone decides.
pub fn followup<T>(result: Result<T, ApiError>, success: impl FnOnce(T) -> String, action: &str) -> Followup {
    match result {
        Ok(value) => Followup::Reload(success(value)),
        Err(err) => Followup::Report(describe_failure(action, &err)),
    }
}

/// Push the notice and run `refresh` on success. Returns whether it ran.
pub fn settle(notices: RwSignal<NoticeState>, next: Followup, refresh: impl FnOnce()) -> bool {
    match next {
        Followup::Reload(message) => {
            notify_success(notices, message);
            refresh();
            true
        }
        Followup::Report(message) => {
            notify_error(notices, message);
            false
        }
    }
}

/// Run a panel callback unless its panel has been rebuilt meanwhile.
pub fn run_if_mounted(callback: Callback<()>) -> bool {
    callback.try_run(()).is_some()
}
