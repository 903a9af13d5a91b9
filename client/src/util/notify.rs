//! Push notices and schedule their dismissal.
//!
//! TRADE-OFFS
//! ==========
//! The dismissal timer writes with `try_update`, so a notice whose stack was
//! disposed in the meantime is simply dropped.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let Some(id) = notices.try_update(|n| n.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TTL_MS).await;
        notices.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn notify_success(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    notify(notices, NoticeKind::Success, message);
}

pub fn notify_error(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    let message = message.into();
    leptos::logging::warn!("{message}");
    notify(notices, NoticeKind::Error, message);
}
