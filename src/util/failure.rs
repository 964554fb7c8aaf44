//! Reactive glue between `net::boundary` and the notice banner.
//!
//! The redirect after a session teardown is performed by the route guard of
//! the mounted view, which observes the cleared session. That keeps the
//! navigation to exactly one per teardown.

use leptos::prelude::*;

use crate::net::boundary::{FailureAction, resolve_failure};
use crate::net::http::HttpError;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;

/// Route a failed call: tear the session down on a live 401, otherwise
/// show `what` plus the error as a notice.
pub fn report_failure(session: RwSignal<SessionStore>, notices: RwSignal<NoticeState>, what: &str, err: &HttpError) {
    leptos::logging::warn!("{what} failed: {err}");
    match resolve_failure(&session, err) {
        FailureAction::Redirect(_) => {
            notices.update(|n| {
                n.error(err.user_message());
            });
        }
        FailureAction::Notify(message) => {
            notices.update(|n| {
                n.error(format!("{what}: {message}"));
            });
        }
        FailureAction::Ignore => {}
    }
}
