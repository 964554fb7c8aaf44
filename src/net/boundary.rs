//! Top-level failure boundary for API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views hand every `HttpError` to `resolve_failure`. A 401 tears the session
//! down (once) and asks for a redirect to the login view; everything else
//! becomes a user-visible notice. The HTTP client itself never navigates.

#[cfg(test)]
#[path = "boundary_test.rs"]
mod boundary_test;

use super::http::HttpError;
use crate::config::LOGIN_PATH;
use crate::state::session::SessionHandle;
use crate::util::storage::KeyValueStorage;

/// What the caller should do about a failed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureAction {
    /// The session was just cleared; navigate here.
    Redirect(&'static str),
    /// Show this message to the user.
    Notify(String),
    /// Already handled elsewhere (e.g. a sibling request cleared the session).
    Ignore,
}

/// Decide how to react to `err`, clearing the session on a live 401.
pub fn resolve_failure<H, S>(session: &H, err: &HttpError) -> FailureAction
where
    H: SessionHandle<S>,
    S: KeyValueStorage,
{
    match err {
        HttpError::AuthExpired { epoch: Some(epoch) } => {
            let cleared = session.write(|store| store.expire(*epoch)).unwrap_or(false);
            if cleared {
                FailureAction::Redirect(LOGIN_PATH)
            } else {
                FailureAction::Ignore
            }
        }
        other => FailureAction::Notify(other.user_message()),
    }
}
