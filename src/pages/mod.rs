//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its view model signal and the requests that feed it. The
//! draft/validation logic lives in `state`; pages only orchestrate loads,
//! submissions, and failure reporting.

pub mod clos;
pub mod courses;
pub mod dashboard;
pub mod faculty;
pub mod login;
pub mod pos;

use std::future::Future;

use leptos::prelude::*;

use crate::net::api::Api;
use crate::net::boundary::resolve_failure;
use crate::net::client::{ApiClient, Credentials};
use crate::net::http::HttpError;
use crate::state::notice::NoticeState;
use crate::state::session::SessionStore;
use crate::util::failure::report_failure;
use crate::util::scope::Ticket;

/// Context handles every page needs to issue and report requests.
#[derive(Clone)]
pub(crate) struct PageContext {
    pub session: RwSignal<SessionStore>,
    pub notices: RwSignal<NoticeState>,
    pub client: ApiClient,
}

impl PageContext {
    pub fn expect() -> Self {
        Self {
            session: expect_context::<RwSignal<SessionStore>>(),
            notices: expect_context::<RwSignal<NoticeState>>(),
            client: expect_context::<ApiClient>(),
        }
    }

    /// Token snapshot for a request issued now.
    pub fn credentials(&self) -> Option<Credentials> {
        self.session.try_with_untracked(SessionStore::credentials).flatten()
    }

    pub fn api(&self) -> Api<'_> {
        Api::new(&self.client, self.credentials())
    }

    /// Report a failed request made under `ticket`. Once the view is gone
    /// only the session teardown on 401 still applies.
    pub fn fail(&self, ticket: &Ticket, what: &str, err: &HttpError) {
        if ticket.is_alive() {
            report_failure(self.session, self.notices, what, err);
        } else {
            self.expire_on(err);
        }
    }

    /// Apply only the 401 teardown for a response nobody will display.
    pub fn expire_on(&self, err: &HttpError) {
        let _ = resolve_failure(&self.session, err);
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        let _ = self.notices.try_update(|n| n.success(message));
    }
}

/// Run a request future on the browser task queue. Outside the browser there
/// is no transport, so the future is dropped unpolled.
pub(crate) fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}
