//! Route guard decisions shared by every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each navigation is evaluated from scratch against the current session:
//! still hydrating renders a placeholder, no session goes to `/login`, and a
//! role outside the route's set goes to the default view.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{DEFAULT_PATH, LOGIN_PATH};
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// Outcome of evaluating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session hydration has not finished; show a placeholder.
    Loading,
    /// Leave for this path without rendering the view.
    Redirect(&'static str),
    /// Render the requested view.
    Render,
}

/// Decide whether the current session may see a view requiring `required`.
pub fn evaluate<S: KeyValueStorage>(store: &SessionStore<S>, required: &[Role]) -> GuardDecision {
    if store.is_loading() {
        return GuardDecision::Loading;
    }
    let Some(role) = store.role() else {
        return GuardDecision::Redirect(LOGIN_PATH);
    };
    if !required.is_empty() && !required.contains(&role) {
        return GuardDecision::Redirect(DEFAULT_PATH);
    }
    GuardDecision::Render
}

/// Where the login page should send a visitor who is already signed in.
pub fn login_page_redirect<S: KeyValueStorage>(store: &SessionStore<S>) -> Option<&'static str> {
    (!store.is_loading() && store.current().is_some()).then_some(DEFAULT_PATH)
}

/// Navigate away whenever the guard for `required` says so.
pub fn install_guard_redirect<F>(session: RwSignal<SessionStore<BrowserStorage>>, required: &'static [Role], navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = session.with(|store| evaluate(store, required));
        if let GuardDecision::Redirect(path) = decision {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
