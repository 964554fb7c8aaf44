//! Application header: role-filtered navigation, identity, and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;
use crate::state::session::{self, SessionStore};

/// Header shown above every authenticated view.
#[component]
pub fn AppHeader() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();

    let nav_links = move || {
        session
            .with(|store| store.role())
            .map(routes::visible_for)
            .unwrap_or_default()
            .into_iter()
            .map(|route| {
                view! {
                    <A href=route.path attr:class="app-nav__link">
                        {route.title}
                    </A>
                }
            })
            .collect::<Vec<_>>()
    };

    let identity = move || {
        session.with(|store| {
            store
                .user()
                .map(|user| format!("{} ({})", user.display_name(), user.role))
                .unwrap_or_default()
        })
    };

    // The guard of the mounted view sees the cleared session and leaves.
    let on_logout = move |_| {
        session::logout(&session);
    };

    view! {
        <header class="app-header toolbar">
            <span class="app-header__title">"Outcomes Admin"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="app-nav">{nav_links}</nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{identity}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
