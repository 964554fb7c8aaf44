//! Route guard wrapper for authenticated views.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::layout::AppHeader;
use crate::net::types::Role;
use crate::state::session::SessionStore;
use crate::util::auth::{GuardDecision, evaluate, install_guard_redirect};

/// Render `children` inside the app shell only when the current session
/// may open a view requiring `roles`. Anything else shows a placeholder
/// while the guard navigates away, so the view (and its data loads) never
/// mounts for a disallowed visitor.
#[component]
pub fn Protected(roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    install_guard_redirect(session, roles, use_navigate());

    let decision = Memo::new(move |_| session.with(|store| evaluate(store, roles)));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="guard-placeholder">
                        <p>
                            {move || match decision.get() {
                                GuardDecision::Loading => "Loading...",
                                _ => "Redirecting...",
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="app-shell">
                <AppHeader/>
                <main class="app-main">{children()}</main>
            </div>
        </Show>
    }
}
