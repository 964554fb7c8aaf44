//! Program outcomes page (HOD and ADMIN).
//!
//! The API has no program-outcome endpoints yet, so the route exists for its
//! role gate and shows a placeholder.

use leptos::prelude::*;

#[component]
pub fn PosPage() -> impl IntoView {
    view! {
        <div class="management-page">
            <header class="management-page__header">
                <h1>"Program Outcomes"</h1>
            </header>
            <p class="management-page__empty">"Program outcome management is not available yet."</p>
        </div>
    }
}
