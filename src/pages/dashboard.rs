//! Authenticated landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every role lands here. Department statistics come from the HOD namespace,
//! so they are only requested for heads of department; other roles see the
//! welcome line and empty cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::{DashboardStats, Role, User};
use crate::pages::{PageContext, spawn};
use crate::util::scope::ViewScope;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let session = ctx.session;
    let stats = RwSignal::new(None::<DashboardStats>);

    let scope = ViewScope::new();
    scope.retire_on_cleanup();

    if session.with_untracked(|store| store.role()) == Some(Role::Hod) {
        let ticket = scope.begin();
        spawn(async move {
            let result = ctx.api().dashboard_stats().await;
            match result {
                Ok(loaded) if ticket.is_current() => stats.set(Some(loaded)),
                Ok(_) => {}
                Err(err) => ctx.fail(&ticket, "Loading dashboard statistics", &err),
            }
        });
    }

    let welcome = move || session.with(|store| store.user().map(welcome_line).unwrap_or_default());

    let cards = move || {
        stat_cards(stats.get().as_ref())
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="stat-card">
                        <span class="stat-card__value">{value}</span>
                        <span class="stat-card__label">{label}</span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p class="dashboard-page__welcome">{welcome}</p>
            <div class="dashboard-page__cards">{cards}</div>
        </div>
    }
}

/// "Welcome, name" with role and department when known.
fn welcome_line(user: &User) -> String {
    match &user.department {
        Some(department) => format!("Welcome, {} ({}, {})", user.display_name(), user.role, department.name),
        None => format!("Welcome, {} ({})", user.display_name(), user.role),
    }
}

/// Card labels and display values; a dash until statistics have loaded.
fn stat_cards(stats: Option<&DashboardStats>) -> [(&'static str, String); 4] {
    let show = |pick: fn(&DashboardStats) -> u64| stats.map_or_else(|| "-".to_owned(), |s| pick(s).to_string());
    [
        ("Total Courses", show(|s| s.total_courses)),
        ("Active CLOs", show(|s| s.active_clos)),
        ("Program Outcomes", show(|s| s.program_outcomes)),
        ("Pending Reviews", show(|s| s.pending_reviews)),
    ]
}
