//! Email + password sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginRequest;
use crate::pages::{PageContext, spawn};
use crate::state::forms::{self, ValidationError};
use crate::state::notice::NoticeState;
use crate::state::session::{self, Session, SessionError};
use crate::util::auth::login_page_redirect;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = PageContext::expect();
    let session = ctx.session;
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    // Signed-in visitors (including right after a successful login) leave.
    Effect::new(move || {
        if let Some(path) = session.with(login_page_redirect) {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let pending = move || session.with(|store| store.is_login_pending());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(|store| store.is_login_pending()) {
            return;
        }
        let request = match login_request(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        error.set(None);
        let ctx = ctx.clone();
        spawn(async move {
            let outcome = session::login(&ctx.session, &ctx.client, &request).await;
            let _ = ctx.notices.try_update(|n| clear_after_login(n, &outcome));
            if let Err(err) = outcome {
                leptos::logging::warn!("login failed: {err}");
                let _ = error.try_set(Some(login_error_message(&err)));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Outcomes Admin"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@college.edu"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        prop:disabled=pending
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        prop:disabled=pending
                    />
                    <button class="btn btn--primary login-button" type="submit" prop:disabled=pending>
                        {move || if pending() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Build the login body from raw inputs.
fn login_request(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let email = forms::required("Email", email)?;
    if password.is_empty() {
        return Err(ValidationError::Required("Password"));
    }
    Ok(LoginRequest {
        email,
        password: password.to_owned(),
    })
}

/// A new session starts with an empty notice stack, so an expiry notice
/// from the previous one is not shown again.
fn clear_after_login(notices: &mut NoticeState, outcome: &Result<Session, SessionError>) {
    if outcome.is_ok() {
        notices.clear();
    }
}

/// Text shown under the form for a failed login.
fn login_error_message(err: &SessionError) -> String {
    match err {
        SessionError::InvalidCredentials => "Invalid email or password.".to_owned(),
        SessionError::Http(err) => err.user_message(),
        SessionError::LoginInFlight | SessionError::Detached => err.to_string(),
    }
}
