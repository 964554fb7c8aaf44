//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_banner::NoticeBanner;
use crate::components::protected::Protected;
use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::pages::{
    clos::ClosPage, courses::CoursesPage, dashboard::DashboardPage, faculty::FacultyPage, login::LoginPage, pos::PosPage,
};
use crate::routes;
use crate::state::notice::NoticeState;
use crate::state::session::{self, SessionStore};
use crate::util::failure::report_failure;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store, notice stack, and API client, and wires every
/// protected route through the role guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(BrowserStorage));
    let notices = RwSignal::new(NoticeState::default());
    let client = ApiClient::browser(ClientConfig::from_build_env());

    provide_context(session);
    provide_context(notices);
    provide_context(client.clone());

    // Effects only run in the browser, after hydration, so the server and
    // the first client render agree on the loading placeholder.
    Effect::new(move |_| {
        session.update(SessionStore::initialize);
        let client = client.clone();
        crate::pages::spawn(async move {
            match session::refresh_profile(&session, &client).await {
                Ok(Some(user)) => leptos::logging::log!("profile refreshed for {}", user.display_name()),
                Ok(None) => {}
                Err(err) => report_failure(session, notices, "Refreshing profile", &err),
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/outcomes-admin.css"/>
        <Title text="Outcomes Admin"/>

        <Router>
            <NoticeBanner/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected roles=routes::DASHBOARD.roles><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected roles=routes::DASHBOARD.roles><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("courses")
                    view=|| view! { <Protected roles=routes::COURSES.roles><CoursesPage/></Protected> }
                />
                <Route
                    path=StaticSegment("clos")
                    view=|| view! { <Protected roles=routes::CLOS.roles><ClosPage/></Protected> }
                />
                <Route
                    path=StaticSegment("pos")
                    view=|| view! { <Protected roles=routes::POS.roles><PosPage/></Protected> }
                />
                <Route
                    path=StaticSegment("faculty")
                    view=|| view! { <Protected roles=routes::FACULTY.roles><FacultyPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
