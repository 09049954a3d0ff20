//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav::NavBar;
use crate::components::protected_route::{LoadingScreen, ProtectedRoute};
use crate::components::toast_host::ToastHost;
use crate::net::auth::AuthApi;
use crate::pages::{
    classes::ClassesPage, dashboard::DashboardPage, faculties::FacultiesPage, login::LoginPage,
    majors::MajorsPage,
};
use crate::routes;
use crate::state::session::SessionController;
use crate::state::toasts::Toaster;
use crate::util::credentials::BrowserCredentials;
use crate::util::task;

/// The concrete session guard wired to the real auth endpoints and
/// browser-backed token storage.
pub type AppSession = SessionController<AuthApi, BrowserCredentials>;

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
/// Provides the session guard and toaster contexts, restores any persisted
/// session on mount, and sets up client-side routing with per-route
/// protection.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(AuthApi, BrowserCredentials);
    let toasts = Toaster::new();

    provide_context(session);
    provide_context(toasts);

    // Resolve the persisted session once on mount; routes render a loading
    // screen until the phase settles.
    Effect::new(move || {
        task::spawn(async move { session.init().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-client.css"/>
        <Title text="Campus Admin"/>

        <Router>
            <NavBar/>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("faculties")
                    view=|| view! { <ProtectedRoute><FacultiesPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("majors")
                    view=|| view! { <ProtectedRoute><MajorsPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("classes")
                    view=|| view! { <ProtectedRoute><ClassesPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}

/// Root path. Forwards to the landing route; the route guard there takes
/// over and bounces anonymous visitors to the login page.
#[component]
fn HomePage() -> impl IntoView {
    use leptos_router::NavigateOptions;
    use leptos_router::hooks::use_navigate;

    let navigate = use_navigate();
    Effect::new(move || {
        navigate(routes::LANDING_ROUTE, NavigateOptions::default());
    });

    view! { <LoadingScreen/> }
}
