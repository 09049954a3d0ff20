//! Top navigation bar for signed-in users.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::protected_route::RoleGate;
use crate::net::types::{ADMIN_ONLY, STAFF_ROLES, User};
use crate::routes;
use crate::util::task;

/// Header with role-filtered links and a sign-out button. Renders nothing
/// until the session is authenticated.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let on_logout = Callback::new(move |(): ()| {
        task::spawn(async move {
            session.logout().await;
            // Hard navigation: the whole page tree resets with the session.
            #[cfg(feature = "hydrate")]
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(routes::LOGIN_ROUTE);
            }
        });
    });

    view! {
        <Show when=move || session.state().with(|s| s.is_authenticated())>
            <header class="nav-bar">
                <a class="nav-bar__brand" href=routes::LANDING_ROUTE>
                    "Campus Admin"
                </a>
                <nav class="nav-bar__links">
                    <a href="/dashboard">"Dashboard"</a>
                    <RoleGate allowed_roles=ADMIN_ONLY>
                        <a href="/faculties">"Faculties"</a>
                        <a href="/majors">"Majors"</a>
                    </RoleGate>
                    <RoleGate allowed_roles=STAFF_ROLES>
                        <a href="/classes">"Classes"</a>
                    </RoleGate>
                </nav>
                <div class="nav-bar__user">
                    <span>
                        {move || {
                            session
                                .state()
                                .with(|s| s.user.as_ref().map(User::display_name))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Sign out"
                    </button>
                </div>
            </header>
        </Show>
    }
}
