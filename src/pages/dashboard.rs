//! Landing page after login.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::AppSession;
use crate::components::protected_route::RoleGate;
use crate::net::types::{ADMIN_ONLY, STAFF_ROLES};

/// Shows who is signed in, the unauthorized-redirect notice, and
/// role-filtered quick links into the entity pages.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let query = use_query_map();

    let unauthorized =
        move || query.with(|q| q.get("error")).as_deref() == Some("unauthorized");

    view! {
        <div class="dashboard-page">
            <Show when=unauthorized>
                <div class="dashboard-page__notice">
                    "You do not have permission to access that page."
                </div>
            </Show>

            <h1>"Dashboard"</h1>
            {move || {
                session
                    .state()
                    .with(|s| s.user.clone())
                    .map(|user| {
                        view! {
                            <p class="dashboard-page__welcome">
                                {format!(
                                    "Signed in as {} ({})",
                                    user.display_name(),
                                    user.role.label(),
                                )}
                            </p>
                        }
                    })
            }}

            <div class="dashboard-page__cards">
                <RoleGate allowed_roles=ADMIN_ONLY>
                    <a class="dashboard-card" href="/faculties">
                        "Manage faculties"
                    </a>
                    <a class="dashboard-card" href="/majors">
                        "Manage majors"
                    </a>
                </RoleGate>
                <RoleGate allowed_roles=STAFF_ROLES>
                    <a class="dashboard-card" href="/classes">
                        "Manage classes"
                    </a>
                </RoleGate>
            </div>
        </div>
    }
}
