//! Route guard and inline role gate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppSession;
use crate::net::types::Role;
use crate::routes::{self, RouteDecision};

/// Centered spinner shown while the session resolves.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner" aria-label="Loading"></div>
            <p>"Loading..."</p>
        </div>
    }
}

/// Wraps content that requires authentication.
///
/// While the session is resolving, renders `fallback` (default: a centered
/// spinner). Anonymous visitors to a non-public route are sent to the login
/// page with the original path in a `redirect` parameter; authenticated
/// users whose role is excluded are sent to the landing page with the
/// unauthorized marker. Both cases render nothing.
#[component]
pub fn ProtectedRoute(
    /// Overrides the route table's role requirement when given.
    #[prop(optional)]
    required_roles: Option<&'static [Role]>,
    /// Custom loading placeholder.
    #[prop(optional, into)]
    fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session
            .state()
            .with(|s| routes::decide(&path, s, required_roles))
    });

    // Redirects are a side effect of the decision, not part of rendering.
    Effect::new(move || match decision.get() {
        RouteDecision::RedirectToLogin { redirect } => {
            navigate(&routes::login_redirect_url(&redirect), NavigateOptions::default());
        }
        RouteDecision::RedirectUnauthorized => {
            navigate(&routes::unauthorized_url(), NavigateOptions::default());
        }
        RouteDecision::Loading | RouteDecision::Allow => {}
    });

    view! {
        {move || match decision.get() {
            RouteDecision::Loading => fallback
                .clone()
                .map_or_else(|| view! { <LoadingScreen/> }.into_any(), |f| f.run().into_any()),
            RouteDecision::Allow => children().into_any(),
            _ => ().into_any(),
        }}
    }
}

/// Shows children only when the current user's role is in `allowed_roles`.
/// Never navigates; renders `fallback` (or nothing) otherwise.
#[component]
pub fn RoleGate(
    allowed_roles: &'static [Role],
    #[prop(optional, into)] fallback: Option<ViewFn>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<AppSession>();

    view! {
        {move || {
            if session.state().with(|s| s.has_role(allowed_roles)) {
                children().into_any()
            } else {
                fallback
                    .clone()
                    .map_or_else(|| ().into_any(), |f| f.run().into_any())
            }
        }}
    }
}
