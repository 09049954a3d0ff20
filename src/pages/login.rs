//! Login page with username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::AppSession;
use crate::net::types::LoginRequest;
use crate::routes;
use crate::util::task;

/// Username/password form driving the session guard's `login`.
///
/// Navigation is reactive: once the session becomes authenticated (whether
/// from this form or a persisted token) the page leaves for the `redirect`
/// query parameter, or the default landing route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let target = move || {
        query
            .with(|q| q.get("redirect"))
            .unwrap_or_else(|| routes::LANDING_ROUTE.to_owned())
    };

    Effect::new(move || {
        if session.state().with(|s| s.is_authenticated()) {
            navigate(&target(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = LoginRequest {
            username: username.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            return;
        }
        task::spawn(async move {
            // Failures land in session state; the form reacts to `error`.
            let _ = session.login(&credentials).await;
        });
    };

    view! {
        <div class="login-page">
            <h1>"Campus Admin"</h1>
            <p>"University administration"</p>
            <form class="login-page__form" on:submit=on_submit>
                {move || {
                    session
                        .state()
                        .with(|s| s.error.clone())
                        .map(|message| view! { <div class="login-page__error">{message}</div> })
                }}
                <label class="login-page__label">
                    "Username"
                    <input
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || session.state().with(|s| s.is_loading())
                >
                    {move || {
                        if session.state().with(|s| s.is_loading()) {
                            "Signing in..."
                        } else {
                            "Sign in"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
