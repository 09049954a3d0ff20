//! Authentication state: the single source of truth for "who is logged in".
//!
//! [`SessionState`] is the plain state machine
//! (`Loading -> Authenticated | Anonymous`); [`SessionController`] drives it
//! against a [`SessionApi`] and a [`CredentialStore`], both injected at
//! construction so tests can substitute them. Navigation after login/logout
//! belongs to the calling page, not the controller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, Role, User};
use crate::util::credentials::CredentialStore;

/// Where the session machine currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Resolving the persisted token (initial mount) or a login in flight.
    #[default]
    Loading,
    Authenticated,
    Anonymous,
}

/// Current-user state plus the last auth error, if any.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.phase == SessionPhase::Loading
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// True iff the current user's role is in `roles`.
    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|role| roles.contains(&role))
    }

    /// True when no roles are required; false when unauthenticated; else a
    /// membership test.
    pub fn can_access(&self, required: Option<&[Role]>) -> bool {
        match required {
            None => true,
            Some([]) => true,
            Some(roles) => self.has_role(roles),
        }
    }

    pub fn resolve_anonymous(&mut self) {
        self.phase = SessionPhase::Anonymous;
        self.user = None;
    }

    pub fn resolve_authenticated(&mut self, user: User) {
        self.phase = SessionPhase::Authenticated;
        self.user = Some(user);
        self.error = None;
    }

    pub fn begin_login(&mut self) {
        self.phase = SessionPhase::Loading;
        self.error = None;
    }

    pub fn login_failed(&mut self, message: String) {
        self.phase = SessionPhase::Anonymous;
        self.user = None;
        self.error = Some(message);
    }

    pub fn signed_out(&mut self) {
        self.phase = SessionPhase::Anonymous;
        self.user = None;
        self.error = None;
    }
}

/// Auth endpoints the session controller depends on.
// Futures run on the single UI thread; Send bounds are not needed.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
}

/// Owns the session state machine and the persisted credential pair.
#[derive(Clone, Copy)]
pub struct SessionController<A, S> {
    api: A,
    store: S,
    state: RwSignal<SessionState>,
}

impl<A, S> SessionController<A, S>
where
    A: SessionApi + Clone + 'static,
    S: CredentialStore + Clone + 'static,
{
    /// Starts in `Loading`; call [`Self::init`] on mount to resolve.
    pub fn new(api: A, store: S) -> Self {
        Self {
            api,
            store,
            state: RwSignal::new(SessionState::default()),
        }
    }

    /// The reactive state components subscribe to.
    pub const fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Resolve the persisted session. With no stored access token this goes
    /// straight to `Anonymous` without touching the network; otherwise the
    /// token is validated against the "who am I" endpoint and purged when
    /// the backend rejects it.
    pub async fn init(&self) {
        if self.store.access_token().is_none() {
            self.state.update(SessionState::resolve_anonymous);
            return;
        }
        match self.api.current_user().await {
            Ok(user) => self.state.update(|s| s.resolve_authenticated(user)),
            Err(_) => {
                self.store.clear();
                self.state.update(SessionState::resolve_anonymous);
            }
        }
    }

    /// Log in. On success both tokens are persisted and the returned user
    /// becomes current; the caller navigates afterwards. On failure the
    /// session stays `Anonymous` with a display message set, and the error
    /// is returned so the form can react.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ApiError> {
        self.state.update(SessionState::begin_login);
        match self.api.login(credentials).await {
            Ok(response) => {
                self.store.store(&response.access, &response.refresh);
                self.state
                    .update(|s| s.resolve_authenticated(response.user.clone()));
                Ok(response.user)
            }
            Err(err) => {
                self.state.update(|s| s.login_failed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Log out. The backend call is best-effort (a dead session must still
    /// be clearable locally); the credential purge is unconditional.
    pub async fn logout(&self) {
        if let Some(refresh) = self.store.refresh_token() {
            let _ = self.api.logout(&refresh).await;
        }
        self.store.clear();
        self.state.update(SessionState::signed_out);
    }

    /// Re-fetch the current user; errors are ignored, no-op when anonymous.
    pub async fn refresh_user(&self) {
        if !self.state.with_untracked(SessionState::is_authenticated) {
            return;
        }
        if let Ok(user) = self.api.current_user().await {
            self.state.update(|s| s.user = Some(user));
        }
    }

    pub fn has_role(&self, roles: &[Role]) -> bool {
        self.state.with_untracked(|s| s.has_role(roles))
    }

    pub fn can_access(&self, required: Option<&[Role]>) -> bool {
        self.state.with_untracked(|s| s.can_access(required))
    }
}
