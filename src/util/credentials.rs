//! Persisted credential pair (access/refresh tokens).
//!
//! Tokens live in `localStorage` under two fixed keys and are owned
//! exclusively by this module: written on login, erased on logout or when
//! any request comes back 401. Requires a browser environment; on the
//! server every read returns `None` and writes are no-ops.

#[cfg(feature = "hydrate")]
const ACCESS_TOKEN_KEY: &str = "campus_access_token";
#[cfg(feature = "hydrate")]
const REFRESH_TOKEN_KEY: &str = "campus_refresh_token";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted access token.
pub fn access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(ACCESS_TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted refresh token.
pub fn refresh_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage().and_then(|s| s.get_item(REFRESH_TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both tokens after a successful login.
pub fn store_tokens(access: &str, refresh: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(ACCESS_TOKEN_KEY, access);
            let _ = s.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access, refresh);
    }
}

/// Erase both tokens. Idempotent.
pub fn clear_tokens() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.remove_item(ACCESS_TOKEN_KEY);
            let _ = s.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}

/// Credential storage capability, injected into the session controller so
/// tests can substitute an in-memory store.
pub trait CredentialStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn store(&self, access: &str, refresh: &str);
    fn clear(&self);
}

/// The real store backed by `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserCredentials;

impl CredentialStore for BrowserCredentials {
    fn access_token(&self) -> Option<String> {
        access_token()
    }

    fn refresh_token(&self) -> Option<String> {
        refresh_token()
    }

    fn store(&self, access: &str, refresh: &str) {
        store_tokens(access, refresh);
    }

    fn clear(&self) {
        clear_tokens();
    }
}
