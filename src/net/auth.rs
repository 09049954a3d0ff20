//! Auth endpoints (`/api/v1/auth/*`).

use serde_json::json;

use super::error::ApiError;
use super::http;
use super::types::{LoginRequest, LoginResponse, User};
use crate::state::session::SessionApi;

const LOGIN_URL: &str = "/api/v1/auth/login/";
const LOGOUT_URL: &str = "/api/v1/auth/logout/";
const ME_URL: &str = "/api/v1/auth/me/";

/// The real auth backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthApi;

impl SessionApi for AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        http::post_json(LOGIN_URL, credentials).await
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        http::post_empty(LOGOUT_URL, &json!({ "refresh": refresh_token })).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        http::get_json(ME_URL, &[]).await
    }
}
