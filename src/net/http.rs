//! HTTP helpers for the REST backend.
//!
//! Client-side (hydrate): real calls via `gloo-net`, with the persisted
//! access token attached as a Bearer header on every request. A 401 from
//! any endpoint purges the credential pair and hard-navigates to the login
//! route; doing so twice is harmless, so no coordination with in-flight
//! requests is attempted.
//!
//! Server-side (SSR): stubs returning [`ApiError::Network`], since the
//! backend is only reachable from the browser.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::response_message;
#[cfg(feature = "hydrate")]
use crate::util::credentials;

#[cfg(not(feature = "hydrate"))]
const SERVER_SIDE: &str = "not available on server";

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match credentials::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Turn a non-2xx response into an [`ApiError`], purging the session on 401.
#[cfg(feature = "hydrate")]
async fn fail(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .unwrap_or(serde_json::Value::Null);
    if status == 401 {
        credentials::clear_tokens();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::routes::LOGIN_ROUTE);
        }
    }
    ApiError::Status {
        status,
        message: response_message(status, &body),
    }
}

/// GET a JSON document, with query parameters.
pub async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(String, String)],
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::get(path))
            .query(query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<T>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, query);
        Err(ApiError::Network(SERVER_SIDE.to_owned()))
    }
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<T>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network(SERVER_SIDE.to_owned()))
    }
}

/// POST a JSON body, ignoring the response body.
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::post(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network(SERVER_SIDE.to_owned()))
    }
}

/// PATCH a JSON body and parse a JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::patch(path))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        resp.json::<T>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network(SERVER_SIDE.to_owned()))
    }
}

/// DELETE a resource; the backend returns no body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorize(gloo_net::http::Request::delete(path))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(fail(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network(SERVER_SIDE.to_owned()))
    }
}
