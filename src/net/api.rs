//! REST client for the study-guide backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! AUTHENTICATION
//! ==============
//! The bearer header is read from persisted storage at send time, not
//! captured at startup, so a token swapped by login/logout is used on the
//! very next request. Every authenticated response goes through a 401
//! interceptor: the session is force-logged-out (memory and storage) and the
//! browser is sent to `/login`. The one exception is [`current_user`], which
//! the startup restore calls before any view exists; its failures are
//! returned to the restore path, which logs out silently without a redirect.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, DocumentInfo, ProfileUpdate, RegisterData, User};
use crate::state::session::SessionState;
use crate::util::token_store;

#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn url(path: &str) -> String {
    format!("/api{path}")
}

/// `Authorization` header value for the current request, if a token is held.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn bearer() -> Option<String> {
    token_store::access().map(|token| format!("Bearer {token}"))
}

/// Human-readable message from an error body. Prefers the backend's
/// `message` field, then `error`, then a status-line fallback.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .or_else(|| v.get("error").and_then(serde_json::Value::as_str))
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

// -------------------------------------------------------------
// Transport helpers (browser only)
// -------------------------------------------------------------

#[cfg(feature = "hydrate")]
fn network(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

/// Attach the current bearer token, if any.
#[cfg(feature = "hydrate")]
fn authed(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match bearer() {
        Some(value) => req.header("Authorization", &value),
        None => req,
    }
}

/// Map a non-2xx response to `ApiError::Status` with the server's message.
#[cfg(feature = "hydrate")]
async fn into_result(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, message: error_message(status, &body) })
}

/// 401 interceptor for authenticated calls: force a logout and route the
/// user to the login entry point. Other statuses pass through unchanged.
#[cfg(feature = "hydrate")]
async fn intercept(
    session: RwSignal<SessionState>,
    resp: gloo_net::http::Response,
) -> Result<gloo_net::http::Response, ApiError> {
    if resp.status() == 401 {
        leptos::logging::warn!("authenticated request returned 401; clearing session");
        session.update(|s| s.apply_logout());
        redirect_to_login();
        return Err(ApiError::Unauthorized);
    }
    into_result(resp).await
}

#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

// -------------------------------------------------------------
// Auth endpoints
// -------------------------------------------------------------

/// `POST /auth/login`.
///
/// # Errors
///
/// Rejected credentials surface as `ApiError::Status`; transport failures as
/// `ApiError::Network`. No session state is touched here either way.
pub async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let resp = into_result(resp).await?;
        resp.json::<AuthResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /auth/register`. Same contract as [`login`].
///
/// # Errors
///
/// Same as [`login`].
pub async fn register(data: RegisterData) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&url("/auth/register"))
            .json(&data)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let resp = into_result(resp).await?;
        resp.json::<AuthResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `GET /auth/me` with the persisted access token. Used by the startup
/// restore; does not go through the 401 interceptor (see module docs).
///
/// # Errors
///
/// Any non-2xx status or transport failure.
pub async fn current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Envelope {
            user: User,
        }

        let resp = authed(gloo_net::http::Request::get(&url("/auth/me")))
            .send()
            .await
            .map_err(network)?;
        let resp = into_result(resp).await?;
        let body: Envelope = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

// -------------------------------------------------------------
// Profile
// -------------------------------------------------------------

/// `PUT /users/profile`; returns the updated user record.
///
/// # Errors
///
/// Any non-2xx status or transport failure; 401 clears the session first.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    update: &ProfileUpdate,
) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::put(&url("/users/profile")))
            .json(update)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        let resp = intercept(session, resp).await?;
        resp.json::<User>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, update);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /users/profile/picture` as a multipart form; returns the stored
/// picture path for the session to record on the user.
///
/// # Errors
///
/// Any non-2xx status or transport failure; 401 clears the session first.
#[cfg(feature = "hydrate")]
pub async fn upload_profile_picture(
    session: RwSignal<SessionState>,
    file: &web_sys::File,
) -> Result<String, ApiError> {
    #[derive(serde::Deserialize)]
    struct PictureResponse {
        profile_picture: String,
    }

    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob("picture", file).map_err(js_error)?;

    // No explicit Content-Type: the browser supplies the multipart boundary.
    let resp = authed(gloo_net::http::Request::post(&url("/users/profile/picture")))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let resp = intercept(session, resp).await?;
    let body: PictureResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.profile_picture)
}

// -------------------------------------------------------------
// Documents
// -------------------------------------------------------------

/// `GET /documents` — the caller's document list.
///
/// # Errors
///
/// Any non-2xx status or transport failure; 401 clears the session first.
pub async fn fetch_documents(session: RwSignal<SessionState>) -> Result<Vec<DocumentInfo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::get(&url("/documents")))
            .send()
            .await
            .map_err(network)?;
        let resp = intercept(session, resp).await?;
        resp.json::<Vec<DocumentInfo>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `POST /documents/upload` as a multipart form.
///
/// # Errors
///
/// Any non-2xx status or transport failure; 401 clears the session first.
#[cfg(feature = "hydrate")]
pub async fn upload_document(
    session: RwSignal<SessionState>,
    file: &web_sys::File,
    description: &str,
    is_public: bool,
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob("file", file).map_err(js_error)?;
    form.append_with_str("description", description).map_err(js_error)?;
    form.append_with_str("is_public", if is_public { "true" } else { "false" })
        .map_err(js_error)?;

    // No explicit Content-Type: the browser supplies the multipart boundary.
    let resp = authed(gloo_net::http::Request::post(&url("/documents/upload")))
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    intercept(session, resp).await?;
    Ok(())
}

/// `DELETE /documents/{id}`.
///
/// # Errors
///
/// Any non-2xx status or transport failure; 401 clears the session first.
pub async fn delete_document(session: RwSignal<SessionState>, id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authed(gloo_net::http::Request::delete(&url(&format!("/documents/{id}"))))
            .send()
            .await
            .map_err(network)?;
        intercept(session, resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// `GET /documents/{id}/download`: fetch the bytes with the bearer header,
/// then hand them to the browser via an object URL and a synthetic anchor
/// click so the file lands in the user's downloads.
///
/// # Errors
///
/// Any non-2xx status or transport failure; 401 clears the session first.
#[cfg(feature = "hydrate")]
pub async fn download_document(
    session: RwSignal<SessionState>,
    id: i64,
    filename: &str,
) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let resp = authed(gloo_net::http::Request::get(&url(&format!("/documents/{id}/download"))))
        .send()
        .await
        .map_err(network)?;
    let resp = intercept(session, resp).await?;
    let bytes = resp.binary().await.map_err(network)?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(js_error)?;
    let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Network("no document".to_owned()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .unchecked_into();
    anchor.set_href(&object_url);
    anchor.set_download(filename);
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    }
    let _ = web_sys::Url::revoke_object_url(&object_url);
    Ok(())
}
