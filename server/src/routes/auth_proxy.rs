//! Auth forwarding: relays `/api/auth/*` calls to the identity backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this origin. Session cookies are issued by
//! the identity backend, so the forwarder passes `cookie` through on the way
//! in and `set-cookie` on the way out. It never inspects or stores tokens.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers copied onto the upstream call.
const FORWARDED_REQUEST_HEADERS: &[HeaderName] =
    &[header::COOKIE, header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN, header::USER_AGENT];

/// Response headers copied back to the browser.
const RELAYED_RESPONSE_HEADERS: &[HeaderName] =
    &[header::SET_COOKIE, header::CONTENT_TYPE, header::LOCATION, header::CACHE_CONTROL];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("invalid auth path: {0}")]
    InvalidPath(String),
    #[error("identity backend unreachable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Message shown to the user. Upstream details stay in the server log.
    fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidPath(_) => "Invalid request.",
            Self::Upstream(_) => "Authentication service is unavailable. Please try again.",
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(serde_json::json!({ "message": self.public_message() }))).into_response()
    }
}

/// Build the upstream URL for `path` under the backend's `/api/auth` prefix.
///
/// # Errors
///
/// Rejects empty paths and any `.` or `..` segment.
pub(crate) fn backend_url(base: &str, path: &str, query: Option<&str>) -> Result<String, ProxyError> {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path.split('/').any(|seg| seg == ".." || seg == ".") {
        return Err(ProxyError::InvalidPath(path.to_owned()));
    }
    let base = base.trim_end_matches('/');
    Ok(match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/api/auth/{path}?{q}"),
        None => format!("{base}/api/auth/{path}"),
    })
}

/// Copy only the allow-listed headers from `source`, keeping repeated values.
pub(crate) fn filter_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match relay(&state, &path, query.as_deref(), method, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(error = %e, %path, "auth forward failed");
            e.into_response()
        }
    }
}

async fn relay(
    state: &AppState,
    path: &str,
    query: Option<&str>,
    method: Method,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = backend_url(&state.config.auth_backend_url, path, query)?;

    let upstream = state
        .http
        .request(method, url)
        .headers(filter_headers(headers, FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let relayed = filter_headers(upstream.headers(), RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    if !status.is_success() {
        tracing::warn!(%status, %path, "identity backend returned error status");
    }

    Ok((status, relayed, bytes).into_response())
}

#[cfg(test)]
#[path = "auth_proxy_test.rs"]
mod auth_proxy_test;
