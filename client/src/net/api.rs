//! HTTP client for the identity backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each spawned as a
//! local task that resolves its `PendingOutcome` exactly once.
//! Server-side (SSR): stubs that resolve to `ApiError::Unavailable` since auth
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport problems become `ApiError`; at the `AuthBackend` boundary they
//! are folded into `AuthError`, keeping the backend's own `message` when the
//! response carried one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::context::SessionCache;
use super::types::{Session, SignInPayload, SignUpPayload, SocialProvider};
use crate::auth::backend::{AuthBackend, AuthError, PendingOutcome};
#[cfg(feature = "hydrate")]
use crate::auth::backend::{AuthOutcome, AuthSuccess, outcome_channel};

/// Mount point of the identity backend's routes, relative to the app origin.
pub const AUTH_API_BASE: &str = "/api/auth";

/// Failures talking to the identity backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed: {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { message: Some(message), .. } => AuthError::new(message),
            ApiError::Status { message: None, .. } | ApiError::Unavailable => AuthError::unspecified(),
            ApiError::Network(_) | ApiError::Decode(_) => AuthError::new(err.to_string()),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());
    ApiError::Status { status, message }
}

#[cfg(any(test, feature = "hydrate"))]
fn social_redirect(body: super::types::SocialSignInResponse) -> Result<String, ApiError> {
    body.url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApiError::Decode("provider url missing".to_owned()))
}

/// `AuthBackend` over the backend's JSON endpoints.
#[derive(Clone, Debug)]
pub struct HttpAuthBackend {
    base: String,
    sessions: SessionCache,
}

impl HttpAuthBackend {
    pub fn new(base: impl Into<String>, sessions: SessionCache) -> Self {
        Self { base: base.into(), sessions }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn sessions(&self) -> &SessionCache {
        &self.sessions
    }

    #[cfg(feature = "hydrate")]
    fn spawn_call<Fut>(&self, call: Fut) -> PendingOutcome
    where
        Fut: Future<Output = Result<AuthSuccess, ApiError>> + 'static,
    {
        let (resolver, pending) = outcome_channel();
        leptos::task::spawn_local(async move {
            let outcome: AuthOutcome = call.await.map_err(|err| {
                log::warn!("auth request failed: {err}");
                AuthError::from(err)
            });
            resolver.resolve(outcome);
        });
        pending
    }

    /// Sign in/up/out all change who the session belongs to.
    #[cfg(feature = "hydrate")]
    fn spawn_session_change<Fut>(&self, call: Fut) -> PendingOutcome
    where
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        let sessions = self.sessions.clone();
        self.spawn_call(async move {
            call.await?;
            sessions.clear();
            Ok(AuthSuccess::default())
        })
    }
}

impl AuthBackend for HttpAuthBackend {
    fn sign_up(&self, payload: SignUpPayload) -> PendingOutcome {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&self.base, "sign-up/email");
            self.spawn_session_change(async move { post_json(&url, &payload).await.map(|_| ()) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            PendingOutcome::ready(Err(ApiError::Unavailable.into()))
        }
    }

    fn sign_in(&self, payload: SignInPayload) -> PendingOutcome {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&self.base, "sign-in/email");
            self.spawn_session_change(async move { post_json(&url, &payload).await.map(|_| ()) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            PendingOutcome::ready(Err(ApiError::Unavailable.into()))
        }
    }

    fn sign_in_social(&self, provider: SocialProvider, callback_url: &str) -> PendingOutcome {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&self.base, "sign-in/social");
            let payload = super::types::SocialSignInPayload { provider, callback_url: callback_url.to_owned() };
            self.spawn_call(async move {
                let body = post_json(&url, &payload).await?;
                let response: super::types::SocialSignInResponse =
                    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
                social_redirect(response).map(AuthSuccess::redirect_to)
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (provider, callback_url);
            PendingOutcome::ready(Err(ApiError::Unavailable.into()))
        }
    }

    fn sign_out(&self) -> PendingOutcome {
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&self.base, "sign-out");
            self.spawn_session_change(async move { post_json(&url, &serde_json::json!({})).await.map(|_| ()) })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            PendingOutcome::ready(Err(ApiError::Unavailable.into()))
        }
    }

    /// Cached session, or `GET /get-session`. Any failure reads as signed out.
    fn current_session(&self) -> impl Future<Output = Option<Session>> {
        let sessions = self.sessions.clone();
        #[cfg(feature = "hydrate")]
        let url = endpoint(&self.base, "get-session");
        async move {
            if let Some(session) = sessions.get() {
                return Some(session);
            }
            #[cfg(feature = "hydrate")]
            {
                match fetch_session(&url).await {
                    Ok(Some(session)) => {
                        sessions.set(session.clone());
                        Some(session)
                    }
                    Ok(None) => None,
                    Err(err) => {
                        log::warn!("session lookup failed: {err}");
                        None
                    }
                }
            }
            #[cfg(not(feature = "hydrate"))]
            {
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, payload: &T) -> Result<String, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let body = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !resp.ok() {
        return Err(status_error(resp.status(), &body));
    }
    Ok(body)
}

#[cfg(feature = "hydrate")]
async fn fetch_session(url: &str) -> Result<Option<Session>, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(resp.status(), &body));
    }
    resp.json::<Option<Session>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
