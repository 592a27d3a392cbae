//! Identity-backend seam and the one-shot outcome channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider is an external collaborator. Each auth operation
//! returns a `PendingOutcome` immediately and resolves it exactly once later;
//! the operation itself runs wherever the implementation schedules it.
//!
//! DESIGN
//! ======
//! `outcome_channel` pairs a `Resolver` with a `PendingOutcome`. Resolving
//! consumes the `Resolver`, so a second resolution does not type-check. A
//! resolver dropped without resolving leaves the outcome pending forever,
//! which mirrors an operation that never calls back.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::channel::oneshot;

use crate::net::types::{Session, SignInPayload, SignUpPayload, SocialProvider};

/// Shown when the backend reports a failure without a message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Successful resolution. `redirect` is set when the backend hands back a
/// URL the browser must visit next (social providers).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthSuccess {
    pub redirect: Option<String>,
}

impl AuthSuccess {
    pub fn redirect_to(url: impl Into<String>) -> Self {
        Self { redirect: Some(url.into()) }
    }
}

/// Failure reported by the identity backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
pub struct AuthError {
    message: Option<String>,
}

impl AuthError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self::default();
        }
        Self { message: Some(message) }
    }

    /// A failure that carries no message of its own.
    pub fn unspecified() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Message to render: the backend's own text, or the generic fallback.
    pub fn display_message(&self) -> &str {
        self.message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE)
    }
}

pub type AuthOutcome = Result<AuthSuccess, AuthError>;

/// Create a linked resolver/outcome pair.
pub fn outcome_channel() -> (Resolver, PendingOutcome) {
    let (tx, rx) = oneshot::channel();
    (Resolver { tx }, PendingOutcome { rx, abandoned: false })
}

/// Write half of an auth operation's result. Consumed on use.
#[derive(Debug)]
pub struct Resolver {
    tx: oneshot::Sender<AuthOutcome>,
}

impl Resolver {
    pub fn resolve(self, outcome: AuthOutcome) {
        // The form may have unmounted; nobody is left to tell.
        if self.tx.send(outcome).is_err() {
            log::debug!("auth outcome dropped: receiver gone");
        }
    }

    pub fn succeed(self) {
        self.resolve(Ok(AuthSuccess::default()));
    }

    pub fn fail(self, error: AuthError) {
        self.resolve(Err(error));
    }
}

/// Read half of an auth operation's result.
#[derive(Debug)]
pub struct PendingOutcome {
    rx: oneshot::Receiver<AuthOutcome>,
    abandoned: bool,
}

impl PendingOutcome {
    /// An outcome that is already known, e.g. a request that failed before
    /// leaving the client.
    pub fn ready(outcome: AuthOutcome) -> Self {
        let (resolver, pending) = outcome_channel();
        resolver.resolve(outcome);
        pending
    }
}

impl Future for PendingOutcome {
    type Output = AuthOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.abandoned {
            return Poll::Pending;
        }
        match self.rx.poll_unpin(cx) {
            Poll::Ready(Ok(outcome)) => Poll::Ready(outcome),
            Poll::Ready(Err(oneshot::Canceled)) => {
                log::warn!("auth operation dropped its resolver; submission stays pending");
                self.abandoned = true;
                Poll::Pending
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Operations offered by the identity/session backend.
pub trait AuthBackend {
    fn sign_up(&self, payload: SignUpPayload) -> PendingOutcome;

    fn sign_in(&self, payload: SignInPayload) -> PendingOutcome;

    /// Start a provider sign-in. Success carries the provider URL in
    /// `AuthSuccess::redirect`; `callback_url` is where the provider returns.
    fn sign_in_social(&self, provider: SocialProvider, callback_url: &str) -> PendingOutcome;

    fn sign_out(&self) -> PendingOutcome;

    fn current_session(&self) -> impl Future<Output = Option<Session>>;
}
