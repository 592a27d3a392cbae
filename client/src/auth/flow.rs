//! Async glue between a controller, the backend, and the navigator.
//!
//! The page owns the controller inside some shared cell (a reactive signal in
//! the browser, a `RefCell` in tests). These functions take one submit from
//! ticket to resolution: validate and enter `Pending` synchronously, dispatch
//! once, await the one-shot outcome, resolve, then navigate on success.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::cell::RefCell;

use leptos::prelude::*;

use super::backend::AuthBackend;
use super::controller::{AuthRequest, Submission, SubmissionController, Ticket};
use super::forms::AuthForm;
use super::outcome::{LANDING_ROUTE, Navigator};
use crate::net::types::SocialProvider;

/// Shared, mutable home of a `SubmissionController`.
pub trait ControllerCell {
    type Form: AuthForm;

    /// Run `f` against the controller. `None` when the cell is gone (the form
    /// unmounted).
    fn with_controller<R>(&self, f: impl FnOnce(&mut SubmissionController<Self::Form>) -> R) -> Option<R>;
}

impl<F: AuthForm> ControllerCell for RefCell<SubmissionController<F>> {
    type Form = F;

    fn with_controller<R>(&self, f: impl FnOnce(&mut SubmissionController<F>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F: AuthForm + Send + Sync> ControllerCell for RwSignal<SubmissionController<F>> {
    type Form = F;

    fn with_controller<R>(&self, f: impl FnOnce(&mut SubmissionController<F>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Submit form input.
pub async fn submit<C, B, N>(cell: &C, backend: &B, navigator: &N, input: <C::Form as AuthForm>::Input)
where
    C: ControllerCell,
    B: AuthBackend,
    N: Navigator,
{
    let Some(Submission::Dispatch(ticket)) = cell.with_controller(|c| c.submit(&input)) else {
        return;
    };
    run_ticket(cell, backend, navigator, ticket).await;
}

/// Start a provider sign-in from the same form.
pub async fn submit_social<C, B, N>(cell: &C, backend: &B, navigator: &N, provider: SocialProvider)
where
    C: ControllerCell,
    B: AuthBackend,
    N: Navigator,
{
    let Some(Submission::Dispatch(ticket)) = cell.with_controller(|c| c.submit_social(provider)) else {
        return;
    };
    run_ticket(cell, backend, navigator, ticket).await;
}

async fn run_ticket<C, B, N>(
    cell: &C,
    backend: &B,
    navigator: &N,
    ticket: Ticket<<C::Form as AuthForm>::Payload>,
) where
    C: ControllerCell,
    B: AuthBackend,
    N: Navigator,
{
    let attempt = ticket.attempt();
    let pending = match ticket.into_request() {
        AuthRequest::Credentials(payload) => <C::Form as AuthForm>::dispatch(backend, payload),
        AuthRequest::Social(provider) => backend.sign_in_social(provider, LANDING_ROUTE),
    };
    let outcome = pending.await;
    if let Some(destination) = cell.with_controller(|c| c.resolve(attempt, outcome)).flatten() {
        destination.apply(navigator);
    }
}
