//! Submission state machine shared by the sign-up and sign-in forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! One controller exists per mounted form. The page feeds it user submits and
//! backend resolutions; it answers with at most one dispatch ticket per
//! submit and at most one destination per resolution. It never performs I/O.
//!
//! STATES
//! ======
//! `Idle -> Pending -> Succeeded | Failed(message)`. Validation happens inside
//! `submit` in the same call, so it is never observable as a stored phase.
//! While `Pending`, every submit is refused, which keeps at most one backend
//! call in flight per form. The failure message lives inside `Failed`, so
//! entering `Pending` for a new attempt drops it before anything is
//! dispatched.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::marker::PhantomData;

use super::backend::AuthOutcome;
use super::forms::AuthForm;
use super::outcome::{Destination, OutcomeRouter};
use super::schema::ValidationResult;
use crate::net::types::SocialProvider;

/// Stored phase of a form's submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Failed(String),
    Succeeded,
}

/// What a ticket asks the backend to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest<P> {
    Credentials(P),
    Social(SocialProvider),
}

/// Permission to make exactly one backend call for one attempt.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket<P> {
    attempt: u64,
    request: AuthRequest<P>,
}

impl<P> Ticket<P> {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn request(&self) -> &AuthRequest<P> {
        &self.request
    }

    pub fn into_request(self) -> AuthRequest<P> {
        self.request
    }
}

/// Result of a submit attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission<P> {
    /// A call is already in flight; nothing changed.
    Busy,
    /// Validation failed; field errors are stored, nothing dispatched.
    Invalid,
    /// Input accepted; the caller must dispatch this ticket exactly once.
    Dispatch(Ticket<P>),
}

pub struct SubmissionController<F: AuthForm> {
    phase: Phase,
    field_errors: ValidationResult,
    attempt: u64,
    router: OutcomeRouter,
    _form: PhantomData<fn() -> F>,
}

impl<F: AuthForm> Default for SubmissionController<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: AuthForm> std::fmt::Debug for SubmissionController<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("form", &F::NAME)
            .field("phase", &self.phase)
            .field("field_errors", &self.field_errors)
            .field("attempt", &self.attempt)
            .finish_non_exhaustive()
    }
}

impl<F: AuthForm> SubmissionController<F> {
    pub fn new() -> Self {
        Self::with_router(OutcomeRouter::default())
    }

    pub fn with_router(router: OutcomeRouter) -> Self {
        Self {
            phase: Phase::Idle,
            field_errors: ValidationResult::default(),
            attempt: 0,
            router,
            _form: PhantomData,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// True for the whole time a backend call is outstanding. Drives the
    /// disabled state of the submit and social controls.
    pub fn busy(&self) -> bool {
        matches!(self.phase, Phase::Pending)
    }

    /// Message for the form-level alert, present only in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn field_errors(&self) -> &ValidationResult {
        &self.field_errors
    }

    /// Number of tickets issued so far.
    pub fn attempts(&self) -> u64 {
        self.attempt
    }

    /// Validate `input` and, if it passes, enter `Pending`.
    pub fn submit(&mut self, input: &F::Input) -> Submission<F::Payload> {
        if self.busy() {
            log::debug!("{}: submit ignored while pending", F::NAME);
            return Submission::Busy;
        }

        let errors = F::validate(input);
        if !errors.is_valid() {
            log::debug!("{}: validation rejected {} field(s)", F::NAME, errors.len());
            self.phase = Phase::Idle;
            self.field_errors = errors;
            return Submission::Invalid;
        }

        Submission::Dispatch(self.begin(AuthRequest::Credentials(F::payload(input))))
    }

    /// Start a provider sign-in. Skips field validation but obeys the same
    /// single-flight rule as `submit`.
    pub fn submit_social(&mut self, provider: SocialProvider) -> Submission<F::Payload> {
        if self.busy() {
            log::debug!("{}: {} sign-in ignored while pending", F::NAME, provider.id());
            return Submission::Busy;
        }
        Submission::Dispatch(self.begin(AuthRequest::Social(provider)))
    }

    fn begin(&mut self, request: AuthRequest<F::Payload>) -> Ticket<F::Payload> {
        self.attempt += 1;
        self.phase = Phase::Pending;
        self.field_errors = ValidationResult::default();
        log::debug!("{}: attempt {} pending", F::NAME, self.attempt);
        Ticket { attempt: self.attempt, request }
    }

    /// Apply the backend's outcome for `attempt`. Returns where to navigate
    /// on success. Outcomes for any other attempt are ignored.
    pub fn resolve(&mut self, attempt: u64, outcome: AuthOutcome) -> Option<Destination> {
        if !self.busy() || attempt != self.attempt {
            log::debug!("{}: stale outcome for attempt {attempt} ignored", F::NAME);
            return None;
        }

        match outcome {
            Ok(success) => {
                log::debug!("{}: attempt {attempt} succeeded", F::NAME);
                self.phase = Phase::Succeeded;
                Some(self.router.destination(&success))
            }
            Err(error) => {
                log::warn!("{}: attempt {attempt} failed: {error}", F::NAME);
                self.phase = Phase::Failed(error.display_message().to_owned());
                None
            }
        }
    }
}
