use super::*;

use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use crate::auth::backend::{AuthError, AuthOutcome, AuthSuccess, PendingOutcome, Resolver, outcome_channel};
use crate::auth::controller::Phase;
use crate::auth::forms::{SignInForm, SignInInput, SignUpForm, SignUpInput};
use crate::auth::schema::{Field, PASSWORDS_MISMATCH};
use crate::net::types::{Session, SignInPayload, SignUpPayload};

// =============================================================
// Test doubles
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    SignUp(SignUpPayload),
    SignIn(SignInPayload),
    Social(SocialProvider, String),
    SignOut,
}

/// Backend that either answers from a script or hands its resolvers to the test.
#[derive(Default)]
struct ScriptedBackend {
    calls: RefCell<Vec<Call>>,
    script: RefCell<VecDeque<AuthOutcome>>,
    held: RefCell<Vec<Resolver>>,
}

impl ScriptedBackend {
    fn answering(outcomes: impl IntoIterator<Item = AuthOutcome>) -> Self {
        Self { script: RefCell::new(outcomes.into_iter().collect()), ..Self::default() }
    }

    fn holding() -> Self {
        Self::default()
    }

    fn respond(&self, call: Call) -> PendingOutcome {
        self.calls.borrow_mut().push(call);
        if let Some(outcome) = self.script.borrow_mut().pop_front() {
            return PendingOutcome::ready(outcome);
        }
        let (resolver, pending) = outcome_channel();
        self.held.borrow_mut().push(resolver);
        pending
    }

    fn take_resolver(&self) -> Resolver {
        self.held.borrow_mut().remove(0)
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl AuthBackend for ScriptedBackend {
    fn sign_up(&self, payload: SignUpPayload) -> PendingOutcome {
        self.respond(Call::SignUp(payload))
    }

    fn sign_in(&self, payload: SignInPayload) -> PendingOutcome {
        self.respond(Call::SignIn(payload))
    }

    fn sign_in_social(&self, provider: SocialProvider, callback_url: &str) -> PendingOutcome {
        self.respond(Call::Social(provider, callback_url.to_owned()))
    }

    fn sign_out(&self) -> PendingOutcome {
        self.respond(Call::SignOut)
    }

    async fn current_session(&self) -> Option<Session> {
        None
    }
}

#[derive(Default)]
struct RecordingNavigator {
    routes: RefCell<Vec<String>>,
    redirects: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, path: &str) {
        self.routes.borrow_mut().push(path.to_owned());
    }

    fn redirect_to(&self, url: &str) {
        self.redirects.borrow_mut().push(url.to_owned());
    }
}

fn alice() -> SignUpInput {
    SignUpInput {
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
    }
}

fn bob() -> SignInInput {
    SignInInput { email: "bob@example.com".to_owned(), password: "wrong".to_owned() }
}

// =============================================================
// Scenarios
// =============================================================

#[test]
fn sign_up_success_navigates_once_to_root() {
    let cell = RefCell::new(SubmissionController::<SignUpForm>::new());
    let backend = ScriptedBackend::answering([Ok(AuthSuccess::default())]);
    let navigator = RecordingNavigator::default();

    block_on(submit(&cell, &backend, &navigator, alice()));

    assert_eq!(
        *backend.calls.borrow(),
        vec![Call::SignUp(SignUpPayload {
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "secret".to_owned(),
        })]
    );
    assert_eq!(*navigator.routes.borrow(), vec!["/".to_owned()]);
    assert!(!cell.borrow().busy());
    assert_eq!(cell.borrow().phase(), &Phase::Succeeded);
}

#[test]
fn sign_in_failure_surfaces_backend_message() {
    let cell = RefCell::new(SubmissionController::<SignInForm>::new());
    let backend = ScriptedBackend::answering([Err(AuthError::new("Invalid credentials"))]);
    let navigator = RecordingNavigator::default();

    block_on(submit(&cell, &backend, &navigator, bob()));

    assert_eq!(cell.borrow().error_message(), Some("Invalid credentials"));
    assert!(!cell.borrow().busy());
    assert!(navigator.routes.borrow().is_empty());
}

#[test]
fn mismatched_passwords_never_reach_backend() {
    let cell = RefCell::new(SubmissionController::<SignUpForm>::new());
    let backend = ScriptedBackend::holding();
    let navigator = RecordingNavigator::default();
    let input = SignUpInput { password: "a".to_owned(), confirm_password: "b".to_owned(), ..alice() };

    block_on(submit(&cell, &backend, &navigator, input));

    assert_eq!(backend.call_count(), 0);
    assert_eq!(cell.borrow().field_errors().get(Field::ConfirmPassword), Some(PASSWORDS_MISMATCH));
    assert!(navigator.routes.borrow().is_empty());
}

#[test]
fn invalid_inputs_make_zero_calls() {
    let backend = ScriptedBackend::holding();
    let navigator = RecordingNavigator::default();
    let bad_inputs = [
        SignUpInput::default(),
        SignUpInput { name: String::new(), ..alice() },
        SignUpInput { email: "alice".to_owned(), ..alice() },
        SignUpInput { password: String::new(), ..alice() },
        SignUpInput { confirm_password: "other".to_owned(), ..alice() },
    ];
    for input in bad_inputs {
        let cell = RefCell::new(SubmissionController::<SignUpForm>::new());
        block_on(submit(&cell, &backend, &navigator, input));
    }
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn retry_after_failure_never_shows_stale_error() {
    let pool_cell = Rc::new(RefCell::new(SubmissionController::<SignInForm>::new()));
    let backend = Rc::new(ScriptedBackend::holding());
    let navigator = Rc::new(RecordingNavigator::default());
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let spawn_submit = |input: SignInInput| {
        let (cell, backend, navigator) = (pool_cell.clone(), backend.clone(), navigator.clone());
        spawner
            .spawn_local(async move { submit(&*cell, &*backend, &*navigator, input).await })
            .unwrap();
    };

    spawn_submit(bob());
    pool.run_until_stalled();
    backend.take_resolver().fail(AuthError::new("Invalid credentials"));
    pool.run_until_stalled();
    assert_eq!(pool_cell.borrow().error_message(), Some("Invalid credentials"));

    spawn_submit(SignInInput { password: "right".to_owned(), ..bob() });
    pool.run_until_stalled();
    assert!(pool_cell.borrow().busy());
    assert!(pool_cell.borrow().error_message().is_none());

    backend.take_resolver().succeed();
    pool.run_until_stalled();
    assert!(pool_cell.borrow().error_message().is_none());
    assert_eq!(pool_cell.borrow().phase(), &Phase::Succeeded);
    assert_eq!(*navigator.routes.borrow(), vec!["/".to_owned()]);
    assert_eq!(backend.call_count(), 2);
}

// =============================================================
// Busy window
// =============================================================

#[test]
fn busy_holds_until_outcome_arrives() {
    let cell = Rc::new(RefCell::new(SubmissionController::<SignInForm>::new()));
    let backend = Rc::new(ScriptedBackend::holding());
    let navigator = Rc::new(RecordingNavigator::default());
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    for _ in 0..3 {
        let (cell, backend, navigator) = (cell.clone(), backend.clone(), navigator.clone());
        spawner
            .spawn_local(async move { submit(&*cell, &*backend, &*navigator, bob()).await })
            .unwrap();
    }
    {
        let (cell, backend, navigator) = (cell.clone(), backend.clone(), navigator.clone());
        spawner
            .spawn_local(async move {
                submit_social(&*cell, &*backend, &*navigator, SocialProvider::GitHub).await;
            })
            .unwrap();
    }
    pool.run_until_stalled();

    assert!(cell.borrow().busy());
    assert_eq!(backend.call_count(), 1);

    backend.take_resolver().fail(AuthError::unspecified());
    pool.run_until_stalled();
    assert!(!cell.borrow().busy());
}

#[test]
fn dropped_resolver_leaves_form_pending() {
    let cell = Rc::new(RefCell::new(SubmissionController::<SignInForm>::new()));
    let backend = Rc::new(ScriptedBackend::holding());
    let navigator = Rc::new(RecordingNavigator::default());
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    {
        let (cell, backend, navigator) = (cell.clone(), backend.clone(), navigator.clone());
        spawner
            .spawn_local(async move { submit(&*cell, &*backend, &*navigator, bob()).await })
            .unwrap();
    }
    pool.run_until_stalled();

    drop(backend.take_resolver());
    pool.run_until_stalled();

    assert!(cell.borrow().busy());
    assert!(navigator.routes.borrow().is_empty());
}

// =============================================================
// Social
// =============================================================

#[test]
fn social_sign_in_redirects_to_provider() {
    let cell = RefCell::new(SubmissionController::<SignUpForm>::new());
    let backend = ScriptedBackend::answering([Ok(AuthSuccess::redirect_to("https://github.com/login/oauth"))]);
    let navigator = RecordingNavigator::default();

    block_on(submit_social(&cell, &backend, &navigator, SocialProvider::GitHub));

    assert_eq!(*backend.calls.borrow(), vec![Call::Social(SocialProvider::GitHub, "/".to_owned())]);
    assert_eq!(*navigator.redirects.borrow(), vec!["https://github.com/login/oauth".to_owned()]);
    assert!(navigator.routes.borrow().is_empty());
}

#[test]
fn social_failure_renders_alert() {
    let cell = RefCell::new(SubmissionController::<SignInForm>::new());
    let backend = ScriptedBackend::answering([Err(AuthError::new("Provider not configured"))]);
    let navigator = RecordingNavigator::default();

    block_on(submit_social(&cell, &backend, &navigator, SocialProvider::Google));

    assert_eq!(cell.borrow().error_message(), Some("Provider not configured"));
    assert!(navigator.redirects.borrow().is_empty());
}
