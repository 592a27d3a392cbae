use super::*;

use futures::executor::block_on;

#[test]
fn resolver_delivers_success() {
    let (resolver, pending) = outcome_channel();
    resolver.succeed();
    assert_eq!(block_on(pending), Ok(AuthSuccess::default()));
}

#[test]
fn resolver_delivers_failure_message() {
    let (resolver, pending) = outcome_channel();
    resolver.fail(AuthError::new("Invalid credentials"));
    let err = block_on(pending).unwrap_err();
    assert_eq!(err.display_message(), "Invalid credentials");
}

#[test]
fn ready_outcome_resolves_immediately() {
    let pending = PendingOutcome::ready(Ok(AuthSuccess::redirect_to("https://github.com/login")));
    let success = block_on(pending).unwrap();
    assert_eq!(success.redirect.as_deref(), Some("https://github.com/login"));
}

#[test]
fn dropped_resolver_leaves_outcome_pending() {
    let (resolver, mut pending) = outcome_channel();
    drop(resolver);
    let waker = futures::task::noop_waker();
    let mut cx = Context::from_waker(&waker);
    assert!(Pin::new(&mut pending).poll(&mut cx).is_pending());
    assert!(Pin::new(&mut pending).poll(&mut cx).is_pending());
}

#[test]
fn resolving_after_receiver_dropped_is_silent() {
    let (resolver, pending) = outcome_channel();
    drop(pending);
    resolver.fail(AuthError::unspecified());
}

#[test]
fn error_without_message_uses_fallback() {
    assert_eq!(AuthError::unspecified().display_message(), FALLBACK_ERROR_MESSAGE);
    assert_eq!(AuthError::new("   ").display_message(), FALLBACK_ERROR_MESSAGE);
    assert!(AuthError::new("   ").message().is_none());
}

#[test]
fn error_display_matches_rendered_message() {
    assert_eq!(AuthError::new("User already exists").to_string(), "User already exists");
    assert_eq!(AuthError::unspecified().to_string(), FALLBACK_ERROR_MESSAGE);
}
