use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::net::error::BackendError;
use crate::net::types::Account;
use crate::state::session::AuthPhase;
use crate::test_support::FakeBackend;

fn context() -> SessionContext<FakeBackend> {
    let backend = FakeBackend::new();
    backend.seed_user("Alice", "alice", "alice@example.com", "password1");
    SessionContext::new(backend)
}

fn input(email: &str, password: &str) -> SignInInput {
    SignInInput { email: email.to_owned(), password: password.to_owned() }
}

#[tokio::test]
async fn valid_credentials_navigate_to_private_entry() {
    let ctx = context();
    let outcome = submit_sign_in(&ctx, &SubmitGate::new(), &input("alice@example.com", "password1")).await;

    assert_eq!(outcome, SubmitOutcome::Navigate("/".to_owned()));
    assert_eq!(ctx.state().phase(), AuthPhase::Authenticated);
    assert_eq!(ctx.session().map(|s| s.username), Some("alice".to_owned()));
}

#[tokio::test]
async fn wrong_password_toasts_and_stays_anonymous() {
    let ctx = context();
    let outcome = submit_sign_in(&ctx, &SubmitGate::new(), &input("alice@example.com", "password2")).await;

    assert_eq!(outcome, SubmitOutcome::Notify(SIGN_IN_FAILED.to_owned()));
    assert!(!ctx.state().is_authenticated());
    assert_eq!(ctx.backend().count("get_account"), 0);
}

#[tokio::test]
async fn failed_identity_check_after_session_toasts() {
    let ctx = context();
    ctx.backend().fail("list_documents", BackendError::Network("offline".to_owned()));
    let outcome = submit_sign_in(&ctx, &SubmitGate::new(), &input("alice@example.com", "password1")).await;

    assert_eq!(outcome, SubmitOutcome::Notify(SIGN_IN_FAILED.to_owned()));
    assert!(!ctx.state().is_authenticated());
}

#[tokio::test]
async fn invalid_input_makes_no_backend_call() {
    let ctx = context();
    let outcome = submit_sign_in(&ctx, &SubmitGate::new(), &input("alice", "short")).await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors, got {outcome:?}");
    };
    assert!(errors.get("email").is_some());
    assert!(errors.get("password").is_some());
    assert_eq!(ctx.backend().total_calls(), 0);
}

#[tokio::test]
async fn resubmission_while_in_flight_is_suppressed() {
    let ctx = context();
    let gate = SubmitGate::new();
    let _in_flight = gate.try_begin();

    let outcome = submit_sign_in(&ctx, &gate, &input("alice@example.com", "password1")).await;
    assert_eq!(outcome, SubmitOutcome::Busy);
    assert_eq!(ctx.backend().total_calls(), 0);
}

#[tokio::test]
async fn gate_reopens_after_failure() {
    let ctx = context();
    let gate = SubmitGate::new();
    submit_sign_in(&ctx, &gate, &input("alice@example.com", "password2")).await;
    assert!(!gate.is_busy());

    let outcome = submit_sign_in(&ctx, &gate, &input("alice@example.com", "password1")).await;
    assert_eq!(outcome, SubmitOutcome::Navigate("/".to_owned()));
}

#[test]
fn rejected_resubmission_leaves_first_submission_busy() {
    let ctx = context();
    let identity = ctx.backend().hold_identity_checks(1).pop().unwrap();
    let submit_gate = SubmitGate::new();
    let mut cx = Context::from_waker(Waker::noop());

    let creds = input("alice@example.com", "password1");
    let mut first = pin!(submit_sign_in(&ctx, &submit_gate, &creds));
    assert!(first.as_mut().poll(&mut cx).is_pending());

    let mut second = pin!(submit_sign_in(&ctx, &submit_gate, &creds));
    assert_eq!(second.as_mut().poll(&mut cx), Poll::Ready(SubmitOutcome::Busy));
    assert!(submit_gate.is_busy());

    identity.send(Ok(Account {
        id: "acc-alice".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
    }))
    .unwrap();
    assert_eq!(first.as_mut().poll(&mut cx), Poll::Ready(SubmitOutcome::Navigate("/".to_owned())));
    assert!(!submit_gate.is_busy());
    assert_eq!(ctx.backend().count("create_session"), 1);
}
