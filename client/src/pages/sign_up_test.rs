use super::*;
use crate::config::Collection;
use crate::net::error::BackendError;
use crate::test_support::FakeBackend;
use crate::util::validation::TOO_SHORT;

fn input(name: &str) -> SignUpInput {
    SignUpInput {
        name: name.to_owned(),
        username: "bobby".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "password1".to_owned(),
    }
}

#[tokio::test]
async fn one_character_name_is_blocked_without_backend_call() {
    let ctx = SessionContext::new(FakeBackend::new());
    let outcome = submit_sign_up(&ctx, &SubmitGate::new(), &input("B")).await;

    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("expected validation errors, got {outcome:?}");
    };
    assert_eq!(errors.get("name"), Some(TOO_SHORT));
    assert_eq!(ctx.backend().total_calls(), 0);
}

#[tokio::test]
async fn successful_sign_up_signs_in_and_navigates() {
    let ctx = SessionContext::new(FakeBackend::new());
    let outcome = submit_sign_up(&ctx, &SubmitGate::new(), &input("Bob")).await;

    assert_eq!(outcome, SubmitOutcome::Navigate("/".to_owned()));
    assert_eq!(ctx.session().map(|s| s.username), Some("bobby".to_owned()));
    assert_eq!(ctx.backend().documents(Collection::Users).len(), 1);
}

#[tokio::test]
async fn account_creation_failure_toasts() {
    let ctx = SessionContext::new(FakeBackend::new());
    ctx.backend().fail("create_account", BackendError::Service { status: 409, message: "exists".to_owned() });
    let outcome = submit_sign_up(&ctx, &SubmitGate::new(), &input("Bob")).await;

    assert_eq!(outcome, SubmitOutcome::Notify(SIGN_UP_FAILED.to_owned()));
    assert_eq!(ctx.backend().count("create_session"), 0);
    assert!(!ctx.state().is_authenticated());
}

#[tokio::test]
async fn session_failure_after_sign_up_toasts_sign_in_failure() {
    let ctx = SessionContext::new(FakeBackend::new());
    ctx.backend().fail("create_session", BackendError::Network("offline".to_owned()));
    let outcome = submit_sign_up(&ctx, &SubmitGate::new(), &input("Bob")).await;

    assert_eq!(outcome, SubmitOutcome::Notify(SIGN_IN_FAILED.to_owned()));
    assert_eq!(ctx.backend().count("get_account"), 0);
}
