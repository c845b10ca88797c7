//! Sign-in page.
//!
//! Credentials are validated locally, exchanged for a session, and then
//! confirmed with a fresh identity check. Only a successful check navigates
//! into the private area; anything else leaves the user on the form with a
//! toast.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::net::backend::Backend;
use crate::pages::{apply_outcome, field_error, mount_flag, spawn_while_mounted};
use crate::state::session::SessionContext;
use crate::state::toast::ToastQueue;
use crate::util::guard::PRIVATE_ENTRY;
use crate::util::submit::{SubmitGate, SubmitOutcome};
use crate::util::validation::{FieldErrors, SignInInput};

pub const SIGN_IN_FAILED: &str = "Sign in failed, please try again";

/// Sign in and confirm the new session.
pub async fn submit_sign_in<B: Backend>(
    session: &SessionContext<B>,
    gate: &SubmitGate,
    input: &SignInInput,
) -> SubmitOutcome {
    let Some(_guard) = gate.try_begin() else {
        return SubmitOutcome::Busy;
    };
    let credentials = match input.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    if let Err(e) = session.backend().create_session(&credentials).await {
        log::warn!("sign-in rejected: {e}");
        return SubmitOutcome::Notify(SIGN_IN_FAILED.to_owned());
    }
    confirm_identity(session, SIGN_IN_FAILED).await
}

/// Run a fresh identity check after an auth mutation.
pub(crate) async fn confirm_identity<B: Backend>(session: &SessionContext<B>, failure: &str) -> SubmitOutcome {
    if session.check_auth_user().await {
        SubmitOutcome::Navigate(PRIVATE_ENTRY.to_owned())
    } else {
        SubmitOutcome::Notify(failure.to_owned())
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();
    let mounted = mount_flag();
    let gate = SubmitGate::new();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SignInInput { email: email.get_untracked(), password: password.get_untracked() };
        let session = session.clone();
        let gate = gate.clone();
        let in_flight = gate.clone();
        let navigate = navigate.clone();
        busy.set(true);
        spawn_while_mounted(
            &mounted,
            async move { submit_sign_in(&session, &gate, &input).await },
            move |outcome| {
                busy.set(in_flight.is_busy());
                apply_outcome(outcome, errors, toasts, &navigate);
            },
        );
    };

    view! {
        <div class="auth-form">
            <img src="/assets/images/logo.svg" alt="Snapgram"/>
            <h2 class="auth-form__title">"Log in to your account"</h2>
            <p class="auth-form__subtitle">"Welcome back! Please enter your details"</p>
            <form class="form" on:submit=on_submit>
                <label class="form-label">
                    "Email"
                    <input
                        class="form-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                {field_error(errors, "email")}
                <label class="form-label">
                    "Password"
                    <input
                        class="form-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {field_error(errors, "password")}
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    <Show when=move || busy.get() fallback=|| "Submit">
                        <Loader/>
                        " Loading..."
                    </Show>
                </button>
                <p class="auth-form__switch">
                    "Don't have an account?"
                    <A href="/sign-up">"Sign Up"</A>
                </p>
            </form>
        </div>
    }
}
