//! Sign-up page.
//!
//! Creates the account and its profile document, signs in with the same
//! credentials, then confirms the session exactly like the sign-in page.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::net::backend::Backend;
use crate::net::types::Credentials;
use crate::net::users;
use crate::pages::sign_in::{SIGN_IN_FAILED, confirm_identity};
use crate::pages::{apply_outcome, field_error, mount_flag, spawn_while_mounted};
use crate::state::session::SessionContext;
use crate::state::toast::ToastQueue;
use crate::util::submit::{SubmitGate, SubmitOutcome};
use crate::util::validation::{FieldErrors, SignUpInput};

pub const SIGN_UP_FAILED: &str = "Sign up failed, please try again";

/// Register, sign in, and confirm the new session.
pub async fn submit_sign_up<B: Backend>(
    session: &SessionContext<B>,
    gate: &SubmitGate,
    input: &SignUpInput,
) -> SubmitOutcome {
    let Some(_guard) = gate.try_begin() else {
        return SubmitOutcome::Busy;
    };
    let account = match input.validate() {
        Ok(account) => account,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    if let Err(e) = users::create_user_account(session.backend(), &account).await {
        log::warn!("sign-up failed: {e}");
        return SubmitOutcome::Notify(SIGN_UP_FAILED.to_owned());
    }
    let credentials = Credentials { email: account.email, password: account.password };
    if let Err(e) = session.backend().create_session(&credentials).await {
        log::warn!("sign-in after sign-up failed: {e}");
        return SubmitOutcome::Notify(SIGN_IN_FAILED.to_owned());
    }
    confirm_identity(session, SIGN_IN_FAILED).await
}

#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();
    let mounted = mount_flag();
    let gate = SubmitGate::new();

    let name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = SignUpInput {
            name: name.get_untracked(),
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let session = session.clone();
        let gate = gate.clone();
        let in_flight = gate.clone();
        let navigate = navigate.clone();
        busy.set(true);
        spawn_while_mounted(
            &mounted,
            async move { submit_sign_up(&session, &gate, &input).await },
            move |outcome| {
                busy.set(in_flight.is_busy());
                apply_outcome(outcome, errors, toasts, &navigate);
            },
        );
    };

    let text_field = move |label: &'static str, field: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="form-label">
                {label}
                <input
                    class="form-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            {field_error(errors, field)}
        }
    };

    view! {
        <div class="auth-form">
            <img src="/assets/images/logo.svg" alt="Snapgram"/>
            <h2 class="auth-form__title">"Create a new account"</h2>
            <p class="auth-form__subtitle">"To use Snapgram, please enter your details"</p>
            <form class="form" on:submit=on_submit>
                {text_field("Name", "name", "text", name)}
                {text_field("Username", "username", "text", username)}
                {text_field("Email", "email", "email", email)}
                {text_field("Password", "password", "password", password)}
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    <Show when=move || busy.get() fallback=|| "Sign Up">
                        <Loader/>
                        " Loading..."
                    </Show>
                </button>
                <p class="auth-form__switch">
                    "Already have an account?"
                    <A href="/sign-in">"Log in"</A>
                </p>
            </form>
        </div>
    }
}
