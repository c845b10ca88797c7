//! Edit the signed-in user's profile.
//!
//! After a successful update the session is re-checked so the sidebar and
//! top bar pick up the new name and avatar.

#[cfg(test)]
#[path = "update_profile_test.rs"]
mod update_profile_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::AppSession;
use crate::components::file_uploader::FileUploader;
use crate::components::loader::Loader;
use crate::net::backend::Backend;
use crate::net::types::{FileUpload, User};
use crate::net::users;
use crate::pages::{apply_outcome, field_error, mount_flag, spawn_while_mounted};
use crate::state::session::{AuthState, SessionContext};
use crate::state::toast::ToastQueue;
use crate::util::submit::{SubmitGate, SubmitOutcome};
use crate::util::validation::{FieldErrors, ProfileInput};

pub const UPDATE_FAILED: &str = "Please try again";
pub const NOT_YOUR_PROFILE: &str = "You can only edit your own profile";

/// Validate and save a profile edit for the signed-in user.
pub async fn submit_profile<B: Backend>(
    session: &SessionContext<B>,
    gate: &SubmitGate,
    current: &User,
    input: &ProfileInput,
) -> SubmitOutcome {
    let Some(_guard) = gate.try_begin() else {
        return SubmitOutcome::Busy;
    };
    if session.session().is_none_or(|s| s.id != current.id) {
        return SubmitOutcome::Notify(NOT_YOUR_PROFILE.to_owned());
    }
    let draft = match input.validate() {
        Ok(draft) => draft,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    if let Err(e) = users::update_profile(session.backend(), current, &draft).await {
        log::warn!("profile update failed: {e}");
        return SubmitOutcome::Notify(UPDATE_FAILED.to_owned());
    }
    session.check_auth_user().await;
    SubmitOutcome::Navigate(format!("/profile/{}", current.id))
}

#[component]
pub fn UpdateProfilePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let mounted = mount_flag();
    let user = RwSignal::new(None::<Result<User, String>>);

    let user_id = params.read_untracked().get("id").unwrap_or_default();
    spawn_while_mounted(
        &mounted,
        async move { users::get_user(session.backend(), &user_id).await.map_err(|e| e.to_string()) },
        move |result| user.set(Some(result)),
    );

    view! {
        <div class="update-profile">
            <h2 class="page-title">
                <img src="/assets/icons/edit.svg" alt="edit" width="36" height="36"/>
                "Edit Profile"
            </h2>
            {move || match user.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Could not load profile: " {e}</p> }.into_any(),
                Some(Ok(current)) => view! { <ProfileForm current=current/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProfileForm(current: User) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();
    let mounted = mount_flag();
    let gate = SubmitGate::new();

    let name = RwSignal::new(current.name.clone());
    let username = RwSignal::new(current.username.clone());
    let email = current.email.clone();
    let bio = RwSignal::new(current.bio.clone().unwrap_or_default());
    let file = RwSignal::new(None::<FileUpload>);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let media_url = current.image_url.clone();
    let is_own = auth.with_untracked(|s| s.session.as_ref().is_some_and(|u| u.id == current.id));

    let on_submit = {
        let email = email.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = ProfileInput {
                name: name.get_untracked(),
                username: username.get_untracked(),
                email: email.clone(),
                bio: bio.get_untracked(),
                file: file.get_untracked(),
            };
            let session = session.clone();
            let gate = gate.clone();
            let in_flight = gate.clone();
            let navigate = navigate.clone();
            let current = current.clone();
            busy.set(true);
            spawn_while_mounted(
                &mounted,
                async move { submit_profile(&session, &gate, &current, &input).await },
                move |outcome| {
                    busy.set(in_flight.is_busy());
                    apply_outcome(outcome, errors, toasts, &navigate);
                },
            );
        }
    };

    view! {
        <Show when=move || is_own fallback=|| view! { <p class="page-error">{NOT_YOUR_PROFILE}</p> }>
            <form class="form profile-form" on:submit=on_submit.clone()>
                <FileUploader on_change=Callback::new(move |picked| file.set(picked)) media_url=media_url.clone()/>
                <label class="form-label">
                    "Name"
                    <input
                        class="form-input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                {field_error(errors, "name")}
                <label class="form-label">
                    "Username"
                    <input
                        class="form-input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                {field_error(errors, "username")}
                <label class="form-label">
                    "Email"
                    <input class="form-input" type="email" value=email.clone() disabled/>
                </label>
                {field_error(errors, "email")}
                <label class="form-label">
                    "Bio"
                    <textarea
                        class="form-textarea"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </label>
                {field_error(errors, "bio")}
                <div class="post-form__actions">
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Loading..." } else { "Update Profile" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}
