//! Shared create/edit form for posts.
//!
//! The same form backs `/create-post` (no existing post, image required) and
//! `/update-post/:id` (prefilled, image optional). On success the user lands
//! on the post's detail page; on failure a toast is shown and every field
//! keeps what was typed.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::components::file_uploader::FileUploader;
use crate::net::backend::Backend;
use crate::net::posts;
use crate::net::types::{FileUpload, Post};
use crate::pages::{apply_outcome, field_error, mount_flag, spawn_while_mounted};
use crate::state::session::AuthState;
use crate::state::toast::ToastQueue;
use crate::util::submit::{SubmitGate, SubmitOutcome};
use crate::util::validation::{FieldErrors, PostAction, PostInput};

pub const CREATE_FAILED: &str = "Something went wrong";
pub const UPDATE_FAILED: &str = "Please try again!";

/// Validate and write a post. `existing` selects update over create.
pub async fn submit_post<B: Backend>(
    backend: &B,
    gate: &SubmitGate,
    creator_id: &str,
    existing: Option<&Post>,
    input: &PostInput,
) -> SubmitOutcome {
    let Some(_guard) = gate.try_begin() else {
        return SubmitOutcome::Busy;
    };
    let action = if existing.is_some() { PostAction::Update } else { PostAction::Create };
    let draft = match input.validate(action) {
        Ok(draft) => draft,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    let result = match existing {
        Some(post) => posts::update_post(backend, post, &draft).await,
        None => posts::create_post(backend, creator_id, &draft).await,
    };
    match result {
        Ok(post) => SubmitOutcome::Navigate(format!("/posts/{}", post.id)),
        Err(e) => {
            log::warn!("post {action:?} failed: {e}");
            let title = match action {
                PostAction::Create => CREATE_FAILED,
                PostAction::Update => UPDATE_FAILED,
            };
            SubmitOutcome::Notify(title.to_owned())
        }
    }
}

#[component]
pub fn PostForm(#[prop(optional)] post: Option<Post>) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let navigate = use_navigate();
    let mounted = mount_flag();
    let gate = SubmitGate::new();

    let caption = RwSignal::new(post.as_ref().map(|p| p.caption.clone()).unwrap_or_default());
    let location = RwSignal::new(post.as_ref().map(|p| p.location.clone()).unwrap_or_default());
    let tags = RwSignal::new(post.as_ref().map(|p| p.tags.join(",")).unwrap_or_default());
    let file = RwSignal::new(None::<FileUpload>);
    let errors = RwSignal::new(FieldErrors::default());
    let busy = RwSignal::new(false);
    let media_url = post.as_ref().map(|p| p.image_url.clone()).unwrap_or_default();
    let submit_label = if post.is_some() { "Update Post" } else { "Create Post" };

    let on_submit = {
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = PostInput {
                caption: caption.get_untracked(),
                location: location.get_untracked(),
                tags: tags.get_untracked(),
                file: file.get_untracked(),
            };
            let creator_id = auth.with_untracked(|s| s.session.as_ref().map(|u| u.id.clone())).unwrap_or_default();
            let existing = post.clone();
            let session = session.clone();
            let gate = gate.clone();
            let in_flight = gate.clone();
            let navigate = navigate.clone();
            busy.set(true);
            spawn_while_mounted(
                &mounted,
                async move { submit_post(session.backend(), &gate, &creator_id, existing.as_ref(), &input).await },
                move |outcome| {
                    busy.set(in_flight.is_busy());
                    apply_outcome(outcome, errors, toasts, &navigate);
                },
            );
        }
    };

    let on_cancel = move |_| navigate("/", NavigateOptions::default());

    view! {
        <form class="form post-form" on:submit=on_submit>
            <label class="form-label">
                "Caption"
                <textarea
                    class="form-textarea"
                    prop:value=move || caption.get()
                    on:input=move |ev| caption.set(event_target_value(&ev))
                ></textarea>
            </label>
            {field_error(errors, "caption")}
            <div class="form-label">
                "Add photos"
                <FileUploader on_change=Callback::new(move |picked| file.set(picked)) media_url=media_url/>
            </div>
            {field_error(errors, "file")}
            <label class="form-label">
                "Add location"
                <input
                    class="form-input"
                    type="text"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
            </label>
            {field_error(errors, "location")}
            <label class="form-label">
                "Add tags (separated by comma \", \")"
                <input
                    class="form-input"
                    type="text"
                    placeholder="Art, Expression"
                    prop:value=move || tags.get()
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />
            </label>
            <div class="post-form__actions">
                <button class="button button--dark" type="button" on:click=on_cancel>"Cancel"</button>
                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Loading..." } else { submit_label }}
                </button>
            </div>
        </form>
    }
}
