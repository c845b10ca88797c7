//! Single post view with owner actions and more posts by the same creator.

#[cfg(test)]
#[path = "post_details_test.rs"]
mod post_details_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::post_card::{PostGrid, short_date};
use crate::components::post_stats::PostStats;
use crate::net::backend::Backend;
use crate::net::posts;
use crate::net::types::Post;
use crate::pages::{mount_flag, spawn_latest, spawn_while_mounted};
use crate::state::session::AuthState;
use crate::state::toast::ToastQueue;
use crate::util::guard::PRIVATE_ENTRY;
use crate::util::submit::{LoadSequence, SubmitGate, SubmitOutcome};

pub const DELETE_FAILED: &str = "Could not delete post, please try again";

/// Delete a post owned by `user_id` and leave the page.
pub async fn remove_post<B: Backend>(backend: &B, gate: &SubmitGate, user_id: &str, post: &Post) -> SubmitOutcome {
    let Some(_guard) = gate.try_begin() else {
        return SubmitOutcome::Busy;
    };
    if post.creator.id != user_id {
        return SubmitOutcome::Notify(DELETE_FAILED.to_owned());
    }
    match posts::delete_post(backend, post).await {
        Ok(()) => SubmitOutcome::Navigate(PRIVATE_ENTRY.to_owned()),
        Err(e) => {
            log::warn!("delete of post {} failed: {e}", post.id);
            SubmitOutcome::Notify(DELETE_FAILED.to_owned())
        }
    }
}

/// Fetch a post and the rest of its creator's posts.
pub async fn load_post<B: Backend>(backend: &B, post_id: &str) -> (Result<Post, String>, Vec<Post>) {
    let loaded = posts::get_post(backend, post_id).await;
    let more = match &loaded {
        Ok(p) => posts::user_posts(backend, &p.creator.id).await.unwrap_or_else(|e| {
            log::warn!("related posts for {post_id} failed: {e}");
            Vec::new()
        }),
        Err(_) => Vec::new(),
    };
    (loaded.map_err(|e| e.to_string()), related_posts(more, post_id))
}

/// Other posts by the same creator, excluding `post_id`.
#[must_use]
pub fn related_posts(all: Vec<Post>, post_id: &str) -> Vec<Post> {
    all.into_iter().filter(|p| p.id != post_id).collect()
}

#[component]
pub fn PostDetailsPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let mounted = mount_flag();
    let gate = SubmitGate::new();
    let loads = LoadSequence::new();

    let post = RwSignal::new(None::<Result<Post, String>>);
    let related = RwSignal::new(Vec::<Post>::new());
    let user_id = move || auth.with(|s| s.session.as_ref().map(|u| u.id.clone())).unwrap_or_default();

    {
        let session = session.clone();
        let mounted = mounted.clone();
        Effect::new(move || {
            let Some(post_id) = params.read().get("id") else {
                return;
            };
            post.set(None);
            related.set(Vec::new());
            let session = session.clone();
            spawn_latest(
                &mounted,
                &loads,
                async move { load_post(session.backend(), &post_id).await },
                move |(loaded, more)| {
                    related.set(more);
                    post.set(Some(loaded));
                },
            );
        });
    }

    let on_delete = move |_| {
        let Some(Ok(current)) = post.get_untracked() else {
            return;
        };
        let session = session.clone();
        let gate = gate.clone();
        let navigate = navigate.clone();
        let owner = user_id();
        spawn_while_mounted(
            &mounted,
            async move { remove_post(session.backend(), &gate, &owner, &current).await },
            move |outcome| match outcome {
                SubmitOutcome::Navigate(to) => navigate(&to, NavigateOptions::default()),
                SubmitOutcome::Notify(title) => toasts.update(|q| {
                    q.error(title);
                }),
                SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => {}
            },
        );
    };

    view! {
        <div class="post-details">
            {move || match post.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Could not load post: " {e}</p> }.into_any(),
                Some(Ok(current)) => {
                    let is_owner = current.creator.id == user_id();
                    let edit_href = format!("/update-post/{}", current.id);
                    let profile_href = format!("/profile/{}", current.creator.id);
                    let creator_image = current.creator.image_url.clone();
                    let creator_name = current.creator.name.clone();
                    let on_delete = on_delete.clone();
                    view! {
                        <article class="post-details__card">
                            <img class="post-details__image" src=current.image_url.clone() alt="post"/>
                            <div class="post-details__info">
                                <header class="post-details__header">
                                    <A href=profile_href>
                                        <span class="post-details__creator">
                                            <img class="avatar avatar--md" src=creator_image alt="creator"/>
                                            <span>{creator_name}</span>
                                        </span>
                                    </A>
                                    <span class="post-details__date">
                                        {short_date(&current.created_at).to_owned()}
                                        " • "
                                        {current.location.clone()}
                                    </span>
                                    <Show when=move || is_owner>
                                        <A href=edit_href.clone()>
                                            <img src="/assets/icons/edit.svg" alt="edit" width="24" height="24"/>
                                        </A>
                                        <button class="button button--ghost" on:click=on_delete.clone()>
                                            <img src="/assets/icons/delete.svg" alt="delete" width="24" height="24"/>
                                        </button>
                                    </Show>
                                </header>
                                <p class="post-details__caption">{current.caption.clone()}</p>
                                <ul class="post-card__tags">
                                    {current.tags.iter().map(|tag| view! { <li>"#" {tag.clone()}</li> }).collect_view()}
                                </ul>
                                <PostStats post=current.clone()/>
                            </div>
                        </article>
                    }
                    .into_any()
                }
            }}
            <h3 class="post-details__more">"More Related Posts"</h3>
            {move || view! { <PostGrid posts=related.get()/> }}
        </div>
    }
}
