//! Like and save controls for one post.
//!
//! Both controls update optimistically and roll back with a toast when the
//! backend call fails.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::posts;
use crate::net::types::{DocumentRef, Post};
use crate::pages::{mount_flag, spawn_while_mounted};
use crate::state::session::AuthState;
use crate::state::toast::ToastQueue;

const ACTION_FAILED: &str = "Please try again!";

#[component]
pub fn PostStats(post: Post) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let mounted = mount_flag();
    let user_id = auth.with_untracked(|s| s.session.as_ref().map(|u| u.id.clone())).unwrap_or_default();

    let current = RwSignal::new(post);
    let save_id = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    {
        let session = session.clone();
        let user_id = user_id.clone();
        let post_id = current.with_untracked(|p| p.id.clone());
        spawn_while_mounted(
            &mounted,
            async move { posts::find_save(session.backend(), &user_id, &post_id).await },
            move |found| match found {
                Ok(record) => save_id.set(record.map(|r| r.id)),
                Err(e) => log::debug!("save lookup failed: {e}"),
            },
        );
    }

    let on_like = {
        let session = session.clone();
        let user_id = user_id.clone();
        let mounted = mounted.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            let before = current.get_untracked();
            let optimistic: Vec<DocumentRef> =
                before.toggled_likes(&user_id).into_iter().map(|id| DocumentRef { id }).collect();
            current.update(|p| p.likes = optimistic);

            let session = session.clone();
            let user_id = user_id.clone();
            spawn_while_mounted(
                &mounted,
                async move {
                    let result = posts::toggle_like(session.backend(), &before, &user_id).await;
                    (before, result)
                },
                move |(before, result)| match result {
                    Ok(updated) => current.set(updated),
                    Err(e) => {
                        log::warn!("like failed: {e}");
                        current.set(before);
                        toasts.update(|q| {
                            q.error(ACTION_FAILED);
                        });
                    }
                },
            );
        }
    };

    let on_save = {
        let mounted = mounted.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let session = session.clone();
            let user_id = user_id.clone();
            let post_id = current.with_untracked(|p| p.id.clone());
            let existing = save_id.get_untracked();
            save_id.set(if existing.is_some() { None } else { Some(String::new()) });
            spawn_while_mounted(
                &mounted,
                async move {
                    let result = match &existing {
                        Some(id) => posts::unsave_post(session.backend(), id).await.map(|()| None),
                        None => posts::save_post(session.backend(), &user_id, &post_id).await.map(|r| Some(r.id)),
                    };
                    result.map_err(|e| (e, existing))
                },
                move |result| {
                    busy.set(false);
                    match result {
                        Ok(id) => save_id.set(id),
                        Err((e, existing)) => {
                            log::warn!("save toggle failed: {e}");
                            save_id.set(existing);
                            toasts.update(|q| {
                                q.error(ACTION_FAILED);
                            });
                        }
                    }
                },
            );
        }
    };

    let liked = {
        let user_id = auth.with_untracked(|s| s.session.as_ref().map(|u| u.id.clone())).unwrap_or_default();
        move || current.with(|p| p.is_liked_by(&user_id))
    };
    let like_icon = {
        let liked = liked.clone();
        move || if liked() { "/assets/icons/liked.svg" } else { "/assets/icons/like.svg" }
    };
    let save_icon = move || if save_id.with(Option::is_some) { "/assets/icons/saved.svg" } else { "/assets/icons/save.svg" };

    view! {
        <div class="post-stats">
            <button class="post-stats__like" class:post-stats__like--active=liked on:click=on_like>
                <img src=like_icon alt="like" width="20" height="20"/>
                <span>{move || current.with(|p| p.likes.len())}</span>
            </button>
            <button class="post-stats__save" disabled=move || busy.get() on:click=on_save>
                <img src=save_icon alt="save" width="20" height="20"/>
            </button>
        </div>
    }
}
