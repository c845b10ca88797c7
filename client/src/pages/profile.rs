//! Profile page: header, stats, and a posts / liked-posts tab.
//!
//! The liked-posts tab lives at `/profile/:id/liked-posts` and is only
//! offered on the viewer's own profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params_map};

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::post_card::PostGrid;
use crate::net::backend::Backend;
use crate::net::types::{Post, User};
use crate::net::{posts, users};
use crate::pages::{mount_flag, spawn_latest};
use crate::state::session::AuthState;
use crate::util::submit::LoadSequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileTab {
    Posts,
    Liked,
}

/// Tab selected by a profile path.
#[must_use]
pub fn profile_tab(path: &str) -> ProfileTab {
    if path.trim_end_matches('/').ends_with("/liked-posts") { ProfileTab::Liked } else { ProfileTab::Posts }
}

/// Posts shown under the selected tab of `user_id`'s profile.
pub async fn load_tab<B: Backend>(backend: &B, user_id: &str, tab: ProfileTab) -> Result<Vec<Post>, String> {
    let result = match tab {
        ProfileTab::Posts => posts::user_posts(backend, user_id).await,
        ProfileTab::Liked => users::liked_posts(backend, user_id).await,
    };
    result.map_err(|e| {
        log::warn!("profile {tab:?} for {user_id} failed: {e}");
        e.to_string()
    })
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let pathname = use_location().pathname;
    let mounted = mount_flag();

    let user = RwSignal::new(None::<Result<User, String>>);
    let shown = RwSignal::new(None::<Result<Vec<Post>, String>>);
    let user_loads = LoadSequence::new();
    let tab_loads = LoadSequence::new();
    let tab = Memo::new(move |_| pathname.with(|p| profile_tab(p)));
    let profile_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let is_own = move || auth.with(|s| s.session.as_ref().is_some_and(|u| u.id == profile_id.get()));

    {
        let session = session.clone();
        let mounted = mounted.clone();
        Effect::new(move || {
            let id = profile_id.get();
            user.set(None);
            let session = session.clone();
            spawn_latest(
                &mounted,
                &user_loads,
                async move { users::get_user(session.backend(), &id).await.map_err(|e| e.to_string()) },
                move |result| user.set(Some(result)),
            );
        });
    }

    Effect::new(move || {
        let id = profile_id.get();
        let selected = tab.get();
        shown.set(None);
        let session = session.clone();
        spawn_latest(
            &mounted,
            &tab_loads,
            async move { load_tab(session.backend(), &id, selected).await },
            move |result| shown.set(Some(result)),
        );
    });

    view! {
        <div class="profile">
            {move || match user.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Could not load profile: " {e}</p> }.into_any(),
                Some(Ok(profile)) => view! {
                    <header class="profile__header">
                        <img class="avatar avatar--xl" src=profile.image_url.clone() alt="profile"/>
                        <div class="profile__identity">
                            <h1>{profile.name.clone()}</h1>
                            <p class="profile__handle">"@" {profile.username.clone()}</p>
                            <p class="profile__stats">
                                <span class="profile__stat-value">
                                    {move || shown.with(|s| s.as_ref().and_then(|r| r.as_ref().ok()).map_or(0, Vec::len))}
                                </span>
                                {move || if tab.get() == ProfileTab::Liked { " Liked" } else { " Posts" }}
                            </p>
                            <p class="profile__bio">{profile.bio.clone().unwrap_or_default()}</p>
                        </div>
                        <Show when=is_own>
                            <A href=format!("/update-profile/{}", profile_id.get_untracked())>
                                <span class="button button--dark">
                                    <img src="/assets/icons/edit.svg" alt="edit" width="20" height="20"/>
                                    "Edit Profile"
                                </span>
                            </A>
                        </Show>
                    </header>
                }
                .into_any(),
            }}
            <Show when=is_own>
                <nav class="profile__tabs">
                    <A href=move || format!("/profile/{}", profile_id.get())>
                        <span class="profile__tab" class:profile__tab--active=move || tab.get() == ProfileTab::Posts>
                            "Posts"
                        </span>
                    </A>
                    <A href=move || format!("/profile/{}/liked-posts", profile_id.get())>
                        <span class="profile__tab" class:profile__tab--active=move || tab.get() == ProfileTab::Liked>
                            "Liked Posts"
                        </span>
                    </A>
                </nav>
            </Show>
            {move || match shown.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Could not load posts: " {e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p class="page-empty">"No posts yet"</p> }.into_any(),
                Some(Ok(list)) => view! { <PostGrid posts=list/> }.into_any(),
            }}
        </div>
    }
}
