//! Post presentation: the full feed card and the compact image grid.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::left_sidebar::PLACEHOLDER_AVATAR;
use crate::components::post_stats::PostStats;
use crate::net::types::Post;
use crate::state::session::AuthState;

/// Calendar date of an ISO-8601 timestamp, e.g. `2025-01-31`.
#[must_use]
pub fn short_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

fn avatar_or_placeholder(url: &str) -> String {
    if url.is_empty() { PLACEHOLDER_AVATAR.to_owned() } else { url.to_owned() }
}

/// Feed card with creator header, caption, tags, image, and stats.
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_owner = {
        let creator_id = post.creator.id.clone();
        move || auth.with(|s| s.session.as_ref().is_some_and(|u| u.id == creator_id))
    };

    let profile_href = format!("/profile/{}", post.creator.id);
    let post_href = format!("/posts/{}", post.id);
    let edit_href = format!("/update-post/{}", post.id);
    let avatar = avatar_or_placeholder(&post.creator.image_url);
    let date = short_date(&post.created_at).to_owned();
    let tags = post.tags.clone();
    let caption = post.caption.clone();
    let image = post.image_url.clone();

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <A href=profile_href>
                    <img class="avatar avatar--md" src=avatar alt="creator"/>
                </A>
                <div class="post-card__meta">
                    <p class="post-card__creator">{post.creator.name.clone()}</p>
                    <p class="post-card__date">
                        {date}
                        " • "
                        {post.location.clone()}
                    </p>
                </div>
                <Show when=is_owner>
                    <A href=edit_href.clone()>
                        <img src="/assets/icons/edit.svg" alt="edit" width="20" height="20"/>
                    </A>
                </Show>
            </header>
            <A href=post_href>
                <p class="post-card__caption">{caption}</p>
                <ul class="post-card__tags">
                    {tags.into_iter().map(|tag| view! { <li>"#" {tag}</li> }).collect_view()}
                </ul>
                <img class="post-card__image" src=image alt="post image"/>
            </A>
            <PostStats post=post/>
        </article>
    }
}

/// Image grid linking to each post's detail page.
#[component]
pub fn PostGrid(posts: Vec<Post>, #[prop(optional)] show_stats: bool) -> impl IntoView {
    view! {
        <ul class="post-grid">
            {posts
                .into_iter()
                .map(|post| {
                    let href = format!("/posts/{}", post.id);
                    let image = post.image_url.clone();
                    view! {
                        <li class="post-grid__item">
                            <A href=href>
                                <img class="post-grid__image" src=image alt="post"/>
                            </A>
                            {show_stats.then(|| view! { <PostStats post=post/> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
