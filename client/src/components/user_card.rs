//! Creator tile used by the people list and the home page sidebar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::left_sidebar::PLACEHOLDER_AVATAR;
use crate::net::types::User;

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let href = format!("/profile/{}", user.id);
    let avatar = if user.image_url.is_empty() { PLACEHOLDER_AVATAR.to_owned() } else { user.image_url };

    view! {
        <A href=href>
            <span class="user-card">
                <img class="avatar avatar--lg" src=avatar alt="creator"/>
                <span class="user-card__name">{user.name}</span>
                <span class="user-card__handle">"@" {user.username}</span>
                <span class="button button--primary button--sm">"Follow"</span>
            </span>
        </A>
    }
}
