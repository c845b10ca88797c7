//! Mobile header with logo, logout, and avatar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::app::AppSession;
use crate::components::left_sidebar::{PLACEHOLDER_AVATAR, sign_out};
use crate::state::session::AuthState;

#[component]
pub fn Topbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();

    let profile_href = move || auth.with(|s| s.session.as_ref().map(|u| format!("/profile/{}", u.id))).unwrap_or_default();
    let avatar = move || {
        auth.with(|s| s.session.as_ref().map(|u| u.image_url.clone()))
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned())
    };

    view! {
        <header class="topbar">
            <A href="/">
                <img src="/assets/images/logo.svg" alt="Snapgram" width="130" height="325"/>
            </A>
            <div class="topbar__actions">
                <button class="button button--ghost" on:click=move |_| sign_out(&session)>
                    <img src="/assets/icons/logout.svg" alt="logout"/>
                </button>
                <A href=profile_href>
                    <img class="avatar avatar--sm" src=avatar alt="Profile"/>
                </A>
            </div>
        </header>
    }
}
