//! Desktop navigation: profile summary, section links, and logout.

#[cfg(test)]
#[path = "left_sidebar_test.rs"]
mod left_sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::app::AppSession;
use crate::state::session::AuthState;

/// One entry in the navigation bars.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
}

pub const SIDEBAR_LINKS: [NavLink; 5] = [
    NavLink { label: "Home", route: "/", icon: "/assets/icons/home.svg" },
    NavLink { label: "Explore", route: "/explore", icon: "/assets/icons/wallpaper.svg" },
    NavLink { label: "People", route: "/all-users", icon: "/assets/icons/people.svg" },
    NavLink { label: "Saved", route: "/saved", icon: "/assets/icons/bookmark.svg" },
    NavLink { label: "Create Post", route: "/create-post", icon: "/assets/icons/gallery-add.svg" },
];

pub const PLACEHOLDER_AVATAR: &str = "/assets/icons/profile-placeholder.svg";

/// A link is active only on an exact path match.
#[must_use]
pub fn is_active(pathname: &str, route: &str) -> bool {
    let trimmed = pathname.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    trimmed == route
}

/// Clear the session locally and invalidate it remotely in the background.
///
/// The route guard reacts to the cleared state and sends the user to
/// `/sign-in`.
pub(crate) fn sign_out(session: &AppSession) {
    let remote = session.sign_out();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(remote);
    #[cfg(not(feature = "hydrate"))]
    drop(remote);
}

#[component]
pub fn LeftSidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<AppSession>();
    let pathname = use_location().pathname;

    let user = move || auth.with(|s| s.session.clone());
    let profile_href = move || user().map(|u| format!("/profile/{}", u.id)).unwrap_or_default();
    let avatar = move || {
        user()
            .map(|u| u.image_url)
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned())
    };

    view! {
        <nav class="left-sidebar">
            <div class="left-sidebar__top">
                <A href="/">
                    <img src="/assets/images/logo.svg" alt="Snapgram" width="170" height="36"/>
                </A>
                <A href=profile_href>
                    <span class="left-sidebar__profile">
                        <img class="avatar avatar--lg" src=avatar alt="Profile"/>
                        <span class="left-sidebar__names">
                            <span class="left-sidebar__name">{move || user().map(|u| u.name)}</span>
                            <span class="left-sidebar__handle">
                                {move || user().map(|u| format!("@{}", u.username))}
                            </span>
                        </span>
                    </span>
                </A>
                <ul class="left-sidebar__links">
                    {SIDEBAR_LINKS
                        .iter()
                        .map(|link| {
                            let route = link.route;
                            view! {
                                <li
                                    class="left-sidebar__link"
                                    class:left-sidebar__link--active=move || pathname.with(|p| is_active(p, route))
                                >
                                    <A href=route>
                                        <img src=link.icon alt=link.label/>
                                        {link.label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
            <button class="button button--ghost" on:click=move |_| sign_out(&session)>
                <img src="/assets/icons/logout.svg" alt="logout"/>
                <span>"Logout"</span>
            </button>
        </nav>
    }
}
