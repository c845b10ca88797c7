//! Mobile tab bar.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::left_sidebar::{NavLink, is_active};

pub const BOTTOMBAR_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", route: "/", icon: "/assets/icons/home.svg" },
    NavLink { label: "Explore", route: "/explore", icon: "/assets/icons/wallpaper.svg" },
    NavLink { label: "Saved", route: "/saved", icon: "/assets/icons/bookmark.svg" },
    NavLink { label: "Create", route: "/create-post", icon: "/assets/icons/gallery-add.svg" },
];

#[component]
pub fn Bottombar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="bottombar">
            {BOTTOMBAR_LINKS
                .iter()
                .map(|link| {
                    let route = link.route;
                    view! {
                        <A href=route>
                            <span
                                class="bottombar__link"
                                class:bottombar__link--active=move || pathname.with(|p| is_active(p, route))
                            >
                                <img src=link.icon alt=link.label width="16" height="16"/>
                                <span>{link.label}</span>
                            </span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
