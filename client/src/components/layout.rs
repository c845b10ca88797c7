//! Public and private layout shells.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes are nested under exactly one of these layouts. Each layout asks
//! the guard whether its area may render for the current auth phase: while
//! loading it shows a neutral placeholder, when the area is wrong it renders
//! nothing and the installed redirect moves the user to the other entry
//! point, and otherwise it renders its chrome around the matched child
//! route. Paths no route matches fall through to [`NotFound`], which waits
//! for the first identity check the same way.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::bottombar::Bottombar;
use crate::components::left_sidebar::LeftSidebar;
use crate::components::loader::Loader;
use crate::components::topbar::Topbar;
use crate::state::session::AuthState;
use crate::util::guard::{Area, GuardDecision, decide, decide_path, install_guard_redirect};

fn guard_signal(area: Area) -> Signal<GuardDecision> {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, area, use_navigate());
    Signal::derive(move || decide(auth.with(AuthState::phase), area))
}

#[component]
fn GuardPlaceholder() -> impl IntoView {
    view! {
        <div class="guard-placeholder">
            <Loader/>
        </div>
    }
}

/// Layout for `/sign-in` and `/sign-up`.
#[component]
pub fn AuthLayout() -> impl IntoView {
    let decision = guard_signal(Area::Public);

    move || match decision.get() {
        GuardDecision::Placeholder => view! { <GuardPlaceholder/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => view! {
            <section class="auth-layout">
                <div class="auth-layout__form">
                    <Outlet/>
                </div>
                <img class="auth-layout__art" src="/assets/images/side-img.svg" alt="Snapgram"/>
            </section>
        }
        .into_any(),
    }
}

/// Layout for every signed-in route.
#[component]
pub fn RootLayout() -> impl IntoView {
    let decision = guard_signal(Area::Private);

    move || match decision.get() {
        GuardDecision::Placeholder => view! { <GuardPlaceholder/> }.into_any(),
        GuardDecision::Redirect(_) => ().into_any(),
        GuardDecision::Render => view! {
            <div class="root-layout">
                <Topbar/>
                <LeftSidebar/>
                <section class="root-layout__content">
                    <Outlet/>
                </section>
                <Bottombar/>
            </div>
        }
        .into_any(),
    }
}

/// Fallback for paths no route matches.
#[component]
pub fn NotFound() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    move || match pathname.with(|path| decide_path(auth.with(AuthState::phase), path)) {
        GuardDecision::Placeholder => view! { <GuardPlaceholder/> }.into_any(),
        GuardDecision::Render | GuardDecision::Redirect(_) => {
            view! { <p class="page-empty">"Page not found."</p> }.into_any()
        }
    }
}
