//! Route guard: which layout subtree may render for the current auth phase.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both layouts (`AuthLayout` for the public area, `RootLayout` for the
//! private one) call [`install_guard_redirect`] and render according to
//! [`decide`]. The router fallback asks [`decide_path`] so unknown paths
//! also wait for the first identity check. The decision is a pure function of the auth phase and the
//! area being requested, evaluated again on every navigation and every auth
//! transition.
//!
//! While the first identity check is pending the guard answers
//! `Placeholder` for every area and never redirects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{AuthPhase, AuthState};

/// Where anonymous visitors land.
pub const PUBLIC_ENTRY: &str = "/sign-in";
/// Where signed-in users land.
pub const PRIVATE_ENTRY: &str = "/";

/// Which half of the navigable surface a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Area {
    Public,
    Private,
}

/// Every navigable route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    SignIn,
    SignUp,
    Home,
    Explore,
    Saved,
    AllUsers,
    CreatePost,
    UpdatePost(String),
    PostDetails(String),
    Profile(String),
    LikedPosts(String),
    UpdateProfile(String),
}

impl AppRoute {
    /// Parse a location path. Query strings, fragments, and a trailing
    /// slash are ignored. Returns `None` for paths the app does not serve.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let id = |s: &str| s.to_owned();
        match segments.as_slice() {
            [] => Some(Self::Home),
            ["sign-in"] => Some(Self::SignIn),
            ["sign-up"] => Some(Self::SignUp),
            ["explore"] => Some(Self::Explore),
            ["saved"] => Some(Self::Saved),
            ["all-users"] => Some(Self::AllUsers),
            ["create-post"] => Some(Self::CreatePost),
            ["update-post", post] => Some(Self::UpdatePost(id(post))),
            ["posts", post] => Some(Self::PostDetails(id(post))),
            ["profile", user] => Some(Self::Profile(id(user))),
            ["profile", user, "liked-posts"] => Some(Self::LikedPosts(id(user))),
            ["update-profile", user] => Some(Self::UpdateProfile(id(user))),
            _ => None,
        }
    }

    #[must_use]
    pub fn area(&self) -> Area {
        match self {
            Self::SignIn | Self::SignUp => Area::Public,
            _ => Area::Private,
        }
    }
}

/// What a layout should do for the requested area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth is still resolving: show a neutral placeholder.
    Placeholder,
    /// Render the requested subtree.
    Render,
    /// Navigate elsewhere without rendering the subtree.
    Redirect(&'static str),
}

/// Decide what to do with a request for `area` in the given auth phase.
#[must_use]
pub fn decide(phase: AuthPhase, area: Area) -> GuardDecision {
    match (phase, area) {
        (AuthPhase::Loading, _) => GuardDecision::Placeholder,
        (AuthPhase::Authenticated, Area::Private) | (AuthPhase::Unauthenticated, Area::Public) => {
            GuardDecision::Render
        }
        (AuthPhase::Authenticated, Area::Public) => GuardDecision::Redirect(PRIVATE_ENTRY),
        (AuthPhase::Unauthenticated, Area::Private) => GuardDecision::Redirect(PUBLIC_ENTRY),
    }
}

/// Decide for a raw path. Unknown paths render (the not-found view) in
/// every settled phase.
#[must_use]
pub fn decide_path(phase: AuthPhase, path: &str) -> GuardDecision {
    match AppRoute::parse(path) {
        Some(route) => decide(phase, route.area()),
        None if phase == AuthPhase::Loading => GuardDecision::Placeholder,
        None => GuardDecision::Render,
    }
}

/// Navigate away whenever the guard says the current layout may not render.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, area: Area, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let phase = auth.with(AuthState::phase);
        if let GuardDecision::Redirect(to) = decide(phase, area) {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
