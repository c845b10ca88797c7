//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the session context for the lifetime of the page. It mirrors
//! every applied auth transition into an `RwSignal<AuthState>` for the route
//! guard and views, runs the single boot-time identity check in the browser,
//! and nests every route under either the public or the private layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::{AuthLayout, NotFound, RootLayout};
use crate::components::toaster::Toaster;
use crate::config::BackendConfig;
use crate::net::api::HttpBackend;
use crate::pages::{
    all_users::AllUsersPage, create_post::CreatePostPage, explore::ExplorePage, home::HomePage,
    post_details::PostDetailsPage, profile::ProfilePage, saved::SavedPage, sign_in::SignInPage,
    sign_up::SignUpPage, update_post::UpdatePostPage, update_profile::UpdateProfilePage,
};
use crate::state::session::{AuthState, SessionContext};
use crate::state::toast::ToastQueue;

/// Session context type shared through Leptos context.
pub type AppSession = SessionContext<HttpBackend>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(HttpBackend::new(BackendConfig::from_build_env()));
    let auth = RwSignal::new(AuthState::booting());
    let toasts = RwSignal::new(ToastQueue::default());
    session.subscribe(move |state| {
        let _ = auth.try_set(state.clone());
    });

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.check_auth_user().await;
        });
    }

    provide_context(session);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/snapgram.css"/>
        <Title text="Snapgram"/>

        <main class="app">
            <Router>
                <Routes fallback=|| view! { <NotFound/> }>
                    <ParentRoute path=StaticSegment("") view=AuthLayout>
                        <Route path=StaticSegment("sign-in") view=SignInPage/>
                        <Route path=StaticSegment("sign-up") view=SignUpPage/>
                    </ParentRoute>
                    <ParentRoute path=StaticSegment("") view=RootLayout>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("explore") view=ExplorePage/>
                        <Route path=StaticSegment("saved") view=SavedPage/>
                        <Route path=StaticSegment("all-users") view=AllUsersPage/>
                        <Route path=StaticSegment("create-post") view=CreatePostPage/>
                        <Route path=(StaticSegment("update-post"), ParamSegment("id")) view=UpdatePostPage/>
                        <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostDetailsPage/>
                        <Route path=(StaticSegment("profile"), ParamSegment("id")) view=ProfilePage/>
                        <Route
                            path=(StaticSegment("profile"), ParamSegment("id"), StaticSegment("liked-posts"))
                            view=ProfilePage
                        />
                        <Route path=(StaticSegment("update-profile"), ParamSegment("id")) view=UpdateProfilePage/>
                    </ParentRoute>
                </Routes>
            </Router>
            <Toaster/>
        </main>
    }
}
