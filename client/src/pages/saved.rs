//! Posts the signed-in user has saved.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::post_card::PostGrid;
use crate::net::posts;
use crate::net::types::Post;
use crate::pages::{mount_flag, spawn_while_mounted};
use crate::state::session::AuthState;

#[component]
pub fn SavedPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let mounted = mount_flag();
    let saved = RwSignal::new(None::<Result<Vec<Post>, String>>);

    let user_id = auth.with_untracked(|s| s.session.as_ref().map(|u| u.id.clone())).unwrap_or_default();
    spawn_while_mounted(
        &mounted,
        async move { posts::saved_posts(session.backend(), &user_id).await.map_err(|e| e.to_string()) },
        move |result| saved.set(Some(result)),
    );

    view! {
        <div class="saved">
            <h2 class="page-title">
                <img src="/assets/icons/save.svg" alt="saved" width="36" height="36"/>
                "Saved Posts"
            </h2>
            {move || match saved.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Could not load saved posts: " {e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p class="page-empty">"No available posts"</p> }.into_any(),
                Some(Ok(list)) => view! { <PostGrid posts=list/> }.into_any(),
            }}
        </div>
    }
}
