//! Edit page for an existing post. Loads the post, then shows the shared
//! form prefilled with it.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::post_form::PostForm;
use crate::net::posts;
use crate::net::types::Post;
use crate::pages::{mount_flag, spawn_while_mounted};

#[component]
pub fn UpdatePostPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let mounted = mount_flag();
    let post = RwSignal::new(None::<Result<Post, String>>);

    let post_id = params.read_untracked().get("id").unwrap_or_default();
    spawn_while_mounted(
        &mounted,
        async move { posts::get_post(session.backend(), &post_id).await.map_err(|e| e.to_string()) },
        move |result| post.set(Some(result)),
    );

    view! {
        <div class="post-editor">
            <h2 class="page-title">
                <img src="/assets/icons/edit.svg" alt="edit" width="36" height="36"/>
                "Edit Post"
            </h2>
            {move || match post.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Could not load post: " {e}</p> }.into_any(),
                Some(Ok(existing)) => view! { <PostForm post=existing/> }.into_any(),
            }}
        </div>
    }
}
