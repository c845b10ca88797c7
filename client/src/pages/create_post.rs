//! New post page.

use leptos::prelude::*;

use crate::components::post_form::PostForm;

#[component]
pub fn CreatePostPage() -> impl IntoView {
    view! {
        <div class="post-editor">
            <h2 class="page-title">
                <img src="/assets/icons/add-post.svg" alt="add" width="36" height="36"/>
                "Create Post"
            </h2>
            <PostForm/>
        </div>
    }
}
