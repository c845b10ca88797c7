//! Home feed: recent posts plus a column of recently joined creators.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::post_card::PostCard;
use crate::components::user_card::UserCard;
use crate::net::types::{Post, User};
use crate::net::{posts, users};
use crate::pages::{mount_flag, spawn_while_mounted};

const TOP_CREATORS: u32 = 10;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let mounted = mount_flag();
    let feed = RwSignal::new(None::<Result<Vec<Post>, String>>);
    let creators = RwSignal::new(None::<Result<Vec<User>, String>>);

    {
        let session = session.clone();
        spawn_while_mounted(
            &mounted,
            async move { posts::recent_posts(session.backend()).await.map_err(|e| e.to_string()) },
            move |result| feed.set(Some(result)),
        );
    }
    spawn_while_mounted(
        &mounted,
        async move { users::list_users(session.backend(), TOP_CREATORS).await.map_err(|e| e.to_string()) },
        move |result| creators.set(Some(result)),
    );

    view! {
        <div class="home">
            <div class="home__feed">
                <h2 class="page-title">"Home Feed"</h2>
                {move || match feed.get() {
                    None => view! { <Loader/> }.into_any(),
                    Some(Err(e)) => view! { <p class="page-error">"Could not load posts: " {e}</p> }.into_any(),
                    Some(Ok(list)) if list.is_empty() => view! { <p class="page-empty">"No posts yet"</p> }.into_any(),
                    Some(Ok(list)) => view! {
                        <ul class="home__posts">
                            {list.into_iter().map(|post| view! { <li><PostCard post=post/></li> }).collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </div>
            <aside class="home__creators">
                <h3>"Top Creators"</h3>
                {move || match creators.get() {
                    None => view! { <Loader/> }.into_any(),
                    Some(Err(_)) => view! { <p class="page-error">"Could not load creators"</p> }.into_any(),
                    Some(Ok(list)) => view! {
                        <ul class="user-grid">
                            {list.into_iter().map(|user| view! { <li><UserCard user=user/></li> }).collect_view()}
                        </ul>
                    }
                    .into_any(),
                }}
            </aside>
        </div>
    }
}
