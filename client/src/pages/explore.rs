//! Explore: search posts by caption, or browse the latest when the search
//! box is empty.
//!
//! Searches may overlap while the user types; each one takes a sequence
//! number and only the newest result is shown.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::post_card::PostGrid;
use crate::net::posts;
use crate::net::types::Post;
use crate::pages::{mount_flag, spawn_latest};
use crate::util::submit::LoadSequence;

#[component]
pub fn ExplorePage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let mounted = mount_flag();
    let term = RwSignal::new(String::new());
    let results = RwSignal::new(None::<Result<Vec<Post>, String>>);
    let searches = LoadSequence::new();

    let run_search = move |query: String| {
        let session = session.clone();
        spawn_latest(
            &mounted,
            &searches,
            async move { posts::search_posts(session.backend(), &query).await.map_err(|e| e.to_string()) },
            move |result| results.set(Some(result)),
        );
    };
    run_search(String::new());

    let heading = move || {
        let t = term.get();
        if t.trim().is_empty() { "Popular Today".to_owned() } else { format!("Results for \"{}\"", t.trim()) }
    };

    view! {
        <div class="explore">
            <h2 class="page-title">"Search Posts"</h2>
            <div class="explore__search">
                <img src="/assets/icons/search.svg" alt="search" width="24" height="24"/>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Search"
                    prop:value=move || term.get()
                    on:input={
                        let run_search = run_search.clone();
                        move |ev| {
                            let value = event_target_value(&ev);
                            term.set(value.clone());
                            run_search(value);
                        }
                    }
                />
            </div>
            <h3 class="explore__heading">{heading}</h3>
            {move || match results.get() {
                None => view! { <Loader/> }.into_any(),
                Some(Err(e)) => view! { <p class="page-error">"Search failed: " {e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => view! { <p class="page-empty">"No results found"</p> }.into_any(),
                Some(Ok(list)) => view! { <PostGrid posts=list show_stats=true/> }.into_any(),
            }}
        </div>
    }
}
