//! Spinner shown while something is loading.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <img class="loader" src="/assets/icons/loader.svg" alt="loading" width="24" height="24"/> }
}
