//! Renders the toast queue. Each toast removes itself after
//! [`AUTO_DISMISS_MS`] or when its close button is pressed.

use leptos::prelude::*;

use crate::state::toast::{AUTO_DISMISS_MS, Toast, ToastKind, ToastQueue};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <ol class="toaster">
            <For
                each=move || toasts.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </ol>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastQueue>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(AUTO_DISMISS_MS))).await;
        toasts.update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = AUTO_DISMISS_MS;

    view! {
        <li class="toast" class:toast--error=toast.kind == ToastKind::Error>
            <div class="toast__body">
                <p class="toast__title">{toast.title}</p>
                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
            </div>
            <button class="toast__close" aria-label="Close" on:click=move |_| toasts.update(|q| q.dismiss(id))>
                "×"
            </button>
        </li>
    }
}
