//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Form pages expose their submit flow as a plain async
//! function over [`Backend`](crate::net::backend::Backend) so it can be
//! driven by tests without a browser.

pub mod all_users;
pub mod create_post;
pub mod explore;
pub mod home;
pub mod post_details;
pub mod profile;
pub mod saved;
pub mod sign_in;
pub mod sign_up;
pub mod update_post;
pub mod update_profile;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::toast::ToastQueue;
use crate::util::submit::{LoadSequence, MountFlag, SubmitOutcome};
use crate::util::validation::FieldErrors;

/// A flag cleared when the current reactive owner is disposed.
pub(crate) fn mount_flag() -> MountFlag {
    let flag = MountFlag::new();
    let on_unmount = flag.clone();
    on_cleanup(move || on_unmount.unmount());
    flag
}

/// Run `task` in the browser and pass its result to `apply` only if the page
/// is still mounted. On the server the task is dropped unpolled.
pub(crate) fn spawn_while_mounted<T, Fut>(mounted: &MountFlag, task: Fut, apply: impl FnOnce(T) + 'static)
where
    T: 'static,
    Fut: Future<Output = T> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let mounted = mounted.clone();
        leptos::task::spawn_local(async move {
            let value = task.await;
            if mounted.is_mounted() {
                apply(value);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mounted, task, apply);
    }
}

/// Like [`spawn_while_mounted`], but `apply` is skipped when a later load on
/// the same `loads` sequence began while this one was pending.
pub(crate) fn spawn_latest<T, Fut>(
    mounted: &MountFlag,
    loads: &LoadSequence,
    task: Fut,
    apply: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = T> + 'static,
{
    let ticket = loads.begin();
    let loads = loads.clone();
    spawn_while_mounted(mounted, task, move |value| {
        if loads.is_current(ticket) {
            apply(value);
        } else {
            log::debug!("dropping superseded load {ticket:?}");
        }
    });
}

/// Reflect a finished submit flow in the page.
pub(crate) fn apply_outcome<F>(
    outcome: SubmitOutcome,
    errors: RwSignal<FieldErrors>,
    toasts: RwSignal<ToastQueue>,
    navigate: &F,
) where
    F: Fn(&str, NavigateOptions),
{
    match outcome {
        SubmitOutcome::Invalid(field_errors) => {
            let _ = errors.try_set(field_errors);
        }
        SubmitOutcome::Busy => {}
        SubmitOutcome::Navigate(to) => {
            let _ = errors.try_set(FieldErrors::default());
            navigate(&to, NavigateOptions::default());
        }
        SubmitOutcome::Notify(title) => {
            let _ = errors.try_set(FieldErrors::default());
            toasts.update(|queue| {
                queue.error(title);
            });
        }
    }
}

/// Inline message for one field, empty when the field is valid.
pub(crate) fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_owned)).map(|message| {
            view! { <p class="form-message">{message}</p> }
        })
    }
}
