//! People directory.

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::loader::Loader;
use crate::components::user_card::UserCard;
use crate::net::types::User;
use crate::net::users;
use crate::pages::{mount_flag, spawn_while_mounted};
use crate::state::toast::ToastQueue;

const PAGE_SIZE: u32 = 50;

#[component]
pub fn AllUsersPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let toasts = expect_context::<RwSignal<ToastQueue>>();
    let mounted = mount_flag();
    let people = RwSignal::new(None::<Vec<User>>);

    spawn_while_mounted(
        &mounted,
        async move { users::list_users(session.backend(), PAGE_SIZE).await },
        move |result| match result {
            Ok(list) => people.set(Some(list)),
            Err(e) => {
                log::warn!("user list failed: {e}");
                people.set(Some(Vec::new()));
                toasts.update(|q| {
                    q.error("Something went wrong.");
                });
            }
        },
    );

    view! {
        <div class="all-users">
            <h2 class="page-title">"All Users"</h2>
            {move || match people.get() {
                None => view! { <Loader/> }.into_any(),
                Some(list) => view! {
                    <ul class="user-grid">
                        {list.into_iter().map(|user| view! { <li><UserCard user=user/></li> }).collect_view()}
                    </ul>
                }
                .into_any(),
            }}
        </div>
    }
}
