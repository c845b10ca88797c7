use std::pin::pin;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::net::error::BackendError;
use crate::net::posts::PostDraft;
use crate::test_support::{FakeBackend, sample_file};
use crate::util::submit::LoadSequence;

async fn with_post() -> (FakeBackend, String, Post) {
    let backend = FakeBackend::new();
    let user_id = backend.seed_user("Alice", "alice", "alice@example.com", "password1");
    let draft = PostDraft {
        caption: "Harbour at dusk".to_owned(),
        location: "Lisbon".to_owned(),
        tags: Vec::new(),
        file: Some(sample_file("harbour.png")),
    };
    let post = posts::create_post(&backend, &user_id, &draft).await.unwrap();
    (backend, user_id, post)
}

// =============================================================
// profile_tab
// =============================================================

#[test]
fn liked_tab_selected_by_suffix() {
    assert_eq!(profile_tab("/profile/u1/liked-posts"), ProfileTab::Liked);
    assert_eq!(profile_tab("/profile/u1/liked-posts/"), ProfileTab::Liked);
}

#[test]
fn posts_tab_is_default() {
    assert_eq!(profile_tab("/profile/u1"), ProfileTab::Posts);
    assert_eq!(profile_tab("/profile/liked-posts-fan"), ProfileTab::Posts);
}

// =============================================================
// load_tab
// =============================================================

#[tokio::test]
async fn posts_tab_lists_own_posts() {
    let (backend, user_id, post) = with_post().await;
    let shown = load_tab(&backend, &user_id, ProfileTab::Posts).await.unwrap();
    assert_eq!(shown.into_iter().map(|p| p.id).collect::<Vec<_>>(), vec![post.id]);
}

#[tokio::test]
async fn liked_tab_without_likes_is_empty() {
    let (backend, user_id, _) = with_post().await;
    assert!(load_tab(&backend, &user_id, ProfileTab::Liked).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_fetch_is_an_error_not_an_empty_list() {
    let (backend, user_id, _) = with_post().await;
    backend.fail("list_documents", BackendError::Network("offline".to_owned()));
    backend.fail("get_document", BackendError::Network("offline".to_owned()));

    assert!(load_tab(&backend, &user_id, ProfileTab::Posts).await.is_err());
    assert!(load_tab(&backend, &user_id, ProfileTab::Liked).await.is_err());
}

#[tokio::test]
async fn late_liked_reply_after_switching_tabs_is_not_current() {
    let (backend, user_id, _) = with_post().await;
    let release = backend.hold_document_reads(1).pop().unwrap();
    let loads = LoadSequence::new();
    let mut cx = Context::from_waker(Waker::noop());

    let liked_ticket = loads.begin();
    let mut liked = pin!(load_tab(&backend, &user_id, ProfileTab::Liked));
    assert!(liked.as_mut().poll(&mut cx).is_pending());

    let posts_ticket = loads.begin();
    let shown = load_tab(&backend, &user_id, ProfileTab::Posts).await.unwrap();
    assert_eq!(shown.len(), 1);
    assert!(loads.is_current(posts_ticket));

    release.send(()).unwrap();
    assert_eq!(liked.as_mut().poll(&mut cx), Poll::Ready(Ok(Vec::new())));
    assert!(!loads.is_current(liked_ticket));
}
