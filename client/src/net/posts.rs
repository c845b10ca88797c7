//! Post, like, and save operations built on [`Backend`].
//!
//! TRADE-OFFS
//! ==========
//! The service has no transactions. Creating or editing a post uploads the
//! image first and writes the document second; when the document write fails
//! the fresh upload is deleted again so no orphaned file is left behind.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use super::backend::{Backend, decode, decode_all, new_id};
use super::error::BackendError;
use super::query::Query;
use super::types::{FileUpload, NewPostDocument, Post, PostPatch, SaveRecord};
use super::users::discard_file;
use crate::config::Collection;

pub const FEED_PAGE_SIZE: u32 = 20;

/// A validated post form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDraft {
    pub caption: String,
    pub location: String,
    pub tags: Vec<String>,
    /// Image to upload. Required for new posts, optional for edits.
    pub file: Option<FileUpload>,
}

/// # Errors
///
/// Returns backend or decode errors.
pub async fn recent_posts<B: Backend>(backend: &B) -> Result<Vec<Post>, BackendError> {
    let docs = backend
        .list_documents(Collection::Posts, &[Query::order_desc("$createdAt"), Query::limit(FEED_PAGE_SIZE)])
        .await?;
    decode_all(docs)
}

/// Full-text search over captions. An empty term lists recent posts.
///
/// # Errors
///
/// Returns backend or decode errors.
pub async fn search_posts<B: Backend>(backend: &B, term: &str) -> Result<Vec<Post>, BackendError> {
    let term = term.trim();
    if term.is_empty() {
        return recent_posts(backend).await;
    }
    let docs = backend
        .list_documents(Collection::Posts, &[Query::search("caption", term), Query::limit(FEED_PAGE_SIZE)])
        .await?;
    decode_all(docs)
}

/// # Errors
///
/// Returns `NotFound` for unknown ids, or other backend errors.
pub async fn get_post<B: Backend>(backend: &B, post_id: &str) -> Result<Post, BackendError> {
    decode(backend.get_document(Collection::Posts, post_id).await?)
}

/// # Errors
///
/// Returns backend or decode errors.
pub async fn user_posts<B: Backend>(backend: &B, user_id: &str) -> Result<Vec<Post>, BackendError> {
    let docs = backend
        .list_documents(Collection::Posts, &[Query::equal("creator", user_id), Query::order_desc("$createdAt")])
        .await?;
    decode_all(docs)
}

/// Upload the image and create the post document.
///
/// # Errors
///
/// Returns `Decode` when the draft carries no image, otherwise the first
/// failing backend call's error.
pub async fn create_post<B: Backend>(backend: &B, creator_id: &str, draft: &PostDraft) -> Result<Post, BackendError> {
    let Some(file) = &draft.file else {
        return Err(BackendError::Decode("a new post needs an image".to_owned()));
    };
    let stored = backend.upload_file(&new_id(), file).await?;
    let doc = NewPostDocument {
        creator: creator_id.to_owned(),
        caption: draft.caption.clone(),
        image_url: backend.file_preview_url(&stored.id),
        image_id: stored.id.clone(),
        location: draft.location.clone(),
        tags: draft.tags.clone(),
    };

    match backend
        .create_document(Collection::Posts, &new_id(), serde_json::to_value(doc)?)
        .await
    {
        Ok(value) => decode(value),
        Err(err) => {
            discard_file(backend, &stored.id).await;
            Err(err)
        }
    }
}

/// Apply an edit, replacing the image when the draft carries a new one.
///
/// # Errors
///
/// Returns the upload or update error.
pub async fn update_post<B: Backend>(backend: &B, current: &Post, draft: &PostDraft) -> Result<Post, BackendError> {
    let uploaded = match &draft.file {
        Some(file) => Some(backend.upload_file(&new_id(), file).await?.id),
        None => None,
    };
    let (image_url, image_id) = match &uploaded {
        Some(id) => (backend.file_preview_url(id), id.clone()),
        None => (current.image_url.clone(), current.image_id.clone()),
    };
    let patch = PostPatch {
        caption: draft.caption.clone(),
        image_url,
        image_id,
        location: draft.location.clone(),
        tags: draft.tags.clone(),
    };

    let updated = match backend
        .update_document(Collection::Posts, &current.id, serde_json::to_value(patch)?)
        .await
    {
        Ok(value) => value,
        Err(err) => {
            if let Some(id) = &uploaded {
                discard_file(backend, id).await;
            }
            return Err(err);
        }
    };

    if uploaded.is_some() {
        discard_file(backend, &current.image_id).await;
    }
    decode(updated)
}

/// Delete the post document, then its image.
///
/// # Errors
///
/// Returns the document deletion error; image cleanup failures are logged.
pub async fn delete_post<B: Backend>(backend: &B, post: &Post) -> Result<(), BackendError> {
    backend.delete_document(Collection::Posts, &post.id).await?;
    discard_file(backend, &post.image_id).await;
    Ok(())
}

/// Like or unlike `post` on behalf of `user_id`.
///
/// # Errors
///
/// Returns backend or decode errors.
pub async fn toggle_like<B: Backend>(backend: &B, post: &Post, user_id: &str) -> Result<Post, BackendError> {
    let likes = post.toggled_likes(user_id);
    let value = backend
        .update_document(Collection::Posts, &post.id, serde_json::json!({ "likes": likes }))
        .await?;
    decode(value)
}

/// The save record linking `user_id` to `post_id`, if any.
///
/// # Errors
///
/// Returns backend or decode errors.
pub async fn find_save<B: Backend>(
    backend: &B,
    user_id: &str,
    post_id: &str,
) -> Result<Option<SaveRecord>, BackendError> {
    let docs = backend
        .list_documents(
            Collection::Saves,
            &[Query::equal("user", user_id), Query::equal("post", post_id), Query::limit(1)],
        )
        .await?;
    docs.into_iter().next().map(decode).transpose()
}

/// # Errors
///
/// Returns backend or decode errors.
pub async fn save_post<B: Backend>(backend: &B, user_id: &str, post_id: &str) -> Result<SaveRecord, BackendError> {
    let value = backend
        .create_document(
            Collection::Saves,
            &new_id(),
            serde_json::json!({ "user": user_id, "post": post_id }),
        )
        .await?;
    decode(value)
}

/// # Errors
///
/// Returns backend errors.
pub async fn unsave_post<B: Backend>(backend: &B, save_id: &str) -> Result<(), BackendError> {
    backend.delete_document(Collection::Saves, save_id).await
}

/// Posts saved by `user_id`, newest save first. Saves of deleted posts are skipped.
///
/// # Errors
///
/// Returns backend or decode errors.
pub async fn saved_posts<B: Backend>(backend: &B, user_id: &str) -> Result<Vec<Post>, BackendError> {
    let docs = backend
        .list_documents(Collection::Saves, &[Query::equal("user", user_id), Query::order_desc("$createdAt")])
        .await?;
    let saves: Vec<SaveRecord> = decode_all(docs)?;
    Ok(saves.into_iter().filter_map(|save| save.post).collect())
}
