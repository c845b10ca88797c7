//! Account and user-document operations built on [`Backend`].
//!
//! SYSTEM CONTEXT
//! ==============
//! An account (credentials, sessions) and a user document (profile fields
//! shown in the UI) are separate records in the service. The identity check
//! resolves the current account and then its user document.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::backend::{Backend, decode, decode_all, new_id};
use super::error::BackendError;
use super::query::Query;
use super::types::{FileUpload, NewAccount, NewUserDocument, Post, ProfilePatch, Session, User};
use crate::config::Collection;

/// Resolve the signed-in identity: current account, then its user document.
///
/// # Errors
///
/// Returns `Unauthorized` when no session is active, `NotFound` when the
/// account has no user document, and transport/decode errors as-is.
pub async fn current_identity<B: Backend>(backend: &B) -> Result<Session, BackendError> {
    let account = backend.get_account().await?;
    let docs = backend
        .list_documents(Collection::Users, &[Query::equal("accountId", account.id.as_str())])
        .await?;
    let Some(doc) = docs.into_iter().next() else {
        return Err(BackendError::NotFound(format!("user document for account {}", account.id)));
    };
    let user: User = decode(doc)?;
    Ok(Session::from(user))
}

/// Create an account and its user document.
///
/// # Errors
///
/// Returns the first failing backend call's error.
pub async fn create_user_account<B: Backend>(backend: &B, account: &NewAccount) -> Result<User, BackendError> {
    let created = backend.create_account(&new_id(), account).await?;
    let doc = NewUserDocument {
        account_id: created.id,
        name: created.name,
        username: account.username.clone(),
        email: created.email,
        image_url: backend.initials_avatar_url(&account.name),
    };
    let value = backend
        .create_document(Collection::Users, &new_id(), serde_json::to_value(doc)?)
        .await?;
    decode(value)
}

/// Most recently joined users.
///
/// # Errors
///
/// Returns backend or decode errors.
pub async fn list_users<B: Backend>(backend: &B, limit: u32) -> Result<Vec<User>, BackendError> {
    let docs = backend
        .list_documents(Collection::Users, &[Query::order_desc("$createdAt"), Query::limit(limit)])
        .await?;
    decode_all(docs)
}

/// # Errors
///
/// Returns `NotFound` for unknown ids, or other backend errors.
pub async fn get_user<B: Backend>(backend: &B, user_id: &str) -> Result<User, BackendError> {
    decode(backend.get_document(Collection::Users, user_id).await?)
}

/// Posts the user has liked, read from the user document's `liked` relation.
///
/// # Errors
///
/// Returns backend or decode errors.
pub async fn liked_posts<B: Backend>(backend: &B, user_id: &str) -> Result<Vec<Post>, BackendError> {
    let mut doc = backend.get_document(Collection::Users, user_id).await?;
    match doc.get_mut("liked").map(serde_json::Value::take) {
        Some(serde_json::Value::Array(items)) => decode_all(items),
        Some(serde_json::Value::Null) | None => Ok(Vec::new()),
        Some(_) => Err(BackendError::Decode("liked is not a list".to_owned())),
    }
}

/// Profile edit after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileDraft {
    pub name: String,
    pub username: String,
    pub bio: String,
    /// Replacement avatar, if one was picked.
    pub file: Option<FileUpload>,
}

/// Apply a profile edit, swapping the avatar when a new file is given.
///
/// A newly uploaded avatar is deleted again if the document update fails; the
/// previous uploaded avatar is deleted once the update succeeds.
///
/// # Errors
///
/// Returns the upload or update error.
pub async fn update_profile<B: Backend>(
    backend: &B,
    current: &User,
    draft: &ProfileDraft,
) -> Result<User, BackendError> {
    let uploaded = match &draft.file {
        Some(file) => {
            let stored = backend.upload_file(&new_id(), file).await?;
            let url = backend.file_preview_url(&stored.id);
            Some((stored.id, url))
        }
        None => None,
    };

    let (image_url, image_id) = match &uploaded {
        Some((id, url)) => (url.clone(), Some(id.clone())),
        None => (current.image_url.clone(), current.image_id.clone()),
    };
    let patch = ProfilePatch {
        name: draft.name.clone(),
        username: draft.username.clone(),
        bio: draft.bio.clone(),
        image_url,
        image_id,
    };

    let updated = match backend
        .update_document(Collection::Users, &current.id, serde_json::to_value(patch)?)
        .await
    {
        Ok(value) => value,
        Err(err) => {
            if let Some((id, _)) = &uploaded {
                discard_file(backend, id).await;
            }
            return Err(err);
        }
    };

    if uploaded.is_some() {
        if let Some(old_id) = &current.image_id {
            discard_file(backend, old_id).await;
        }
    }
    decode(updated)
}

/// Best-effort cleanup of an orphaned file.
pub(crate) async fn discard_file<B: Backend>(backend: &B, file_id: &str) {
    if let Err(e) = backend.delete_file(file_id).await {
        log::warn!("orphaned file {file_id} not deleted: {e}");
    }
}
