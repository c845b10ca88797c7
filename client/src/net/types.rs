//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Read models mirror the service's document JSON (`$id`, camelCase
//! attributes) so serde stays lossless. Write payloads are separate structs
//! because relationships are written as ids but read back expanded.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The account record returned by the service's "current account" endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Service-assigned account identifier.
    #[serde(rename = "$id")]
    pub id: String,
    /// Name given at account creation.
    pub name: String,
    /// Sign-in email.
    pub email: String,
}

/// A user profile document from the users collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Document identifier; this is the id used in `/profile/:id`.
    #[serde(rename = "$id")]
    pub id: String,
    /// Owning account identifier.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Unique handle shown as `@username`.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Avatar URL (initials avatar until the user uploads a photo).
    pub image_url: String,
    /// Storage id of an uploaded avatar, if any.
    #[serde(default)]
    pub image_id: Option<String>,
    /// Free-form profile text.
    #[serde(default)]
    pub bio: Option<String>,
}

/// The signed-in identity held by the session context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// User document identifier.
    pub id: String,
    /// Owning account identifier.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Handle.
    pub username: String,
    /// Contact email.
    pub email: String,
    /// Avatar reference.
    pub image_url: String,
    /// Profile text.
    pub bio: Option<String>,
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            account_id: user.account_id,
            name: user.name,
            username: user.username,
            email: user.email,
            image_url: user.image_url,
            bio: user.bio,
        }
    }
}

/// Compact creator info embedded in post documents.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub image_url: String,
}

/// Bare reference to a related document (only the id is read).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(rename = "$id")]
    pub id: String,
}

/// A post document from the posts collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "$id")]
    pub id: String,
    /// ISO-8601 creation timestamp.
    #[serde(rename = "$createdAt", default)]
    pub created_at: String,
    pub creator: UserSummary,
    pub caption: String,
    pub image_url: String,
    pub image_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Users who liked the post.
    #[serde(default)]
    pub likes: Vec<DocumentRef>,
}

impl Post {
    /// Whether `user_id` appears in the like list.
    #[must_use]
    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|like| like.id == user_id)
    }

    /// Like list with `user_id` toggled in or out.
    #[must_use]
    pub fn toggled_likes(&self, user_id: &str) -> Vec<String> {
        let mut ids: Vec<String> = self.likes.iter().map(|like| like.id.clone()).collect();
        if let Some(pos) = ids.iter().position(|id| id == user_id) {
            ids.remove(pos);
        } else {
            ids.push(user_id.to_owned());
        }
        ids
    }
}

/// A saved-post record linking a user to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(rename = "$id")]
    pub id: String,
    /// The saved post, expanded.
    #[serde(default)]
    pub post: Option<Post>,
}

/// Generic list envelope returned by list endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

/// A file stored in the storage bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredFile {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub mime_type: String,
}

/// A file picked in the browser, read into memory for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

/// Sign-in credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Account creation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Attributes written when a user document is created after sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDocument {
    pub account_id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub image_url: String,
}

/// Attributes written when a post is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPostDocument {
    /// Creator user document id.
    pub creator: String,
    pub caption: String,
    pub image_url: String,
    pub image_id: String,
    pub location: String,
    pub tags: Vec<String>,
}

/// Attributes written when a post is edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub caption: String,
    pub image_url: String,
    pub image_id: String,
    pub location: String,
    pub tags: Vec<String>,
}

/// Attributes written when a profile is edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: String,
    pub username: String,
    pub bio: String,
    pub image_url: String,
    pub image_id: Option<String>,
}
