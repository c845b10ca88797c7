//! The resource-shaped contract the client consumes from the backend service.
//!
//! ARCHITECTURE
//! ============
//! `Backend` is the single seam between UI/session logic and the network.
//! `api::HttpBackend` implements it over REST in the browser; tests use an
//! in-memory fake. Documents travel as `serde_json::Value` here and are typed
//! by `users` and `posts`.
//!
//! All futures run on the browser's single-threaded executor, so the trait
//! does not require `Send` futures.

use serde_json::Value;

use super::error::BackendError;
use super::query::Query;
use super::types::{Account, Credentials, FileUpload, NewAccount, StoredFile};
use crate::config::Collection;

/// Account, session, document, and file operations of the backend service.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Create an account with the given id.
    async fn create_account(&self, account_id: &str, account: &NewAccount) -> Result<Account, BackendError>;

    /// Open an email/password session (sets the session cookie).
    async fn create_session(&self, credentials: &Credentials) -> Result<(), BackendError>;

    /// Fetch the account behind the current session.
    async fn get_account(&self) -> Result<Account, BackendError>;

    /// Delete the current session.
    async fn delete_session(&self) -> Result<(), BackendError>;

    async fn list_documents(&self, collection: Collection, queries: &[Query]) -> Result<Vec<Value>, BackendError>;

    async fn get_document(&self, collection: Collection, document_id: &str) -> Result<Value, BackendError>;

    async fn create_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Value, BackendError>;

    async fn update_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Value, BackendError>;

    async fn delete_document(&self, collection: Collection, document_id: &str) -> Result<(), BackendError>;

    /// Upload a file to the media bucket under `file_id`.
    async fn upload_file(&self, file_id: &str, file: &FileUpload) -> Result<StoredFile, BackendError>;

    async fn delete_file(&self, file_id: &str) -> Result<(), BackendError>;

    /// Public preview URL for a stored file. Built locally, no request made.
    fn file_preview_url(&self, file_id: &str) -> String;

    /// Generated initials avatar URL for a display name.
    fn initials_avatar_url(&self, name: &str) -> String;
}

/// Fresh id for a new account, document, or file.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Decode one document into its typed read model.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, BackendError> {
    Ok(serde_json::from_value(value)?)
}

/// Decode a page of documents, failing on the first malformed one.
pub(crate) fn decode_all<T: serde::de::DeserializeOwned>(values: Vec<Value>) -> Result<Vec<T>, BackendError> {
    values.into_iter().map(decode).collect()
}
