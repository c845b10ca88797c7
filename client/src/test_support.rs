//! In-memory backend used by unit tests.
//!
//! Documents are stored as JSON the way the service returns them, with
//! relationship ids expanded into objects on write. Identity checks and
//! single-document reads can be held open with
//! [`FakeBackend::hold_identity_checks`] and [`FakeBackend::hold_document_reads`]
//! to resolve them in any order.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::{Value, json};
use tokio::sync::oneshot;

use crate::config::Collection;
use crate::net::backend::Backend;
use crate::net::error::BackendError;
use crate::net::query::Query;
use crate::net::types::{Account, Credentials, FileUpload, NewAccount, StoredFile};

type IdentityReply = Result<Account, BackendError>;

#[derive(Default)]
struct FakeState {
    current: Option<Account>,
    accounts: Vec<(Account, String)>,
    documents: HashMap<Collection, Vec<Value>>,
    files: Vec<String>,
    calls: Vec<&'static str>,
    failures: HashMap<&'static str, BackendError>,
    held_checks: VecDeque<oneshot::Receiver<IdentityReply>>,
    held_reads: VecDeque<oneshot::Receiver<()>>,
    seq: u64,
}

impl FakeState {
    fn record(&mut self, op: &'static str) -> Result<(), BackendError> {
        self.calls.push(op);
        match self.failures.get(op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn next_stamp(&mut self) -> String {
        self.seq += 1;
        format!("2025-01-01T00:00:{:02}.000+00:00", self.seq)
    }

    fn find_doc(&self, collection: Collection, id: &str) -> Option<&Value> {
        self.documents
            .get(&collection)
            .and_then(|docs| docs.iter().find(|doc| doc["$id"] == id))
    }

    fn expand_ref(&self, collection: Collection, id: &Value) -> Value {
        let Some(id) = id.as_str() else {
            return id.clone();
        };
        self.find_doc(collection, id).cloned().unwrap_or_else(|| json!({ "$id": id }))
    }

    fn expand(&self, collection: Collection, mut data: Value) -> Value {
        let Some(obj) = data.as_object_mut() else {
            return data;
        };
        match collection {
            Collection::Posts => {
                if let Some(creator) = obj.get("creator").cloned() {
                    obj.insert("creator".to_owned(), self.expand_ref(Collection::Users, &creator));
                }
                if let Some(Value::Array(likes)) = obj.get("likes").cloned() {
                    let expanded = likes.iter().map(|id| json!({ "$id": id })).collect();
                    obj.insert("likes".to_owned(), Value::Array(expanded));
                }
            }
            Collection::Saves => {
                if let Some(post) = obj.get("post").cloned() {
                    obj.insert("post".to_owned(), self.expand_ref(Collection::Posts, &post));
                }
            }
            Collection::Users => {}
        }
        data
    }
}

fn matches_value(field: Option<&Value>, target: &Value) -> bool {
    match field {
        Some(v) if v == target => true,
        Some(v) => v.get("$id") == Some(target),
        None => false,
    }
}

/// Scriptable in-memory [`Backend`].
#[derive(Default)]
pub(crate) struct FakeBackend {
    state: Mutex<FakeState>,
}

impl FakeBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register an account plus its user document. Returns the user document id.
    pub(crate) fn seed_user(&self, name: &str, username: &str, email: &str, password: &str) -> String {
        let mut state = self.lock();
        let account = Account {
            id: format!("acc-{username}"),
            name: name.to_owned(),
            email: email.to_owned(),
        };
        let user_id = format!("user-{username}");
        let doc = json!({
            "$id": user_id,
            "accountId": account.id,
            "name": name,
            "username": username,
            "email": email,
            "imageUrl": format!("https://avatars.test/{username}"),
            "imageId": null,
            "bio": null,
        });
        state.documents.entry(Collection::Users).or_default().push(doc);
        state.accounts.push((account, password.to_owned()));
        user_id
    }

    /// Mark the account with `email` as having an active session.
    pub(crate) fn sign_in_as(&self, email: &str) {
        let mut state = self.lock();
        let found = state.accounts.iter().find(|(a, _)| a.email == email).map(|(a, _)| a.clone());
        state.current = found;
    }

    pub(crate) fn current_account(&self) -> Option<Account> {
        self.lock().current.clone()
    }

    /// Make every later call to `op` fail with `err`.
    pub(crate) fn fail(&self, op: &'static str, err: BackendError) {
        self.lock().failures.insert(op, err);
    }

    pub(crate) fn clear_failure(&self, op: &'static str) {
        self.lock().failures.remove(op);
    }

    pub(crate) fn count(&self, op: &str) -> usize {
        self.lock().calls.iter().filter(|c| **c == op).count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.lock().calls.len()
    }

    pub(crate) fn files(&self) -> Vec<String> {
        self.lock().files.clone()
    }

    pub(crate) fn documents(&self, collection: Collection) -> Vec<Value> {
        self.lock().documents.get(&collection).cloned().unwrap_or_default()
    }

    /// Insert a raw document (relations expanded like a normal write).
    pub(crate) fn insert_document(&self, collection: Collection, doc: Value) {
        let mut state = self.lock();
        let mut doc = state.expand(collection, doc);
        if doc.get("$createdAt").is_none() {
            let stamp = state.next_stamp();
            doc["$createdAt"] = json!(stamp);
        }
        state.documents.entry(collection).or_default().push(doc);
    }

    pub(crate) fn insert_file(&self, file_id: &str) {
        self.lock().files.push(file_id.to_owned());
    }

    /// Hold the next `n` account lookups open; each sender resolves one, in call order.
    pub(crate) fn hold_identity_checks(&self, n: usize) -> Vec<oneshot::Sender<IdentityReply>> {
        let mut state = self.lock();
        (0..n)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                state.held_checks.push_back(rx);
                tx
            })
            .collect()
    }

    /// Hold the next `n` `get_document` calls; each sender releases one, in call order.
    pub(crate) fn hold_document_reads(&self, n: usize) -> Vec<oneshot::Sender<()>> {
        let mut state = self.lock();
        (0..n)
            .map(|_| {
                let (tx, rx) = oneshot::channel();
                state.held_reads.push_back(rx);
                tx
            })
            .collect()
    }
}

impl Backend for FakeBackend {
    async fn create_account(&self, account_id: &str, account: &NewAccount) -> Result<Account, BackendError> {
        let mut state = self.lock();
        state.record("create_account")?;
        if state.accounts.iter().any(|(a, _)| a.email == account.email) {
            return Err(BackendError::Service { status: 409, message: "account exists".to_owned() });
        }
        let created = Account {
            id: account_id.to_owned(),
            name: account.name.clone(),
            email: account.email.clone(),
        };
        state.accounts.push((created.clone(), account.password.clone()));
        Ok(created)
    }

    async fn create_session(&self, credentials: &Credentials) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record("create_session")?;
        let found = state
            .accounts
            .iter()
            .find(|(a, password)| a.email == credentials.email && *password == credentials.password)
            .map(|(a, _)| a.clone());
        match found {
            Some(account) => {
                state.current = Some(account);
                Ok(())
            }
            None => Err(BackendError::Unauthorized),
        }
    }

    async fn get_account(&self) -> Result<Account, BackendError> {
        let held = {
            let mut state = self.lock();
            state.record("get_account")?;
            match state.held_checks.pop_front() {
                Some(rx) => rx,
                None => return state.current.clone().ok_or(BackendError::Unauthorized),
            }
        };
        held.await.unwrap_or_else(|_| Err(BackendError::Network("check dropped".to_owned())))
    }

    async fn delete_session(&self) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record("delete_session")?;
        state.current = None;
        Ok(())
    }

    async fn list_documents(&self, collection: Collection, queries: &[Query]) -> Result<Vec<Value>, BackendError> {
        let mut state = self.lock();
        state.record("list_documents")?;
        let mut docs = state.documents.get(&collection).cloned().unwrap_or_default();
        let mut limit = None;
        for query in queries {
            match query {
                Query::Equal { attribute, value } => docs.retain(|d| matches_value(d.get(attribute), value)),
                Query::Search { attribute, term } => docs.retain(|d| {
                    d.get(attribute)
                        .and_then(Value::as_str)
                        .is_some_and(|s| s.to_lowercase().contains(&term.to_lowercase()))
                }),
                Query::OrderDesc { attribute } => docs.sort_by(|a, b| {
                    let a = a.get(attribute).and_then(Value::as_str).unwrap_or_default();
                    let b = b.get(attribute).and_then(Value::as_str).unwrap_or_default();
                    b.cmp(a)
                }),
                Query::Limit(n) => limit = Some(*n as usize),
            }
        }
        if let Some(n) = limit {
            docs.truncate(n);
        }
        Ok(docs)
    }

    async fn get_document(&self, collection: Collection, document_id: &str) -> Result<Value, BackendError> {
        let held = {
            let mut state = self.lock();
            state.record("get_document")?;
            state.held_reads.pop_front()
        };
        if let Some(release) = held {
            let _ = release.await;
        }
        self.lock()
            .find_doc(collection, document_id)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(document_id.to_owned()))
    }

    async fn create_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Value, BackendError> {
        let mut state = self.lock();
        state.record("create_document")?;
        let mut doc = state.expand(collection, data);
        doc["$id"] = json!(document_id);
        let stamp = state.next_stamp();
        doc["$createdAt"] = json!(stamp);
        state.documents.entry(collection).or_default().push(doc.clone());
        Ok(doc)
    }

    async fn update_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Value, BackendError> {
        let mut state = self.lock();
        state.record("update_document")?;
        let patch = state.expand(collection, data);
        let docs = state.documents.entry(collection).or_default();
        let Some(doc) = docs.iter_mut().find(|d| d["$id"] == document_id) else {
            return Err(BackendError::NotFound(document_id.to_owned()));
        };
        if let (Some(target), Some(fields)) = (doc.as_object_mut(), patch.as_object()) {
            for (key, value) in fields {
                target.insert(key.clone(), value.clone());
            }
        }
        Ok(doc.clone())
    }

    async fn delete_document(&self, collection: Collection, document_id: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record("delete_document")?;
        let docs = state.documents.entry(collection).or_default();
        let before = docs.len();
        docs.retain(|d| d["$id"] != document_id);
        if docs.len() == before {
            return Err(BackendError::NotFound(document_id.to_owned()));
        }
        Ok(())
    }

    async fn upload_file(&self, file_id: &str, file: &FileUpload) -> Result<StoredFile, BackendError> {
        let mut state = self.lock();
        state.record("upload_file")?;
        state.files.push(file_id.to_owned());
        Ok(StoredFile {
            id: file_id.to_owned(),
            name: file.name.clone(),
            mime_type: file.mime_type.clone(),
        })
    }

    async fn delete_file(&self, file_id: &str) -> Result<(), BackendError> {
        let mut state = self.lock();
        state.record("delete_file")?;
        state.files.retain(|f| f != file_id);
        Ok(())
    }

    fn file_preview_url(&self, file_id: &str) -> String {
        format!("https://files.test/{file_id}")
    }

    fn initials_avatar_url(&self, name: &str) -> String {
        format!("https://avatars.test/initials/{name}")
    }
}

/// A small in-memory image.
pub(crate) fn sample_file(name: &str) -> FileUpload {
    FileUpload {
        name: name.to_owned(),
        mime_type: "image/png".to_owned(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}
