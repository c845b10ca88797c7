//! REST implementation of [`Backend`] against the hosted backend service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, sending the project
//! header and the session cookie on every request.
//! Server-side (SSR): every call returns `BackendError::Unavailable`, since
//! sessions live in the browser's cookie jar.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses are mapped through `BackendError::from_status` using
//! the service's `{ "message": ... }` error body when present.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::backend::Backend;
use super::error::BackendError;
use super::query::{Query, encode_queries};
use super::types::{Account, Credentials, FileUpload, NewAccount, StoredFile};
use crate::config::{BackendConfig, Collection};

#[cfg(feature = "hydrate")]
const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// HTTP client for the backend service.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    config: BackendConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

fn account_url(cfg: &BackendConfig) -> String {
    format!("{}/account", cfg.endpoint)
}

fn email_session_url(cfg: &BackendConfig) -> String {
    format!("{}/account/sessions/email", cfg.endpoint)
}

fn current_session_url(cfg: &BackendConfig) -> String {
    format!("{}/account/sessions/current", cfg.endpoint)
}

fn documents_url(cfg: &BackendConfig, collection: Collection) -> String {
    format!(
        "{}/databases/{}/collections/{}/documents",
        cfg.endpoint,
        cfg.database_id,
        cfg.collection_id(collection)
    )
}

fn document_url(cfg: &BackendConfig, collection: Collection, document_id: &str) -> String {
    format!("{}/{document_id}", documents_url(cfg, collection))
}

fn list_documents_url(cfg: &BackendConfig, collection: Collection, queries: &[Query]) -> String {
    let base = documents_url(cfg, collection);
    if queries.is_empty() { base } else { format!("{base}?{}", encode_queries(queries)) }
}

fn files_url(cfg: &BackendConfig) -> String {
    format!("{}/storage/buckets/{}/files", cfg.endpoint, cfg.storage_bucket_id)
}

fn file_url(cfg: &BackendConfig, file_id: &str) -> String {
    format!("{}/{file_id}", files_url(cfg))
}

fn preview_url(cfg: &BackendConfig, file_id: &str) -> String {
    format!(
        "{}/preview?width=2000&height=2000&gravity=top&quality=100&project={}",
        file_url(cfg, file_id),
        cfg.project_id
    )
}

fn initials_url(cfg: &BackendConfig, name: &str) -> String {
    format!(
        "{}/avatars/initials?name={}&project={}",
        cfg.endpoint,
        urlencoding::encode(name),
        cfg.project_id
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn create_account_body(account_id: &str, account: &NewAccount) -> Value {
    serde_json::json!({
        "userId": account_id,
        "email": account.email,
        "password": account.password,
        "name": account.name,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn create_document_body(document_id: &str, data: Value) -> Value {
    serde_json::json!({ "documentId": document_id, "data": data })
}

#[cfg(any(test, feature = "hydrate"))]
fn update_document_body(data: Value) -> Value {
    serde_json::json!({ "data": data })
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
fn documents_from_list(body: Value) -> Result<Vec<Value>, BackendError> {
    match body {
        Value::Object(mut map) => match map.remove("documents") {
            Some(Value::Array(docs)) => Ok(docs),
            _ => Err(BackendError::Decode("list response missing documents".to_owned())),
        },
        _ => Err(BackendError::Decode("list response is not an object".to_owned())),
    }
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde_json::Value;

    use super::{BackendError, PROJECT_HEADER, error_message};

    pub(super) fn prepare(builder: RequestBuilder, project_id: &str) -> RequestBuilder {
        builder
            .header(PROJECT_HEADER, project_id)
            .credentials(web_sys::RequestCredentials::Include)
    }

    pub(super) fn with_json(builder: RequestBuilder, body: &Value) -> Result<Request, BackendError> {
        builder.json(body).map_err(|e| BackendError::Decode(e.to_string()))
    }

    pub(super) fn without_body(builder: RequestBuilder) -> Result<Request, BackendError> {
        builder.build().map_err(|e| BackendError::Network(e.to_string()))
    }

    pub(super) async fn send(request: Request) -> Result<Response, BackendError> {
        let resp = request.send().await.map_err(|e| BackendError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let message = resp.json::<Value>().await.ok().as_ref().and_then(error_message);
        Err(BackendError::from_status(status, message))
    }

    pub(super) async fn send_json(request: Request) -> Result<Value, BackendError> {
        let resp = send(request).await?;
        resp.json::<Value>().await.map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
fn multipart_form(file_id: &str, file: &FileUpload) -> Result<web_sys::FormData, BackendError> {
    let js_err = |e: wasm_bindgen::JsValue| BackendError::Network(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(js_err)?;
    form.append_with_str("fileId", file_id).map_err(js_err)?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    form.append_with_blob_and_filename("file", &blob, &file.name).map_err(js_err)?;
    Ok(form)
}

// =============================================================================
// BACKEND IMPL
// =============================================================================

impl Backend for HttpBackend {
    async fn create_account(&self, account_id: &str, account: &NewAccount) -> Result<Account, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::post(&account_url(&self.config)), &self.config.project_id);
            let request = transport::with_json(builder, &create_account_body(account_id, account))?;
            Ok(serde_json::from_value(transport::send_json(request).await?)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (account_id, account, account_url(&self.config));
            Err(BackendError::Unavailable)
        }
    }

    async fn create_session(&self, credentials: &Credentials) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder =
                transport::prepare(Request::post(&email_session_url(&self.config)), &self.config.project_id);
            let request = transport::with_json(builder, &serde_json::to_value(credentials)?)?;
            transport::send(request).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, email_session_url(&self.config));
            Err(BackendError::Unavailable)
        }
    }

    async fn get_account(&self) -> Result<Account, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::get(&account_url(&self.config)), &self.config.project_id);
            let request = transport::without_body(builder)?;
            Ok(serde_json::from_value(transport::send_json(request).await?)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(BackendError::Unavailable)
        }
    }

    async fn delete_session(&self) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder =
                transport::prepare(Request::delete(&current_session_url(&self.config)), &self.config.project_id);
            transport::send(transport::without_body(builder)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = current_session_url(&self.config);
            Err(BackendError::Unavailable)
        }
    }

    async fn list_documents(&self, collection: Collection, queries: &[Query]) -> Result<Vec<Value>, BackendError> {
        let url = list_documents_url(&self.config, collection, queries);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::get(&url), &self.config.project_id);
            documents_from_list(transport::send_json(transport::without_body(builder)?).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(BackendError::Unavailable)
        }
    }

    async fn get_document(&self, collection: Collection, document_id: &str) -> Result<Value, BackendError> {
        let url = document_url(&self.config, collection, document_id);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::get(&url), &self.config.project_id);
            transport::send_json(transport::without_body(builder)?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(BackendError::Unavailable)
        }
    }

    async fn create_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Value, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let url = documents_url(&self.config, collection);
            let builder = transport::prepare(Request::post(&url), &self.config.project_id);
            let request = transport::with_json(builder, &create_document_body(document_id, data))?;
            transport::send_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (documents_url(&self.config, collection), document_id, data);
            Err(BackendError::Unavailable)
        }
    }

    async fn update_document(
        &self,
        collection: Collection,
        document_id: &str,
        data: Value,
    ) -> Result<Value, BackendError> {
        let url = document_url(&self.config, collection, document_id);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::patch(&url), &self.config.project_id);
            let request = transport::with_json(builder, &update_document_body(data))?;
            transport::send_json(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, data);
            Err(BackendError::Unavailable)
        }
    }

    async fn delete_document(&self, collection: Collection, document_id: &str) -> Result<(), BackendError> {
        let url = document_url(&self.config, collection, document_id);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::delete(&url), &self.config.project_id);
            transport::send(transport::without_body(builder)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(BackendError::Unavailable)
        }
    }

    async fn upload_file(&self, file_id: &str, file: &FileUpload) -> Result<StoredFile, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let form = multipart_form(file_id, file)?;
            let request = transport::prepare(Request::post(&files_url(&self.config)), &self.config.project_id)
                .body(form)
                .map_err(|e| BackendError::Network(e.to_string()))?;
            Ok(serde_json::from_value(transport::send_json(request).await?)?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (file_id, file, files_url(&self.config));
            Err(BackendError::Unavailable)
        }
    }

    async fn delete_file(&self, file_id: &str) -> Result<(), BackendError> {
        let url = file_url(&self.config, file_id);
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;
            let builder = transport::prepare(Request::delete(&url), &self.config.project_id);
            transport::send(transport::without_body(builder)?).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(BackendError::Unavailable)
        }
    }

    fn file_preview_url(&self, file_id: &str) -> String {
        preview_url(&self.config, file_id)
    }

    fn initials_avatar_url(&self, name: &str) -> String {
        initials_url(&self.config, name)
    }
}
