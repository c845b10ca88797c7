//! Backend coordinates baked into the client at build time.
//!
//! The browser bundle has no runtime environment, so each value is read with
//! `option_env!` when the crate is compiled and falls back to the defaults
//! below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";
pub const DEFAULT_PROJECT_ID: &str = "snapgram";
pub const DEFAULT_DATABASE_ID: &str = "snapgram";
pub const DEFAULT_USERS_COLLECTION_ID: &str = "users";
pub const DEFAULT_POSTS_COLLECTION_ID: &str = "posts";
pub const DEFAULT_SAVES_COLLECTION_ID: &str = "saves";
pub const DEFAULT_STORAGE_BUCKET_ID: &str = "media";

/// Identifiers of every backend resource the client touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub users_collection_id: String,
    pub posts_collection_id: String,
    pub saves_collection_id: String,
    pub storage_bucket_id: String,
}

/// The collections the client reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Posts,
    Saves,
}

impl BackendConfig {
    /// Build config from the values captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SNAPGRAM_BACKEND_ENDPOINT"),
            option_env!("SNAPGRAM_PROJECT_ID"),
            option_env!("SNAPGRAM_DATABASE_ID"),
            option_env!("SNAPGRAM_USERS_COLLECTION_ID"),
            option_env!("SNAPGRAM_POSTS_COLLECTION_ID"),
            option_env!("SNAPGRAM_SAVES_COLLECTION_ID"),
            option_env!("SNAPGRAM_STORAGE_BUCKET_ID"),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn from_values(
        endpoint: Option<&str>,
        project_id: Option<&str>,
        database_id: Option<&str>,
        users: Option<&str>,
        posts: Option<&str>,
        saves: Option<&str>,
        bucket: Option<&str>,
    ) -> Self {
        Self {
            endpoint: pick(endpoint, DEFAULT_ENDPOINT).trim_end_matches('/').to_owned(),
            project_id: pick(project_id, DEFAULT_PROJECT_ID),
            database_id: pick(database_id, DEFAULT_DATABASE_ID),
            users_collection_id: pick(users, DEFAULT_USERS_COLLECTION_ID),
            posts_collection_id: pick(posts, DEFAULT_POSTS_COLLECTION_ID),
            saves_collection_id: pick(saves, DEFAULT_SAVES_COLLECTION_ID),
            storage_bucket_id: pick(bucket, DEFAULT_STORAGE_BUCKET_ID),
        }
    }

    /// Service id of a collection.
    #[must_use]
    pub fn collection_id(&self, collection: Collection) -> &str {
        match collection {
            Collection::Users => &self.users_collection_id,
            Collection::Posts => &self.posts_collection_id,
            Collection::Saves => &self.saves_collection_id,
        }
    }
}

fn pick(raw: Option<&str>, default: &str) -> String {
    raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default).to_owned()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_values(None, None, None, None, None, None, None)
    }
}
