//! Networking modules for the hosted backend service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the service seam as a trait, `api` implements it over
//! HTTP, and `users` / `posts` compose its primitives into the operations
//! pages call. `types`, `query`, and `error` are the shared wire schema.

pub mod api;
pub mod backend;
pub mod error;
pub mod posts;
pub mod query;
pub mod types;
pub mod users;
