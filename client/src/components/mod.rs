//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome, post and user presentation, and form
//! pieces while reading shared state from Leptos context providers.

pub mod bottombar;
pub mod file_uploader;
pub mod layout;
pub mod left_sidebar;
pub mod loader;
pub mod post_card;
pub mod post_form;
pub mod post_stats;
pub mod toaster;
pub mod topbar;
pub mod user_card;
