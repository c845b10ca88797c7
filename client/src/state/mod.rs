//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns who is signed in and sequences identity checks; `toast`
//! holds the notification queue. Both are created once in `App` and shared
//! through Leptos context.

pub mod session;
pub mod toast;
