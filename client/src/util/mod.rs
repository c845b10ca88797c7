//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions, validation, and submission
//! bookkeeping out of page components so they can be tested without a
//! browser.

pub mod guard;
pub mod submit;
pub mod validation;
