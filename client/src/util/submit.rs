//! Form submission bookkeeping shared by every form page.
//!
//! DESIGN
//! ======
//! A [`SubmitGate`] admits one submission at a time: the guard it hands out
//! reopens the gate when dropped, so early returns and failures release it
//! too. A [`MountFlag`] is cleared from `on_cleanup`; async continuations
//! check it before writing page signals, so results that arrive after the
//! page unmounted are dropped. A [`LoadSequence`] numbers reloads that may
//! overlap when a route parameter changes under a mounted page; only the
//! newest load's result is applied.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::util::validation::FieldErrors;

/// What a page should do once a submit flow finishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; show the messages inline.
    Invalid(FieldErrors),
    /// A submission was already in flight; nothing happened.
    Busy,
    /// Success; go here.
    Navigate(String),
    /// Failure; toast this title and keep the form as it is.
    Notify(String),
}

/// Admits at most one in-flight submission.
#[derive(Clone, Debug, Default)]
pub struct SubmitGate(Arc<AtomicBool>);

impl SubmitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate, or `None` if a submission is already running.
    #[must_use]
    pub fn try_begin(&self) -> Option<SubmitGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitGuard(Arc::clone(&self.0)))
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Held for the duration of one submission.
#[derive(Debug)]
pub struct SubmitGuard(Arc<AtomicBool>);

impl Drop for SubmitGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Whether the owning page is still mounted.
#[derive(Clone, Debug)]
pub struct MountFlag(Arc<AtomicBool>);

impl MountFlag {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn unmount(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Issuance tag for one load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Numbers overlapping loads so a late reply cannot overwrite a newer one.
#[derive(Clone, Debug, Default)]
pub struct LoadSequence(Arc<AtomicU64>);

impl LoadSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a load, superseding every earlier one.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.0.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// True while no later load has begun.
    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.0.load(Ordering::Acquire) == ticket.0
    }
}
