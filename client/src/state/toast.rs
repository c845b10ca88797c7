//! Non-blocking notifications shown in the corner of the screen.
//!
//! Pages push a toast when a mutation or explicit sign-in fails; the
//! `Toaster` component renders the queue and schedules each toast's removal.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen before it is dismissed.
pub const AUTO_DISMISS_MS: u32 = 5_000;

/// Maximum number of toasts kept at once; older ones are dropped first.
pub const MAX_VISIBLE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Ordered toast queue, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Queue an error toast and return its id.
    pub fn error(&mut self, title: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, title.into(), None)
    }

    /// Queue an informational toast with an optional description.
    pub fn info(&mut self, title: impl Into<String>, description: Option<String>) -> u64 {
        self.push(ToastKind::Info, title.into(), description)
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, title: String, description: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, title, description });
        if self.toasts.len() > MAX_VISIBLE {
            let excess = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..excess);
        }
        id
    }
}
