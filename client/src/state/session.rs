//! Session context: the single owner of "who is signed in".
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App`, handed to the component tree with
//! `provide_context`, and mirrored into a reactive `RwSignal<AuthState>` so
//! route guards and views re-render on change. Nothing else writes auth
//! state.
//!
//! DESIGN
//! ======
//! Identity checks may overlap (boot check, sign-in, profile refresh). Each
//! check takes a `CheckTicket` from a monotonically increasing counter when it
//! is issued; its result is applied only if no later-issued check or sign-out
//! has already been applied. Sign-out consumes a ticket too, so a check that
//! was in flight when the user signed out can never resurrect the session.
//! Every transition replaces the whole `AuthState` at once.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::backend::Backend;
use crate::net::types::Session;
use crate::net::users;

/// Observable authentication state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the first identity check resolves.
    pub loading: bool,
}

impl AuthState {
    /// State at boot, before the first identity check.
    #[must_use]
    pub fn booting() -> Self {
        Self { session: None, loading: true }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if self.loading {
            AuthPhase::Loading
        } else if self.is_authenticated() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::booting()
    }
}

/// Coarse auth phase consumed by the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Issuance-order tag for one identity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CheckTicket(u64);

/// Sequenced auth state. Pure bookkeeping, no I/O.
#[derive(Clone, Debug)]
pub struct SessionStore {
    state: AuthState,
    issued: u64,
    applied: u64,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: AuthState::booting(), issued: 0, applied: 0 }
    }

    #[must_use]
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Register a new identity check and return its ticket.
    pub fn begin_check(&mut self) -> CheckTicket {
        self.issued += 1;
        CheckTicket(self.issued)
    }

    /// Apply a check result unless a later-issued transition already landed.
    ///
    /// Returns whether the result was applied.
    pub fn resolve(&mut self, ticket: CheckTicket, session: Option<Session>) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        self.state = AuthState { session, loading: false };
        true
    }

    /// Clear the session and supersede every check issued so far.
    pub fn sign_out(&mut self) {
        self.issued += 1;
        self.applied = self.issued;
        self.state = AuthState { session: None, loading: false };
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

type Listener = Box<dyn Fn(&AuthState) + Send + Sync>;

/// Owned session container shared through Leptos context.
pub struct SessionContext<B> {
    backend: Arc<B>,
    store: Arc<Mutex<SessionStore>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl<B> Clone for SessionContext<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            store: Arc::clone(&self.store),
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl<B: Backend> SessionContext<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            store: Arc::new(Mutex::new(SessionStore::new())),
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.store().state().clone()
    }

    /// The signed-in identity, if any.
    pub fn session(&self) -> Option<Session> {
        self.store().state().session.clone()
    }

    /// Register a callback run after every applied transition.
    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    /// Ask the backend who is signed in and record the answer.
    ///
    /// Any failure counts as "nobody": the session is cleared and `false` is
    /// returned. If a later-issued check or a sign-out landed first, this
    /// result is dropped and the current state's answer is returned.
    pub async fn check_auth_user(&self) -> bool {
        let ticket = self.store().begin_check();
        let session = match users::current_identity(self.backend.as_ref()).await {
            Ok(session) => Some(session),
            Err(e) => {
                log::debug!("identity check failed: {e}");
                None
            }
        };

        let (applied, state) = {
            let mut store = self.store();
            let applied = store.resolve(ticket, session);
            (applied, store.state().clone())
        };
        if applied {
            self.notify(&state);
        } else {
            log::debug!("identity check {ticket:?} superseded");
        }
        state.is_authenticated()
    }

    /// Clear the local session now and return the remote invalidation.
    ///
    /// Local state is unauthenticated as soon as this is called, before the
    /// returned future is polled, and stays that way whatever the backend
    /// answers. Callers usually hand the future to `spawn_local`.
    pub fn sign_out(&self) -> impl Future<Output = ()> + use<B>
    where
        B: 'static,
    {
        let state = {
            let mut store = self.store();
            store.sign_out();
            store.state().clone()
        };
        self.notify(&state);

        let backend = Arc::clone(&self.backend);
        async move {
            if let Err(e) = backend.delete_session().await {
                log::warn!("remote sign-out failed: {e}");
            }
        }
    }

    fn store(&self) -> MutexGuard<'_, SessionStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify(&self, state: &AuthState) {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(state);
        }
    }
}
