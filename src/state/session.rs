//! Session store: the single source of truth for who is signed in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once in `App`, wrapped in an `RwSignal`, and provided through
//! context. Route guards read it synchronously; `login`, `logout`, and the
//! 401 boundary are the only writers.
//!
//! DESIGN
//! ======
//! `Option<Session>` makes "token and user are set or cleared together"
//! structural. Every identity change bumps `epoch`; requests carry the epoch
//! of the token they used so a late 401 from an old session cannot tear down
//! a newer one, and concurrent 401s clear the session exactly once.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::config::{TOKEN_KEY, USER_KEY};
use crate::net::api::Api;
use crate::net::client::{ApiClient, Credentials};
use crate::net::http::{HttpError, Transport};
use crate::net::types::{LoginRequest, LoginResponse, Role, User};
use crate::util::storage::{BrowserStorage, KeyValueStorage};

/// An authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Failures surfaced by session operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A previous login has not resolved yet.
    #[error("a sign-in request is already in progress")]
    LoginInFlight,
    /// The server rejected the credentials.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Http(#[from] HttpError),
    /// The reactive owner of the store was disposed mid-flight.
    #[error("session state is no longer available")]
    Detached,
}

/// Session state plus its durable backing store.
#[derive(Clone, Debug)]
pub struct SessionStore<S = BrowserStorage> {
    session: Option<Session>,
    loading: bool,
    login_pending: bool,
    epoch: u64,
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// A store that has not yet read durable storage (`is_loading() == true`).
    pub fn new(storage: S) -> Self {
        Self {
            session: None,
            loading: true,
            login_pending: false,
            epoch: 0,
            storage,
        }
    }

    /// Rehydrate from durable storage. Missing or malformed data yields an
    /// empty session and wipes both keys so storage is never half-populated.
    pub fn initialize(&mut self) {
        self.session = read_persisted(&self.storage);
        if self.session.is_none() {
            clear_persisted(&mut self.storage);
        }
        self.epoch += 1;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_login_pending(&self) -> bool {
        self.login_pending
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Synchronous read for guards and views.
    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    /// Token snapshot for an outbound request.
    pub fn credentials(&self) -> Option<Credentials> {
        self.session.as_ref().map(|s| Credentials {
            token: s.token.clone(),
            epoch: self.epoch,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mark a login as in flight.
    ///
    /// # Errors
    ///
    /// `LoginInFlight` if one is already pending.
    pub fn begin_login(&mut self) -> Result<(), SessionError> {
        if self.login_pending {
            return Err(SessionError::LoginInFlight);
        }
        self.login_pending = true;
        Ok(())
    }

    /// Apply the outcome of a login round-trip. On failure the existing
    /// session is left untouched.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` for a 401, otherwise the transport error.
    pub fn finish_login(&mut self, outcome: Result<LoginResponse, HttpError>) -> Result<Session, SessionError> {
        self.login_pending = false;
        match outcome {
            Ok(resp) => {
                let session = Session {
                    token: resp.token,
                    user: resp.user,
                };
                write_persisted(&mut self.storage, &session);
                self.session = Some(session.clone());
                self.epoch += 1;
                leptos::logging::log!("session established for user {}", session.user.id);
                Ok(session)
            }
            Err(HttpError::AuthExpired { .. }) => Err(SessionError::InvalidCredentials),
            Err(err) => Err(SessionError::Http(err)),
        }
    }

    /// Clear memory and durable state. Idempotent.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            self.epoch += 1;
        }
        clear_persisted(&mut self.storage);
    }

    /// Tear down the session in response to a 401 observed by a request that
    /// carried the token of `epoch`. Returns `true` only when this call
    /// actually cleared a live session.
    pub fn expire(&mut self, epoch: u64) -> bool {
        if self.session.is_none() || epoch != self.epoch {
            return false;
        }
        self.logout();
        leptos::logging::warn!("session expired; cleared credentials");
        true
    }

    /// Swap in a refreshed user record for the session of `epoch`.
    pub fn replace_user(&mut self, epoch: u64, user: User) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.user = user;
        self.storage.save_json(USER_KEY, &session.user);
        true
    }
}

fn read_persisted<S: KeyValueStorage>(storage: &S) -> Option<Session> {
    let token = storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let user = storage.load_json::<User>(USER_KEY)?;
    Some(Session { token, user })
}

fn write_persisted<S: KeyValueStorage>(storage: &mut S, session: &Session) {
    storage.set(TOKEN_KEY, &session.token);
    storage.save_json(USER_KEY, &session.user);
}

fn clear_persisted<S: KeyValueStorage>(storage: &mut S) {
    storage.remove(TOKEN_KEY);
    storage.remove(USER_KEY);
}

/// Shared access to a [`SessionStore`] across await points.
///
/// Both methods return `None` if the underlying store has been disposed.
pub trait SessionHandle<S> {
    fn read<R>(&self, f: impl FnOnce(&SessionStore<S>) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut SessionStore<S>) -> R) -> Option<R>;
}

impl<S: Send + Sync + 'static> SessionHandle<S> for RwSignal<SessionStore<S>> {
    fn read<R>(&self, f: impl FnOnce(&SessionStore<S>) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut SessionStore<S>) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Non-reactive handle, for code running outside a Leptos owner.
impl<S> SessionHandle<S> for RefCell<SessionStore<S>> {
    fn read<R>(&self, f: impl FnOnce(&SessionStore<S>) -> R) -> Option<R> {
        self.try_borrow().ok().map(|store| f(&store))
    }

    fn write<R>(&self, f: impl FnOnce(&mut SessionStore<S>) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut store| f(&mut store))
    }
}

/// Authenticate and install the returned session.
///
/// # Errors
///
/// `LoginInFlight` if a login is already pending, `InvalidCredentials` on a
/// 401, the transport error otherwise, or `Detached` if the store is gone.
pub async fn login<H, S, T>(handle: &H, client: &ApiClient<T>, request: &LoginRequest) -> Result<Session, SessionError>
where
    H: SessionHandle<S>,
    S: KeyValueStorage,
    T: Transport,
{
    handle
        .write(|store| store.begin_login())
        .ok_or(SessionError::Detached)??;
    let outcome = Api::new(client, None).login(request).await;
    handle
        .write(|store| store.finish_login(outcome))
        .ok_or(SessionError::Detached)?
}

/// Clear the session.
pub fn logout<H, S>(handle: &H)
where
    H: SessionHandle<S>,
    S: KeyValueStorage,
{
    let _ = handle.write(SessionStore::logout);
}

/// Re-fetch the user record for the current session. Returns the refreshed
/// user, or `None` when there is no session or it changed mid-flight.
///
/// # Errors
///
/// Any [`HttpError`] from `GET /auth/profile`.
pub async fn refresh_profile<H, S, T>(handle: &H, client: &ApiClient<T>) -> Result<Option<User>, HttpError>
where
    H: SessionHandle<S>,
    S: KeyValueStorage,
    T: Transport,
{
    let Some(credentials) = handle.read(SessionStore::credentials).flatten() else {
        return Ok(None);
    };
    let epoch = credentials.epoch;
    let user = Api::new(client, Some(credentials)).profile().await?;
    let applied = handle
        .write(|store| store.replace_user(epoch, user.clone()))
        .unwrap_or(false);
    Ok(applied.then_some(user))
}
