//! Session store: the single owner of authentication state.
//!
//! One `RwSignal<SessionState>` is provided via context from [`crate::app`].
//! All mutation funnels through the operations in this module so the
//! invariants hold everywhere: `user` is set iff a login, registration, or
//! restore succeeded and no logout or auth failure happened since, and the
//! persisted token pair always mirrors the in-memory one.
//!
//! Two guards keep async results sane:
//! - `busy` allows at most one mutating network operation in flight;
//!   overlapping calls are rejected with [`ApiError::Busy`].
//! - `epoch` is bumped by every logout; a `login`/`register`/`restore`
//!   response that finds a different epoch than it started with is discarded
//!   instead of resurrecting a cleared session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update, WithUntracked};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, RegisterData, User};
use crate::util::token_store;

/// Authentication state for the whole application.
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Present iff authenticated. Consumers gate on [`Self::is_authenticated`],
    /// never on token presence.
    pub user: Option<User>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    /// True until the startup restore has resolved either way.
    pub loading: bool,
    /// Logout generation counter; see the module docs.
    pub epoch: u64,
    /// In-flight guard for mutating network operations.
    pub busy: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            access_token: None,
            refresh_token: None,
            loading: true,
            epoch: 0,
            busy: false,
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Apply a successful login/register response: user and both tokens in
    /// memory, tokens written through to persisted storage.
    pub fn apply_auth(&mut self, resp: AuthResponse) {
        token_store::write(&resp.access_token, &resp.refresh_token);
        self.access_token = Some(resp.access_token);
        self.refresh_token = Some(resp.refresh_token);
        self.user = Some(resp.user);
        self.loading = false;
    }

    /// Put persisted tokens back in memory ahead of the profile fetch.
    /// `user` stays unset until the fetch succeeds.
    pub fn begin_restore(&mut self, access: String, refresh: String) {
        self.access_token = Some(access);
        self.refresh_token = Some(refresh);
    }

    /// Record a freshly uploaded profile picture on the signed-in user.
    /// No-op while anonymous.
    pub fn apply_profile_picture(&mut self, path: String) {
        if let Some(user) = self.user.as_mut() {
            user.profile_picture = Some(path);
        }
    }

    /// Clear the session, in memory and in persisted storage. Idempotent.
    /// Bumps the epoch so in-flight operation results are discarded.
    pub fn apply_logout(&mut self) {
        token_store::clear();
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
        self.loading = false;
        self.epoch += 1;
    }
}

/// Restore the session from persisted tokens. Run once at startup.
///
/// Never surfaces an error: missing tokens, a rejected credential, or a
/// transport failure all resolve to a clean logged-out state.
pub async fn restore(session: RwSignal<SessionState>) {
    // Another mutation already owns the session; resolve `loading` so the
    // route guards are not parked waiting on a restore that will never run.
    if session.with_untracked(|s| s.busy) {
        session.update(|s| s.loading = false);
        return;
    }
    let Some((access, refresh)) = token_store::read() else {
        session.update(|s| s.loading = false);
        return;
    };

    let epoch = session.with_untracked(|s| s.epoch);
    session.update(|s| {
        s.busy = true;
        s.begin_restore(access, refresh);
    });

    match api::current_user().await {
        Ok(user) => session.update(|s| {
            s.busy = false;
            if s.epoch == epoch {
                s.user = Some(user);
                s.loading = false;
            }
        }),
        Err(err) => {
            leptos::logging::warn!("session restore failed: {err}");
            session.update(|s| {
                s.busy = false;
                if s.epoch == epoch {
                    s.apply_logout();
                }
            });
        }
    }
}

/// Authenticate against `POST /auth/login`.
///
/// # Errors
///
/// On rejection the session and persisted storage are left untouched and the
/// error is returned for the form to display.
pub async fn login(
    session: RwSignal<SessionState>,
    email: &str,
    password: &str,
) -> Result<(), ApiError> {
    authenticate(session, api::login(email, password)).await
}

/// Create an account via `POST /auth/register`; success yields an
/// immediately authenticated session, same contract as [`login`].
///
/// # Errors
///
/// Same as [`login`].
pub async fn register(session: RwSignal<SessionState>, data: RegisterData) -> Result<(), ApiError> {
    authenticate(session, api::register(data)).await
}

/// Clear the session unconditionally. Synchronous, never fails.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(SessionState::apply_logout);
}

async fn authenticate(
    session: RwSignal<SessionState>,
    request: impl Future<Output = Result<AuthResponse, ApiError>>,
) -> Result<(), ApiError> {
    if session.with_untracked(|s| s.busy) {
        return Err(ApiError::Busy);
    }
    let epoch = session.with_untracked(|s| s.epoch);
    session.update(|s| s.busy = true);

    match request.await {
        Ok(resp) => {
            session.update(|s| {
                s.busy = false;
                if s.epoch == epoch {
                    s.apply_auth(resp);
                } else {
                    leptos::logging::warn!("sign-in completed after logout; result discarded");
                }
            });
            Ok(())
        }
        Err(err) => {
            session.update(|s| s.busy = false);
            Err(err)
        }
    }
}
