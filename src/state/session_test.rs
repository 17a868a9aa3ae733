use super::*;
use crate::net::types::AuthResponse;
use leptos::prelude::GetUntracked;

/// Drive a future to completion. The native transport resolves immediately,
/// so no real waker is needed.
fn block_on<F: Future>(future: F) -> F::Output {
    let mut future = std::pin::pin!(future);
    let mut cx = std::task::Context::from_waker(std::task::Waker::noop());
    loop {
        if let std::task::Poll::Ready(out) = future.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

fn user(email: &str) -> User {
    User {
        email: email.to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        bio: None,
        profile_picture: None,
    }
}

fn auth_response() -> AuthResponse {
    AuthResponse {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        user: user("ada@example.com"),
    }
}

// =============================================================
// Defaults and invariants
// =============================================================

#[test]
fn default_session_is_anonymous_and_loading() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(state.loading);
    assert!(!state.busy);
}

#[test]
fn tokens_alone_do_not_authenticate() {
    // The restore window: tokens are back in memory but the profile fetch
    // has not completed. is_authenticated must gate on the user record.
    let mut state = SessionState::default();
    state.begin_restore("access-1".to_owned(), "refresh-1".to_owned());

    assert_eq!(state.access_token.as_deref(), Some("access-1"));
    assert_eq!(state.refresh_token.as_deref(), Some("refresh-1"));
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// apply_auth: persistence round-trip
// =============================================================

#[test]
fn apply_auth_sets_session_and_persists_tokens() {
    token_store::clear();
    let mut state = SessionState::default();

    state.apply_auth(auth_response());

    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("ada@example.com"));
    assert_eq!(state.access_token.as_deref(), Some("access-1"));
    assert_eq!(state.refresh_token.as_deref(), Some("refresh-1"));
    assert!(!state.loading);

    // Persisted copy holds exactly the returned tokens.
    assert_eq!(
        token_store::read(),
        Some(("access-1".to_owned(), "refresh-1".to_owned()))
    );
    assert_eq!(token_store::access().as_deref(), Some("access-1"));
}

#[test]
fn apply_auth_overwrites_previous_tokens() {
    token_store::write("old-access", "old-refresh");
    let mut state = SessionState::default();

    state.apply_auth(auth_response());

    assert_eq!(
        token_store::read(),
        Some(("access-1".to_owned(), "refresh-1".to_owned()))
    );
}

// =============================================================
// apply_logout
// =============================================================

#[test]
fn logout_clears_session_and_storage() {
    let mut state = SessionState::default();
    state.apply_auth(auth_response());

    state.apply_logout();

    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(token_store::read().is_none());
}

#[test]
fn logout_is_idempotent() {
    let mut state = SessionState::default();
    state.apply_auth(auth_response());

    state.apply_logout();
    state.apply_logout();

    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(token_store::read().is_none());
}

#[test]
fn logout_bumps_epoch_so_stale_results_are_detected() {
    let mut state = SessionState::default();
    let epoch_at_request = state.epoch;

    // A logout lands while the request is in flight.
    state.apply_logout();

    // The completion handler compares epochs and must discard its result.
    assert_ne!(state.epoch, epoch_at_request);
}

#[test]
fn profile_picture_lands_on_the_signed_in_user() {
    let mut state = SessionState::default();
    state.apply_auth(auth_response());

    state.apply_profile_picture("uploads/profile_pictures/1_ada.png".to_owned());

    assert_eq!(
        state.user.as_ref().and_then(|u| u.profile_picture.as_deref()),
        Some("uploads/profile_pictures/1_ada.png")
    );
}

#[test]
fn profile_picture_is_dropped_while_anonymous() {
    let mut state = SessionState::default();

    state.apply_profile_picture("uploads/profile_pictures/1_ada.png".to_owned());

    assert!(state.user.is_none());
}

// =============================================================
// Sign-in failure and overlap rejection
// =============================================================

#[test]
fn rejected_login_leaves_session_and_storage_untouched() {
    token_store::clear();
    let session = RwSignal::new(SessionState::default());

    // The native transport rejects every request, standing in for a refused
    // credential. Nothing about the session may change.
    let result = block_on(login(session, "ada@example.com", "wrong-password"));

    assert!(result.is_err());
    let state = session.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(!state.busy);
    assert_eq!(state.epoch, 0);
    assert!(token_store::read().is_none());
}

#[test]
fn overlapping_sign_in_is_rejected_as_busy() {
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.busy = true);

    let result = block_on(login(session, "ada@example.com", "password"));

    assert_eq!(result, Err(ApiError::Busy));
    // The in-flight operation still owns the session.
    assert!(session.get_untracked().busy);
    assert!(session.get_untracked().user.is_none());
}

// =============================================================
// Restore failure cascade
// =============================================================

#[test]
fn restore_with_unusable_transport_ends_logged_out() {
    token_store::write("stale-access", "stale-refresh");
    let session = RwSignal::new(SessionState::default());

    block_on(restore(session));

    let state = session.get_untracked();
    assert!(!state.is_authenticated());
    assert!(state.access_token.is_none());
    assert!(state.refresh_token.is_none());
    assert!(!state.loading);
    assert!(!state.busy);
    assert!(token_store::read().is_none());
}

#[test]
fn restore_skipped_while_busy_still_resolves_loading() {
    token_store::write("access-1", "refresh-1");
    let session = RwSignal::new(SessionState::default());
    session.update(|s| s.busy = true);

    block_on(restore(session));

    // The guards must never be parked on `loading`, and the skipped restore
    // must not touch tokens owned by the in-flight operation.
    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(state.access_token.is_none());
    token_store::clear();
}

#[test]
fn rejected_restore_ends_in_clean_logout() {
    token_store::write("stale-access", "stale-refresh");
    let mut state = SessionState::default();

    let (access, refresh) = token_store::read().expect("tokens persisted");
    state.begin_restore(access, refresh);

    // Profile fetch rejected: the restore path applies the full logout.
    state.apply_logout();

    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(token_store::read().is_none());
}
