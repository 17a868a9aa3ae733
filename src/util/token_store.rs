//! Persisted bearer credentials.
//!
//! The session store is the only writer of these two `localStorage` keys;
//! everything else reads through [`access`] so each outgoing request picks up
//! the latest token. Non-browser builds keep the pair in a thread-local cell,
//! which also backs the native state tests.

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static TOKENS: std::cell::RefCell<Option<(String, String)>> =
        const { std::cell::RefCell::new(None) };
}

/// Read the persisted access + refresh token pair.
///
/// Returns `None` unless both keys are present, matching the restore
/// contract: a lone token is not a restorable session.
pub fn read() -> Option<(String, String)> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let access = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
        let refresh = storage.get_item(REFRESH_TOKEN_KEY).ok()??;
        Some((access, refresh))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKENS.with(|t| t.borrow().clone())
    }
}

/// The current access token, if any.
pub fn access() -> Option<String> {
    read().map(|(access, _)| access)
}

/// Write-through both tokens. Called on successful login/register.
pub fn write(access: &str, refresh: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
            let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKENS.with(|t| *t.borrow_mut() = Some((access.to_owned(), refresh.to_owned())));
    }
}

/// Delete both token entries. Called on logout and on a rejected restore.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        TOKENS.with(|t| *t.borrow_mut() = None);
    }
}
