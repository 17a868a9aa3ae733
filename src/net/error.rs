//! Error taxonomy for REST calls.

/// Failure modes surfaced by [`crate::net::api`].
///
/// Credential rejections arrive as `Status`; the 401 interceptor reports
/// `Unauthorized` after it has already cleared the session. Views display
/// these via `Display` and decide their own fallback text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. `message` comes from the
    /// response body when one was provided.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// An authenticated call returned 401; the session has been cleared.
    #[error("session expired")]
    Unauthorized,

    /// Transport-level failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Another session-mutating operation is already in flight.
    #[error("another sign-in attempt is in progress")]
    Busy,
}
