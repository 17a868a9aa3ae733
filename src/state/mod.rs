//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `guide`, `documents`) so
//! individual components can depend on small focused models. Each is
//! provided as an `RwSignal` via context from the root component; the
//! session store additionally owns all credential mutation.

pub mod chat;
pub mod documents;
pub mod guide;
pub mod session;
