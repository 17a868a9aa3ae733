//! Routed pages.

pub mod chat;
pub mod documents;
pub mod login;
pub mod profile;
pub mod register;
