//! Browser storage and formatting helpers.

pub mod format;
pub mod theme;
pub mod token_store;
