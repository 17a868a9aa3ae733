//! Reusable UI components.

pub mod chat_panel;
pub mod guard;
pub mod guide_config;
pub mod guide_history;
pub mod navigation;
