#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::DocumentInfo;

/// State for the documents page: the fetched list plus load/upload flags.
#[derive(Clone, Debug)]
pub struct DocumentsState {
    pub items: Vec<DocumentInfo>,
    pub loading: bool,
    pub uploading: bool,
    pub error: Option<String>,
}

impl Default for DocumentsState {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, uploading: false, error: None }
    }
}

impl DocumentsState {
    /// Replace the list with a fresh server response.
    pub fn apply_loaded(&mut self, items: Vec<DocumentInfo>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a fetch/upload/delete failure for the error banner.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
        self.uploading = false;
    }

    /// Drop a document after a successful delete.
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|d| d.id != id);
    }
}
