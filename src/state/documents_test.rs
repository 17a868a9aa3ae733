use super::*;

fn doc(id: i64, name: &str) -> DocumentInfo {
    DocumentInfo {
        id,
        filename: format!("{id}_{name}"),
        original_filename: name.to_owned(),
        file_type: "pdf".to_owned(),
        file_size: 2048,
        upload_date: "2024-01-10".to_owned(),
        last_modified: None,
        is_public: false,
        description: String::new(),
    }
}

#[test]
fn documents_state_starts_loading() {
    let state = DocumentsState::default();
    assert!(state.loading);
    assert!(!state.uploading);
    assert!(state.items.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn apply_loaded_replaces_items_and_clears_error() {
    let mut state = DocumentsState::default();
    state.apply_error("previous failure");

    state.apply_loaded(vec![doc(1, "notes.pdf"), doc(2, "summary.pdf")]);

    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_error_clears_busy_flags() {
    let mut state = DocumentsState::default();
    state.uploading = true;

    state.apply_error("upload failed");

    assert_eq!(state.error.as_deref(), Some("upload failed"));
    assert!(!state.loading);
    assert!(!state.uploading);
}

#[test]
fn remove_drops_only_the_matching_document() {
    let mut state = DocumentsState::default();
    state.apply_loaded(vec![doc(1, "a.pdf"), doc(2, "b.pdf")]);

    state.remove(1);

    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, 2);

    // Unknown ids are a no-op.
    state.remove(99);
    assert_eq!(state.items.len(), 1);
}
