use super::*;

// =============================================================
// file_size
// =============================================================

#[test]
fn file_size_zero() {
    assert_eq!(file_size(0), "0 Bytes");
}

#[test]
fn file_size_bytes_stay_bytes() {
    assert_eq!(file_size(512), "512 Bytes");
    assert_eq!(file_size(1023), "1023 Bytes");
}

#[test]
fn file_size_trims_trailing_zeros() {
    assert_eq!(file_size(1024), "1 KB");
    assert_eq!(file_size(1536), "1.5 KB");
}

#[test]
fn file_size_keeps_two_decimals() {
    // 2.25 MB exactly.
    assert_eq!(file_size(2 * 1024 * 1024 + 256 * 1024), "2.25 MB");
}

#[test]
fn file_size_caps_at_gigabytes() {
    assert_eq!(file_size(3 * 1024 * 1024 * 1024), "3 GB");
    assert_eq!(file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
}

// =============================================================
// file_type_info
// =============================================================

#[test]
fn file_type_info_known_types() {
    assert_eq!(file_type_info("pdf").1, "PDF");
    assert_eq!(file_type_info("docx").1, "Word");
    assert_eq!(file_type_info("PNG").1, "Image");
    assert_eq!(file_type_info("zip").1, "Archive");
}

#[test]
fn file_type_info_unknown_falls_back() {
    assert_eq!(file_type_info("xyz").1, "File");
}
