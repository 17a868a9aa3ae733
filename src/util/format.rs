//! Display formatting for the documents view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Human-readable file size: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2.25 MB`.
/// Two decimals at most, trailing zeros trimmed.
pub fn file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    format!("{text} {}", UNITS[unit])
}

/// Icon + label for a document's file type, keyed by extension.
pub fn file_type_info(file_type: &str) -> (&'static str, &'static str) {
    match file_type.to_ascii_lowercase().as_str() {
        "pdf" => ("\u{1F4C4}", "PDF"),
        "doc" | "docx" => ("\u{1F4DD}", "Word"),
        "txt" => ("\u{1F4C4}", "Text"),
        "rtf" => ("\u{1F4C4}", "RTF"),
        "jpg" | "jpeg" | "png" | "webp" => ("\u{1F5BC}\u{FE0F}", "Image"),
        "gif" => ("\u{1F5BC}\u{FE0F}", "GIF"),
        "mp3" | "wav" | "ogg" => ("\u{1F3B5}", "Audio"),
        "mp4" | "avi" | "mov" => ("\u{1F3A5}", "Video"),
        "zip" | "rar" | "7z" => ("\u{1F4E6}", "Archive"),
        _ => ("\u{1F4C4}", "File"),
    }
}
