//! Common utility functions

use std::path::Path;

/// Truncate a string to at most `max_len` characters, prefix preserved.
pub fn truncate_chars(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        s.chars().take(max_len).collect()
    }
}

/// Lower-cased file extension including the leading dot, or an empty string
/// when the path has none.
pub fn file_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("short", 80), "short");
        let long = "x".repeat(100);
        assert_eq!(truncate_chars(&long, 80).chars().count(), 80);
        // Multi-byte characters count as one
        let swedish = "Ö".repeat(90);
        assert_eq!(truncate_chars(&swedish, 80).chars().count(), 80);
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension(Path::new("strings.po")), ".po");
        assert_eq!(file_extension(Path::new("app_sv.TS")), ".ts");
        assert_eq!(file_extension(Path::new("README")), "");
    }
}
