//! Filename derivation and sanitization.

use crate::error::{Error, Result};

/// Derive the output filename for a media URL: the last path segment with
/// any query string stripped.
pub fn filename_from_url(url: &str) -> Result<String> {
    let without_query = url.split('?').next().unwrap_or(url);
    let basename = without_query.rsplit('/').next().unwrap_or("");
    sanitize_filename(basename)
}

/// Validate and sanitize a filename, replacing characters the filesystem
/// rejects and refusing traversal attempts.
pub fn sanitize_filename(name: &str) -> Result<String> {
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "filename is empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_query_string() {
        assert_eq!(
            filename_from_url("https://cdn.example.com/v/t51/12345_n.jpg?efg=abc&oh=1").unwrap(),
            "12345_n.jpg"
        );
    }

    #[test]
    fn plain_url_keeps_basename() {
        assert_eq!(
            filename_from_url("https://cdn.example.com/path/to/clip.mp4").unwrap(),
            "clip.mp4"
        );
    }

    #[test]
    fn url_ending_in_slash_is_invalid() {
        assert!(matches!(
            filename_from_url("https://cdn.example.com/path/").unwrap_err(),
            Error::InvalidFilename(_)
        ));
    }

    #[test]
    fn traversal_basename_is_rejected() {
        assert!(matches!(
            filename_from_url("https://cdn.example.com/..").unwrap_err(),
            Error::InvalidFilename(_)
        ));
    }

    #[test]
    fn problem_characters_are_replaced() {
        assert_eq!(sanitize_filename("file:with*odd?chars.jpg").unwrap(), "file_with_odd_chars.jpg");
    }

    #[test]
    fn null_bytes_are_rejected() {
        assert!(sanitize_filename("file\0name.jpg").is_err());
    }
}
