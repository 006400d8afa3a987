//! Inline image encoding as `data:` URIs

use crate::error::{JournalError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn data_uri_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)^data:([^;,]*)((?:;[^;,]*)*),(.*)$").unwrap())
}

/// A decoded `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl DataUri {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        DataUri {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Build from a file's bytes, guessing the MIME type from its extension
    pub fn from_file_bytes(path: &Path, data: Vec<u8>) -> Self {
        DataUri::new(mime_type_for_path(path), data)
    }

    /// Render as `data:<mime>;base64,<payload>`
    pub fn encode(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.data))
    }

    /// Parse a `data:` URI. Payloads without `;base64` are taken verbatim.
    pub fn parse(uri: &str) -> Result<Self> {
        let captures = data_uri_regex()
            .captures(uri.trim())
            .ok_or_else(|| JournalError::Image("Not a data URI".to_string()))?;

        let mime_type = match &captures[1] {
            "" => "text/plain",
            mime => mime,
        };
        let is_base64 = captures[2].split(';').any(|param| param == "base64");
        let payload = &captures[3];

        let data = if is_base64 {
            STANDARD
                .decode(payload)
                .map_err(|e| JournalError::Image(format!("Invalid base64 payload: {}", e)))?
        } else {
            payload.as_bytes().to_vec()
        };

        Ok(DataUri::new(mime_type, data))
    }

    pub fn is_data_uri(value: &str) -> bool {
        value.trim_start().starts_with("data:")
    }

    /// Size of the decoded payload in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Conventional file extension for the MIME type
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            "image/bmp" => "bmp",
            "image/x-icon" => "ico",
            "image/avif" => "avif",
            "text/plain" => "txt",
            _ => "bin",
        }
    }
}

/// Guess a MIME type from a file extension
pub fn mime_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png() {
        let uri = DataUri::new("image/png", vec![0x89, b'P', b'N', b'G']);
        assert_eq!(uri.encode(), "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn test_parse_recovers_mime_and_bytes() {
        let original = DataUri::new("image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0, 0x00]);
        let parsed = DataUri::parse(&original.encode()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.len(), 5);
        assert_eq!(parsed.extension(), "jpg");
    }

    #[test]
    fn test_parse_plain_payload() {
        let parsed = DataUri::parse("data:,hello").unwrap();
        assert_eq!(parsed.mime_type, "text/plain");
        assert_eq!(parsed.data, b"hello");
    }

    #[test]
    fn test_parse_with_extra_parameters() {
        let parsed = DataUri::parse("data:image/svg+xml;charset=utf-8;base64,PHN2Zy8+").unwrap();
        assert_eq!(parsed.mime_type, "image/svg+xml");
        assert_eq!(parsed.data, b"<svg/>");
    }

    #[test]
    fn test_parse_rejects_non_data_uri() {
        assert!(DataUri::parse("/placeholder.svg?height=400&width=600").is_err());
        assert!(!DataUri::is_data_uri("/placeholder.svg"));
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        let err = DataUri::parse("data:image/png;base64,***").unwrap_err();
        assert!(matches!(err, JournalError::Image(_)));
    }

    #[test]
    fn test_mime_type_for_path() {
        assert_eq!(mime_type_for_path(Path::new("finch.PNG")), "image/png");
        assert_eq!(mime_type_for_path(Path::new("a/b/c.jpeg")), "image/jpeg");
        assert_eq!(mime_type_for_path(Path::new("sketch.svg")), "image/svg+xml");
        assert_eq!(
            mime_type_for_path(Path::new("notes")),
            "application/octet-stream"
        );
    }
}
