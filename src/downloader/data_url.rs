//! Inline `data:` images, which search result pages use for thumbnails.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use percent_encoding::percent_decode_str;

const SCHEME: &str = "data:";

pub fn is_data_url(url: &str) -> bool {
    url.get(..SCHEME.len())
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case(SCHEME))
}

/// Decodes a `data:[<mediatype>][;base64],<payload>` URL. The payload is
/// percent-decoded first, then base64-decoded when the header says so.
pub fn decode(url: &str) -> Result<Vec<u8>, String> {
    if !is_data_url(url) {
        return Err("not a data url".to_string());
    }

    let rest = &url[SCHEME.len()..];

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| "data url has no payload separator".to_string())?;

    let bytes: Vec<u8> = percent_decode_str(payload).collect();

    if !header.trim_end().to_ascii_lowercase().ends_with(";base64") {
        return Ok(bytes);
    }

    let bytes: Vec<u8> = bytes.into_iter().filter(|b| !b.is_ascii_whitespace()).collect();

    STANDARD
        .decode(bytes)
        .map_err(|e| format!("invalid base64 payload: {}", e))
}

#[cfg(test)]
mod tests {
    use super::{decode, is_data_url};

    #[test]
    fn test_is_data_url() {
        assert!(is_data_url("data:image/gif;base64,R0lG"));
        assert!(is_data_url("DATA:image/png;base64,"));
        assert!(!is_data_url("https://example.com/data:x"));
        assert!(!is_data_url("dat"));
    }

    #[test]
    fn test_decode_base64_payload() {
        let bytes = decode("data:image/jpeg;base64,aGVsbG8=").unwrap();

        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_ignores_whitespace_in_payload() {
        let bytes = decode("data:image/jpeg;base64,aGVs\nbG8=").unwrap();

        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_percent_encoded_payload() {
        let bytes = decode("data:image/svg+xml,%3Csvg%20xmlns%3D%22x%22%2F%3E").unwrap();

        assert_eq!(bytes, b"<svg xmlns=\"x\"/>");

        assert_eq!(decode("data:,plain").unwrap(), b"plain");
        assert_eq!(decode("data:image/gif,%FF%00").unwrap(), vec![0xff, 0x00]);
    }

    #[test]
    fn test_decode_percent_encoded_base64() {
        let bytes = decode("data:image/jpeg;base64,aGVsbG8%3D").unwrap();

        assert_eq!(bytes, b"hello");
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(decode("data:image/png;base64").is_err());
        assert!(decode("data:image/png;base64,!!!").is_err());
        assert!(decode("https://example.com/a.png").is_err());
    }
}
