// Logo asset loading
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct LogoAsset {
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Read the logo once at startup. Missing or unreadable files are not fatal;
/// the header is rendered without an image.
pub fn load_logo(path: &str) -> Option<LogoAsset> {
    if path.is_empty() {
        return None;
    }

    match std::fs::read(Path::new(path)) {
        Ok(bytes) if !bytes.is_empty() => {
            let content_type = sniff_content_type(&bytes);
            tracing::info!("Loaded logo {} ({} bytes, {})", path, bytes.len(), content_type);
            Some(LogoAsset {
                content_type,
                bytes,
            })
        }
        Ok(_) => {
            tracing::warn!("Logo file {} is empty, rendering without logo", path);
            None
        }
        Err(e) => {
            tracing::warn!("Could not read logo {}: {}, rendering without logo", path, e);
            None
        }
    }
}

fn sniff_content_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_png() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\nrest-of-image").unwrap();

        let logo = load_logo(file.path().to_str().unwrap()).unwrap();
        assert_eq!(logo.content_type, "image/png");
        assert_eq!(logo.bytes.len(), 21);
    }

    #[test]
    fn test_missing_or_disabled_logo() {
        assert!(load_logo("").is_none());
        assert!(load_logo("/definitely/not/here/logo.png").is_none());
    }

    #[test]
    fn test_sniff_content_type() {
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_content_type(b"GIF89a...."), "image/gif");
        assert_eq!(sniff_content_type(b"<svg xmlns=\"\"/>"), "image/svg+xml");
        assert_eq!(sniff_content_type(b"plain"), "application/octet-stream");
    }
}
