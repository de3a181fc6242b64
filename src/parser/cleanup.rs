// src/parser/cleanup.rs

use log::debug;

/// Decodes a request body to text.
///
/// Valid UTF-8 is returned as-is. Anything else is read byte by byte: bytes in
/// `32..=255` become the Latin-1 character with that code point, all other
/// bytes become a space.
pub fn cleanup_text(data: &[u8]) -> String {
    match std::str::from_utf8(data) {
        Ok(text) => text.to_string(),
        Err(e) => {
            debug!(
                "Body is not valid UTF-8 ({}), falling back to byte-wise decoding",
                e
            );
            data.iter()
                .map(|&b| if b >= 32 { char::from(b) } else { ' ' })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passes_through() {
        let text = "Café au lait.\nSecond line.";
        assert_eq!(cleanup_text(text.as_bytes()), text);
    }

    #[test]
    fn test_invalid_utf8_maps_latin1() {
        // 0xE9 alone is not valid UTF-8, it is é in Latin-1
        let data = [b'c', b'a', b'f', 0xE9, b'!'];
        assert_eq!(cleanup_text(&data), "café!");
    }

    #[test]
    fn test_control_bytes_become_spaces_on_fallback() {
        let data = [b'a', b'\n', 0x01, 0xFF, b'b'];
        assert_eq!(cleanup_text(&data), "a  \u{ff}b");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(cleanup_text(&[]), "");
    }
}
