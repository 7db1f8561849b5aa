// ============================================================
// BYTE DECODING
// ============================================================
// Tolerant UTF-8 decoding so text probes never fail on encoding

/// Decode raw bytes as UTF-8, replacing invalid sequences and
/// stripping a leading BOM. Never fails.
pub(crate) fn decode_bytes(bytes: &[u8]) -> String {
    let (decoded, _, had_errors) = encoding_rs::UTF_8.decode(bytes);
    if had_errors {
        tracing::debug!(size = bytes.len(), "input contained invalid UTF-8, decoded lossily");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_plain_utf8() {
        assert_eq!(decode_bytes(b"hello"), "hello");
    }

    #[test]
    fn test_strips_bom() {
        assert_eq!(decode_bytes(b"\xef\xbb\xbfname,age"), "name,age");
    }

    #[test]
    fn test_replaces_invalid_sequences() {
        let decoded = decode_bytes(b"ab\xffcd");
        assert!(decoded.starts_with("ab"));
        assert!(decoded.ends_with("cd"));
    }
}
