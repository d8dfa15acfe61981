//! Byte decoding helpers.

use std::borrow::Cow;

/// How far into a page to look for a `<meta charset>` declaration.
const CHARSET_SNIFF_LIMIT: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset="...">`)
/// 3. Falls back to Windows-1252 (what browsers assume for legacy pages)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    let hint = hint_encoding.or_else(|| extract_meta_charset(bytes));
    if let Some(name) = hint
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the encoding label from a `charset=` declaration near the top of a page.
///
/// Covers both `<meta charset="x">` and the older
/// `<meta http-equiv="Content-Type" content="text/html; charset=x">` forms.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(CHARSET_SNIFF_LIMIT)];
    let pos = head
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;

    let rest = &head[pos + 8..];
    let rest = rest
        .strip_prefix(b"\"")
        .or_else(|| rest.strip_prefix(b"'"))
        .unwrap_or(rest);
    let end = rest
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
        .unwrap_or(rest.len());

    let label = std::str::from_utf8(&rest[..end]).ok()?;
    (!label.is_empty()).then_some(label)
}
