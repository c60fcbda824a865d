//! Text helpers shared by the exporter and importer.

use std::borrow::Cow;

use memchr::memmem;

/// How far into a document to look for a `<meta charset>` declaration.
const CHARSET_SNIFF_LIMIT: usize = 1024;

/// Decode markup bytes to a string.
///
/// 1. UTF-8 (a BOM is honored)
/// 2. the label from `hint_encoding`, when UTF-8 is malformed
/// 3. Windows-1252
///
/// Valid UTF-8 input is borrowed, not copied.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        log::debug!("decoding markup as {}", encoding.name());
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    log::debug!("decoding markup as windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// The `charset` label declared in the head of a markup document, if any.
///
/// Matches both `<meta charset="...">` and the `http-equiv` form
/// `content="text/html; charset=..."`.
pub fn sniff_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(CHARSET_SNIFF_LIMIT)];
    let lower = head.to_ascii_lowercase();
    let start = memmem::find(&lower, b"charset=")? + b"charset=".len();

    let label: String = lower[start..]
        .iter()
        .skip_while(|&&b| b == b'"' || b == b'\'' || b == b' ')
        .take_while(|&&b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.'))
        .map(|&b| b as char)
        .collect();

    (!label.is_empty()).then_some(label)
}

/// Escape text for use in markup content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// `borderTopColor` -> `border-top-color`. Custom properties (`--x`) pass
/// through unchanged.
pub fn camel_to_kebab(name: &str) -> Cow<'_, str> {
    if name.starts_with("--") || !name.bytes().any(|b| b.is_ascii_uppercase()) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// `border-top-color` -> `borderTopColor`. Custom properties pass through
/// unchanged.
pub fn kebab_to_camel(name: &str) -> Cow<'_, str> {
    if name.starts_with("--") || !name.contains('-') {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_borrows() {
        let text = decode_text("Grüße".as_bytes(), None);
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "Grüße");
    }

    #[test]
    fn test_decode_with_hint() {
        // "Grüße" in ISO-8859-2 / Windows-1250 share these bytes.
        let bytes = b"Gr\xfc\xdfe";
        assert_eq!(decode_text(bytes, Some("iso-8859-2")), "Grüße");
        assert_eq!(decode_text(bytes, None), "Grüße");
    }

    #[test]
    fn test_sniff_charset() {
        assert_eq!(
            sniff_charset(br#"<html><head><meta charset="ISO-8859-1">"#).as_deref(),
            Some("iso-8859-1")
        );
        assert_eq!(
            sniff_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#
            )
            .as_deref(),
            Some("windows-1251")
        );
        assert_eq!(sniff_charset(b"<html><body>"), None);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Tom & "Jerry" <3 'x'"#),
            "Tom &amp; &quot;Jerry&quot; &lt;3 &#39;x&#39;"
        );
    }

    #[test]
    fn test_property_case() {
        assert_eq!(camel_to_kebab("borderTopColor"), "border-top-color");
        assert_eq!(camel_to_kebab("color"), "color");
        assert_eq!(camel_to_kebab("--brandColor"), "--brandColor");
        assert_eq!(kebab_to_camel("border-top-color"), "borderTopColor");
        assert_eq!(kebab_to_camel("max-width"), "maxWidth");
        assert_eq!(kebab_to_camel("-webkit-text-size-adjust"), "WebkitTextSizeAdjust");
        assert_eq!(camel_to_kebab("WebkitTextSizeAdjust"), "-webkit-text-size-adjust");
        assert_eq!(kebab_to_camel("--brand-color"), "--brand-color");
    }
}
