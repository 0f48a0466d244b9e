use std::path::Path;

use crate::share::record::ShareKind;

/// Pick the record type from the fields that survived resolution and
/// payload persistence. Fixed priority: image > url > text. Returns `None`
/// when nothing resolved, in which case no record is written.
///
/// The image slot is judged by its persisted path, not by the raw bytes: a
/// payload that failed to store falls through to the next priority.
pub fn classify(
    image_path: Option<&Path>,
    url: Option<&str>,
    text: Option<&str>,
) -> Option<ShareKind> {
    if image_path.is_some() {
        Some(ShareKind::Image)
    } else if url.is_some() {
        Some(ShareKind::Url)
    } else if text.is_some() {
        Some(ShareKind::Text)
    } else {
        None
    }
}

/// Bare absolute web link check used for URL promotion: shared plain text
/// that is a single http(s) token is a link share, not a text share.
pub fn is_web_url(text: &str) -> bool {
    let trimmed = text.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !trimmed.chars().any(char::is_whitespace),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_wins_over_everything() {
        let kind = classify(
            Some(Path::new("/data/images/a.png")),
            Some("https://example.com"),
            Some("caption"),
        );
        assert_eq!(kind, Some(ShareKind::Image));
    }

    #[test]
    fn test_url_wins_over_text() {
        let kind = classify(None, Some("https://example.com"), Some("check this out"));
        assert_eq!(kind, Some(ShareKind::Url));
    }

    #[test]
    fn test_text_alone() {
        assert_eq!(classify(None, None, Some("hello")), Some(ShareKind::Text));
    }

    #[test]
    fn test_nothing_resolved() {
        assert_eq!(classify(None, None, None), None);
    }

    #[test]
    fn test_is_web_url_accepts_bare_links() {
        assert!(is_web_url("https://example.com"));
        assert!(is_web_url("http://example.com/path?q=1"));
        assert!(is_web_url("  https://example.com  "));
    }

    #[test]
    fn test_is_web_url_rejects_prose_and_bare_schemes() {
        assert!(!is_web_url("check this out https://example.com"));
        assert!(!is_web_url("just some text"));
        assert!(!is_web_url("ftp://example.com"));
        assert!(!is_web_url("https://"));
        assert!(!is_web_url(""));
    }
}
