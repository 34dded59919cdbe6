//! Canonicalization of raw URL text (user input, CSV cells, QR payloads).

use std::fmt;

use super::parts::UrlParts;

const DEFAULT_SCHEME: &str = "http";

/// A URL string with a guaranteed non-empty, lowercase scheme and no
/// embedded line breaks. Built only by [`normalize_url`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl {
    url: String,
    parts: UrlParts,
}

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Components of the normalized string.
    pub fn parts(&self) -> &UrlParts {
        &self.parts
    }

    pub fn scheme(&self) -> &str {
        &self.parts.scheme
    }

    /// Authority as written (userinfo and port included).
    pub fn netloc(&self) -> &str {
        &self.parts.netloc
    }

    pub fn path(&self) -> &str {
        &self.parts.path
    }

    pub fn query(&self) -> &str {
        &self.parts.query
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Normalizes an optional raw value; `None` behaves like the empty string.
pub fn normalize_opt(raw: Option<&str>) -> NormalizedUrl {
    normalize_url(raw.unwrap_or(""))
}

/// Normalizes arbitrary text into a URL with a guaranteed scheme.
///
/// - Only the first line of multi-line input is used.
/// - `"<id>    http://..."` style rows keep the last token containing `http`.
/// - Bare hosts (`example.com/path`) are re-read with an `http://` prefix.
/// - The scheme is lowercased and defaults to `http`.
///
/// Never fails; garbage in yields a best-effort string out.
pub fn normalize_url(raw: &str) -> NormalizedUrl {
    let mut candidate = raw.trim();
    if let Some((first, _)) = candidate.split_once('\n') {
        candidate = first.trim_end();
    }
    if has_prefixed_url(candidate) {
        if let Some(last) = candidate.split_whitespace().filter(|t| t.contains("http")).last() {
            candidate = last;
        }
    }

    let mut parts = UrlParts::parse(candidate, DEFAULT_SCHEME);
    if parts.netloc.is_empty() && !parts.path.is_empty() {
        parts = UrlParts::parse(&format!("http://{candidate}"), DEFAULT_SCHEME);
    }

    parts.scheme = parts.scheme.to_ascii_lowercase();
    if parts.scheme.is_empty() {
        parts.scheme = DEFAULT_SCHEME.to_string();
    }

    let url = parts.to_url_string();
    // Re-split so the stored components describe exactly the returned string.
    let parts = UrlParts::parse(&url, DEFAULT_SCHEME);
    tracing::trace!(raw, normalized = %url, "normalized url");
    NormalizedUrl { url, parts }
}

/// True when an ID column sits in front of the real URL: the first token
/// carries no `http` and some whitespace character is immediately followed
/// by `http`.
fn has_prefixed_url(s: &str) -> bool {
    let prefix_is_id = s
        .split_whitespace()
        .next()
        .is_some_and(|first| !first.contains("http"));
    prefix_is_id
        && s.char_indices()
            .any(|(i, c)| c.is_whitespace() && s[i + c.len_utf8()..].starts_with("http"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_default_scheme_to_bare_host() {
        let n = normalize_url("example.com/path");
        assert_eq!(n.as_str(), "http://example.com/path");
        assert_eq!(n.netloc(), "example.com");
        assert_eq!(n.path(), "/path");
    }

    #[test]
    fn lowercases_scheme_only() {
        let n = normalize_url("HTTPS://Example.COM/Path");
        assert_eq!(n.as_str(), "https://Example.COM/Path");
        assert_eq!(n.scheme(), "https");
    }

    #[test]
    fn trims_and_keeps_first_line() {
        let n = normalize_url("  https://a.com/x\nsecond line\n");
        assert_eq!(n.as_str(), "https://a.com/x");
        assert_eq!(normalize_url("a.com   \nb").as_str(), "http://a.com");
        assert_eq!(normalize_url("a.com \r\nb").as_str(), "http://a.com");
    }

    #[test]
    fn picks_last_http_token_after_id_prefix() {
        let n = normalize_url("1234    http://a.com/one http://b.com/two");
        assert_eq!(n.as_str(), "http://b.com/two");
        let n = normalize_url("42\thttps://secure.example.org");
        assert_eq!(n.as_str(), "https://secure.example.org");
    }

    #[test]
    fn url_followed_by_another_url_is_not_an_id_prefix() {
        let n = normalize_url("http://a.com/ http://b.com");
        assert_eq!(n.as_str(), "http://a.com/ http://b.com");
        assert_eq!(n.netloc(), "a.com");
    }

    #[test]
    fn any_http_substring_token_counts_after_a_prefix() {
        assert_eq!(normalize_url("foo httpbar baz").as_str(), "http://httpbar");
    }

    #[test]
    fn whitespace_without_http_is_left_alone() {
        let n = normalize_url("hello world");
        assert_eq!(n.as_str(), "http://hello world");
    }

    #[test]
    fn empty_and_absent_input() {
        assert_eq!(normalize_url("").as_str(), "http://");
        assert_eq!(normalize_opt(None).as_str(), "http://");
        assert_eq!(normalize_url("   \n  ").as_str(), "http://");
    }

    #[test]
    fn bare_ipv4_round_trips() {
        let n = normalize_url("192.168.1.1");
        assert_eq!(n.as_str(), "http://192.168.1.1");
        assert_eq!(n.netloc(), "192.168.1.1");
        assert_eq!(normalize_url("http://192.168.1.1").as_str(), "http://192.168.1.1");
    }

    #[test]
    fn host_with_port_is_reparsed() {
        let n = normalize_url("example.com:8080/login");
        assert_eq!(n.as_str(), "http://example.com:8080/login");
        assert_eq!(n.netloc(), "example.com:8080");
    }

    #[test]
    fn idempotent() {
        for raw in [
            "",
            "example.com",
            "HTTP://A.com/b?c=d#e",
            "login-verify.example.com/update?id=1&x=2",
            "ftp://files.example.com/pub/;type=a",
            "mailto:someone@example.com",
            "1234    http://a.com/x",
            "://weird",
            "http:///only/path",
            "a.com   \nb",
            "a.com \r\nb",
            "http://a.com/ http://b.com",
        ] {
            let once = normalize_url(raw);
            let twice = normalize_url(once.as_str());
            assert_eq!(once, twice, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn never_empty_scheme_or_newline() {
        for raw in ["", ":", "::::", "\n\n", "?x=1", "#frag", "//host", "%%%", "a b\nc"] {
            let n = normalize_url(raw);
            assert!(!n.scheme().is_empty(), "empty scheme for {raw:?}");
            assert!(!n.as_str().contains('\n'));
        }
    }
}
