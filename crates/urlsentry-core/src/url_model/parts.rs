//! Lexical URL component splitting and reassembly.
//!
//! Splitting is purely syntactic: hosts keep their case, paths are not
//! percent-encoded and nothing is added or removed beyond the delimiters.
//! Feature values of stored training rows depend on these exact rules.

/// Schemes whose reassembled form always carries a `//` authority marker.
const USES_NETLOC: &[&str] = &[
    "", "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https",
    "shttp", "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs",
    "git", "git+ssh", "ws", "wss",
];

/// Schemes whose last path segment may carry `;params`.
const USES_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

/// The six components of a URL: `scheme://netloc/path;params?query#fragment`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Split `url` into components. `default_scheme` is used when the input
    /// has no scheme of its own. Never fails.
    pub fn parse(url: &str, default_scheme: &str) -> Self {
        let cleaned: String = url
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        let mut rest = cleaned.as_str();

        let mut scheme = default_scheme.to_string();
        if let Some(i) = rest.find(':') {
            if is_scheme(&rest[..i]) {
                scheme = rest[..i].to_ascii_lowercase();
                rest = &rest[i + 1..];
            }
        }

        let mut netloc = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            netloc = &after[..end];
            rest = &after[end..];
        }

        let mut fragment = "";
        if let Some((head, frag)) = rest.split_once('#') {
            rest = head;
            fragment = frag;
        }

        let mut query = "";
        if let Some((head, q)) = rest.split_once('?') {
            rest = head;
            query = q;
        }

        let (path, params) = if USES_PARAMS.contains(&scheme.as_str()) && rest.contains(';') {
            split_params(rest)
        } else {
            (rest, "")
        };

        Self {
            scheme,
            netloc: netloc.to_string(),
            path: path.to_string(),
            params: params.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    /// Reassemble the components into a URL string.
    pub fn to_url_string(&self) -> String {
        let mut url = self.path.clone();
        if !self.params.is_empty() {
            url.push(';');
            url.push_str(&self.params);
        }

        let needs_authority = !self.netloc.is_empty()
            || (!self.scheme.is_empty()
                && USES_NETLOC.contains(&self.scheme.as_str())
                && !url.starts_with("//"));
        if needs_authority {
            if !url.is_empty() && !url.starts_with('/') {
                url.insert(0, '/');
            }
            url = format!("//{}{}", self.netloc, url);
        }
        if !self.scheme.is_empty() {
            url = format!("{}:{}", self.scheme, url);
        }
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(&self.fragment);
        }
        url
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn split_params(path: &str) -> (&str, &str) {
    let i = match path.rfind('/') {
        Some(slash) => match path[slash..].find(';') {
            Some(off) => slash + off,
            None => return (path, ""),
        },
        None => match path.find(';') {
            Some(i) => i,
            None => return (path, ""),
        },
    };
    (&path[..i], &path[i + 1..])
}
