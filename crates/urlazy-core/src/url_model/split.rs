//! Generic URL syntax: split a string into five components and join them back.

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Schemes that conventionally carry a network location. With no authority,
/// these still get `//` before an empty or absolute path (`file:///etc`).
const USES_NETLOC: &[&str] = &[
    "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https", "shttp",
    "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs", "git",
    "git+ssh", "ws", "wss",
];

/// The five top-level components of a URL, each as text.
///
/// `netloc` is the rendered authority and `query` the encoded query, both
/// without their `//` / `?` delimiters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlParts {
    pub scheme: String,
    pub netloc: String,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Splits `input` into components without decoding anything.
    ///
    /// Leading C0 controls and spaces are trimmed, then ASCII tab, CR and LF
    /// are removed anywhere. The scheme is only recognized when it starts with
    /// a letter and contains letters, digits, `+`, `-` or `.`; otherwise the
    /// whole prefix stays in the path.
    pub fn split(input: &str) -> Result<Self, ParseError> {
        let cleaned: String = input
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        let mut rest = cleaned.as_str();

        let mut scheme = "";
        if let Some((candidate, after)) = rest.split_once(':') {
            if is_scheme(candidate) {
                scheme = candidate;
                rest = after;
            }
        }

        let mut netloc = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after
                .find(|c| matches!(c, '/' | '?' | '#'))
                .unwrap_or(after.len());
            netloc = &after[..end];
            rest = &after[end..];
            if netloc.contains('[') != netloc.contains(']') {
                return Err(ParseError::UnbalancedBrackets {
                    netloc: netloc.to_string(),
                });
            }
        }

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Ok(UrlParts {
            scheme: scheme.to_string(),
            netloc: netloc.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        })
    }

    /// Joins the components into a URL string.
    ///
    /// Delimiters are only written for non-empty components. A relative path
    /// after an authority gets a leading `/`; a path starting with `//` and no
    /// authority gets an empty `//` authority in front of it.
    pub fn unsplit(&self) -> String {
        let mut out = String::with_capacity(
            self.scheme.len()
                + self.netloc.len()
                + self.path.len()
                + self.query.len()
                + self.fragment.len()
                + 6,
        );
        if !self.scheme.is_empty() {
            out.push_str(&self.scheme);
            out.push(':');
        }
        if !self.netloc.is_empty() {
            out.push_str("//");
            out.push_str(&self.netloc);
            if !self.path.is_empty() && !self.path.starts_with('/') {
                out.push('/');
            }
        } else if self.path.starts_with("//")
            || (uses_netloc(&self.scheme) && (self.path.is_empty() || self.path.starts_with('/')))
        {
            out.push_str("//");
        }
        out.push_str(&self.path);
        if !self.query.is_empty() {
            out.push('?');
            out.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            out.push('#');
            out.push_str(&self.fragment);
        }
        out
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn uses_netloc(scheme: &str) -> bool {
    !scheme.is_empty()
        && USES_NETLOC
            .iter()
            .any(|known| known.eq_ignore_ascii_case(scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(scheme: &str, netloc: &str, path: &str, query: &str, fragment: &str) -> UrlParts {
        UrlParts {
            scheme: scheme.to_string(),
            netloc: netloc.to_string(),
            path: path.to_string(),
            query: query.to_string(),
            fragment: fragment.to_string(),
        }
    }

    #[test]
    fn split_full_url() {
        let split = UrlParts::split("https://u:p@example.com:443/a/b?x=1&y=2#frag").unwrap();
        assert_eq!(
            split,
            parts("https", "u:p@example.com:443", "/a/b", "x=1&y=2", "frag")
        );
    }

    #[test]
    fn split_without_path() {
        assert_eq!(
            UrlParts::split("https://www.example.com").unwrap(),
            parts("https", "www.example.com", "", "", "")
        );
        assert_eq!(
            UrlParts::split("https://www.example.com?q=1").unwrap(),
            parts("https", "www.example.com", "", "q=1", "")
        );
    }

    #[test]
    fn split_fragment_before_query_mark() {
        assert_eq!(
            UrlParts::split("http://h/p#frag?not-query").unwrap(),
            parts("http", "h", "/p", "", "frag?not-query")
        );
    }

    #[test]
    fn split_relative_and_opaque() {
        assert_eq!(
            UrlParts::split("path/to?x=1").unwrap(),
            parts("", "", "path/to", "x=1", "")
        );
        assert_eq!(
            UrlParts::split("mailto:someone@example.com").unwrap(),
            parts("mailto", "", "someone@example.com", "", "")
        );
        assert_eq!(
            UrlParts::split("//cdn.example.com/x").unwrap(),
            parts("", "cdn.example.com", "/x", "", "")
        );
    }

    #[test]
    fn split_rejects_invalid_scheme_chars() {
        assert_eq!(
            UrlParts::split("1http://h").unwrap(),
            parts("", "", "1http://h", "", "")
        );
        assert_eq!(
            UrlParts::split("a_b:c").unwrap(),
            parts("", "", "a_b:c", "", "")
        );
    }

    #[test]
    fn split_strips_tab_and_newlines() {
        assert_eq!(
            UrlParts::split("ht\ttp://exa\nmple.com/\r").unwrap(),
            parts("http", "example.com", "/", "", "")
        );
    }

    #[test]
    fn split_trims_leading_controls_and_spaces() {
        assert_eq!(
            UrlParts::split(" \u{0}\u{1f}https://h/x").unwrap(),
            parts("https", "h", "/x", "", "")
        );
        assert_eq!(
            UrlParts::split("https://h/x y ").unwrap(),
            parts("https", "h", "/x y ", "", "")
        );
    }

    #[test]
    fn split_unbalanced_brackets() {
        assert_eq!(
            UrlParts::split("http://[::1/x"),
            Err(ParseError::UnbalancedBrackets {
                netloc: "[::1".to_string()
            })
        );
        assert!(UrlParts::split("http://::1]/x").is_err());
        assert!(UrlParts::split("http://[::1]:80/x").is_ok());
    }

    #[test]
    fn unsplit_inserts_slash_after_authority() {
        assert_eq!(
            parts("https", "www.example.com", "watch", "v=xyz", "frag").unsplit(),
            "https://www.example.com/watch?v=xyz#frag"
        );
    }

    #[test]
    fn unsplit_omits_empty_delimiters() {
        assert_eq!(parts("https", "h", "", "", "").unsplit(), "https://h");
        assert_eq!(parts("", "", "a/b", "", "").unsplit(), "a/b");
        assert_eq!(parts("", "", "", "q=1", "f").unsplit(), "?q=1#f");
        assert_eq!(parts("mailto", "", "x@y", "", "").unsplit(), "mailto:x@y");
    }

    #[test]
    fn unsplit_netloc_schemes_keep_slashes() {
        assert_eq!(parts("file", "", "/etc/hosts", "", "").unsplit(), "file:///etc/hosts");
        assert_eq!(parts("https", "", "", "", "").unsplit(), "https://");
        assert_eq!(parts("HTTPS", "", "", "", "").unsplit(), "HTTPS://");
        assert_eq!(parts("https", "", "rel", "", "").unsplit(), "https:rel");
    }

    #[test]
    fn unsplit_protects_double_slash_path() {
        assert_eq!(parts("", "", "//x/y", "", "").unsplit(), "////x/y");
        let again = UrlParts::split("////x/y").unwrap();
        assert_eq!(again.path, "//x/y");
    }
}
