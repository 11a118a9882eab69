//! The incremental URL value.
//!
//! A [`Url`] is a flat record of eight owned fields. Scheme, credentials, host
//! and port are overwritten by their mutators; path segments, query pairs and
//! the fragment accumulate. Serialization joins the fields with generic URL
//! syntax and form-urlencodes the query; parsing splits a string back into the
//! same fields so it can be extended further.

mod authority;
mod compose;
mod error;
mod query;
mod split;

pub use compose::{FragmentSource, PathSource};
pub use error::ParseError;
pub use query::QueryInput;
pub use split::UrlParts;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{EncodeOptions, ParseOptions};
use authority::{render_netloc, split_netloc};
use query::{decode_query, encode_query};

/// A URL assembled piece by piece.
///
/// Empty strings mean "absent". Mutators change the value in place and return
/// it again so calls can be chained:
///
/// ```
/// use urlazy_core::Url;
///
/// let url = Url::https()
///     .hostname("www.example.com")
///     .path("watch")
///     .query([("v", "xyz")])
///     .fragment("frag")
///     .to_string();
/// assert_eq!(url, "https://www.example.com/watch?v=xyz#frag");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Url {
    pub scheme: String,
    pub username: String,
    pub password: String,
    pub hostname: String,
    /// Textual port, written after the host when non-empty.
    pub port: String,
    /// Segments joined with `/`. A leading empty segment makes the path absolute,
    /// a trailing one leaves a trailing slash.
    pub path: Vec<String>,
    /// Pairs in insertion order, duplicate keys included.
    pub query: Vec<(String, String)>,
    pub fragment: String,
}

impl Url {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh value with the `http` scheme.
    pub fn http() -> Self {
        let mut url = Self::new();
        url.scheme("http");
        url
    }

    /// A fresh value with the `https` scheme.
    pub fn https() -> Self {
        let mut url = Self::new();
        url.scheme("https");
        url
    }

    pub fn scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.scheme = scheme.into();
        self
    }

    pub fn username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = username.into();
        self
    }

    pub fn password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = password.into();
        self
    }

    pub fn hostname(&mut self, hostname: impl Into<String>) -> &mut Self {
        self.hostname = hostname.into();
        self
    }

    /// Sets the port from anything displayable; `443` and `"443"` are equivalent.
    /// The text is not checked to be numeric.
    pub fn port(&mut self, port: impl fmt::Display) -> &mut Self {
        self.port = port.to_string();
        self
    }

    /// Appends exactly one path segment. Slashes inside `segment` are kept
    /// as-is rather than splitting it.
    pub fn path(&mut self, segment: impl Into<String>) -> &mut Self {
        self.path.push(segment.into());
        self
    }

    /// Appends query pairs from a raw query string, a map, or a pair sequence.
    pub fn query(&mut self, input: impl Into<QueryInput>) -> &mut Self {
        self.query_with(input, &ParseOptions::default())
    }

    /// Like [`Url::query`], decoding raw strings with `options`.
    pub fn query_with(
        &mut self,
        input: impl Into<QueryInput>,
        options: &ParseOptions,
    ) -> &mut Self {
        let pairs = input.into().into_pairs(options);
        self.query.extend(pairs);
        self
    }

    /// Appends to the fragment; it is never replaced, so `"a"` then `"-b"`
    /// yields `a-b`.
    pub fn fragment(&mut self, fragment: impl AsRef<str>) -> &mut Self {
        self.fragment.push_str(fragment.as_ref());
        self
    }

    /// The rendered authority, `user:password@host:port` minus absent parts.
    pub fn netloc(&self) -> String {
        render_netloc(&self.username, &self.password, &self.hostname, &self.port)
    }

    pub fn parts(&self) -> UrlParts {
        self.parts_with(&EncodeOptions::default())
    }

    /// The five generic components, with the query encoded per `options`.
    pub fn parts_with(&self, options: &EncodeOptions) -> UrlParts {
        UrlParts {
            scheme: self.scheme.clone(),
            netloc: self.netloc(),
            path: self.path.join("/"),
            query: encode_query(&self.query, options),
            fragment: self.fragment.clone(),
        }
    }

    /// Serializes with non-default encoding options.
    pub fn to_string_with(&self, options: &EncodeOptions) -> String {
        self.parts_with(options).unsplit()
    }

    /// Alias for `to_string()`.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Parses a URL string into an extendable value.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_with(input, &ParseOptions::default())
    }

    pub fn parse_with(input: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let parts = UrlParts::split(input)?;
        let authority = split_netloc(&parts.netloc);
        let url = Url {
            scheme: parts.scheme,
            username: authority.username,
            password: authority.password,
            hostname: authority.hostname,
            port: authority.port,
            path: parts.path.split('/').map(str::to_string).collect(),
            query: decode_query(&parts.query, options),
            fragment: parts.fragment,
        };
        tracing::trace!(
            input,
            scheme = %url.scheme,
            hostname = %url.hostname,
            segments = url.path.len(),
            pairs = url.query.len(),
            "parsed url"
        );
        Ok(url)
    }
}

/// Shorthand for [`Url::http`].
pub fn http() -> Url {
    Url::http()
}

/// Shorthand for [`Url::https`].
pub fn https() -> Url {
    Url::https()
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts().unsplit())
    }
}

impl FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s)
    }
}

impl TryFrom<&str> for Url {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Url::parse(s)
    }
}

impl From<&Url> for String {
    fn from(url: &Url) -> Self {
        url.to_string()
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.to_string()
    }
}
