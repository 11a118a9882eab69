//! Combining partial URLs: authority, path, query and fragment merges.
//!
//! The named methods mutate the receiver. The operators take the left-hand
//! value by value and hand it back, so a URL can be written as one expression:
//!
//! ```
//! use urlazy_core::https;
//!
//! let mut base = https();
//! base.authority("www.example.com");
//! let url = base / "watch" & "v=xyz" | "frag";
//! assert_eq!(url.to_string(), "https://www.example.com/watch?v=xyz#frag");
//! ```
//!
//! `/` appends path segments, `&` query pairs and `|` fragment text; each has
//! an in-place `/=`, `&=`, `|=` form.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, DivAssign};

use super::authority::{split_authority_token, Authority};
use super::{QueryInput, Url};

impl Url {
    /// Overwrites username, password, hostname and port from a
    /// `user:password@host:port` token. Parts missing from the token are cleared.
    pub fn authority(&mut self, token: &str) -> &mut Self {
        let authority = split_authority_token(token);
        tracing::trace!(token, hostname = %authority.hostname, "merge authority");
        self.set_authority(authority)
    }

    /// Copies username, password, hostname and port from `other`.
    pub fn merge_authority(&mut self, other: &Url) -> &mut Self {
        self.set_authority(Authority {
            username: other.username.clone(),
            password: other.password.clone(),
            hostname: other.hostname.clone(),
            port: other.port.clone(),
        })
    }

    /// Appends all of `other`'s path segments.
    pub fn merge_path(&mut self, other: &Url) -> &mut Self {
        self.path.extend(other.path.iter().cloned());
        self
    }

    /// Appends all of `other`'s query pairs.
    pub fn merge_query(&mut self, other: &Url) -> &mut Self {
        self.query(other)
    }

    /// Appends `other`'s fragment to this one.
    pub fn merge_fragment(&mut self, other: &Url) -> &mut Self {
        self.fragment(&other.fragment)
    }

    fn set_authority(&mut self, authority: Authority) -> &mut Self {
        self.username = authority.username;
        self.password = authority.password;
        self.hostname = authority.hostname;
        self.port = authority.port;
        self
    }
}

/// Right-hand side of `/`: a single segment, or another URL's whole path.
pub trait PathSource {
    fn append_path_to(self, url: &mut Url);
}

impl PathSource for &str {
    fn append_path_to(self, url: &mut Url) {
        url.path(self);
    }
}

impl PathSource for String {
    fn append_path_to(self, url: &mut Url) {
        url.path(self);
    }
}

impl PathSource for &String {
    fn append_path_to(self, url: &mut Url) {
        url.path(self.as_str());
    }
}

impl PathSource for &Url {
    fn append_path_to(self, url: &mut Url) {
        url.merge_path(self);
    }
}

impl PathSource for Url {
    fn append_path_to(self, url: &mut Url) {
        url.path.extend(self.path);
    }
}

/// Right-hand side of `|`: fragment text, or another URL's fragment.
pub trait FragmentSource {
    fn append_fragment_to(self, url: &mut Url);
}

impl FragmentSource for &str {
    fn append_fragment_to(self, url: &mut Url) {
        url.fragment(self);
    }
}

impl FragmentSource for String {
    fn append_fragment_to(self, url: &mut Url) {
        url.fragment(self);
    }
}

impl FragmentSource for &String {
    fn append_fragment_to(self, url: &mut Url) {
        url.fragment(self);
    }
}

impl FragmentSource for &Url {
    fn append_fragment_to(self, url: &mut Url) {
        url.merge_fragment(self);
    }
}

impl FragmentSource for Url {
    fn append_fragment_to(self, url: &mut Url) {
        url.fragment(self.fragment);
    }
}

impl<T: PathSource> Div<T> for Url {
    type Output = Url;

    fn div(mut self, rhs: T) -> Url {
        rhs.append_path_to(&mut self);
        self
    }
}

impl<T: PathSource> DivAssign<T> for Url {
    fn div_assign(&mut self, rhs: T) {
        rhs.append_path_to(self);
    }
}

impl<T: Into<QueryInput>> BitAnd<T> for Url {
    type Output = Url;

    fn bitand(mut self, rhs: T) -> Url {
        self.query(rhs);
        self
    }
}

impl<T: Into<QueryInput>> BitAndAssign<T> for Url {
    fn bitand_assign(&mut self, rhs: T) {
        self.query(rhs);
    }
}

impl<T: FragmentSource> BitOr<T> for Url {
    type Output = Url;

    fn bitor(mut self, rhs: T) -> Url {
        rhs.append_fragment_to(&mut self);
        self
    }
}

impl<T: FragmentSource> BitOrAssign<T> for Url {
    fn bitor_assign(&mut self, rhs: T) {
        rhs.append_fragment_to(self);
    }
}
