//! URLazy: build URLs incrementally, or parse one and keep extending it.

pub mod config;
pub mod logging;
pub mod url_model;

pub use url_model::{http, https, FragmentSource, ParseError, PathSource, QueryInput, Url, UrlParts};
