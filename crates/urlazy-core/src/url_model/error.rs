//! Parse failure for URL strings.

/// Error returned when a URL string cannot be split into components.
///
/// Splitting is best-effort; the only rejected input is an authority with
/// unbalanced IPv6 brackets, since the host/port boundary is then unknowable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid IPv6 authority {netloc:?}: unbalanced brackets")]
    UnbalancedBrackets { netloc: String },
}
