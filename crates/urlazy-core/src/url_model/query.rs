//! Query input shapes and form-urlencoded conversion.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::form_urlencoded;

use super::Url;
use crate::config::{EncodeOptions, ParseOptions, SpaceEncoding};

/// A batch of query pairs to append to a [`Url`].
///
/// Raw strings are decoded as `key=value&key=value`; maps and pair sequences
/// are taken in their own iteration order. Keys and values of pair-shaped
/// inputs may be anything displayable, so `[("page", 2)]` works.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput {
    /// Still-encoded query text, without the leading `?`.
    Encoded(String),
    /// Already-split pairs, appended as-is.
    Pairs(Vec<(String, String)>),
}

impl QueryInput {
    /// Normalizes the input into ordered pairs.
    pub fn into_pairs(self, options: &ParseOptions) -> Vec<(String, String)> {
        match self {
            QueryInput::Encoded(raw) => decode_query(&raw, options),
            QueryInput::Pairs(pairs) => pairs,
        }
    }
}

fn stringify_pairs<I, K, V>(pairs: I) -> QueryInput
where
    I: IntoIterator<Item = (K, V)>,
    K: ToString,
    V: ToString,
{
    QueryInput::Pairs(
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

impl From<&str> for QueryInput {
    fn from(raw: &str) -> Self {
        QueryInput::Encoded(raw.to_string())
    }
}

impl From<String> for QueryInput {
    fn from(raw: String) -> Self {
        QueryInput::Encoded(raw)
    }
}

impl From<&String> for QueryInput {
    fn from(raw: &String) -> Self {
        QueryInput::Encoded(raw.clone())
    }
}

impl<K: ToString, V: ToString> From<Vec<(K, V)>> for QueryInput {
    fn from(pairs: Vec<(K, V)>) -> Self {
        stringify_pairs(pairs)
    }
}

impl<K: ToString, V: ToString> From<&[(K, V)]> for QueryInput {
    fn from(pairs: &[(K, V)]) -> Self {
        stringify_pairs(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }
}

impl<K: ToString, V: ToString, const N: usize> From<[(K, V); N]> for QueryInput {
    fn from(pairs: [(K, V); N]) -> Self {
        stringify_pairs(pairs)
    }
}

impl<K: ToString, V: ToString, S: BuildHasher> From<HashMap<K, V, S>> for QueryInput {
    fn from(map: HashMap<K, V, S>) -> Self {
        stringify_pairs(map)
    }
}

impl<K: ToString, V: ToString> From<BTreeMap<K, V>> for QueryInput {
    fn from(map: BTreeMap<K, V>) -> Self {
        stringify_pairs(map)
    }
}

impl From<&Url> for QueryInput {
    fn from(url: &Url) -> Self {
        QueryInput::Pairs(url.query.clone())
    }
}

impl From<Url> for QueryInput {
    fn from(url: Url) -> Self {
        QueryInput::Pairs(url.query)
    }
}

/// Decodes `key=value&key=value` into ordered pairs, keeping duplicates.
///
/// `+` decodes to a space. Empty pieces between `&` are skipped; pairs with an
/// empty value are dropped unless `options.keep_blank_values` is set.
pub(crate) fn decode_query(raw: &str, options: &ParseOptions) -> Vec<(String, String)> {
    form_urlencoded::parse(raw.as_bytes())
        .filter(|(_, value)| options.keep_blank_values || !value.is_empty())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// Bytes left as-is in query keys and values: ASCII alphanumerics and `_.-~`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

fn encode_component(text: &str, space: SpaceEncoding, out: &mut String) {
    for (i, piece) in text.split(' ').enumerate() {
        if i > 0 {
            out.push_str(match space {
                SpaceEncoding::Plus => "+",
                SpaceEncoding::Percent => "%20",
            });
        }
        out.extend(utf8_percent_encode(piece, QUERY_COMPONENT));
    }
}

/// Encodes pairs as `key=value&key=value`, preserving order and duplicates.
///
/// Keys and values are encoded independently; unreserved characters
/// (`A-Z a-z 0-9 _ . - ~`) are kept, everything else is percent-encoded
/// as UTF-8, and spaces follow `options.space`.
pub(crate) fn encode_query(pairs: &[(String, String)], options: &EncodeOptions) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        encode_component(key, options.space, &mut out);
        out.push('=');
        encode_component(value, options.space, &mut out);
    }
    out
}
