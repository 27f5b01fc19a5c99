// src/core/rewrite/query.rs
use url::form_urlencoded;

/// Query key carrying the cache-bust token.
pub const VERSION_PARAM: &str = "version";

/// Prefixes marking a target as external and therefore never rewritten.
const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "//", "data:", "mailto:"];

/// A raw reference target split into its addressable parts.
#[derive(Debug, PartialEq, Eq)]
pub struct SplitTarget<'a> {
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: Option<&'a str>,
}

pub fn is_external(raw: &str) -> bool {
    EXTERNAL_PREFIXES.iter().any(|prefix| raw.starts_with(prefix))
}

/// Splits `path?query#fragment` into its parts; query and fragment are optional.
#[must_use]
pub fn split_target(raw: &str) -> SplitTarget<'_> {
    let (before_fragment, fragment) = match raw.split_once('#') {
        Some((before, after)) => (before, Some(after)),
        None => (raw, None),
    };
    let (path, query) = before_fragment
        .split_once('?')
        .unwrap_or((before_fragment, ""));

    SplitTarget {
        path,
        query,
        fragment,
    }
}

/// Merges the cache-bust token into an existing query string.
///
/// An existing `version` value is replaced in place; every other pair is
/// preserved in its order of first appearance. Unparseable input is
/// handled permissively by standard query-string parsing, which yields
/// whatever pairs it can find.
#[must_use]
pub fn merge_version(query: &str, token: &str) -> String {
    let mut pairs: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();

    let mut replaced = false;
    for (key, value) in &mut pairs {
        if key == VERSION_PARAM {
            value.clear();
            value.push_str(token);
            replaced = true;
        }
    }
    if !replaced {
        pairs.push((VERSION_PARAM.to_owned(), token.to_owned()));
    }

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    serializer.finish()
}
