//! Parameter extraction for handlers.
//!
//! Lookup never captures parameter values. Handlers that need them apply
//! [`extract_params`] to the raw request path with their own route pattern.

use super::matcher::PARAM_MARKER;

/// Named segment values captured from a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    pairs: Vec<(String, String)>,
}

impl PathParams {
    /// Get the value captured for `name`.
    ///
    /// If a pattern repeats a name, the first occurrence wins.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(name, value)` pairs in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Match `path` against `pattern` and capture every parameter segment.
///
/// Returns `None` when the path does not match under the same rule the
/// router uses. Captured values are not validated or decoded.
///
/// # Example
///
/// ```rust
/// use puente_std::extract_params;
///
/// let params = extract_params("/users/:id/posts/:post", "/users/7/posts/99").unwrap();
/// assert_eq!(params.get("id"), Some("7"));
/// assert_eq!(params.get("post"), Some("99"));
/// assert!(extract_params("/users/:id", "/teams/7").is_none());
/// ```
pub fn extract_params(pattern: &str, path: &str) -> Option<PathParams> {
    let mut pattern_parts = pattern.split('/');
    let mut path_parts = path.split('/');
    let mut pairs = Vec::new();

    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(PARAM_MARKER) {
                    pairs.push((name.to_string(), actual.to_string()));
                } else if expected != actual {
                    return None;
                }
            }
            (None, None) => return Some(PathParams { pairs }),
            _ => return None,
        }
    }
}
