//! Segment-wise path matcher.

/// Marks a pattern segment as a parameter.
pub const PARAM_MARKER: char = ':';

/// Returns true if `path` matches the route `pattern`.
///
/// Both strings are split on `/`. They match when the segment counts are
/// equal and every pattern segment either equals the path segment or is a
/// parameter segment.
///
/// # Example
///
/// ```rust
/// use puente_std::match_dynamic_route;
///
/// assert!(match_dynamic_route("/users/:id", "/users/42"));
/// assert!(!match_dynamic_route("/users/:id", "/users"));
/// ```
pub fn match_dynamic_route(pattern: &str, path: &str) -> bool {
    let mut pattern_parts = pattern.split('/');
    let mut path_parts = path.split('/');

    loop {
        match (pattern_parts.next(), path_parts.next()) {
            (Some(expected), Some(actual)) => {
                if expected != actual && !expected.starts_with(PARAM_MARKER) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}
