//! # Path Matching
//!
//! Route patterns are `/`-delimited sequences of segments. A segment that
//! starts with [`PARAM_MARKER`] matches any single segment at that position;
//! every other segment must match literally.
//!
//! | Pattern | Path | Match |
//! |---------|------|-------|
//! | `/path/:id` | `/path/123` | yes |
//! | `/path/:id` | `/path` | no (segment count) |
//! | `/path/:id` | `/path/123/x` | no (segment count) |
//! | `/a/b` | `/a/c` | no |
//!
//! Nothing here validates patterns. A malformed pattern simply never
//! matches, or matches more than intended.

mod matcher;
mod params;

pub use matcher::{PARAM_MARKER, match_dynamic_route};
pub use params::{PathParams, extract_params};
