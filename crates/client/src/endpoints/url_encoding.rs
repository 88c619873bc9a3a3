//! Percent-encoding for values interpolated into API paths.
//!
//! Organization, project and dashboard slugs all end up as path segments.
//! Anything that could split a segment (`/`), start a query (`?`) or a
//! fragment (`#`), or be double-decoded (`%`) is escaped.
//!
//! ```
//! use logfire_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("my-project"), "my-project");
//! assert_eq!(encode_path_segment("../admin"), "..%2Fadmin");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters escaped in a single path segment (RFC 3986 §3.3 plus delimiters).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
