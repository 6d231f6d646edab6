//! Readable decomposition of URLs and parameter-level diffs between them.
//!
//! `decompose` splits a URL into its base URL and decoded query parameters,
//! `diff` compares two URLs parameter by parameter, and the `serializer`
//! functions render either result as indented JSON.

pub mod config;
pub mod history;
pub mod serializer;
pub mod url_diff;
pub mod url_parser;
pub mod utils;

pub use serializer::{format_diff_report, format_diff_sides, format_json, format_parsed_url};
pub use url_diff::{diff, diff_parsed, DiffResult};
pub use url_parser::{decompose, ParamMap, ParamValue, ParsedUrl};
