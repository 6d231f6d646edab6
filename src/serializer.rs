//! Text rendering of decompositions and diffs.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

use crate::url_diff::DiffResult;
use crate::url_parser::ParsedUrl;

/// Renders any serializable value as JSON indented by two spaces
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize value as JSON")
}

/// Renders a decomposition, or just its error message when it failed
pub fn format_parsed_url(parsed: &ParsedUrl) -> Result<String> {
    match &parsed.error {
        Some(message) => Ok(message.clone()),
        None => format_json(parsed),
    }
}

/// Renders the old and new sides of a diff for side-by-side display
pub fn format_diff_sides(diff: &DiffResult) -> Result<(String, String)> {
    let old = format_json(&diff.old_view())?;
    let new = format_json(&diff.new_view())?;
    Ok((old, new))
}

/// Renders a diff as a line-oriented report
///
/// Added params are prefixed with `+`, removed with `-`, changed with `~`
/// and unchanged with two spaces. Values are compact JSON.
pub fn format_diff_report(diff: &DiffResult) -> String {
    let mut report = String::new();

    if diff.base_url.changed {
        let _ = writeln!(report, "~ base URL: {} -> {}", diff.base_url.old, diff.base_url.new);
    } else {
        let _ = writeln!(report, "  base URL: {}", diff.base_url.new);
    }

    for (key, value) in &diff.params.added {
        let _ = writeln!(report, "+ {}: {}", key, value);
    }
    for (key, value) in &diff.params.removed {
        let _ = writeln!(report, "- {}: {}", key, value);
    }
    for (key, value) in &diff.params.changed {
        let _ = writeln!(report, "~ {}: {} -> {}", key, value.old, value.new);
    }
    for (key, value) in &diff.params.unchanged {
        let _ = writeln!(report, "  {}: {}", key, value);
    }

    report
}
