use anyhow::{bail, Context, Result};
use tracing::trace;

use super::model::ParamValue;

/// Decodes one layer of percent-escapes in a URI component
///
/// Every `%` must introduce two hex digits and the decoded bytes must form
/// valid UTF-8. `+` is left alone; form decoding already handled it.
///
/// # Arguments
/// * `input` - The component text to decode
///
/// # Returns
/// * `Result<String>` - The decoded text, or an error for a malformed escape
pub fn decode_component(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == b'%' {
            let well_formed = bytes.get(index + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(index + 2).is_some_and(u8::is_ascii_hexdigit);
            if !well_formed {
                bail!("Malformed percent escape at byte {}", index);
            }
            index += 3;
        } else {
            index += 1;
        }
    }

    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .context("Percent-decoded bytes are not valid UTF-8")
}

/// Percent-decodes repeatedly until nothing changes or a step fails
///
/// Values that were encoded several times over (`%257B` for `{`) come out
/// fully decoded. A failing step leaves the last successfully decoded text.
pub fn progressive_decode(input: &str) -> String {
    let mut current = input.to_string();
    while current.contains('%') {
        match decode_component(&current) {
            Ok(next) if next != current => {
                trace!("Decoded one layer: {} -> {}", current, next);
                current = next;
            }
            Ok(_) => break,
            Err(e) => {
                trace!("Stopping progressive decode of '{}': {}", current, e);
                break;
            }
        }
    }
    current
}

/// Parses decoded text as a JSON value
fn parse_json(decoded: &str) -> serde_json::Result<serde_json::Value> {
    serde_json::from_str(decoded)
}

/// Turns a raw query value into its richest representation
///
/// The value is progressively decoded and parsed as JSON. When parsing fails
/// the literal value is kept as text, not the progressively decoded one.
pub fn coerce_value(literal: &str) -> ParamValue {
    let decoded = progressive_decode(literal);
    parse_json(&decoded)
        .map(ParamValue::from)
        .unwrap_or_else(|e| {
            trace!("Keeping '{}' as text: {}", literal, e);
            ParamValue::Text(literal.to_string())
        })
}
