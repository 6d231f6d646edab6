use indexmap::map::Entry;
use tracing::{debug, trace};
use url::Url;

use super::decoder::coerce_value;
use super::model::{ParamMap, ParamValue};

/// Collects the query parameters of a parsed URL into a readable mapping
///
/// Pairs are form-decoded (`+` becomes a space, percent-escapes resolved) and
/// each value is coerced to structured data where possible.
///
/// # Arguments
/// * `url` - The parsed URL to examine
///
/// # Returns
/// * `ParamMap` - Parameters in order of first appearance
pub fn process_query_parameters(url: &Url) -> ParamMap {
    debug!("Processing query parameters");

    let mut params = ParamMap::new();
    for (key, value) in url.query_pairs() {
        trace!("Checking parameter: {}={}", key, value);
        let coerced = coerce_value(&value);
        insert_param(&mut params, key.into_owned(), coerced);
    }

    params
}

/// Inserts a value, aggregating repeated keys into a list
///
/// The first occurrence stays a single value. The second turns the slot into
/// a two-element list and later occurrences append to it.
pub fn insert_param(params: &mut ParamMap, key: String, value: ParamValue) {
    match params.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(value);
        }
        Entry::Occupied(mut slot) => {
            debug!("Repeated parameter '{}', aggregating values", slot.key());
            match slot.get_mut() {
                ParamValue::List(items) => items.push(value),
                existing => {
                    let first = std::mem::replace(existing, ParamValue::List(Vec::new()));
                    *existing = ParamValue::List(vec![first, value]);
                }
            }
        }
    }
}
