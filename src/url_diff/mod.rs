//! Parameter-level diff of two decomposed URLs.

pub mod equality;
pub mod model;

use tracing::{debug, info, instrument};

use crate::url_parser::{decompose, ParsedUrl};

pub use equality::values_equal;
pub use model::{BaseUrlDiff, ChangedValue, DiffResult, DiffSummary, ParamDiff};

/// Decomposes two URLs and compares them
///
/// A URL that fails to decompose is compared as an empty base URL with no
/// parameters; the diff itself always completes.
///
/// # Arguments
/// * `old_url` - The URL to compare from
/// * `new_url` - The URL to compare to
///
/// # Returns
/// * `DiffResult` - Base URL comparison plus added, removed, changed and unchanged params
#[instrument(level = "debug", skip_all)]
pub fn diff(old_url: &str, new_url: &str) -> DiffResult {
    let old = decompose(old_url);
    let new = decompose(new_url);
    diff_parsed(&old, &new)
}

/// Compares two decompositions that were already computed
pub fn diff_parsed(old: &ParsedUrl, new: &ParsedUrl) -> DiffResult {
    let mut params = ParamDiff::default();

    for (key, value) in &new.params {
        match old.params.get(key) {
            None => {
                debug!("Parameter '{}' added", key);
                params.added.insert(key.clone(), value.clone());
            }
            Some(previous) if previous != value => {
                debug!("Parameter '{}' changed", key);
                params.changed.insert(
                    key.clone(),
                    ChangedValue {
                        old: previous.clone(),
                        new: value.clone(),
                    },
                );
            }
            Some(_) => {
                params.unchanged.insert(key.clone(), value.clone());
            }
        }
    }

    for (key, value) in &old.params {
        if !new.params.contains_key(key) {
            debug!("Parameter '{}' removed", key);
            params.removed.insert(key.clone(), value.clone());
        }
    }

    let result = DiffResult {
        base_url: BaseUrlDiff {
            old: old.base_url.clone(),
            new: new.base_url.clone(),
            changed: old.base_url != new.base_url,
        },
        params,
    };

    let summary = result.summary();
    info!(
        "URL diff complete: base changed={}, +{} -{} ~{} ={}",
        summary.base_url_changed, summary.added, summary.removed, summary.changed, summary.unchanged
    );

    result
}
