use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::url_parser::{ParamMap, ParamValue, ParsedUrl};

/// Comparison of two base URLs by exact string identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseUrlDiff {
    pub old: String,
    pub new: String,
    pub changed: bool,
}

/// Both sides of a parameter whose value differs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedValue {
    pub old: ParamValue,
    pub new: ParamValue,
}

/// Parameter-level differences, split into four disjoint groups
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamDiff {
    pub added: ParamMap,
    pub removed: ParamMap,
    pub changed: IndexMap<String, ChangedValue>,
    pub unchanged: ParamMap,
}

/// Structural difference between two decomposed URLs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffResult {
    pub base_url: BaseUrlDiff,
    pub params: ParamDiff,
}

/// Counts of each kind of difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    pub base_url_changed: bool,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

impl DiffResult {
    /// True when neither the base URL nor any parameter differs
    pub fn is_identical(&self) -> bool {
        !self.base_url.changed
            && self.params.added.is_empty()
            && self.params.removed.is_empty()
            && self.params.changed.is_empty()
    }

    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            base_url_changed: self.base_url.changed,
            added: self.params.added.len(),
            removed: self.params.removed.len(),
            changed: self.params.changed.len(),
            unchanged: self.params.unchanged.len(),
        }
    }

    /// Rebuilds the old side for display: unchanged, then removed, then changed params
    pub fn old_view(&self) -> ParsedUrl {
        let mut params = self.params.unchanged.clone();
        params.extend(self.params.removed.clone());
        params.extend(
            self.params
                .changed
                .iter()
                .map(|(key, value)| (key.clone(), value.old.clone())),
        );
        ParsedUrl::success(self.base_url.old.clone(), params)
    }

    /// Rebuilds the new side for display: unchanged, then added, then changed params
    pub fn new_view(&self) -> ParsedUrl {
        let mut params = self.params.unchanged.clone();
        params.extend(self.params.added.clone());
        params.extend(
            self.params
                .changed
                .iter()
                .map(|(key, value)| (key.clone(), value.new.clone())),
        );
        ParsedUrl::success(self.base_url.new.clone(), params)
    }
}
