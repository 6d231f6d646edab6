//! Persisted list of previously inspected URLs.
//!
//! The history is a collaborator of the decomposer, not part of it: callers
//! look URLs up here and hand the strings to `decompose` or `diff`.

use anyhow::{anyhow, Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// A URL the user inspected, with the time it was recorded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub url: String,
    /// ISO-8601 UTC timestamp
    pub timestamp: String,
}

impl HistoryItem {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// History entries backed by a JSON file, newest first
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    items: Vec<HistoryItem>,
}

impl HistoryStore {
    /// Loads the history file, starting empty when it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read history file {}", path.display()))?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Corrupt history file {}", path.display()))?
            }
        } else {
            debug!("No history file at {}, starting empty", path.display());
            Vec::new()
        };

        Ok(Self { path, items })
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&HistoryItem> {
        self.items.get(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Records a URL at the front of the history and returns its index
    pub fn add(&mut self, url: &str) -> Result<usize> {
        self.items.insert(0, HistoryItem::new(url));
        self.save()?;
        info!("Added {} to history", url);
        Ok(0)
    }

    pub fn find_duplicate_index(&self, url: &str) -> Option<usize> {
        self.items.iter().position(|item| item.url == url)
    }

    /// Replaces the URL at `index` and refreshes its timestamp
    pub fn update(&mut self, index: usize, url: &str) -> Result<()> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        self.items[index] = HistoryItem::new(url);
        self.save()
    }

    pub fn delete(&mut self, index: usize) -> Result<HistoryItem> {
        if index >= self.items.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.items.remove(index);
        self.save()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove history file {}", self.path.display()))?;
        }
        info!("History cleared");
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write history file {}", self.path.display()))
    }

    fn out_of_range(&self, index: usize) -> anyhow::Error {
        anyhow!(
            "No history entry at index {} ({} entries)",
            index,
            self.items.len()
        )
    }
}
