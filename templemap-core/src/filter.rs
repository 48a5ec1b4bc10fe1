//! Tag filtering.
//!
//! Selected filters combine with AND: a location is active only if it carries
//! every selected tag. The check counts how many of the location's tags match
//! any selected filter and compares that with the number of filters. This
//! coincides with set containment as long as a location has no duplicate tags.

use serde::{Deserialize, Serialize};

/// Ordered set of selected filter tags. Empty means no filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    tags: Vec<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from tags, dropping repeats while keeping first-seen order.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for tag in tags {
            selection.select(tag);
        }
        selection
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag. Returns false if it was already selected.
    pub fn select(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Remove a tag. Returns false if it was not selected.
    pub fn deselect(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Flip a tag's selection. Returns whether it is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.deselect(tag) {
            false
        } else {
            self.select(tag)
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }
}

/// Whether a location with `location_tags` passes the current filters.
pub fn is_active<S: AsRef<str>>(location_tags: &[S], filters: &FilterSelection) -> bool {
    if filters.is_empty() {
        return true;
    }
    let matched = location_tags
        .iter()
        .filter(|tag| filters.contains(tag.as_ref()))
        .count();
    matched == filters.len()
}
