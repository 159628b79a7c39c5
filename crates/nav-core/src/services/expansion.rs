//! Expansion tracker for grouping menu items
//!
//! Each group is independently collapsed or expanded; several may be open at
//! once. State lives as long as the owning screen and is never persisted.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionState {
    expanded: BTreeSet<String>,
}

impl ExpansionState {
    /// All groups collapsed
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `key` and return whether it is now expanded.
    ///
    /// Unknown keys are simply added.
    pub fn toggle(&mut self, key: &str) -> bool {
        let expanded = if self.expanded.remove(key) {
            false
        } else {
            self.expanded.insert(key.to_string());
            true
        };
        debug!("Toggled '{}' -> {}", key, if expanded { "expanded" } else { "collapsed" });
        expanded
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn expanded_keys(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}
