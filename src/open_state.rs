// src/open_state.rs
// Expand/collapse bookkeeping for one page view. Every key starts
// collapsed, membership changes only on explicit toggles, and switching the
// view scope (tab or selected project) clears the whole set so stale expand
// state never leaks onto an unrelated hierarchy.

use chrono::Utc;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::StoreError;
use crate::ui_settings::SettingsStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSet {
    scope: String,
    keys: HashSet<String>,
}

// Stored snapshot shape, one JSON value per storage key.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedOpenSet {
    scope: String,
    keys: Vec<String>,
    updated_at: String,
}

impl OpenSet {
    pub fn new(scope: impl Into<String>) -> Self {
        OpenSet {
            scope: scope.into(),
            keys: HashSet::new(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Flips one key and reports whether it is now expanded.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Moves to another tab/project scope, clearing membership if the scope
    /// actually changed.
    pub fn set_scope(&mut self, scope: &str) {
        if self.scope != scope {
            self.scope = scope.to_string();
            self.keys.clear();
        }
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    // --- Optional persistence (UI convenience, not a system guarantee) ---

    pub fn save(&self, store: &dyn SettingsStore, storage_key: &str) -> Result<(), StoreError> {
        let mut keys: Vec<String> = self.keys.iter().cloned().collect();
        keys.sort();
        let snapshot = PersistedOpenSet {
            scope: self.scope.clone(),
            keys,
            updated_at: Utc::now().to_rfc3339(),
        };
        store.set(storage_key, &serde_json::to_string(&snapshot)?)
    }

    /// Restores a saved snapshot for `scope`. A snapshot written under a
    /// different scope, or one that no longer parses, yields an empty set.
    pub fn load(
        store: &dyn SettingsStore,
        storage_key: &str,
        scope: &str,
    ) -> Result<Self, StoreError> {
        let mut set = OpenSet::new(scope);
        let raw = match store.get(storage_key)? {
            Some(raw) => raw,
            None => return Ok(set),
        };
        match serde_json::from_str::<PersistedOpenSet>(&raw) {
            Ok(snapshot) if snapshot.scope == scope => {
                set.keys = snapshot.keys.into_iter().collect();
            }
            Ok(snapshot) => {
                warn!(
                    "discarding expand state saved for scope '{}' (current '{}')",
                    snapshot.scope, scope
                );
            }
            Err(e) => {
                warn!("unreadable expand state under '{}': {}", storage_key, e);
            }
        }
        Ok(set)
    }
}
