// src/types.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::codes;

/// Which comparable form a code is reduced to. The back-office pages do not
/// agree on one policy: flat-code pages (budget centers) compare digits only,
/// project sub-code pages compare dot-segment paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalMode {
    Flat,
    Hierarchical,
}

/// Per-page code conventions: an optional alphabetic prefix (e.g. "OB") and
/// an optional base code when sub-codes are scoped under a selected project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeScheme {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub base: Option<String>,
}

impl CodeScheme {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        CodeScheme {
            prefix: Some(prefix.into()),
            base: None,
        }
    }

    pub fn scoped(prefix: impl Into<String>, base: impl Into<String>) -> Self {
        CodeScheme {
            prefix: Some(prefix.into()),
            base: Some(base.into()),
        }
    }
}

/// The one internal record shape every data source is mapped into at the
/// fetch boundary (see records.rs). `raw` keeps the original server record
/// for the host page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeRow {
    pub code: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub raw: Value,
}

// --- Node / Forest ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position in `Forest::nodes`; ui-local, not a server id.
    pub id: usize,
    /// Canonical hierarchical code.
    pub key: String,
    /// Canonical key of the attached parent, if one exists in the data set.
    pub parent_key: Option<String>,
    pub label: String,
    pub raw: Value,
    pub has_children: bool,
    /// Count of attached ancestors. Orphaned deep codes sit at depth 0.
    pub depth: usize,
}

/// Root nodes plus parent -> ordered children, rebuilt from scratch whenever
/// the flat list or the active scheme changes. Children keep input order
/// here; sorting happens in row_order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub scheme: CodeScheme,
    pub nodes: Vec<Node>,
    pub roots: Vec<usize>,
    pub children: HashMap<String, Vec<usize>>,
}

impl Forest {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn children_of(&self, key: &str) -> &[usize] {
        self.children.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The code as the table shows it, prefix re-applied.
    pub fn display_code(&self, node: &Node) -> String {
        codes::to_display_code(&node.key, self.scheme.prefix.as_deref())
    }
}

/// One global sort direction; the toggle affects every sibling group
/// uniformly, never per subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}
