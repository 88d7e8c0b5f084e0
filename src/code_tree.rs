// src/code_tree.rs
// Forest construction from a flat record list. Parent/child linkage is
// purely by canonical dot-prefix: a row's parent is its path minus the last
// segment, and only when some other row owns exactly that path. Nothing is
// ever dropped; orphaned deep codes and malformed codes become roots.

use std::collections::HashMap;

use crate::codes;
use crate::types::{CanonicalMode, CodeRow, CodeScheme, Forest, Node};

fn parent_path(key: &str) -> Option<String> {
    let idx = key.rfind('.')?;
    Some(key[..idx].to_string())
}

/// Builds the display forest for one page view. Canonicalization is always
/// hierarchical here; the flat mode only exists for duplicate checks.
pub fn build_forest(rows: Vec<CodeRow>, scheme: &CodeScheme) -> Forest {
    let keys: Vec<String> = rows
        .iter()
        .map(|row| codes::canonicalize(&row.code, scheme, CanonicalMode::Hierarchical))
        .collect();

    // First row with a given non-empty key owns it: children attach to that
    // row, later duplicates stay independent childless nodes. Empty keys are
    // never registered, so malformed rows cannot be merged under one
    // synthetic parent and cannot adopt single-segment codes as children.
    let mut key_index: HashMap<&str, usize> = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        if !key.is_empty() {
            key_index.entry(key.as_str()).or_insert(i);
        }
    }

    let mut parent_keys: Vec<Option<String>> = Vec::with_capacity(rows.len());
    let mut has_children = vec![false; rows.len()];
    let mut children: HashMap<String, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    let mut orphans = 0usize;

    for (i, key) in keys.iter().enumerate() {
        let candidate = parent_path(key);
        let parent_key = match candidate {
            Some(path) => {
                if key_index.contains_key(path.as_str()) {
                    Some(path)
                } else {
                    orphans += 1;
                    None
                }
            }
            None => None,
        };
        match &parent_key {
            Some(path) => {
                has_children[key_index[path.as_str()]] = true;
                children.entry(path.clone()).or_default().push(i);
            }
            None => roots.push(i),
        }
        parent_keys.push(parent_key);
    }

    // Parents may appear after their children in the server response, so
    // depth is resolved by walking up the finished parent links. Parent keys
    // are strictly shorter paths, so the walk always terminates.
    let mut depths = vec![0usize; rows.len()];
    for i in 0..rows.len() {
        let mut depth = 0;
        let mut cursor = parent_keys[i].as_deref();
        while let Some(path) = cursor {
            depth += 1;
            cursor = parent_keys[key_index[path]].as_deref();
        }
        depths[i] = depth;
    }

    let mut nodes = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        nodes.push(Node {
            id: i,
            key: keys[i].clone(),
            parent_key: parent_keys[i].clone(),
            label: row.label,
            raw: row.raw,
            has_children: has_children[i],
            depth: depths[i],
        });
    }

    if orphans > 0 {
        log::debug!("{} deep codes without a parent row kept as roots", orphans);
    }
    log::debug!("built forest: {} nodes, {} roots", nodes.len(), roots.len());

    Forest {
        scheme: scheme.clone(),
        nodes,
        roots,
        children,
    }
}
