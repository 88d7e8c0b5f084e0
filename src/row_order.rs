// src/row_order.rs
// Flattens a Forest into the exact row sequence the table renders:
// depth-first pre-order, sibling groups sorted by display code, descent
// gated on the open set. Recomputed in full on every call: the inputs are
// hundreds of rows at most and recomputation avoids incremental-update bugs.

use crate::collate;
use crate::open_state::OpenSet;
use crate::types::{Forest, Node, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow<'a> {
    pub node: &'a Node,
    pub depth: usize,
}

pub fn resolve_visible_rows<'a>(
    forest: &'a Forest,
    open: &OpenSet,
    direction: SortDirection,
) -> Vec<VisibleRow<'a>> {
    let mut out = Vec::new();
    let mut roots = forest.roots.clone();
    sort_siblings(forest, &mut roots, direction);
    for id in roots {
        emit(forest, id, 0, open, direction, &mut out);
    }
    out
}

fn emit<'a>(
    forest: &'a Forest,
    id: usize,
    depth: usize,
    open: &OpenSet,
    direction: SortDirection,
    out: &mut Vec<VisibleRow<'a>>,
) {
    let node = &forest.nodes[id];
    out.push(VisibleRow { node, depth });
    if node.has_children && open.is_open(&node.key) {
        let mut child_ids = forest.children_of(&node.key).to_vec();
        sort_siblings(forest, &mut child_ids, direction);
        for child in child_ids {
            emit(forest, child, depth + 1, open, direction, out);
        }
    }
}

// Stable sort, so rows whose display codes tie keep server order.
fn sort_siblings(forest: &Forest, ids: &mut [usize], direction: SortDirection) {
    ids.sort_by(|&a, &b| {
        let ord = collate::compare(
            &forest.display_code(&forest.nodes[a]),
            &forest.display_code(&forest.nodes[b]),
        );
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}
