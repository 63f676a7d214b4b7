use std::collections::HashSet;

use crate::document::model::{Document, FlowPath};

/// Separator between a root id and its ordinal in a qualified id.
pub const QUALIFIER_SEPARATOR: &str = "__";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One flow after uniqification: where it lives and both of its ids.
pub struct FlowSlot {
    /// Location in the document.
    pub path: FlowPath,
    /// Asset name the author wrote.
    pub root_id: String,
    /// Document-unique `root__ordinal`.
    pub qualified_id: String,
}

/// Build the qualified id for `root` at 1-based `ordinal`.
pub fn qualify(root: &str, ordinal: usize) -> String {
    format!("{root}{QUALIFIER_SEPARATOR}{ordinal}")
}

/// Rewrite every flow id to `root__N`, numbering flows `1..=N` in traversal order.
///
/// Returns one slot per flow in the same order, keeping the root id alongside.
#[tracing::instrument(skip(doc))]
pub fn uniqify(doc: &mut Document) -> Vec<FlowSlot> {
    let paths = doc.flow_paths();
    let mut out = Vec::with_capacity(paths.len());
    for (i, path) in paths.into_iter().enumerate() {
        let Some(flow) = doc.flow_mut(path) else {
            continue;
        };
        let qualified_id = qualify(&flow.id, i + 1);
        let root_id = std::mem::replace(&mut flow.id, qualified_id.clone());
        out.push(FlowSlot {
            path,
            root_id,
            qualified_id,
        });
    }
    tracing::debug!(flows = out.len(), "assigned qualified flow ids");
    out
}

/// Distinct root ids in first-seen order.
pub fn distinct_roots(slots: &[FlowSlot]) -> Vec<String> {
    let mut seen = HashSet::new();
    slots
        .iter()
        .filter(|s| seen.insert(s.root_id.as_str()))
        .map(|s| s.root_id.clone())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/compile/uniqify.rs"]
mod tests;
