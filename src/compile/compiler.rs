use crate::{
    compile::{
        center::center_flow,
        mapping::CompiledMapping,
        uniqify::{FlowSlot, distinct_roots, uniqify},
    },
    document::model::{Document, Flow},
    foundation::error::{FlowdeckError, FlowdeckResult},
};

#[derive(Clone, Debug)]
/// Output of the document passes, ready for asset loading and assembly.
pub struct CompiledDocument {
    /// Narration tree: qualified ids, centering applied, directives stripped.
    pub narration: Document,
    /// Qualified id -> compiled directive markup.
    pub mapping: CompiledMapping,
    /// One slot per flow in traversal order.
    pub slots: Vec<FlowSlot>,
    /// Distinct root ids in first-seen order; one asset each.
    pub roots: Vec<String>,
}

/// Run uniqify, then centering and directive compilation, then stripping, over every flow.
///
/// Fails on the first malformed or inverted directive.
#[tracing::instrument(skip(doc))]
pub fn compile_document(mut doc: Document) -> FlowdeckResult<CompiledDocument> {
    let slots = uniqify(&mut doc);
    let mut mapping = CompiledMapping::new();

    for slot in &slots {
        let flow = doc.flow_mut(slot.path).ok_or_else(|| {
            FlowdeckError::Other(anyhow::anyhow!("flow vanished at {}", slot.path))
        })?;
        center_flow(flow);
        mapping.compile_flow(&slot.qualified_id, flow)?;
        strip_directives(flow);
    }

    let roots = distinct_roots(&slots);
    tracing::debug!(
        flows = slots.len(),
        assets = roots.len(),
        directives = mapping.len(),
        "compiled document"
    );
    Ok(CompiledDocument {
        narration: doc,
        mapping,
        slots,
        roots,
    })
}

/// Drop `focus`/`highlight`; their markup lives in the mapping only.
pub fn strip_directives(flow: &mut Flow) {
    flow.focus = None;
    flow.highlight = None;
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
