use std::collections::HashSet;

use serde::ser::{Serialize, Serializer};

use crate::{
    directive,
    document::model::Flow,
    foundation::error::{DirectiveKind, FlowdeckError, FlowdeckResult},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Compiled markup for one flow.
pub struct CompiledDirectives {
    /// `<animate>` over the SVG `viewBox`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Outlined `<rect>` elements with their opacity animation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Clone, Debug, Default)]
/// Qualified flow id -> compiled directive markup, in insertion order.
///
/// Serializes as a JSON object whose keys follow document order.
pub struct CompiledMapping {
    entries: Vec<(String, CompiledDirectives)>,
    // Every qualified id compiled so far, with or without directives.
    seen: HashSet<String>,
}

impl CompiledMapping {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `flow`'s directives under `qualified_id` and record them.
    ///
    /// Flows without directives add no entry. Seeing the same qualified id twice is an
    /// internal error: qualified ids are unique by construction.
    pub fn compile_flow(&mut self, qualified_id: &str, flow: &Flow) -> FlowdeckResult<()> {
        if !self.seen.insert(qualified_id.to_owned()) {
            return Err(FlowdeckError::DuplicateFlowId(qualified_id.to_owned()));
        }

        let compile = |kind, src: &Option<String>| {
            src.as_deref()
                .map(|s| directive::compile_directive(qualified_id, kind, s))
                .transpose()
        };
        let entry = CompiledDirectives {
            focus: compile(DirectiveKind::Focus, &flow.focus)?,
            highlight: compile(DirectiveKind::Highlight, &flow.highlight)?,
        };

        if entry.focus.is_none() && entry.highlight.is_none() {
            return Ok(());
        }
        tracing::debug!(
            flow = qualified_id,
            focus = entry.focus.is_some(),
            highlight = entry.highlight.is_some(),
            "compiled directives"
        );
        self.entries.push((qualified_id.to_owned(), entry));
        Ok(())
    }

    /// Compiled markup for a qualified id.
    pub fn get(&self, qualified_id: &str) -> Option<&CompiledDirectives> {
        self.entries
            .iter()
            .find(|(k, _)| k == qualified_id)
            .map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompiledDirectives)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of flows with compiled directives.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no flow declared a directive.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CompiledMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, v)| (k, v)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/mapping.rs"]
mod tests;
