use std::fmt;

use crate::foundation::error::FlowdeckResult;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// A complete slideshow description.
///
/// The document is a pure data model loaded from YAML. Style knobs are passed through to the
/// page renderer untouched; `sections` is what the compiler passes operate on.
pub struct Document {
    /// Minimized narration font size (`1em`, `14px`, `2vmax`).
    pub min: String,
    /// Expanded narration font size.
    pub max: String,
    /// Background color of the SVG pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_pane_background_color: Option<String>,
    /// Background color of the text pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_pane_background_color: Option<String>,
    /// CSS-like border, e.g. `solid 2px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_border: Option<String>,
    /// CSS-like border, e.g. `solid 2px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_border: Option<String>,
    /// CSS-like border, e.g. `solid 2px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_border: Option<String>,
    /// CSS-like border, e.g. `solid 2px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_border: Option<String>,
    /// Put the text pane before the SVG pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip_panes: Option<bool>,
    /// Ask viewers to rotate portrait screens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landscape_only: Option<bool>,
    /// Top-level sections in presentation order.
    pub sections: Vec<Section>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A top-level group of flows, optionally followed by one level of subsections.
pub struct Section {
    /// Flows shown for this section.
    pub flows: Vec<Flow>,
    /// Nested subsections; they hold flows only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Subsection>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Second (and last) nesting level.
pub struct Subsection {
    /// Flows shown for this subsection.
    pub flows: Vec<Flow>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One timed statement of narration paired with an SVG.
pub struct Flow {
    /// Root asset name on load; qualified id (`root__N`) after uniqification.
    pub id: String,
    /// Narration markup.
    pub html: String,
    /// Animation duration in seconds, consumed by the player.
    pub seconds: f64,
    /// Wrap `html` in a centering container.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centered: Option<bool>,
    /// Viewport pan/zoom directive, removed once compiled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    /// Rectangle highlight directive, removed once compiled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Location of a flow in the two-level section tree.
pub struct FlowPath {
    /// Index into [`Document::sections`].
    pub section: usize,
    /// Index into [`Section::subsections`], `None` for a section's direct flows.
    pub subsection: Option<usize>,
    /// Index into the owning `flows` list.
    pub flow: usize,
}

impl fmt::Display for FlowPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$.sections[{}]", self.section)?;
        if let Some(sub) = self.subsection {
            write!(f, ".subsections[{sub}]")?;
        }
        write!(f, ".flows[{}]", self.flow)
    }
}

impl Document {
    /// Parse a document from YAML source.
    pub fn from_yaml_str(src: &str) -> FlowdeckResult<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    /// Every flow location in traversal order.
    ///
    /// Order: each section's direct flows, then its subsections' flows, then the next section.
    /// All compiler passes iterate this list, so ordinals and fragment order follow it.
    pub fn flow_paths(&self) -> Vec<FlowPath> {
        let mut out = Vec::new();
        for (si, section) in self.sections.iter().enumerate() {
            for fi in 0..section.flows.len() {
                out.push(FlowPath {
                    section: si,
                    subsection: None,
                    flow: fi,
                });
            }
            for (ssi, sub) in section.subsections.iter().enumerate() {
                for fi in 0..sub.flows.len() {
                    out.push(FlowPath {
                        section: si,
                        subsection: Some(ssi),
                        flow: fi,
                    });
                }
            }
        }
        out
    }

    /// Look up a flow by path.
    pub fn flow(&self, path: FlowPath) -> Option<&Flow> {
        let section = self.sections.get(path.section)?;
        let flows = match path.subsection {
            None => &section.flows,
            Some(i) => &section.subsections.get(i)?.flows,
        };
        flows.get(path.flow)
    }

    /// Look up a flow by path, mutably.
    pub fn flow_mut(&mut self, path: FlowPath) -> Option<&mut Flow> {
        let section = self.sections.get_mut(path.section)?;
        let flows = match path.subsection {
            None => &mut section.flows,
            Some(i) => &mut section.subsections.get_mut(i)?.flows,
        };
        flows.get_mut(path.flow)
    }

    /// Iterate flows in traversal order.
    pub fn flows(&self) -> impl Iterator<Item = &Flow> + '_ {
        self.sections.iter().flat_map(|s| {
            s.flows
                .iter()
                .chain(s.subsections.iter().flat_map(|sub| sub.flows.iter()))
        })
    }

    /// Total number of flows.
    pub fn flow_count(&self) -> usize {
        self.flows().count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/model.rs"]
mod tests;
