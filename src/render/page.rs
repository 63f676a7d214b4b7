use std::borrow::Cow;

use crate::{
    document::model::Document,
    foundation::error::{FlowdeckError, FlowdeckResult},
    render::assembly::Assembly,
};

const DEFAULT_TEMPLATE: &str = include_str!("page.html");

const DEFAULT_SVG_PANE_BACKGROUND: &str = "#ffffff";
const DEFAULT_TEXT_PANE_BACKGROUND: &str = "#f7f7f7";
const DEFAULT_BORDER: &str = "none 0px";

/// Everything a renderer needs to produce one output file.
#[derive(Clone, Copy, Debug)]
pub struct Page<'a> {
    /// Page title, usually the document file stem.
    pub title: &'a str,
    /// Source document, for its style knobs.
    pub document: &'a Document,
    /// Compiled payloads.
    pub assembly: &'a Assembly,
}

/// Turns compiled payloads into output bytes.
pub trait Renderer {
    /// Produce the complete output file.
    fn render(&self, page: &Page<'_>) -> FlowdeckResult<Vec<u8>>;
}

/// Renders into an HTML skeleton by replacing `{{name}}` placeholders.
///
/// Known placeholders: `title`, `min`, `max`, `svgPaneBackgroundColor`,
/// `textPaneBackgroundColor`, `topBorder`, `bottomBorder`, `leftBorder`, `rightBorder`,
/// `flipPanes`, `landscapeOnly`, `svgs`, `narration`, `directives`. Anything else is an error.
#[derive(Clone, Debug)]
pub struct PageRenderer {
    template: Cow<'static, str>,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }
}

impl PageRenderer {
    /// Renderer using a custom skeleton.
    pub fn with_template(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Renderer for PageRenderer {
    fn render(&self, page: &Page<'_>) -> FlowdeckResult<Vec<u8>> {
        let doc = page.document;
        let border = |b: &Option<String>| b.clone().unwrap_or_else(|| DEFAULT_BORDER.to_owned());
        let narration = script_safe_json(&page.assembly.narration);
        let directives = script_safe_json(&page.assembly.mapping);

        let html = fill_placeholders(&self.template, |name| {
            Some(match name {
                "title" => escape_html(page.title),
                "min" => doc.min.clone(),
                "max" => doc.max.clone(),
                "svgPaneBackgroundColor" => doc
                    .svg_pane_background_color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SVG_PANE_BACKGROUND.to_owned()),
                "textPaneBackgroundColor" => doc
                    .text_pane_background_color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TEXT_PANE_BACKGROUND.to_owned()),
                "topBorder" => border(&doc.top_border),
                "bottomBorder" => border(&doc.bottom_border),
                "leftBorder" => border(&doc.left_border),
                "rightBorder" => border(&doc.right_border),
                "flipPanes" => doc.flip_panes.unwrap_or(false).to_string(),
                "landscapeOnly" => doc.landscape_only.unwrap_or(false).to_string(),
                "svgs" => page.assembly.fragments.clone(),
                "narration" => narration.clone(),
                "directives" => directives.clone(),
                _ => return None,
            })
        })?;
        Ok(html.into_bytes())
    }
}

/// Single left-to-right pass; substituted text is never rescanned.
pub(crate) fn fill_placeholders(
    template: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> FlowdeckResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let close = after.find("}}").ok_or_else(|| {
            FlowdeckError::validation("page template has an unterminated '{{' placeholder")
        })?;
        let name = after[..close].trim();
        let value = lookup(name).ok_or_else(|| {
            FlowdeckError::validation(format!("page template uses unknown placeholder '{name}'"))
        })?;
        out.push_str(&value);
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

// `<\/` is an equivalent JSON escape that cannot close the surrounding <script>.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/").replace("<!--", "<\\u0021--")
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/page.rs"]
mod tests;
