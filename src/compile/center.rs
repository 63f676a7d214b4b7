use crate::document::model::Flow;

/// Opening tag of the centering container.
pub const CENTERED_OPEN: &str = r#"<div class="centered">"#;
/// Closing tag of the centering container.
pub const CENTERED_CLOSE: &str = "</div>";

/// Wrap `flow.html` in the centering container when `centered: true`.
pub fn center_flow(flow: &mut Flow) {
    if flow.centered != Some(true) {
        return;
    }
    flow.html = format!("{CENTERED_OPEN}{}{CENTERED_CLOSE}", flow.html);
}

#[cfg(test)]
#[path = "../../tests/unit/compile/center.rs"]
mod tests;
