use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::document::model::{Document, Flow};

static FONT_SIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+(em|px|vmax)$").unwrap());
static FLOW_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9._]+$").unwrap());
static COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]+$").unwrap());
static BORDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+ [0-9]+px$").unwrap());

/// `true` when `id` is usable as a flow id and asset file stem.
pub fn is_flow_id(id: &str) -> bool {
    FLOW_ID.is_match(id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SchemaPathElem {
    Field(&'static str),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One shape problem with its location in the document.
pub struct SchemaError {
    pub(crate) path: Vec<SchemaPathElem>,
    /// Human-readable description.
    pub message: String,
}

impl SchemaError {
    fn at(path: &[SchemaPathElem], message: impl Into<String>) -> Self {
        Self {
            path: path.to_vec(),
            message: message.into(),
        }
    }

    /// Location rendered as `$.sections[0].flows[1].id`.
    pub fn location(&self) -> String {
        format_path(&self.path)
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.message);
        }
        write!(f, "{}: {}", format_path(&self.path), self.message)
    }
}

fn format_path(path: &[SchemaPathElem]) -> String {
    let mut s = String::from("$");
    for p in path {
        match *p {
            SchemaPathElem::Field(name) => {
                s.push('.');
                s.push_str(name);
            }
            SchemaPathElem::Index(i) => {
                s.push('[');
                s.push_str(&i.to_string());
                s.push(']');
            }
        }
    }
    s
}

#[derive(Debug, Clone)]
/// Every shape problem found in one document.
pub struct SchemaErrors {
    /// Problems in document order.
    pub errors: Vec<SchemaError>,
}

impl fmt::Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

/// Check document shape: unit-suffixed font sizes, flow id charset, colors, borders.
///
/// Directive strings are only checked for being non-blank here; their grammar and timing are
/// enforced by the directive compiler.
pub fn validate_document(doc: &Document) -> Result<(), SchemaErrors> {
    use SchemaPathElem::{Field, Index};

    let mut errors = Vec::new();

    for (name, value) in [("min", &doc.min), ("max", &doc.max)] {
        if !FONT_SIZE.is_match(value) {
            errors.push(SchemaError::at(
                &[Field(name)],
                format!("'{value}' must be a number followed by em, px or vmax"),
            ));
        }
    }

    for (name, value) in [
        ("svgPaneBackgroundColor", &doc.svg_pane_background_color),
        ("textPaneBackgroundColor", &doc.text_pane_background_color),
    ] {
        if let Some(v) = value
            && !COLOR.is_match(v)
        {
            errors.push(SchemaError::at(
                &[Field(name)],
                format!("'{v}' must be a '#'-prefixed hex color"),
            ));
        }
    }

    for (name, value) in [
        ("topBorder", &doc.top_border),
        ("bottomBorder", &doc.bottom_border),
        ("leftBorder", &doc.left_border),
        ("rightBorder", &doc.right_border),
    ] {
        if let Some(v) = value
            && !BORDER.is_match(v)
        {
            errors.push(SchemaError::at(
                &[Field(name)],
                format!("'{v}' must look like '<style> <integer>px'"),
            ));
        }
    }

    if doc.sections.is_empty() {
        errors.push(SchemaError::at(
            &[Field("sections")],
            "at least one section is required",
        ));
    }

    for (si, section) in doc.sections.iter().enumerate() {
        let mut path = vec![Field("sections"), Index(si), Field("flows")];
        for (fi, flow) in section.flows.iter().enumerate() {
            path.push(Index(fi));
            validate_flow(flow, &mut path, &mut errors);
            path.pop();
        }
        path.pop();

        for (ssi, sub) in section.subsections.iter().enumerate() {
            path.extend([Field("subsections"), Index(ssi), Field("flows")]);
            for (fi, flow) in sub.flows.iter().enumerate() {
                path.push(Index(fi));
                validate_flow(flow, &mut path, &mut errors);
                path.pop();
            }
            path.truncate(2);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaErrors { errors })
    }
}

fn validate_flow(flow: &Flow, path: &mut Vec<SchemaPathElem>, errors: &mut Vec<SchemaError>) {
    use SchemaPathElem::Field;

    if !is_flow_id(&flow.id) {
        path.push(Field("id"));
        errors.push(SchemaError::at(
            path,
            format!("'{}' may only contain letters, digits, '-', '.' and '_'", flow.id),
        ));
        path.pop();
    }
    if !flow.seconds.is_finite() {
        path.push(Field("seconds"));
        errors.push(SchemaError::at(path, "must be a finite number"));
        path.pop();
    }
    for (name, value) in [("focus", &flow.focus), ("highlight", &flow.highlight)] {
        if let Some(v) = value
            && v.trim().is_empty()
        {
            path.push(Field(name));
            errors.push(SchemaError::at(path, "must not be blank when present"));
            path.pop();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/schema.rs"]
mod tests;
