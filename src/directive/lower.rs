//! Lowering of parsed directives into SVG/SMIL animation markup.
//!
//! Every animation uses `fill="freeze"` so the last keyframe is held once the animation ends.

use std::fmt::Write as _;

use crate::{
    directive::ast::{Directive, FocusDirective, HighlightDirective, TimeRange},
    foundation::core::format_seconds,
};

/// Corner radius of highlight outlines, in SVG user units.
pub const HIGHLIGHT_CORNER_RADIUS: u32 = 10;

impl FocusDirective {
    /// `viewBox` keyframe values: quads as `x y w h`, joined by `;`.
    pub fn values(&self) -> String {
        self.keyframes
            .iter()
            .map(|q| q.to_view_box())
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Render a single `<animate>` over the root `viewBox`.
    ///
    /// Callers check the time range first; a negative duration is rendered as-is.
    pub fn to_markup(&self) -> String {
        format!(
            r#"<animate attributeName="viewBox" values="{}" {}/>"#,
            self.values(),
            timing_attrs(&self.time),
        )
    }
}

impl HighlightDirective {
    /// Render one outlined `<rect>` per quad, each carrying the shared opacity animation.
    pub fn to_markup(&self) -> String {
        let initial = self
            .opacity
            .first()
            .map(|d| d.as_str())
            .unwrap_or("1");
        let animate = format!(
            r#"<animate attributeName="stroke-opacity" values="{}" {}/>"#,
            self.opacity_src,
            timing_attrs(&self.time),
        );

        let mut out = String::new();
        for q in &self.rects {
            let _ = write!(
                out,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" fill="transparent" stroke="{color}" stroke-width="{t}" stroke-opacity="{initial}">{animate}</rect>"#,
                x = q.x,
                y = q.y,
                w = q.w,
                h = q.h,
                r = HIGHLIGHT_CORNER_RADIUS,
                color = self.color,
                t = self.thickness,
            );
        }
        out
    }
}

impl Directive {
    /// Lower either directive kind.
    pub fn to_markup(&self) -> String {
        match self {
            Self::Focus(f) => f.to_markup(),
            Self::Highlight(h) => h.to_markup(),
        }
    }
}

fn timing_attrs(time: &TimeRange) -> String {
    format!(
        r#"begin="{}" dur="{}" fill="freeze""#,
        format_seconds(time.start.value()),
        format_seconds(time.duration()),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/directive/lower.rs"]
mod tests;
