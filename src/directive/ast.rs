use crate::foundation::core::Decimal;

#[derive(Clone, Debug, PartialEq)]
/// One `x,y,w,h` rectangle.
pub struct Quad {
    /// Left edge.
    pub x: Decimal,
    /// Top edge.
    pub y: Decimal,
    /// Width.
    pub w: Decimal,
    /// Height.
    pub h: Decimal,
}

impl Quad {
    /// Space-separated form used in `viewBox` keyframes: `x y w h`.
    pub fn to_view_box(&self) -> String {
        format!("{} {} {} {}", self.x, self.y, self.w, self.h)
    }
}

#[derive(Clone, Debug, PartialEq)]
/// Animation window in seconds.
pub struct TimeRange {
    /// Start, seconds from flow activation.
    pub start: Decimal,
    /// End, seconds from flow activation.
    pub end: Decimal,
}

impl TimeRange {
    /// `end - start`; negative when the directive is inverted.
    pub fn duration(&self) -> f64 {
        self.end.value() - self.start.value()
    }
}

#[derive(Clone, Debug, PartialEq)]
/// `"<quad>[;<quad>...] <start> <end>"`: keyframed viewport over the quads.
pub struct FocusDirective {
    /// Viewport keyframes in order.
    pub keyframes: Vec<Quad>,
    /// When the pan runs.
    pub time: TimeRange,
}

#[derive(Clone, Debug, PartialEq)]
/// `"<quads> <color> <thickness> <opacities> <start> <end>"`: one outline per quad.
pub struct HighlightDirective {
    /// Independent rectangles sharing style and timing.
    pub rects: Vec<Quad>,
    /// Stroke color (`#` + hex).
    pub color: String,
    /// Stroke width.
    pub thickness: Decimal,
    /// Stroke-opacity keyframes.
    pub opacity: Vec<Decimal>,
    /// Opacity keyframes exactly as written, separators included.
    pub opacity_src: String,
    /// When the opacity animation runs.
    pub time: TimeRange,
}

#[derive(Clone, Debug, PartialEq)]
/// A parsed flow directive.
pub enum Directive {
    /// Parsed `focus`.
    Focus(FocusDirective),
    /// Parsed `highlight`.
    Highlight(HighlightDirective),
}

impl Directive {
    /// Timing shared by both directive kinds.
    pub fn time(&self) -> &TimeRange {
        match self {
            Self::Focus(f) => &f.time,
            Self::Highlight(h) => &h.time,
        }
    }
}
