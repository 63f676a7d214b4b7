//! flowdeck compiles a YAML slideshow description into one self-contained HTML page.
//!
//! A slideshow is a tree of sections holding timed *flows*. Each flow pairs narration text with
//! an SVG named after the flow's `id`, and may carry two compact animation directives:
//!
//! - `focus`: `"x,y,w,h[;x,y,w,h...] <start> <end>"`, a keyframed pan/zoom of the SVG viewport
//! - `highlight`: `"<rects> <#color> <thickness> <opacities> <start> <end>"`, outlined rectangles
//!   with a shared stroke-opacity animation
//!
//! # Pipeline overview
//!
//! 1. **Load**: `*.yml -> Document`, then shape validation ([`validate_document`])
//! 2. **Uniqify**: every flow id becomes `root__N`, numbered in traversal order
//! 3. **Compile**: center flagged flows, lower directives to SVG animation markup
//!    ([`CompiledMapping`]), strip the directive fields from the narration tree
//! 4. **Assets**: resolve `<root>.svg` for every distinct root id and extract its `<svg>` body
//!    ([`AssetStore`]); any missing file aborts the run
//! 5. **Assemble + render**: serialize narration and mapping, hand them with the SVG fragments
//!    to a [`Renderer`] and write the result once
//!
//! Every pass is deterministic: identical input produces byte-identical output.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compile;
mod directive;
mod document;
mod foundation;
mod project;
mod render;

pub use assets::store::{
    AssetStore, FRAGMENT_CLASS, PreparedSvg, SVG_EXTENSION, asset_path, extract_svg_body,
    wrap_fragment,
};
pub use compile::center::{CENTERED_CLOSE, CENTERED_OPEN, center_flow};
pub use compile::compiler::{CompiledDocument, compile_document, strip_directives};
pub use compile::mapping::{CompiledDirectives, CompiledMapping};
pub use compile::uniqify::{FlowSlot, QUALIFIER_SEPARATOR, distinct_roots, qualify, uniqify};
pub use directive::ast::{Directive, FocusDirective, HighlightDirective, Quad, TimeRange};
pub use directive::error::DirectiveError;
pub use directive::lower::HIGHLIGHT_CORNER_RADIUS;
pub use directive::parser::{parse_focus, parse_highlight};
pub use directive::{compile_directive, parse_directive};
pub use document::model::{Document, Flow, FlowPath, Section, Subsection};
pub use document::schema::{SchemaError, SchemaErrors, is_flow_id, validate_document};
pub use foundation::core::{Decimal, format_seconds};
pub use foundation::error::{DirectiveKind, ErrorKind, FlowdeckError, FlowdeckResult};
pub use project::loader::{DOCUMENT_EXTENSION, Project};
pub use project::seed::seed_folder;
pub use render::assembly::{Assembly, assemble};
pub use render::page::{Page, PageRenderer, Renderer};
pub use render::pipeline::{
    CompileOptions, OUTPUT_EXTENSION, Slideshow, build_slideshow, render_slideshow,
};
