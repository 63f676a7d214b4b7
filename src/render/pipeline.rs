use std::path::Path;

use crate::{
    assets::store::{AssetStore, SVG_EXTENSION},
    compile::compiler::{CompiledDocument, compile_document},
    document::model::Document,
    foundation::error::FlowdeckResult,
    render::{
        assembly::{Assembly, assemble},
        page::{Page, Renderer},
    },
};

/// Default extension of the rendered page.
pub const OUTPUT_EXTENSION: &str = "html";

/// Knobs for [`build_slideshow`] / [`render_slideshow`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOptions {
    /// Extension of flow visuals next to the document.
    pub asset_extension: String,
    /// Extension of the rendered output file.
    pub output_extension: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            asset_extension: SVG_EXTENSION.to_owned(),
            output_extension: OUTPUT_EXTENSION.to_owned(),
        }
    }
}

/// Compiled document plus its serialized payloads.
#[derive(Clone, Debug)]
pub struct Slideshow {
    /// Result of the document passes.
    pub compiled: CompiledDocument,
    /// Payloads for the renderer.
    pub assembly: Assembly,
}

/// Compile `doc` and load its assets from `asset_root`.
///
/// Pure apart from reading assets; nothing is written.
#[tracing::instrument(skip(doc, opts))]
pub fn build_slideshow(
    doc: Document,
    asset_root: &Path,
    opts: &CompileOptions,
) -> FlowdeckResult<Slideshow> {
    let compiled = compile_document(doc)?;
    let assets = AssetStore::prepare(asset_root, &compiled.roots, &opts.asset_extension)?;
    let assembly = assemble(&compiled, &assets)?;
    Ok(Slideshow { compiled, assembly })
}

/// [`build_slideshow`] followed by `renderer`; returns the output bytes.
pub fn render_slideshow(
    doc: Document,
    title: &str,
    asset_root: &Path,
    opts: &CompileOptions,
    renderer: &dyn Renderer,
) -> FlowdeckResult<Vec<u8>> {
    let show = build_slideshow(doc, asset_root, opts)?;
    renderer.render(&Page {
        title,
        document: &show.compiled.narration,
        assembly: &show.assembly,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
