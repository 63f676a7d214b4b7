use crate::{
    assets::store::AssetStore,
    compile::compiler::CompiledDocument,
    foundation::error::FlowdeckResult,
};

/// The three payloads handed to a [`crate::Renderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assembly {
    /// Wrapped SVG bodies, one per distinct root id, separated by blank lines.
    pub fragments: String,
    /// Narration tree as JSON (qualified ids, centering applied, no directives).
    pub narration: String,
    /// Qualified id -> `{focus?, highlight?}` markup as JSON.
    pub mapping: String,
}

/// Serialize the compiled document and collect asset fragments.
pub fn assemble(compiled: &CompiledDocument, assets: &AssetStore) -> FlowdeckResult<Assembly> {
    Ok(Assembly {
        fragments: assets.fragments(),
        narration: serde_json::to_string(&compiled.narration)?,
        mapping: serde_json::to_string(&compiled.mapping)?,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/assembly.rs"]
mod tests;
