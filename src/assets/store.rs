use std::{
    collections::HashSet,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::Context;
use regex::Regex;

use crate::{
    document::schema::is_flow_id,
    foundation::error::{FlowdeckError, FlowdeckResult},
};

/// File extension of flow visuals.
pub const SVG_EXTENSION: &str = "svg";

/// Class attribute of the container wrapping each embedded SVG.
pub const FRAGMENT_CLASS: &str = "flow-visual";

// Greedy and dot-matches-newline: spans the first `<svg` to the last `</svg>`.
static SVG_BODY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<svg.*</svg>").unwrap());

#[derive(Clone, Debug, PartialEq, Eq)]
/// One loaded flow visual.
pub struct PreparedSvg {
    /// Root id the asset is keyed by.
    pub root_id: String,
    /// File the body was read from.
    pub path: PathBuf,
    /// Embeddable `<svg>...</svg>` span.
    pub body: String,
}

#[derive(Clone, Debug)]
/// All flow visuals of a document, read up front and in first-seen order.
pub struct AssetStore {
    root: PathBuf,
    assets: Vec<PreparedSvg>,
}

impl AssetStore {
    /// Resolve, read and extract every asset in `root_ids`.
    ///
    /// Existence of every asset is checked before anything is read; if any are missing the
    /// error lists each missing path once, in `root_ids` order.
    #[tracing::instrument(skip(root_ids), fields(count = root_ids.len()))]
    pub fn prepare(root: &Path, root_ids: &[String], extension: &str) -> FlowdeckResult<Self> {
        let root = root.to_path_buf();

        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(root_ids.len());
        let mut missing = Vec::new();
        for id in root_ids {
            if !seen.insert(id.as_str()) {
                continue;
            }
            if !is_flow_id(id) {
                return Err(FlowdeckError::validation(format!(
                    "'{id}' is not a valid asset name"
                )));
            }
            let path = asset_path(&root, id, extension);
            if path.is_file() {
                resolved.push((id.clone(), path));
            } else {
                missing.push(path);
            }
        }
        if !missing.is_empty() {
            return Err(FlowdeckError::MissingAssets(missing));
        }

        let mut assets = Vec::with_capacity(resolved.len());
        for (root_id, path) in resolved {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read asset '{}'", path.display()))?;
            let body = extract_svg_body(&text)
                .ok_or_else(|| FlowdeckError::MissingBody {
                    asset: path.clone(),
                })?
                .to_owned();
            tracing::debug!(asset = %path.display(), bytes = body.len(), "loaded svg body");
            assets.push(PreparedSvg {
                root_id,
                path,
                body,
            });
        }

        Ok(Self { root, assets })
    }

    /// Folder assets were resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loaded assets in first-seen order.
    pub fn assets(&self) -> &[PreparedSvg] {
        &self.assets
    }

    /// Lookup a loaded asset by root id.
    pub fn get(&self, root_id: &str) -> Option<&PreparedSvg> {
        self.assets.iter().find(|a| a.root_id == root_id)
    }

    /// Every body wrapped in its container, separated by blank lines.
    pub fn fragments(&self) -> String {
        self.assets
            .iter()
            .map(|a| wrap_fragment(&a.root_id, &a.body))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// `<root>/<root_id>.<extension>`.
pub fn asset_path(root: &Path, root_id: &str, extension: &str) -> PathBuf {
    root.join(format!("{root_id}.{extension}"))
}

/// Outermost `<svg ...>...</svg>` span of an SVG document, without prolog or doctype.
pub fn extract_svg_body(text: &str) -> Option<&str> {
    SVG_BODY_RE.find(text).map(|m| m.as_str())
}

/// Wrap an SVG body in a container addressable by its root id.
pub fn wrap_fragment(root_id: &str, body: &str) -> String {
    format!("<div id=\"{root_id}\" class=\"{FRAGMENT_CLASS}\">\n{body}\n</div>")
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
