use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    document::{model::Document, schema::validate_document},
    foundation::error::{FlowdeckError, FlowdeckResult},
    render::{
        page::Renderer,
        pipeline::{CompileOptions, render_slideshow},
    },
};

/// Extension of the slideshow description file.
pub const DOCUMENT_EXTENSION: &str = "yml";

/// A slideshow folder: one `*.yml` description plus its SVGs.
#[derive(Clone, Debug)]
pub struct Project {
    folder: PathBuf,
    document_path: PathBuf,
    document: Document,
}

impl Project {
    /// Locate the folder's single `*.yml`, parse it and check its shape.
    #[tracing::instrument]
    pub fn open(folder: &Path) -> FlowdeckResult<Self> {
        if !folder.is_dir() {
            return Err(FlowdeckError::validation(format!(
                "folder '{}' doesn't exist",
                folder.display()
            )));
        }

        let document_path = find_document(folder)?;
        let src = std::fs::read_to_string(&document_path)
            .with_context(|| format!("read '{}'", document_path.display()))?;
        let document: Document = serde_yaml::from_str(&src).map_err(|e| {
            FlowdeckError::serde(format!("'{}': {e}", document_path.display()))
        })?;
        validate_document(&document).map_err(|errs| {
            FlowdeckError::validation(format!(
                "'{}' failed to validate:\n{errs}",
                document_path.display()
            ))
        })?;
        tracing::info!(document = %document_path.display(), "parsed OK");

        Ok(Self {
            folder: folder.to_path_buf(),
            document_path,
            document,
        })
    }

    /// Folder the project was opened from.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Path of the `*.yml` description.
    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    /// Parsed, shape-checked document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Base name of the description file, used as page title and output stem.
    pub fn stem(&self) -> String {
        self.document_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "slideshow".to_owned())
    }

    /// `<folder>/<stem>.<output extension>`.
    pub fn default_output_path(&self, opts: &CompileOptions) -> PathBuf {
        self.folder
            .join(format!("{}.{}", self.stem(), opts.output_extension))
    }

    /// Compile and render the whole slideshow in memory.
    pub fn render(&self, opts: &CompileOptions, renderer: &dyn Renderer) -> FlowdeckResult<Vec<u8>> {
        render_slideshow(
            self.document.clone(),
            &self.stem(),
            &self.folder,
            opts,
            renderer,
        )
    }

    /// Render, then write `out` in a single write; nothing is written if any step fails.
    pub fn build(
        &self,
        out: &Path,
        opts: &CompileOptions,
        renderer: &dyn Renderer,
    ) -> FlowdeckResult<()> {
        let bytes = self.render(opts, renderer)?;
        std::fs::write(out, &bytes).with_context(|| format!("write '{}'", out.display()))?;
        tracing::info!(out = %out.display(), bytes = bytes.len(), "wrote slideshow");
        Ok(())
    }
}

fn find_document(folder: &Path) -> FlowdeckResult<PathBuf> {
    let mut found = Vec::new();
    let entries =
        std::fs::read_dir(folder).with_context(|| format!("list '{}'", folder.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("list '{}'", folder.display()))?
            .path();
        let is_yml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION));
        if is_yml && path.is_file() {
            found.push(path);
        }
    }

    match found.len() {
        1 => Ok(found.remove(0)),
        n => Err(FlowdeckError::validation(format!(
            "folder '{}' must have a single *.{DOCUMENT_EXTENSION} file, found {n}",
            folder.display()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/loader.rs"]
mod tests;
