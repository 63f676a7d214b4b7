use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{FlowdeckError, FlowdeckResult};

const STARTER_DOCUMENT: (&str, &str) = ("slideshow.yml", include_str!("seed/slideshow.yml"));
const STARTER_SVG: (&str, &str) = ("welcome.svg", include_str!("seed/welcome.svg"));

/// Populate an empty folder with a starter description and a 1000x1000 guide SVG.
///
/// Returns the written paths.
#[tracing::instrument]
pub fn seed_folder(folder: &Path) -> FlowdeckResult<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(FlowdeckError::validation(format!(
            "folder '{}' doesn't exist",
            folder.display()
        )));
    }
    let mut entries =
        std::fs::read_dir(folder).with_context(|| format!("list '{}'", folder.display()))?;
    if entries.next().is_some() {
        return Err(FlowdeckError::validation(format!(
            "folder '{}' should be empty before seeding",
            folder.display()
        )));
    }

    let mut written = Vec::new();
    for (name, contents) in [STARTER_DOCUMENT, STARTER_SVG] {
        let path = folder.join(name);
        std::fs::write(&path, contents).with_context(|| format!("write '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "seeded");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/project/seed.rs"]
mod tests;
