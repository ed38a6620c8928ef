//! Article persistence.
//!
//! The writer is deliberately plain: the output directory is created by an
//! explicit init step invoked from the command layer, and articles are
//! written with a single `fs::write`. An existing file with the same slug
//! is overwritten silently; concurrent runs racing on one slug resolve to
//! last-writer-wins, which is accepted behavior for this tool.
//!
//! All failures here are fatal (exit 3).

use crate::error::{QuillError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Create the output directory (and any missing parents).
///
/// Explicit initialization step; the validator and writer assume it has
/// been called. A directory created before a later fatal failure remains.
pub fn init_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        QuillError::OutputError(format!(
            "failed to create output directory '{}': {}",
            dir.display(),
            e
        ))
    })
}

/// Write the full raw article text to `<dir>/<slug>.md` and return the path.
///
/// The entire model response is persisted, front matter included, so the
/// artifact on disk is exactly what the model produced.
pub fn save_article(dir: &Path, slug: &str, markdown: &str) -> Result<PathBuf> {
    let path = dir.join(format!("{}.md", slug));

    fs::write(&path, markdown).map_err(|e| {
        QuillError::OutputError(format!(
            "failed to write article '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(path)
}
