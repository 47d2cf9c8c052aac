//! Index writer.
//!
//! Deletes and recreates the output directory on every run (destructive,
//! non-incremental), writes the rendered pages, and records a manifest with
//! a checksum per written file.

use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use docdex_render::IndexPage;
use docdex_shared::{
    CURRENT_MANIFEST_VERSION, DocdexError, IndexFileMeta, IndexManifest, Result,
};

/// Inputs for the manifest, beyond the pages themselves.
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Output directory; removed and recreated on each run.
    pub out_dir: PathBuf,
    /// Tool version string recorded in the manifest.
    pub tool_version: String,
    /// Number of catalog components indexed.
    pub component_count: usize,
    /// Number of documents scanned.
    pub document_count: usize,
}

/// Write the rendered pages and `manifest.json` to the output directory.
#[instrument(skip_all, fields(out_dir = %config.out_dir.display(), pages = pages.len()))]
pub fn write_index(config: &WriteConfig, pages: &[IndexPage]) -> Result<IndexManifest> {
    let out_dir = &config.out_dir;

    // Full reset: the index is regenerated from scratch on every run.
    if out_dir.exists() {
        std::fs::remove_dir_all(out_dir).map_err(|e| DocdexError::io(out_dir, e))?;
    }
    std::fs::create_dir_all(out_dir).map_err(|e| DocdexError::io(out_dir, e))?;

    let mut files = Vec::with_capacity(pages.len());
    for page in pages {
        let path = out_dir.join(page.filename);
        std::fs::write(&path, &page.content).map_err(|e| DocdexError::io(&path, e))?;

        let mut hasher = Sha256::new();
        hasher.update(page.content.as_bytes());
        let hash = format!("{:x}", hasher.finalize());

        debug!(file = page.filename, size = page.content.len(), "wrote index page");

        files.push(IndexFileMeta {
            filename: page.filename.to_string(),
            sha256: hash,
            size_bytes: page.content.len(),
        });
    }

    let manifest = IndexManifest {
        schema_version: CURRENT_MANIFEST_VERSION,
        tool_version: config.tool_version.clone(),
        generated_at: Utc::now(),
        component_count: config.component_count,
        document_count: config.document_count,
        files,
    };

    write_json(&out_dir.join("manifest.json"), &manifest)?;

    info!(
        pages = pages.len(),
        path = %out_dir.display(),
        "index written"
    );

    Ok(manifest)
}

/// Write a JSON file (pretty-printed).
fn write_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| DocdexError::validation(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json).map_err(|e| DocdexError::io(path, e))?;
    debug!(path = %path.display(), "wrote JSON file");
    Ok(())
}
