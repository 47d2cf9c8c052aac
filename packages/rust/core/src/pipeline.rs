//! End-to-end `generate` pipeline:
//! catalog → documents → segments → references → pages → output directory.
//!
//! A linear batch job. Document reads are issued concurrently and gathered
//! before the synchronous stages run; there are no retries and no
//! partial-failure recovery — any error aborts the run.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument};

use docdex_shared::{DocdexError, Result};

use crate::extract::build_reference_index;
use crate::writer::{WriteConfig, write_index};

/// Configuration for the `generate` pipeline.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Root directory containing the section directories.
    pub docs_root: PathBuf,
    /// Section directories to scan, relative to `docs_root`.
    pub section_dirs: Vec<String>,
    /// Path to the component catalog JSON.
    pub catalog_file: PathBuf,
    /// Output directory for the rendered pages.
    pub output_dir: PathBuf,
    /// Tool version string recorded in the manifest.
    pub tool_version: String,
}

/// Result of a completed `generate` run.
#[derive(Debug)]
pub struct IndexResult {
    /// Output directory the index was written to.
    pub output_dir: PathBuf,
    /// Number of pages written (manifest excluded).
    pub page_count: usize,
    /// Number of catalog components.
    pub component_count: usize,
    /// Number of documents scanned.
    pub document_count: usize,
    /// Total references recorded across all components.
    pub reference_count: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, result: &IndexResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _result: &IndexResult) {}
}

/// Run the full `generate` pipeline.
///
/// 1. Load and classify the component catalog
/// 2. Load all documents (concurrent reads, gathered)
/// 3. Extract references
/// 4. Render the page set
/// 5. Reset the output directory and write pages + manifest
#[instrument(skip_all, fields(root = %config.docs_root.display(), out = %config.output_dir.display()))]
pub async fn run_index(
    config: &IndexConfig,
    progress: &dyn ProgressReporter,
) -> Result<IndexResult> {
    let start = Instant::now();

    if config.section_dirs.is_empty() {
        return Err(DocdexError::validation("no section directories configured"));
    }

    progress.phase("Loading catalog");
    let catalog = docdex_catalog::load_catalog(&config.catalog_file)?;

    progress.phase("Loading documents");
    let documents =
        docdex_scanner::load_documents(&config.docs_root, &config.section_dirs).await?;

    progress.phase("Extracting references");
    let index = build_reference_index(&documents, &catalog);
    let reference_count: usize = index.values().map(Vec::len).sum();

    progress.phase("Rendering pages");
    let pages = docdex_render::render_pages(&catalog, &index);

    progress.phase("Writing index");
    let write_config = WriteConfig {
        out_dir: config.output_dir.clone(),
        tool_version: config.tool_version.clone(),
        component_count: catalog.len(),
        document_count: documents.len(),
    };
    let manifest = write_index(&write_config, &pages)?;

    let result = IndexResult {
        output_dir: config.output_dir.clone(),
        page_count: manifest.files.len(),
        component_count: catalog.len(),
        document_count: documents.len(),
        reference_count,
        elapsed: start.elapsed(),
    };

    progress.done(&result);

    info!(
        components = result.component_count,
        documents = result.document_count,
        references = result.reference_count,
        pages = result.page_count,
        elapsed_ms = result.elapsed.as_millis(),
        "generate pipeline complete"
    );

    Ok(result)
}
