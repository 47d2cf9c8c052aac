//! Document loading for docdex.
//!
//! Lists every file in the configured section directories, then reads them
//! all concurrently and gathers the results before the synchronous pipeline
//! stages run. Each read produces an independent [`Document`]; no state is
//! shared between reads. Any unreadable file is fatal.

pub mod segment;

use std::path::Path;

use tokio::task::JoinSet;
use tracing::{debug, instrument};

use docdex_shared::{DocdexError, Document, Result};

pub use segment::{heading_slug, heading_title, segment_lines};

/// Load every document from the given section directories under `root`.
///
/// Directory listings are sorted so the result order is deterministic:
/// sections in the order given, files by name within each section.
#[instrument(skip_all, fields(root = %root.as_ref().display(), sections = sections.len()))]
pub async fn load_documents(
    root: impl AsRef<Path>,
    sections: &[String],
) -> Result<Vec<Document>> {
    let root = root.as_ref();

    // Phase 1: list all (section, file) pairs.
    let mut entries: Vec<(String, String)> = Vec::new();
    for section in sections {
        let dir = root.join(section);
        let mut names = list_files(&dir).await?;
        names.sort();
        entries.extend(names.into_iter().map(|name| (section.clone(), name)));
    }

    // Phase 2: read every file concurrently, gather, restore listing order.
    let mut set: JoinSet<Result<(usize, Document)>> = JoinSet::new();
    for (i, (section, file_name)) in entries.iter().enumerate() {
        let path = root.join(section).join(file_name);
        let section = section.clone();
        let file_name = file_name.clone();
        set.spawn(async move {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| DocdexError::io(&path, e))?;
            Ok((
                i,
                Document {
                    section_id: section,
                    file_name,
                    lines: content.lines().map(str::to_string).collect(),
                },
            ))
        });
    }

    let mut documents: Vec<(usize, Document)> = Vec::with_capacity(entries.len());
    while let Some(joined) = set.join_next().await {
        let (i, doc) = joined
            .map_err(|e| DocdexError::validation(format!("document read task failed: {e}")))??;
        documents.push((i, doc));
    }
    documents.sort_by_key(|(i, _)| *i);

    debug!(count = documents.len(), "documents loaded");
    Ok(documents.into_iter().map(|(_, doc)| doc).collect())
}

/// List the plain files in a directory (subdirectories are ignored).
async fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| DocdexError::io(dir, e))?;

    let mut names = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .map_err(|e| DocdexError::io(dir, e))?
    {
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| DocdexError::io(entry.path(), e))?;
        if file_type.is_file() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    Ok(names)
}
