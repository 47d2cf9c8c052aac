//! Component catalog loading and classification.
//!
//! The catalog is a JSON array of `{name, link, type, deprecated?}` entries.
//! It is loaded once per run, sorted by name, and each entry is classified
//! into its rendering [`Category`] up front so the renderer never inspects
//! names again.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, instrument};

use docdex_shared::{Category, Component, ComponentKind, DocdexError, Result};

/// On-disk shape of a single catalog entry.
///
/// `name`, `link`, and `type` are required; an entry missing any of them is
/// a fatal catalog error rather than a silent mis-grouping.
#[derive(Debug, Deserialize)]
struct RawComponent {
    name: String,
    link: String,
    #[serde(rename = "type")]
    kind: ComponentKind,
    #[serde(default)]
    deprecated: bool,
}

/// Load the component catalog from a JSON file.
///
/// The result is sorted by name once; every later grouping preserves this
/// order. Any read or parse failure aborts the run before output is written.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Component>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| DocdexError::io(path, e))?;

    let raw: Vec<RawComponent> = serde_json::from_str(&content).map_err(|e| {
        DocdexError::catalog(format!("failed to parse {}: {e}", path.display()))
    })?;

    let mut components: Vec<Component> = raw
        .into_iter()
        .map(|r| {
            let category = classify(r.kind, &r.name);
            Component {
                name: r.name,
                link: r.link,
                kind: r.kind,
                deprecated: r.deprecated,
                category,
            }
        })
        .collect();

    components.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = components.len(), "catalog loaded");
    Ok(components)
}

/// Classify a component into its rendering category.
///
/// Classes split on the name containing `Subject`; consts split on the name
/// containing `Scheduler`, then on the name being all-uppercase (observable
/// constants like `EMPTY`).
pub fn classify(kind: ComponentKind, name: &str) -> Category {
    match kind {
        ComponentKind::Pipeable => Category::Pipeable,
        ComponentKind::Creation => Category::Creation,
        ComponentKind::Function => Category::Function,
        ComponentKind::Interface => Category::Interface,
        ComponentKind::Class => {
            if name.contains("Subject") {
                Category::Subject
            } else {
                Category::OtherClass
            }
        }
        ComponentKind::Const => {
            if name.contains("Scheduler") {
                Category::Scheduler
            } else if name.to_uppercase() == name {
                Category::ObservableConst
            } else {
                Category::OtherConst
            }
        }
    }
}
