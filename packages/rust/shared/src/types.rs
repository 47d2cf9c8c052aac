//! Core domain types for docdex indexes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current schema version for the index manifest format.
pub const CURRENT_MANIFEST_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// ComponentKind
// ---------------------------------------------------------------------------

/// The `type` field of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Pipeable,
    Creation,
    Function,
    Const,
    Class,
    Interface,
}

impl ComponentKind {
    /// The catalog's lowercase spelling, used verbatim in rendered entries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pipeable => "pipeable",
            Self::Creation => "creation",
            Self::Function => "function",
            Self::Const => "const",
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Rendering category, computed once at catalog load.
///
/// Replaces render-time string inspection: classes split into subjects vs.
/// others, consts into schedulers / observable consts / other consts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Pipeable,
    Creation,
    Function,
    Subject,
    OtherClass,
    Scheduler,
    ObservableConst,
    OtherConst,
    Interface,
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A single catalog entry with its load-time classification.
#[derive(Debug, Clone)]
pub struct Component {
    /// Unique display name (e.g., `BehaviorSubject`).
    pub name: String,
    /// Documentation link for the entry bullet.
    pub link: String,
    /// The catalog `type` field.
    pub kind: ComponentKind,
    /// Whether the component is marked deprecated.
    pub deprecated: bool,
    /// Grouping category derived from `kind` and `name`.
    pub category: Category,
}

// ---------------------------------------------------------------------------
// Document & Segment
// ---------------------------------------------------------------------------

/// One scanned markdown file, kept fully in memory.
#[derive(Debug, Clone)]
pub struct Document {
    /// Owning section directory (e.g., `section-1`).
    pub section_id: String,
    /// File name within the section directory.
    pub file_name: String,
    /// All lines of the file, in order.
    pub lines: Vec<String>,
}

/// A contiguous run of lines starting at a heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The raw heading line, `#` markers included.
    pub title_line: String,
    /// Non-blank body lines up to the next heading.
    pub body_lines: Vec<String>,
}

// ---------------------------------------------------------------------------
// Reference & ReferenceIndex
// ---------------------------------------------------------------------------

/// A cross-reference from a component to a tutorial segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Section directory the document came from.
    pub section_id: String,
    /// Segment heading text, `#` markers and whitespace stripped.
    pub segment_title: String,
    /// `<section>/<file>#<slug>` anchor link.
    pub anchor: String,
}

/// Mapping from component name to its references, in document order.
///
/// Every catalog component has a key, pre-initialized to an empty vector
/// before extraction populates it.
pub type ReferenceIndex = BTreeMap<String, Vec<Reference>>;

// ---------------------------------------------------------------------------
// IndexManifest
// ---------------------------------------------------------------------------

/// Metadata for a single rendered index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexFileMeta {
    pub filename: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// The `manifest.json` written next to the rendered index pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexManifest {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Tool version that produced the index.
    pub tool_version: String,
    /// When the index was generated.
    pub generated_at: DateTime<Utc>,
    /// Number of catalog components indexed.
    pub component_count: usize,
    /// Number of documents scanned.
    pub document_count: usize,
    /// Rendered files with checksums.
    pub files: Vec<IndexFileMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serde_spelling() {
        let kind: ComponentKind = serde_json::from_str("\"pipeable\"").expect("parse kind");
        assert_eq!(kind, ComponentKind::Pipeable);
        assert_eq!(kind.to_string(), "pipeable");

        let kind: ComponentKind = serde_json::from_str("\"interface\"").expect("parse kind");
        assert_eq!(kind, ComponentKind::Interface);
    }

    #[test]
    fn unknown_kind_rejected() {
        let result: std::result::Result<ComponentKind, _> = serde_json::from_str("\"widget\"");
        assert!(result.is_err());
    }

    #[test]
    fn manifest_serialization() {
        let manifest = IndexManifest {
            schema_version: CURRENT_MANIFEST_VERSION,
            tool_version: "0.1.0".into(),
            generated_at: Utc::now(),
            component_count: 12,
            document_count: 3,
            files: vec![IndexFileMeta {
                filename: "all.md".into(),
                sha256: "abc".into(),
                size_bytes: 1024,
            }],
        };

        let json = serde_json::to_string_pretty(&manifest).expect("serialize");
        let parsed: IndexManifest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.schema_version, CURRENT_MANIFEST_VERSION);
        assert_eq!(parsed.files.len(), 1);
        assert_eq!(parsed.files[0].filename, "all.md");
    }
}
