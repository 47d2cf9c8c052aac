//! Reference extractor.
//!
//! Scans every segment of every document for each component name and builds
//! the [`ReferenceIndex`]. Matching is a literal substring test over the
//! segment's title and body lines — not word-boundary matching. A name that
//! is a substring of another identifier (`Tap` inside `TapObserver`) records
//! a reference; that is pinned behavior, see the regression test below.

use tracing::{debug, instrument};

use docdex_shared::{Component, Document, Reference, ReferenceIndex};
use docdex_scanner::{heading_slug, heading_title, segment_lines};

/// Build the reference index for the whole corpus.
///
/// Every component gets a key up front, so components with zero mentions
/// still appear in the index. References accumulate in document order, and
/// per document in segment order. Complexity is
/// O(documents × segments × components); the corpus is small by assumption.
#[instrument(skip_all, fields(documents = documents.len(), components = components.len()))]
pub fn build_reference_index(
    documents: &[Document],
    components: &[Component],
) -> ReferenceIndex {
    let mut index: ReferenceIndex = components
        .iter()
        .map(|c| (c.name.clone(), Vec::new()))
        .collect();

    for doc in documents {
        let segments = segment_lines(doc.lines.iter().map(String::as_str));

        for component in components {
            let Some(references) = index.get_mut(&component.name) else {
                continue;
            };

            for segment in &segments {
                let mentioned = std::iter::once(segment.title_line.as_str())
                    .chain(segment.body_lines.iter().map(String::as_str))
                    .any(|line| line.contains(&component.name));

                if mentioned {
                    references.push(Reference {
                        section_id: doc.section_id.clone(),
                        segment_title: heading_title(&segment.title_line),
                        anchor: format!(
                            "{}/{}#{}",
                            doc.section_id,
                            doc.file_name,
                            heading_slug(&segment.title_line)
                        ),
                    });
                }
            }
        }
    }

    let total: usize = index.values().map(Vec::len).sum();
    debug!(references = total, "reference index built");

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdex_catalog::classify;
    use docdex_shared::ComponentKind;

    fn component(name: &str) -> Component {
        Component {
            name: name.into(),
            link: format!("/{}", name.to_lowercase()),
            kind: ComponentKind::Pipeable,
            deprecated: false,
            category: classify(ComponentKind::Pipeable, name),
        }
    }

    fn document(section: &str, file: &str, text: &str) -> Document {
        Document {
            section_id: section.into(),
            file_name: file.into(),
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    #[test]
    fn every_component_has_a_key() {
        let components = vec![component("Tap"), component("Unmentioned")];
        let docs = vec![document("section-1", "a.md", "# Intro\nUse Tap here.")];

        let index = build_reference_index(&docs, &components);

        assert_eq!(index.len(), 2);
        assert_eq!(index["Tap"].len(), 1);
        assert!(index["Unmentioned"].is_empty());
    }

    #[test]
    fn end_to_end_scenario() {
        let components = vec![component("Map"), component("Tap")];
        let docs = vec![document("section-1", "a.md", "# Section\nUse Tap with Map.\n")];

        let index = build_reference_index(&docs, &components);

        for name in ["Tap", "Map"] {
            let refs = &index[name];
            assert_eq!(refs.len(), 1, "{name}");
            assert_eq!(refs[0].section_id, "section-1");
            assert_eq!(refs[0].segment_title, "Section");
            assert_eq!(refs[0].anchor, "section-1/a.md#section");
        }
    }

    #[test]
    fn substring_match_records_false_positive() {
        // Literal substring matching is the pinned behavior: "Tap" inside
        // "TapObserver" still records a reference.
        let components = vec![component("Tap")];
        let docs = vec![document(
            "section-2",
            "b.md",
            "# Observers\nThe TapObserver wraps callbacks.",
        )];

        let index = build_reference_index(&docs, &components);
        assert_eq!(index["Tap"].len(), 1);
        assert_eq!(index["Tap"][0].anchor, "section-2/b.md#observers");
    }

    #[test]
    fn title_line_mentions_count() {
        let components = vec![component("Map")];
        let docs = vec![document("s", "f.md", "## After Map\nno mention in body")];

        let index = build_reference_index(&docs, &components);
        assert_eq!(index["Map"].len(), 1);
        assert_eq!(index["Map"][0].segment_title, "After Map");
        assert_eq!(index["Map"][0].anchor, "s/f.md#after-map");
    }

    #[test]
    fn references_accumulate_in_document_order() {
        let components = vec![component("Tap")];
        let docs = vec![
            document("s1", "a.md", "# First\nTap\n# Second\nTap"),
            document("s2", "b.md", "# Third\nTap"),
        ];

        let index = build_reference_index(&docs, &components);
        let anchors: Vec<&str> = index["Tap"].iter().map(|r| r.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            vec!["s1/a.md#first", "s1/a.md#second", "s2/b.md#third"]
        );
    }

    #[test]
    fn content_before_first_heading_is_not_searched() {
        let components = vec![component("Tap")];
        let docs = vec![document("s", "f.md", "Tap appears here\n# Section\nbody")];

        let index = build_reference_index(&docs, &components);
        assert!(index["Tap"].is_empty());
    }
}
