//! Markdown index page rendering.
//!
//! Pure string templating over the sorted catalog and the reference index.
//! Produces the fixed page set: `all.md`, `classes.md`, `functions.md`,
//! `consts.md`, `types.md`, and `deprecated.md`, each with a navigational
//! header linking the other pages. All groupings preserve catalog order.

use tracing::debug;

use docdex_shared::{Category, Component, Reference, ReferenceIndex};

/// A rendered index page, ready to be written to disk.
#[derive(Debug, Clone)]
pub struct IndexPage {
    /// File name within the output directory.
    pub filename: &'static str,
    /// Full markdown content.
    pub content: String,
}

/// Render one catalog entry: a bullet line with display name, link, and
/// kind, followed by one indented sub-bullet per reference.
pub fn render_entry(component: &Component, references: &[Reference]) -> String {
    let sub_bullets = references
        .iter()
        .map(|r| {
            format!(
                "  * [{} - {}]({})",
                r.section_id, r.segment_title, r.anchor
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "* [{}]({}) - {}\n{}",
        component.name, component.link, component.kind, sub_bullets
    )
}

/// Render the complete page set.
pub fn render_pages(catalog: &[Component], index: &ReferenceIndex) -> Vec<IndexPage> {
    let pages = vec![
        IndexPage {
            filename: "all.md",
            content: render_all(catalog, index),
        },
        IndexPage {
            filename: "classes.md",
            content: render_classes(catalog, index),
        },
        IndexPage {
            filename: "functions.md",
            content: render_functions(catalog, index),
        },
        IndexPage {
            filename: "consts.md",
            content: render_consts(catalog, index),
        },
        IndexPage {
            filename: "types.md",
            content: render_types(catalog, index),
        },
        IndexPage {
            filename: "deprecated.md",
            content: render_deprecated(catalog, index),
        },
    ];

    debug!(pages = pages.len(), "index pages rendered");
    pages
}

// ---------------------------------------------------------------------------
// Individual pages
// ---------------------------------------------------------------------------

fn render_all(catalog: &[Component], index: &ReferenceIndex) -> String {
    format!(
        "# Component Index\n\n\
         [Classes](./classes.md) | [Subjects](./classes.md#subjects) | \
         [Functions](./functions.md) | [Pipeable Operators](./functions.md#pipeable-operators) | \
         [Creation Operators](./functions.md#creation-operators) | \
         [Schedulers](./consts.md#schedulers) | [Consts](./consts.md) | \
         [Types](./types.md) | [Deprecated](./deprecated.md)\n\n{}\n",
        entries_where(catalog, index, |_| true)
    )
}

fn render_classes(catalog: &[Component], index: &ReferenceIndex) -> String {
    format!(
        "# Classes\n\n\
         [Back to All Components](./all.md) | [Subjects](#subjects) | [Others](#others)\n\n\
         ## Subjects\n\n{}\n\n\
         ## Others\n\n{}\n",
        entries_where(catalog, index, |c| c.category == Category::Subject),
        entries_where(catalog, index, |c| c.category == Category::OtherClass),
    )
}

fn render_functions(catalog: &[Component], index: &ReferenceIndex) -> String {
    format!(
        "# Functions\n\n\
         [Back to All Components](./all.md) | [Pipeable Operators](#pipeable-operators) | \
         [Creation Operators](#creation-operators) | [Other Functions](#other-functions)\n\n\
         ## Pipeable Operators\n\n{}\n\n\
         ## Creation Operators\n\n{}\n\n\
         ## Other Functions\n\n{}\n",
        entries_where(catalog, index, |c| c.category == Category::Pipeable),
        entries_where(catalog, index, |c| c.category == Category::Creation),
        entries_where(catalog, index, |c| c.category == Category::Function),
    )
}

fn render_consts(catalog: &[Component], index: &ReferenceIndex) -> String {
    format!(
        "# Consts\n\n\
         [Back to All Components](./all.md) | [Schedulers](#schedulers) | \
         [Observable Consts](#observable-consts) | [Other Consts](#other-consts)\n\n\
         ## Schedulers\n\n{}\n\n\
         ## Observable Consts\n\n{}\n\n\
         ## Other Consts\n\n{}\n",
        entries_where(catalog, index, |c| c.category == Category::Scheduler),
        entries_where(catalog, index, |c| c.category == Category::ObservableConst),
        entries_where(catalog, index, |c| c.category == Category::OtherConst),
    )
}

fn render_types(catalog: &[Component], index: &ReferenceIndex) -> String {
    format!(
        "# Types\n\n[Back to All Components](./all.md)\n\n{}\n",
        entries_where(catalog, index, |c| c.category == Category::Interface)
    )
}

fn render_deprecated(catalog: &[Component], index: &ReferenceIndex) -> String {
    format!(
        "# Deprecated\n\n[Back to All Components](./all.md)\n\n{}\n",
        entries_where(catalog, index, |c| c.deprecated)
    )
}

/// Render the entries matching `filter`, preserving catalog order.
fn entries_where(
    catalog: &[Component],
    index: &ReferenceIndex,
    filter: impl Fn(&Component) -> bool,
) -> String {
    static NO_REFS: Vec<Reference> = Vec::new();

    catalog
        .iter()
        .filter(|c| filter(c))
        .map(|c| render_entry(c, index.get(&c.name).unwrap_or(&NO_REFS)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use docdex_shared::ComponentKind;
    use std::collections::BTreeMap;

    fn component(name: &str, kind: ComponentKind, deprecated: bool) -> Component {
        Component {
            name: name.into(),
            link: format!("/api/{}", name.to_lowercase()),
            kind,
            deprecated,
            category: docdex_catalog::classify(kind, name),
        }
    }

    fn sample_catalog() -> Vec<Component> {
        vec![
            component("BehaviorSubject", ComponentKind::Class, false),
            component("EMPTY", ComponentKind::Const, false),
            component("Map", ComponentKind::Pipeable, false),
            component("Observable", ComponentKind::Class, false),
            component("Observer", ComponentKind::Interface, false),
            component("Tap", ComponentKind::Pipeable, true),
            component("asyncScheduler", ComponentKind::Const, false),
            component("config", ComponentKind::Const, false),
            component("firstValueFrom", ComponentKind::Function, false),
            component("of", ComponentKind::Creation, false),
        ]
    }

    fn empty_index(catalog: &[Component]) -> ReferenceIndex {
        catalog
            .iter()
            .map(|c| (c.name.clone(), Vec::new()))
            .collect::<BTreeMap<_, _>>()
    }

    #[test]
    fn entry_without_references() {
        let c = component("Map", ComponentKind::Pipeable, false);
        let rendered = render_entry(&c, &[]);
        assert_eq!(rendered, "* [Map](/api/map) - pipeable\n");
    }

    #[test]
    fn entry_with_references() {
        let c = component("Tap", ComponentKind::Pipeable, false);
        let refs = vec![
            Reference {
                section_id: "section-1".into(),
                segment_title: "Side Effects".into(),
                anchor: "section-1/005-tap.md#side-effects".into(),
            },
            Reference {
                section_id: "section-2".into(),
                segment_title: "Debugging".into(),
                anchor: "section-2/001-debug.md#debugging".into(),
            },
        ];

        let rendered = render_entry(&c, &refs);
        assert_eq!(
            rendered,
            "* [Tap](/api/tap) - pipeable\n\
             \x20 * [section-1 - Side Effects](section-1/005-tap.md#side-effects)\n\
             \x20 * [section-2 - Debugging](section-2/001-debug.md#debugging)"
        );
    }

    #[test]
    fn page_set_is_complete() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);

        let names: Vec<&str> = pages.iter().map(|p| p.filename).collect();
        assert_eq!(
            names,
            vec![
                "all.md",
                "classes.md",
                "functions.md",
                "consts.md",
                "types.md",
                "deprecated.md"
            ]
        );
    }

    #[test]
    fn all_page_lists_every_component_in_order() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);
        let all = &pages[0].content;

        let mut last_pos = 0;
        for c in &catalog {
            let needle = format!("* [{}](", c.name);
            let pos = all[last_pos..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{} missing or out of order", c.name));
            last_pos += pos + needle.len();
        }
    }

    #[test]
    fn kind_pages_partition_the_catalog() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);

        // Every component appears on exactly one of the kind pages
        // (classes, functions, consts, types).
        for c in &catalog {
            let needle = format!("* [{}](", c.name);
            let appearances = pages[1..5]
                .iter()
                .map(|p| p.content.matches(&needle).count())
                .sum::<usize>();
            assert_eq!(appearances, 1, "{} appears {appearances} times", c.name);
        }
    }

    #[test]
    fn classes_page_splits_subjects() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);
        let classes = &pages[1].content;

        let subjects_at = classes.find("## Subjects").unwrap();
        let others_at = classes.find("## Others").unwrap();
        let subject_at = classes.find("* [BehaviorSubject](").unwrap();
        let observable_at = classes.find("* [Observable](").unwrap();

        assert!(subjects_at < subject_at && subject_at < others_at);
        assert!(others_at < observable_at);
    }

    #[test]
    fn consts_page_splits_three_ways() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);
        let consts = &pages[3].content;

        let schedulers_at = consts.find("## Schedulers").unwrap();
        let observables_at = consts.find("## Observable Consts").unwrap();
        let others_at = consts.find("## Other Consts").unwrap();

        let scheduler_at = consts.find("* [asyncScheduler](").unwrap();
        let empty_at = consts.find("* [EMPTY](").unwrap();
        let config_at = consts.find("* [config](").unwrap();

        assert!(schedulers_at < scheduler_at && scheduler_at < observables_at);
        assert!(observables_at < empty_at && empty_at < others_at);
        assert!(others_at < config_at);
    }

    #[test]
    fn deprecated_page_collects_across_kinds() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);
        let deprecated = &pages[5].content;

        assert!(deprecated.contains("* [Tap]("));
        assert!(!deprecated.contains("* [Map]("));
    }

    #[test]
    fn nav_headers_link_sibling_pages() {
        let catalog = sample_catalog();
        let index = empty_index(&catalog);
        let pages = render_pages(&catalog, &index);

        assert!(pages[0].content.contains("[Deprecated](./deprecated.md)"));
        for page in &pages[1..] {
            assert!(
                page.content.contains("[Back to All Components](./all.md)"),
                "{} missing back link",
                page.filename
            );
        }
    }
}
