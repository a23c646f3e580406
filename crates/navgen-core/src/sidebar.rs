//! Sidebar assembly.
//!
//! Turns grouped type codes into labeled [`SidebarNode`]s and wires the whole
//! pipeline together: discovery, decomposition, aggregation, labeling.
//!
//! # Example
//!
//! ```
//! use navgen_core::{build_sidebar, SidebarOptions};
//!
//! let nav = build_sidebar(
//!     ["foo.intf.abap", "bar.intf.abap", "baz.clas.abap"],
//!     &SidebarOptions::default(),
//! );
//!
//! assert_eq!(nav.len(), 2);
//! assert_eq!(nav[0].label, "Interfaces");
//! assert_eq!(nav[0].items[1].link, "/abap/intf/bar");
//! assert_eq!(nav[1].label, "clas");
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::{Group, aggregate};
use crate::decompose::decompose;
use crate::discovery::{Discovery, FileLister, ListError};
use crate::labels::LabelDictionary;

/// Clickable sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    /// Display label (the entity name).
    pub label: String,
    /// Link target path.
    pub link: String,
}

/// One labeled sidebar group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarNode {
    /// Group label resolved from the type code.
    pub label: String,
    /// Items in display order.
    pub items: Vec<SidebarItem>,
}

/// Ordering applied to groups and items.
///
/// Deserializes from `"discovery"` or `"name"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Keep the order in which files were discovered.
    #[default]
    Discovery,
    /// Sort groups by type code and items by name.
    Name,
}

impl SortOrder {
    /// Reorder groups in place. Sorts are stable, so duplicates stay adjacent
    /// in arrival order.
    fn apply(self, groups: &mut [Group]) {
        match self {
            Self::Discovery => {}
            Self::Name => {
                groups.sort_by(|a, b| a.type_code.cmp(&b.type_code));
                for group in groups {
                    group.names.sort();
                }
            }
        }
    }
}

/// Build sidebar nodes from groups.
///
/// Each group label comes from `labels`, falling back to the raw type code.
/// Links are `{link_prefix}/{type}/{name}`, concatenated without escaping.
#[must_use]
pub fn assemble(
    groups: Vec<Group>,
    labels: &LabelDictionary,
    link_prefix: &str,
) -> Vec<SidebarNode> {
    groups
        .into_iter()
        .map(|group| {
            let items = group
                .names
                .into_iter()
                .map(|name| SidebarItem {
                    link: format!("{link_prefix}/{}/{name}", group.type_code),
                    label: name,
                })
                .collect();
            SidebarNode {
                label: labels.resolve(&group.type_code).to_owned(),
                items,
            }
        })
        .collect()
}

/// Options for building a sidebar.
#[derive(Clone, Debug)]
pub struct SidebarOptions {
    /// Structural suffix without the leading dot.
    pub suffix: String,
    /// Type code labels.
    pub labels: LabelDictionary,
    /// Prefix prepended to every link.
    pub link_prefix: String,
    /// Group and item ordering.
    pub order: SortOrder,
    /// Restrict discovery to these type codes.
    pub types: Option<Vec<String>>,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            suffix: "abap".to_owned(),
            labels: LabelDictionary::builtin(),
            link_prefix: "/abap".to_owned(),
            order: SortOrder::Discovery,
            types: None,
        }
    }
}

/// Build a sidebar from already discovered paths.
///
/// Empty input yields an empty sidebar.
#[must_use]
pub fn build_sidebar<I, S>(paths: I, options: &SidebarOptions) -> Vec<SidebarNode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let entries = paths
        .into_iter()
        .map(|path| decompose(path.as_ref(), &options.suffix));
    let mut groups = aggregate(entries);
    options.order.apply(&mut groups);
    assemble(groups, &options.labels, &options.link_prefix)
}

/// Builds a sidebar from files provided by a [`FileLister`].
pub struct SidebarBuilder<L> {
    lister: L,
    options: SidebarOptions,
}

impl<L: FileLister> SidebarBuilder<L> {
    /// Create a builder.
    #[must_use]
    pub fn new(lister: L, options: SidebarOptions) -> Self {
        Self { lister, options }
    }

    /// Options in effect.
    #[must_use]
    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    /// Discover files and build the sidebar.
    ///
    /// # Errors
    ///
    /// Returns [`ListError`] if discovery fails.
    pub fn build(&self) -> Result<Vec<SidebarNode>, ListError> {
        let paths = Discovery::new(self.options.suffix.as_str())
            .with_types(self.options.types.clone())
            .run(&self.lister)?;

        let nav = build_sidebar(&paths, &self.options);
        tracing::debug!(files = paths.len(), groups = nav.len(), "Sidebar built");
        Ok(nav)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::discovery::ListErrorKind;
    use crate::mock::MockLister;

    fn item(label: &str, link: &str) -> SidebarItem {
        SidebarItem {
            label: label.to_owned(),
            link: link.to_owned(),
        }
    }

    fn options(labels: LabelDictionary, link_prefix: &str) -> SidebarOptions {
        SidebarOptions {
            labels,
            link_prefix: link_prefix.to_owned(),
            ..SidebarOptions::default()
        }
    }

    #[test]
    fn test_build_sidebar_groups_and_labels() {
        let labels = LabelDictionary::new().with_label("intf", "Interfaces");

        let nav = build_sidebar(
            ["foo.intf.abap", "bar.intf.abap", "baz.clas.abap"],
            &options(labels, "/docs"),
        );

        assert_eq!(
            nav,
            vec![
                SidebarNode {
                    label: "Interfaces".to_owned(),
                    items: vec![
                        item("foo", "/docs/intf/foo"),
                        item("bar", "/docs/intf/bar"),
                    ],
                },
                SidebarNode {
                    label: "clas".to_owned(),
                    items: vec![item("baz", "/docs/clas/baz")],
                },
            ]
        );
    }

    #[test]
    fn test_build_sidebar_unknown_type() {
        let nav = build_sidebar(["weird"], &options(LabelDictionary::builtin(), "/docs"));

        assert_eq!(
            nav,
            vec![SidebarNode {
                label: "unknown".to_owned(),
                items: vec![item("weird", "/docs/unknown/weird")],
            }]
        );
    }

    #[test]
    fn test_build_sidebar_keeps_duplicates() {
        let nav = build_sidebar(
            ["a.intf.abap", "a.intf.abap"],
            &options(LabelDictionary::new(), "/docs"),
        );

        assert_eq!(nav.len(), 1);
        assert_eq!(
            nav[0].items,
            vec![item("a", "/docs/intf/a"), item("a", "/docs/intf/a")]
        );
    }

    #[test]
    fn test_build_sidebar_empty_input() {
        let paths: Vec<String> = Vec::new();

        assert!(build_sidebar(&paths, &SidebarOptions::default()).is_empty());
    }

    #[test]
    fn test_build_sidebar_is_deterministic() {
        let paths = ["z.prog.abap", "a.intf.abap", "m.clas.abap", "b.intf.abap"];
        let opts = SidebarOptions::default();

        assert_eq!(build_sidebar(paths, &opts), build_sidebar(paths, &opts));
    }

    #[test]
    fn test_build_sidebar_default_link_prefix() {
        let nav = build_sidebar(["zif_a.intf.abap"], &SidebarOptions::default());

        assert_eq!(nav[0].items[0].link, "/abap/intf/zif_a");
    }

    #[test]
    fn test_build_sidebar_empty_link_prefix() {
        let nav = build_sidebar(["x.clas.abap"], &options(LabelDictionary::new(), ""));

        assert_eq!(nav[0].items[0].link, "/clas/x");
    }

    #[test]
    fn test_link_is_not_escaped() {
        let nav = build_sidebar(
            ["dir/with space.clas.abap", "/ns/zcl.clas.abap"],
            &options(LabelDictionary::new(), "/docs"),
        );

        assert_eq!(nav[0].items[0].link, "/docs/clas/with space");
        assert_eq!(nav[0].items[1].link, "/docs/clas/zcl");
    }

    #[test]
    fn test_name_order_sorts_groups_and_items() {
        let opts = SidebarOptions {
            order: SortOrder::Name,
            ..options(LabelDictionary::builtin(), "/docs")
        };

        let nav = build_sidebar(
            ["zeta.prog.abap", "beta.intf.abap", "alpha.intf.abap", "c.clas.abap"],
            &opts,
        );

        let labels: Vec<_> = nav.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["clas", "Interfaces", "prog"]);
        assert_eq!(
            nav[1].items,
            vec![
                item("alpha", "/docs/intf/alpha"),
                item("beta", "/docs/intf/beta"),
            ]
        );
    }

    #[test]
    fn test_assemble_preserves_group_order() {
        let groups = vec![
            Group {
                type_code: "prog".to_owned(),
                names: vec!["p".to_owned()],
            },
            Group {
                type_code: "intf".to_owned(),
                names: vec!["i".to_owned()],
            },
        ];

        let nav = assemble(groups, &LabelDictionary::builtin(), "/x");

        assert_eq!(nav[0].label, "prog");
        assert_eq!(nav[1].label, "Interfaces");
        assert_eq!(nav[1].items[0].link, "/x/intf/i");
    }

    #[test]
    fn test_sort_order_deserializes_lowercase() {
        let order: SortOrder = serde_json::from_str("\"name\"").unwrap();
        assert_eq!(order, SortOrder::Name);

        assert!(serde_json::from_str::<SortOrder>("\"Name\"").is_err());
    }

    #[test]
    fn test_sidebar_node_serialization() {
        let node = SidebarNode {
            label: "Interfaces".to_owned(),
            items: vec![item("foo", "/abap/intf/foo")],
        };

        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "label": "Interfaces",
                "items": [{ "label": "foo", "link": "/abap/intf/foo" }]
            })
        );
    }

    #[test]
    fn test_builder_uses_lister() {
        let lister = MockLister::new().with_files(["src/foo.intf.abap", "src/baz.clas.abap"]);
        let builder = SidebarBuilder::new(&lister, SidebarOptions::default());

        let nav = builder.build().unwrap();

        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].label, "Interfaces");
        assert_eq!(nav[1].items[0].link, "/abap/clas/baz");
        assert_eq!(lister.requested_patterns(), vec!["**/*.abap"]);
    }

    #[test]
    fn test_builder_applies_type_filter() {
        let lister = MockLister::new().with_files(["foo.intf.abap", "baz.clas.abap"]);
        let opts = SidebarOptions {
            types: Some(vec!["clas".to_owned()]),
            ..SidebarOptions::default()
        };

        let nav = SidebarBuilder::new(lister, opts).build().unwrap();

        assert_eq!(nav.len(), 1);
        assert_eq!(nav[0].label, "clas");
    }

    #[test]
    fn test_builder_propagates_list_error() {
        let lister = MockLister::new().with_error(ListErrorKind::NotFound);

        let err = SidebarBuilder::new(lister, SidebarOptions::default())
            .build()
            .unwrap_err();

        assert_eq!(err.kind, ListErrorKind::NotFound);
    }

    #[test]
    fn test_builder_with_custom_suffix() {
        let lister = MockLister::new().with_files(["guide.page.md"]);
        let opts = SidebarOptions {
            suffix: "md".to_owned(),
            link_prefix: "/docs".to_owned(),
            ..SidebarOptions::default()
        };

        let builder = SidebarBuilder::new(&lister, opts);
        let nav = builder.build().unwrap();

        assert_eq!(builder.options().suffix, "md");
        assert_eq!(nav[0].items[0].link, "/docs/page/guide");
        assert_eq!(lister.requested_patterns(), vec!["**/*.md"]);
    }
}
