// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Docs navigation model.
//!
//! The tree is compile-time data: [`DOCS_NAVIGATION`] is a `static` built
//! from `'static` slices and is only ever handed out by shared reference.
//! Every `/docs#id` href here must match a section id rendered by
//! `pages::docs`; `anchors::check` verifies that.

use serde::Serialize;

/// One sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl NavItem {
    /// True for absolute `http(s)` URLs, which are never checked against page ids.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

/// A titled group of links. Item order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

/// Ordered sequence of groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    groups: &'static [NavGroup],
}

impl NavigationTree {
    pub const fn new(groups: &'static [NavGroup]) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &'static [NavGroup] {
        self.groups
    }

    /// Every item, group order then item order. Items sharing an href are all kept.
    pub fn flatten(&self) -> Vec<&'static NavItem> {
        let groups: &'static [NavGroup] = self.groups;
        groups.iter().flat_map(|group| group.items).collect()
    }

    /// Total number of items across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Groups with no items; they render as a bare heading.
    pub fn empty_groups(&self) -> impl Iterator<Item = &'static NavGroup> + use<> {
        let groups: &'static [NavGroup] = self.groups;
        groups.iter().filter(|group| group.items.is_empty())
    }
}

/// Sidebar navigation of the docs page.
pub static DOCS_NAVIGATION: NavigationTree = NavigationTree {
    groups: &[
        NavGroup {
            title: "Essentials",
            items: &[
                NavItem {
                    title: "Introduction",
                    href: "/docs#introduction",
                    description: None,
                },
                NavItem {
                    title: "Philosophy",
                    href: "/docs#philosophy",
                    description: None,
                },
                NavItem {
                    title: "Tech Stack",
                    href: "/docs#tech-stack",
                    description: None,
                },
            ],
        },
        NavGroup {
            title: "Guides",
            items: &[
                NavItem {
                    title: "Getting Started",
                    href: "/docs#getting-started",
                    description: None,
                },
                NavItem {
                    title: "Development Workflow",
                    href: "/docs#workflow",
                    description: None,
                },
                NavItem {
                    title: "Environment & Config",
                    href: "/docs#configuration",
                    description: None,
                },
            ],
        },
        NavGroup {
            title: "Reference",
            items: &[
                NavItem {
                    title: "Project Structure",
                    href: "/docs#structure",
                    description: None,
                },
                NavItem {
                    title: "UI & Styling",
                    href: "/docs#styling",
                    description: None,
                },
                NavItem {
                    title: "Scripts & Tooling",
                    href: "/docs#tooling",
                    description: None,
                },
            ],
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    static TWO_GROUPS: NavigationTree = NavigationTree {
        groups: &[
            NavGroup {
                title: "A",
                items: &[
                    NavItem {
                        title: "a1",
                        href: "/a#1",
                        description: None,
                    },
                    NavItem {
                        title: "a2",
                        href: "/a#2",
                        description: None,
                    },
                    NavItem {
                        title: "a3",
                        href: "/a#3",
                        description: None,
                    },
                ],
            },
            NavGroup {
                title: "B",
                items: &[
                    NavItem {
                        title: "b1",
                        href: "/b#1",
                        description: None,
                    },
                    NavItem {
                        title: "b2",
                        href: "/a#1",
                        description: None,
                    },
                    NavItem {
                        title: "b3",
                        href: "https://example.com",
                        description: Some("External"),
                    },
                ],
            },
        ],
    };

    #[test]
    fn test_flatten_preserves_count() {
        for tree in [&DOCS_NAVIGATION, &TWO_GROUPS] {
            let expected: usize = tree.groups().iter().map(|g| g.items.len()).sum();
            assert_eq!(tree.flatten().len(), expected);
            assert_eq!(tree.len(), expected);
        }
    }

    #[test]
    fn test_flatten_order_and_duplicates() {
        let titles: Vec<_> = TWO_GROUPS.flatten().iter().map(|i| i.title).collect();
        assert_eq!(titles, ["a1", "a2", "a3", "b1", "b2", "b3"]);
        let shared = TWO_GROUPS
            .flatten()
            .iter()
            .filter(|i| i.href == "/a#1")
            .count();
        assert_eq!(shared, 2);
    }

    #[test]
    fn test_flatten_is_repeatable() {
        assert_eq!(DOCS_NAVIGATION.flatten(), DOCS_NAVIGATION.flatten());
    }

    #[test]
    fn test_docs_navigation_shape() {
        let groups: Vec<_> = DOCS_NAVIGATION.groups().iter().map(|g| g.title).collect();
        assert_eq!(groups, ["Essentials", "Guides", "Reference"]);
        assert_eq!(DOCS_NAVIGATION.len(), 9);
        assert_eq!(DOCS_NAVIGATION.empty_groups().count(), 0);
        assert!(DOCS_NAVIGATION.flatten().iter().all(|i| i.href.starts_with("/docs#")));
    }

    #[test]
    fn test_external_and_description() {
        let last = TWO_GROUPS.flatten()[5];
        assert!(last.is_external());
        assert_eq!(last.description, Some("External"));
        assert!(!TWO_GROUPS.flatten()[0].is_external());
    }

    #[test]
    fn test_serializes_as_group_list() {
        let json = serde_json::to_value(DOCS_NAVIGATION).expect("serialize");
        assert_eq!(json[0]["title"], "Essentials");
        assert_eq!(json[0]["items"][0]["href"], "/docs#introduction");
        assert!(json[0]["items"][0].get("description").is_none());
    }
}
