// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Navigation link check.
//!
//! Internal hrefs are `path#id`. A link is broken when no route serves the
//! path or the rendered page carries no element with that `id`.

use crate::config::SiteConfig;
use crate::nav::NavigationTree;
use crate::routes::{self, Route};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::LazyLock;

static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sid="([^"]+)""#).expect("valid id pattern"));

/// Every `id="..."` attribute value in `html`.
pub fn collect_ids(html: &str) -> BTreeSet<String> {
    ID_ATTR
        .captures_iter(html)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokenReason {
    UnknownPage,
    MissingId(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    pub group: &'static str,
    pub title: &'static str,
    pub href: &'static str,
    pub reason: BrokenReason,
}

impl fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            BrokenReason::UnknownPage => {
                write!(f, "{} / {} -> {} (no such page)", self.group, self.title, self.href)
            }
            BrokenReason::MissingId(id) => write!(
                f,
                "{} / {} -> {} (no element with id '{}')",
                self.group, self.title, self.href, id
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnchorReport {
    /// Internal links looked up
    pub checked: usize,
    pub skipped_external: usize,
    pub broken: Vec<BrokenLink>,
    /// Titles of groups without items
    pub empty_groups: Vec<&'static str>,
}

impl AnchorReport {
    pub fn is_ok(&self) -> bool {
        self.broken.is_empty()
    }

    /// One line per broken link, for error messages.
    pub fn broken_lines(&self) -> Vec<String> {
        self.broken.iter().map(ToString::to_string).collect()
    }
}

/// Check every item of `tree` against the pages of `routes`.
///
/// Each target page is rendered at most once. A link without a fragment only
/// needs its page to exist.
pub fn check(tree: &NavigationTree, routes: &[Route], config: &SiteConfig) -> AnchorReport {
    let mut report = AnchorReport {
        empty_groups: tree.empty_groups().map(|group| group.title).collect(),
        ..AnchorReport::default()
    };
    let mut page_ids: BTreeMap<&'static str, BTreeSet<String>> = BTreeMap::new();

    for group in tree.groups() {
        for item in group.items {
            if item.is_external() {
                report.skipped_external += 1;
                continue;
            }
            report.checked += 1;

            let broken = |reason| BrokenLink {
                group: group.title,
                title: item.title,
                href: item.href,
                reason,
            };

            let Some(route) = routes::find(routes, item.href) else {
                report.broken.push(broken(BrokenReason::UnknownPage));
                continue;
            };
            let Some((_, fragment)) = item.href.split_once('#') else {
                continue;
            };
            if fragment.is_empty() {
                continue;
            }

            let ids = page_ids
                .entry(route.path)
                .or_insert_with(|| collect_ids(&routes::render(route, config)));
            if !ids.contains(fragment) {
                report
                    .broken
                    .push(broken(BrokenReason::MissingId(fragment.to_string())));
            }
        }
    }

    diagnostics::debug!(
        "anchor check: {checked} internal, {external} external, {broken} broken",
        checked: report.checked,
        external: report.skipped_external,
        broken: report.broken.len(),
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{DOCS_NAVIGATION, NavGroup, NavItem};

    static MIXED: [NavGroup; 3] = [
        NavGroup {
            title: "Guides",
            items: &[
                NavItem {
                    title: "Intro",
                    href: "/docs#introduction",
                    description: None,
                },
                NavItem {
                    title: "Gone",
                    href: "/docs#changelog",
                    description: None,
                },
                NavItem {
                    title: "Blog",
                    href: "/blog#latest",
                    description: None,
                },
            ],
        },
        NavGroup {
            title: "Links",
            items: &[
                NavItem {
                    title: "Next.js",
                    href: "https://nextjs.org/docs",
                    description: None,
                },
                NavItem {
                    title: "Docs home",
                    href: "/docs",
                    description: None,
                },
            ],
        },
        NavGroup {
            title: "Soon",
            items: &[],
        },
    ];

    #[test]
    fn test_collect_ids() {
        let ids = collect_ids(r#"<section id="intro"></section><div data-id="x" id="tail">"#);
        assert_eq!(ids.into_iter().collect::<Vec<_>>(), vec!["intro", "tail"]);
    }

    #[test]
    fn test_docs_navigation_resolves() {
        let config = SiteConfig::default();
        let routes = routes::site_routes(&config);
        let report = check(&DOCS_NAVIGATION, &routes, &config);
        assert!(report.is_ok(), "{:?}", report.broken_lines());
        assert_eq!(report.checked, DOCS_NAVIGATION.len());
        assert_eq!(report.skipped_external, 0);
        assert!(report.empty_groups.is_empty());
    }

    #[test]
    fn test_reports_broken_links() {
        let config = SiteConfig::default();
        let routes = routes::site_routes(&config);
        let report = check(&NavigationTree::new(&MIXED), &routes, &config);

        assert_eq!(report.checked, 4);
        assert_eq!(report.skipped_external, 1);
        assert_eq!(report.empty_groups, vec!["Soon"]);
        assert_eq!(report.broken.len(), 2);
        assert_eq!(report.broken[0].title, "Gone");
        assert_eq!(
            report.broken[0].reason,
            BrokenReason::MissingId("changelog".to_string())
        );
        assert_eq!(report.broken[1].reason, BrokenReason::UnknownPage);
        assert_eq!(
            report.broken_lines()[0],
            "Guides / Gone -> /docs#changelog (no element with id 'changelog')"
        );
    }
}
