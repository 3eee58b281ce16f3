// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Route table: which page renders at which URL and where it is written.

use crate::config::{HomePage, SiteConfig};
use crate::document::{self, RenderContext};
use crate::error::{Result, SiteError};
use crate::nav::DOCS_NAVIGATION;
use crate::pages;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    MarketingHome,
    StarterHome,
    Docs,
}

/// One page to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// URL path, e.g. `/docs`
    pub path: &'static str,
    /// Output path relative to the build directory, e.g. `docs/index.html`
    pub output_path: String,
    pub title: &'static str,
    pub kind: PageKind,
}

impl Route {
    fn new(path: &'static str, title: &'static str, kind: PageKind) -> Self {
        let output_path = if path == "/" {
            "index.html".to_string()
        } else {
            format!("{}/index.html", path.trim_start_matches('/'))
        };
        Self {
            path,
            output_path,
            title,
            kind,
        }
    }
}

/// The routes of the site. `home` selects the page served at `/`.
pub fn site_routes(config: &SiteConfig) -> Vec<Route> {
    let home = match config.home {
        HomePage::Marketing => PageKind::MarketingHome,
        HomePage::Starter => PageKind::StarterHome,
    };
    vec![
        Route::new("/", "Home", home),
        Route::new("/docs", "Documentation", PageKind::Docs),
    ]
}

/// Look up the route serving `path`. Fragments, queries and a trailing
/// slash are ignored, so `/docs/#tooling` finds `/docs`.
pub fn find<'r>(routes: &'r [Route], path: &str) -> Option<&'r Route> {
    let path = path.split(['#', '?']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let path = if trimmed.is_empty() { "/" } else { trimmed };
    routes.iter().find(|route| route.path == path)
}

/// Render a route to a complete HTML document.
pub fn render(route: &Route, config: &SiteConfig) -> String {
    let ctx = RenderContext::new(&config.site);
    let body = match route.kind {
        PageKind::MarketingHome => pages::marketing_home(&ctx),
        PageKind::StarterHome => pages::starter_home(&ctx),
        PageKind::Docs => pages::docs_layout(&ctx, &DOCS_NAVIGATION, pages::docs_page(&ctx)),
    };
    document::page(&ctx, route.title, body)
}

/// Render whichever page is routed at `path`.
pub fn render_path(config: &SiteConfig, path: &str) -> Result<String> {
    let routes = site_routes(config);
    let route = find(&routes, path).ok_or_else(|| SiteError::UnknownRoute(path.to_string()))?;
    Ok(render(route, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let routes = site_routes(&SiteConfig::default());
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].output_path, "index.html");
        assert_eq!(routes[0].kind, PageKind::MarketingHome);
        assert_eq!(routes[1].output_path, "docs/index.html");
        assert_eq!(routes[1].title, "Documentation");
    }

    #[test]
    fn test_home_selection() {
        let config = SiteConfig {
            home: HomePage::Starter,
            ..SiteConfig::default()
        };
        let routes = site_routes(&config);
        assert_eq!(routes[0].kind, PageKind::StarterHome);
        assert_eq!(routes[0].path, "/");
    }

    #[test]
    fn test_find_normalizes() {
        let routes = site_routes(&SiteConfig::default());
        for path in ["/docs", "/docs/", "/docs#tooling", "/docs/?q=1"] {
            let found = find(&routes, path);
            assert_eq!(found.map(|r| r.kind), Some(PageKind::Docs), "{path}");
        }
        assert_eq!(find(&routes, "").map(|r| r.path), Some("/"));
        assert_eq!(find(&routes, "/#get-started").map(|r| r.path), Some("/"));
        assert!(find(&routes, "/pricing").is_none());
    }

    #[test]
    fn test_render_docs_wraps_layout() {
        let html = render_path(&SiteConfig::default(), "/docs").expect("render docs");
        assert!(html.contains("<title>Documentation — Acme Inc.</title>"));
        assert!(html.contains("<aside class=\"hidden w-64 shrink-0 md:block\">"));
        assert!(html.contains("id=\"introduction\""));
    }

    #[test]
    fn test_render_home_variants() {
        let marketing = render_path(&SiteConfig::default(), "/").expect("marketing");
        assert!(marketing.contains("Amazing Today"));

        let config = SiteConfig {
            home: HomePage::Starter,
            ..SiteConfig::default()
        };
        let starter = render_path(&config, "/").expect("starter");
        assert!(!starter.contains("Amazing Today"));
        assert!(starter.contains("/next.svg"));
    }

    #[test]
    fn test_unknown_route() {
        let err = render_path(&SiteConfig::default(), "/blog").expect_err("no blog");
        assert!(matches!(err, SiteError::UnknownRoute(p) if p == "/blog"));
    }
}
