// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Root HTML document wrapped around every page.

use crate::components::{header, theme};
use crate::config::SiteMeta;
use maud::{DOCTYPE, Markup, html};

/// Generator version baked into generated HTML as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Per-render site information handed to every page renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub site: &'a SiteMeta,
}

impl<'a> RenderContext<'a> {
    pub fn new(site: &'a SiteMeta) -> Self {
        Self { site }
    }

    /// Resolve a link target against the site's base URL.
    ///
    /// Root-relative paths (`/docs#intro`) get the base prefix; fragments
    /// (`#get-started`) and absolute URLs pass through unchanged.
    pub fn href(&self, target: &str) -> String {
        if !target.starts_with('/') || target.starts_with("//") {
            return target.to_string();
        }
        let base = self.site.base_url.trim_end_matches('/');
        if base.is_empty() {
            target.to_string()
        } else {
            format!("{}{}", base, target)
        }
    }
}

/// Wrap `body` in a complete HTML document titled `"{title} — {site title}"`.
pub fn page(ctx: &RenderContext, title: &str, body: Markup) -> String {
    let full_title = if title.is_empty() {
        ctx.site.title.clone()
    } else {
        format!("{} — {}", title, ctx.site.title)
    };
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="generator" content=(format!("sitegen v{}", VERSION));
                @if !ctx.site.description.is_empty() {
                    meta name="description" content=(ctx.site.description);
                }
                title { (full_title) }
                link rel="stylesheet" href=(ctx.href(&ctx.site.stylesheet));
                (theme::bootstrap_script())
            }
            body class="min-h-screen bg-background font-sans antialiased" {
                (header(ctx))
                (body)
                (theme::toggle_script())
            }
        }
    };
    markup.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_resolution() {
        let mut site = SiteMeta::default();
        let ctx = RenderContext::new(&site);
        assert_eq!(ctx.href("/docs#introduction"), "/docs#introduction");
        assert_eq!(ctx.href("#get-started"), "#get-started");

        site.base_url = "/acme/".to_string();
        let ctx = RenderContext::new(&site);
        assert_eq!(ctx.href("/docs#introduction"), "/acme/docs#introduction");
        assert_eq!(ctx.href("/"), "/acme/");
        assert_eq!(ctx.href("https://ui.shadcn.com"), "https://ui.shadcn.com");
        assert_eq!(ctx.href("//cdn.example.com/x.css"), "//cdn.example.com/x.css");
    }

    #[test]
    fn test_page_shell() {
        let site = SiteMeta::default();
        let html = page(&RenderContext::new(&site), "Documentation", html! { main { "content" } });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Documentation — Acme Inc.</title>"));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/style.css\">"));
        assert!(html.contains("<main>content</main>"));
        assert!(html.contains("sitegen v"));
        // header precedes the page body, toggle script follows it
        let header_at = html.find("<header").expect("header");
        let main_at = html.find("<main>").expect("main");
        let toggle_at = html.find("getElementById('mode-toggle')").expect("toggle");
        assert!(header_at < main_at && main_at < toggle_at);
    }

    #[test]
    fn test_empty_title_uses_site_title() {
        let site = SiteMeta::default();
        let html = page(&RenderContext::new(&site), "", html! {});
        assert!(html.contains("<title>Acme Inc.</title>"));
    }
}
