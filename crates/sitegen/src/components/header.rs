// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Sticky site header: logo and brand on the left, call to action and theme
//! toggle on the right.

use super::button::Button;
use super::icons::logo_mark;
use super::theme::mode_toggle;
use crate::document::RenderContext;
use crate::layout::CONTAINER_CLASSES;
use crate::cn;
use maud::{Markup, html};

pub fn header(ctx: &RenderContext) -> Markup {
    html! {
        header class="sticky top-0 z-50 w-full border-b border-border/40 bg-background/95 backdrop-blur supports-[backdrop-filter]:bg-background/60" {
            div class=(cn!(CONTAINER_CLASSES, "flex h-14 items-center justify-between")) {
                div class="flex items-center gap-2" {
                    a href=(ctx.href("/")) class="flex items-center space-x-2" {
                        (logo_mark())
                        span class="font-bold" { (ctx.site.title) }
                    }
                }
                div class="flex items-center gap-4" {
                    (Button::new().link("#get-started", html! { "Get Started" }))
                    (mode_toggle())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteMeta;

    #[test]
    fn test_header_brand_and_actions() {
        let site = SiteMeta::default();
        let html = header(&RenderContext::new(&site)).into_string();
        assert!(html.starts_with("<header class=\"sticky top-0 z-50"));
        assert!(html.contains("<span class=\"font-bold\">Acme Inc.</span>"));
        assert!(html.contains("href=\"#get-started\""));
        assert!(html.contains("id=\"mode-toggle\""));
        assert!(html.contains("container max-w-screen-2xl px-4 sm:px-6 lg:px-8 flex h-14"));
    }

    #[test]
    fn test_home_link_respects_base_url() {
        let site = SiteMeta {
            base_url: "/starter/".to_string(),
            ..SiteMeta::default()
        };
        let html = header(&RenderContext::new(&site)).into_string();
        assert!(html.contains("href=\"/starter/\""));
    }
}
