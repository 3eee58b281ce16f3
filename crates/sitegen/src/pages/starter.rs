// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The framework's stock welcome page, selectable with `home: starter`.

use crate::cn;
use crate::document::RenderContext;
use maud::{Markup, html};

const TEMPLATES_URL: &str = "https://vercel.com/templates?framework=next.js&utm_source=create-next-app&utm_medium=appdir-template-tw&utm_campaign=create-next-app";
const LEARN_URL: &str = "https://nextjs.org/learn?utm_source=create-next-app&utm_medium=appdir-template-tw&utm_campaign=create-next-app";
const DEPLOY_URL: &str = "https://vercel.com/new?utm_source=create-next-app&utm_medium=appdir-template-tw&utm_campaign=create-next-app";
const DOCS_URL: &str = "https://nextjs.org/docs?utm_source=create-next-app&utm_medium=appdir-template-tw&utm_campaign=create-next-app";

const INLINE_LINK: &str = "font-medium text-foreground underline underline-offset-4 hover:text-primary";
const PILL: &str = "flex h-12 w-full items-center justify-center rounded-full px-5 transition-colors md:w-[158px]";

fn external(href: &str, class: &str, children: Markup) -> Markup {
    html! {
        a href=(href) class=(class) target="_blank" rel="noopener noreferrer" { (children) }
    }
}

pub fn starter_home(ctx: &RenderContext) -> Markup {
    html! {
        div class="flex min-h-screen items-center justify-center bg-background" {
            main class="flex min-h-screen w-full max-w-3xl flex-col items-center justify-between py-16 px-4 sm:px-6 lg:px-8 sm:items-start" {
                img class="dark:invert" src=(ctx.href("/next.svg")) alt="Next.js logo" width="100" height="20";
                div class="flex flex-col items-center gap-6 text-center sm:items-start sm:text-left" {
                    h1 class="max-w-xs text-3xl font-semibold leading-10 tracking-tight text-foreground" {
                        "To get started, edit the page.tsx file."
                    }
                    p class="max-w-md text-lg leading-8 text-muted-foreground" {
                        "Looking for a starting point or more instructions? Head over to "
                        (external(TEMPLATES_URL, INLINE_LINK, html! { "Templates" }))
                        " or the "
                        (external(LEARN_URL, INLINE_LINK, html! { "Learning" }))
                        " center."
                    }
                }
                div class="flex flex-col gap-4 text-base font-medium sm:flex-row" {
                    (external(DEPLOY_URL, &cn!(PILL, "gap-2 bg-primary text-primary-foreground hover:bg-primary/90"), html! {
                        img class="dark:invert" src=(ctx.href("/vercel.svg")) alt="Vercel logomark" width="16" height="16";
                        "Deploy Now"
                    }))
                    (external(DOCS_URL, &cn!(PILL, "border border-input hover:bg-accent hover:text-accent-foreground"), html! {
                        "Documentation"
                    }))
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
    fn test_starter_links_open_new_tab() {
        let site = SiteMeta::default();
        let html = starter_home(&RenderContext::new(&site)).into_string();
        assert_eq!(html.matches("target=\"_blank\"").count(), 4);
        // query strings are attribute-escaped
        assert!(html.contains("framework=next.js&amp;utm_source=create-next-app"));
        assert!(html.contains("src=\"/next.svg\""));
    }

    #[test]
    fn test_images_follow_base_url() {
        let site = SiteMeta {
            base_url: "/acme".to_string(),
            ..SiteMeta::default()
        };
        let html = starter_home(&RenderContext::new(&site)).into_string();
        assert!(html.contains("src=\"/acme/next.svg\""));
        assert!(html.contains("src=\"/acme/vercel.svg\""));
    }
}
