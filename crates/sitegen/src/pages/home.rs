// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Marketing landing page.

use crate::components::{Button, ButtonSize, ButtonVariant, Icon};
use crate::document::RenderContext;
use crate::layout::{Section, Spacing};
use maud::{Markup, html};

/// A short feature blurb under the calls to action.
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

pub const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        title: "Lightning Fast",
        body: "Built with Turbopack for instant updates",
    },
    Highlight {
        title: "Type Safe",
        body: "Full TypeScript support out of the box",
    },
    Highlight {
        title: "Dark Mode",
        body: "Beautiful themes that adapt to your preference",
    },
];

pub fn marketing_home(ctx: &RenderContext) -> Markup {
    let cta = Button::new().size(ButtonSize::Lg).class_name("text-base");
    let secondary = cta.variant(ButtonVariant::Outline);

    Section::new()
        .spacing(Spacing::None)
        .class_name("flex min-h-[calc(100vh-3.5rem)] items-center justify-center")
        .container_class_name("max-w-screen-xl")
        .render(html! {
            div class="flex flex-col items-center text-center space-y-8" {
                div class="inline-flex items-center rounded-full border border-border bg-muted px-4 py-1.5 text-sm text-muted-foreground" {
                    span class="font-medium" { "Built with Next.js 16" }
                }

                div class="space-y-4 max-w-4xl" {
                    h1 class="text-4xl font-bold tracking-tight text-foreground sm:text-5xl md:text-6xl lg:text-7xl" {
                        "Build Something"
                        span class="block text-primary" { "Amazing Today" }
                    }
                    p class="mx-auto max-w-2xl text-lg text-muted-foreground sm:text-xl" {
                        "Start your next project with Next.js 16, React 19, and shadcn/ui. "
                        "Fast, modern, and ready for production."
                    }
                }

                div class="flex flex-col sm:flex-row gap-4 w-full sm:w-auto" {
                    (cta.link(&ctx.href("#get-started"), html! {
                        "Get Started"
                        (Icon::ArrowRight.render("ml-2 h-4 w-4"))
                    }))
                    (secondary.link(&ctx.href("#learn-more"), html! { "Learn More" }))
                }

                div class="grid grid-cols-1 sm:grid-cols-3 gap-8 pt-12 max-w-3xl" {
                    @for highlight in &HIGHLIGHTS {
                        div class="space-y-2" {
                            h3 class="font-semibold text-foreground" { (highlight.title) }
                            p class="text-sm text-muted-foreground" { (highlight.body) }
                        }
                    }
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteMeta;

    fn render() -> String {
        let site = SiteMeta::default();
        marketing_home(&RenderContext::new(&site)).into_string()
    }

    #[test]
    fn test_hero_section_layout() {
        let html = render();
        assert!(html.starts_with(
            "<section class=\"py-0 bg-background flex min-h-[calc(100vh-3.5rem)] items-center justify-center\">"
        ));
        assert!(html.contains("<div class=\"container px-4 sm:px-6 lg:px-8 max-w-screen-xl\">"));
    }

    #[test]
    fn test_calls_to_action() {
        let html = render();
        assert!(html.contains("href=\"#get-started\""));
        assert!(html.contains("href=\"#learn-more\""));
        assert!(html.contains("border border-input bg-background"));
        assert_eq!(html.matches("text-base").count(), 2);
    }

    #[test]
    fn test_highlights_in_order() {
        let html = render();
        let positions: Vec<_> = HIGHLIGHTS
            .iter()
            .map(|h| html.find(h.title).expect("highlight rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
