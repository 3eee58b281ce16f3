// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Docs layout: grouped sidebar on wide screens, a flat link grid on narrow
//! ones, and the page content beside or below it.

use crate::components::{Button, ButtonSize, ButtonVariant, separator};
use crate::document::RenderContext;
use crate::nav::NavigationTree;
use maud::{Markup, html};

const SIDEBAR_LINK: &str = "hover:bg-muted/70 hover:text-foreground focus-visible:ring-ring block rounded-md px-2 py-1 text-sm text-muted-foreground transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2";

/// Grouped listing of every navigation item, with descriptions when present.
pub fn sidebar(ctx: &RenderContext, tree: &NavigationTree) -> Markup {
    html! {
        aside class="hidden w-64 shrink-0 md:block" {
            div class="sticky top-20" {
                div class="h-[calc(100vh-6rem)] overflow-y-auto pr-4" {
                    div class="space-y-6" {
                        div class="space-y-1" {
                            p class="text-sm font-semibold text-foreground" { (ctx.site.docs_title) }
                            p class="text-sm text-muted-foreground" {
                                "Boilerplate guidance for building with this starter."
                            }
                        }
                        @for group in tree.groups() {
                            div class="space-y-2" {
                                p class="text-xs font-semibold uppercase tracking-wide text-muted-foreground" {
                                    (group.title)
                                }
                                ul class="space-y-1" {
                                    @for item in group.items {
                                        li {
                                            a href=(ctx.href(item.href)) class=(SIDEBAR_LINK) { (item.title) }
                                            @if let Some(description) = item.description {
                                                p class="mt-1 text-xs text-muted-foreground/80" { (description) }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Flattened link grid shown instead of the sidebar on narrow screens.
pub fn mobile_nav(ctx: &RenderContext, tree: &NavigationTree) -> Markup {
    let button = Button::new()
        .variant(ButtonVariant::Outline)
        .size(ButtonSize::Sm)
        .class_name("justify-start");
    html! {
        div class="md:hidden" {
            nav class="flex flex-col gap-3" {
                div {
                    p class="text-sm font-semibold text-foreground" { (ctx.site.docs_title) }
                    p class="text-sm text-muted-foreground" { "Boilerplate guidance and best practices." }
                }
                div class="grid grid-cols-2 gap-2 sm:grid-cols-3" {
                    @for item in tree.flatten() {
                        (button.link(&ctx.href(item.href), html! { (item.title) }))
                    }
                }
            }
            (separator(Some("my-8")))
        }
    }
}

pub fn docs_layout(ctx: &RenderContext, tree: &NavigationTree, content: Markup) -> Markup {
    html! {
        div class="bg-background" {
            div class="mx-auto flex w-full max-w-7xl flex-col gap-10 px-4 py-10 md:flex-row md:px-6 lg:px-8" {
                (sidebar(ctx, tree))
                main class="flex-1 min-w-0 pb-16" {
                    (mobile_nav(ctx, tree))
                    (content)
                }
            }
        }
    }
}
