// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! The single-page documentation body. Each `<section id=..>` here is a
//! target of the docs navigation.

use crate::components::{
    AlertVariant, BadgeVariant, Button, ButtonSize, ButtonVariant, Icon, alert, badge, card,
    card_content, card_description, card_header, card_title,
};
use crate::document::RenderContext;
use maud::{Markup, html};

/// Section ids in page order.
pub const SECTION_IDS: [&str; 9] = [
    "introduction",
    "philosophy",
    "tech-stack",
    "getting-started",
    "workflow",
    "configuration",
    "structure",
    "styling",
    "tooling",
];

const QUICK_LINKS: [(Icon, &str, &str); 4] = [
    (Icon::Rocket, "Quick Start", "Get up and running in minutes"),
    (Icon::Code, "Tech Stack", "Modern tools and frameworks"),
    (Icon::Palette, "UI Components", "Beautiful shadcn/ui library"),
    (Icon::Zap, "Best Practices", "Follow proven patterns"),
];

const INLINE_LINK: &str = "font-medium text-foreground underline underline-offset-4 hover:text-primary";

fn section(id: &str, heading: &str, body: Markup) -> Markup {
    html! {
        section id=(id) class="mb-12 scroll-mt-20" {
            h2 { (heading) }
            (body)
        }
    }
}

/// `<li><strong>term</strong> - detail</li>` rows.
fn terms(rows: &[(&str, &str)]) -> Markup {
    html! {
        ul {
            @for (term, detail) in rows {
                li { strong { (term) } " - " (detail) }
            }
        }
    }
}

/// `<li><code>code</code> - detail</li>` rows.
fn codes(rows: &[(&str, &str)]) -> Markup {
    html! {
        ul {
            @for (code, detail) in rows {
                li { code { (code) } " - " (detail) }
            }
        }
    }
}

fn code_block(text: &str) -> Markup {
    html! { pre { code { (text) } } }
}

fn hero() -> Markup {
    html! {
        div class="not-prose mb-12" {
            (badge(BadgeVariant::Outline, Some("mb-4"), "Documentation"))
            h1 class="mb-4 text-4xl font-bold tracking-tight text-foreground" {
                "Next.js 16 Starter Documentation"
            }
            p class="text-xl text-muted-foreground" {
                "A comprehensive guide to building modern web applications with Next.js 16, \
                 React 19, shadcn/ui, and Tailwind CSS v4."
            }
        }
    }
}

fn quick_links() -> Markup {
    html! {
        div class="not-prose mb-12 grid gap-4 sm:grid-cols-2 lg:grid-cols-4" {
            @for (icon, title, description) in QUICK_LINKS {
                (card(None, html! {
                    (card_header(html! {
                        (icon.render("mb-2 h-6 w-6 text-primary"))
                        (card_title(Some("text-base"), title))
                    }))
                    (card_content(card_description(description)))
                }))
            }
        }
    }
}

fn introduction() -> Markup {
    section(
        "introduction",
        "Introduction",
        html! {
            p {
                "This starter template is built with the latest web technologies to help you \
                 create fast, modern, and production-ready applications. It combines the power \
                 of Next.js 16 with React 19, shadcn/ui components, and Tailwind CSS v4."
            }
            (alert(AlertVariant::Default, Some("not-prose my-6"), "Next.js 16 Beta", html! {
                "This project uses Next.js 16 beta with Turbopack as the default bundler. \
                 Be aware that some APIs may change before the stable release."
            }))
        },
    )
}

fn philosophy() -> Markup {
    section(
        "philosophy",
        "Philosophy",
        html! {
            p { "This starter follows key principles to ensure code quality and maintainability:" }
            (terms(&[
                ("Type Safety First", "Full TypeScript support with strict mode"),
                ("Theme-Based Design", "All colors use CSS variables for light/dark mode"),
                ("Mobile-First Responsive", "Designed for all screen sizes"),
                ("Server Components by Default", "Leverage React 19 Server Components"),
                ("Accessibility", "WCAG compliant components from shadcn/ui"),
            ]))
        },
    )
}

fn tech_stack() -> Markup {
    section(
        "tech-stack",
        "Tech Stack",
        html! {
            h3 { "Core Framework" }
            (terms(&[
                ("Next.js 16.0.0-beta.0", "App Router with Turbopack"),
                ("React 19.1.0", "New JSX transform and Server Components"),
                ("TypeScript 5", "Strict mode enabled"),
            ]))
            h3 { "Styling" }
            (terms(&[
                ("Tailwind CSS v4", "Latest version with PostCSS"),
                ("shadcn/ui", "Beautifully designed components (New York style)"),
                ("CVA", "Class Variance Authority for component variants"),
                ("Lucide React", "Modern icon library"),
            ]))
            h3 { "Build Tools" }
            (terms(&[
                ("Turbopack", "Next.js built-in bundler"),
                ("Bun", "Fast package manager and runtime"),
                ("ESLint", "Code quality and consistency"),
            ]))
        },
    )
}

fn getting_started(ctx: &RenderContext) -> Markup {
    let local = "http://localhost:3000";
    section(
        "getting-started",
        "Getting Started",
        html! {
            h3 { "Prerequisites" }
            p { "Make sure you have Bun installed on your system:" }
            (code_block("curl -fsSL https://bun.sh/install | bash"))
            h3 { "Installation" }
            p { "Clone and install dependencies:" }
            (code_block("git clone <your-repo>\ncd next16\nbun install"))
            h3 { "Development" }
            p { "Start the development server with Turbopack:" }
            (code_block("bun dev"))
            p {
                "Open "
                a href=(ctx.href(local)) class=(INLINE_LINK) { (local) }
                " in your browser."
            }
            h3 { "Build for Production" }
            (code_block("bun build\nbun start"))
            (alert(AlertVariant::Default, Some("not-prose my-6"), "Important: Use Bun", html! {
                "This project uses Bun as the package manager. Always use "
                code { "bun" }
                " commands instead of npm, yarn, or pnpm."
            }))
        },
    )
}

fn workflow() -> Markup {
    section(
        "workflow",
        "Development Workflow",
        html! {
            h3 { "Adding shadcn/ui Components" }
            p { "Use the shadcn CLI to add components:" }
            (code_block("bunx shadcn@latest add button"))
            p { "Components are installed to " code { "components/ui/" } " and can be imported:" }
            (code_block(r#"import { Button } from "@/components/ui/button""#))
            h3 { "Server vs Client Components" }
            p { "Use Server Components by default:" }
            (code_block(
                "// Server Component (default)\n\
                 export function StaticContent() {\n  return <div>Static content</div>\n}"
            ))
            p { "Add " code { "\"use client\"" } " only when needed:" }
            (code_block(
                "\"use client\"\n\n\
                 import { useState } from \"react\"\n\n\
                 export function InteractiveContent() {\n  \
                 const [count, setCount] = useState(0)\n  \
                 return <button onClick={() => setCount(count + 1)}>{count}</button>\n}"
            ))
            h3 { "Async APIs in Next.js 16" }
            p { "Remember that cookies, headers, and params are now async:" }
            (code_block(
                "// ✅ Next.js 16 (correct)\n\
                 const cookieStore = await cookies()\n\
                 const headersList = await headers()\n\n\
                 // ❌ Next.js 15 syntax (doesn't work in v16)\n\
                 const cookieStore = cookies()\n\
                 const headersList = headers()"
            ))
        },
    )
}

fn configuration() -> Markup {
    section(
        "configuration",
        "Environment & Configuration",
        html! {
            h3 { "Environment Variables" }
            p { "Create a " code { ".env.local" } " file in the root directory:" }
            (code_block(
                "# Example environment variables\n\
                 NEXT_PUBLIC_APP_URL=http://localhost:3000\n\
                 DATABASE_URL=your-database-url\n\
                 OPENAI_API_KEY=your-api-key"
            ))
            h3 { "Path Aliases" }
            p { "The project uses TypeScript path aliases configured in " code { "tsconfig.json" } ":" }
            (codes(&[
                ("@/components", "React components"),
                ("@/components/ui", "shadcn/ui components"),
                ("@/lib", "Utility functions"),
                ("@/hooks", "Custom React hooks"),
            ]))
        },
    )
}

const PROJECT_TREE: &str = "next16/
├── app/                    # App Router pages and layouts
│   ├── (marketing)/        # Marketing route group
│   │   ├── page.tsx        # Home page
│   │   └── docs/           # Documentation
│   ├── layout.tsx          # Root layout
│   └── globals.css         # Global styles
├── components/             # React components
│   └── ui/                 # shadcn/ui components
├── lib/                    # Utility functions
│   └── utils.ts            # cn() helper
├── hooks/                  # Custom React hooks
├── LLMS/                   # Documentation and guides
├── components.json         # shadcn/ui configuration
├── next.config.ts          # Next.js configuration
├── tsconfig.json           # TypeScript configuration
└── package.json            # Dependencies and scripts";

fn structure() -> Markup {
    section("structure", "Project Structure", code_block(PROJECT_TREE))
}

fn styling() -> Markup {
    section(
        "styling",
        "UI & Styling",
        html! {
            h3 { "Theme Tokens" }
            p { strong { "Always use theme tokens, never hardcoded colors:" } }
            (code_block(
                "// ✅ Good - Uses theme tokens\n\
                 <div className=\"bg-background text-foreground\">\n\
                 <button className=\"bg-primary text-primary-foreground hover:bg-primary/90\">\n\n\
                 // ❌ Bad - Hardcoded colors\n\
                 <div className=\"bg-white dark:bg-black text-black dark:text-white\">\n\
                 <button className=\"bg-blue-500 hover:bg-blue-600\">"
            ))
            h3 { "Available Theme Tokens" }
            ul {
                @for (background, foreground, detail) in [
                    ("bg-background", Some("text-foreground"), "Main background and text"),
                    ("bg-card", Some("text-card-foreground"), "Card backgrounds"),
                    ("bg-primary", Some("text-primary-foreground"), "Primary buttons"),
                    ("bg-secondary", Some("text-secondary-foreground"), "Secondary buttons"),
                    ("text-muted-foreground", None, "Secondary/muted text"),
                    ("border-border", None, "Default borders"),
                ] {
                    li {
                        code { (background) }
                        @if let Some(foreground) = foreground {
                            " / " code { (foreground) }
                        }
                        " - " (detail)
                    }
                }
            }
            h3 { "Responsive Padding Pattern" }
            p { "Use consistent responsive padding:" }
            (code_block(
                "// ✅ Good\n\
                 <div className=\"px-4 sm:px-6 lg:px-8\">\n\n\
                 // ❌ Bad - Inconsistent padding\n\
                 <div className=\"px-16\">"
            ))
            h3 { "Conditional Classes" }
            p { "Always use the " code { "cn()" } " utility:" }
            (code_block(
                "import { cn } from \"@/lib/utils\"\n\n\
                 <div className={cn(\n  \"base-classes\",\n  isActive && \"active-classes\",\n  className\n)}>"
            ))
        },
    )
}

fn tooling() -> Markup {
    section(
        "tooling",
        "Scripts & Tooling",
        html! {
            h3 { "Available Scripts" }
            (codes(&[
                ("bun dev", "Start development server with Turbopack"),
                ("bun build", "Build for production"),
                ("bun start", "Start production server"),
                ("bun lint", "Run ESLint"),
            ]))
            h3 { "Adding Dependencies" }
            (code_block(
                "bun add <package>           # Production dependency\n\
                 bun add -d <package>        # Development dependency\n\
                 bun remove <package>        # Remove dependency"
            ))
        },
    )
}

fn next_steps(ctx: &RenderContext) -> Markup {
    let primary = Button::new().size(ButtonSize::Lg);
    let outline = primary.variant(ButtonVariant::Outline);
    html! {
        div class="not-prose mt-16 overflow-hidden rounded-xl border border-border bg-gradient-to-br from-card to-muted/20 p-8 shadow-lg" {
            div class="flex items-start gap-4" {
                div class="flex-shrink-0" {
                    div class="flex h-12 w-12 items-center justify-center rounded-lg bg-primary/10" {
                        (Icon::Rocket.render("h-6 w-6 text-primary"))
                    }
                }
                div class="flex-1" {
                    h3 class="mb-2 text-2xl font-bold tracking-tight text-foreground" { "Ready to build?" }
                    p class="mb-6 text-base text-muted-foreground" {
                        "Check out the LLMS folder for detailed patterns and examples on forms, \
                         authentication, layouts, and AI integration."
                    }
                    div class="flex flex-col gap-3 sm:flex-row sm:flex-wrap" {
                        (primary.link(&ctx.href("/"), html! {
                            "Back to Home"
                            (Icon::ArrowRight.render("ml-2 h-4 w-4"))
                        }))
                        (outline.link("https://nextjs.org/docs", html! { "Next.js Docs" }))
                        (outline.link("https://ui.shadcn.com", html! { "shadcn/ui Docs" }))
                    }
                }
            }
        }
    }
}

/// Documentation page body, placed inside the docs layout.
pub fn docs_page(ctx: &RenderContext) -> Markup {
    html! {
        div class="prose prose-neutral dark:prose-invert max-w-none" {
            (hero())
            (quick_links())
            (introduction())
            (philosophy())
            (tech_stack())
            (getting_started(ctx))
            (workflow())
            (configuration())
            (structure())
            (styling())
            (tooling())
            (next_steps(ctx))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteMeta;

    fn render() -> String {
        let site = SiteMeta::default();
        docs_page(&RenderContext::new(&site)).into_string()
    }

    #[test]
    fn test_sections_in_order() {
        let html = render();
        let mut last = 0;
        for id in SECTION_IDS {
            let tag = format!("<section id=\"{}\" class=\"mb-12 scroll-mt-20\">", id);
            let at = html.find(&tag).unwrap_or_else(|| panic!("missing section {id}"));
            assert!(at > last, "section {id} out of order");
            last = at;
        }
    }

    #[test]
    fn test_quick_links() {
        let html = render();
        for (_, title, description) in QUICK_LINKS {
            assert!(html.contains(title));
            assert!(html.contains(description));
        }
        assert_eq!(html.matches("mb-2 h-6 w-6 text-primary").count(), 4);
    }

    #[test]
    fn test_code_blocks_are_escaped() {
        let html = render();
        assert!(html.contains("git clone &lt;your-repo&gt;\ncd next16\nbun install"));
        assert!(html.contains("├── app/"));
        assert!(!html.contains("<your-repo>"));
    }

    #[test]
    fn test_alerts_and_inline_code() {
        let html = render();
        assert_eq!(html.matches("role=\"alert\"").count(), 2);
        assert!(html.contains("Always use <code>bun</code> commands"));
        assert!(html.contains("<li><strong>CVA</strong> - Class Variance Authority for component variants</li>"));
        assert!(html.contains("<li><code>bg-card</code> / <code>text-card-foreground</code> - Card backgrounds</li>"));
        assert!(html.contains("<li><code>border-border</code> - Default borders</li>"));
    }

    #[test]
    fn test_next_steps_links() {
        let site = SiteMeta {
            base_url: "/acme".to_string(),
            ..SiteMeta::default()
        };
        let html = docs_page(&RenderContext::new(&site)).into_string();
        assert!(html.contains("href=\"/acme/\""));
        assert_eq!(html.matches("target=\"_blank\"").count(), 2);
        assert!(html.contains("href=\"http://localhost:3000\""));
        assert!(html.contains(">Ready to build?</h3>"));
    }
}
