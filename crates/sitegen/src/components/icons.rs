// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Inline SVG icons (Lucide outlines) and the site logo mark.

use maud::{Markup, html};

/// One SVG primitive of an outline icon.
enum Shape {
    Path(&'static str),
    Circle {
        cx: &'static str,
        cy: &'static str,
        r: &'static str,
        filled: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Rocket,
    Code,
    Palette,
    Zap,
    Sun,
    Moon,
}

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::ArrowRight => &[Shape::Path("M5 12h14"), Shape::Path("m12 5 7 7-7 7")],
            Icon::Rocket => &[
                Shape::Path(
                    "M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z",
                ),
                Shape::Path(
                    "m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z",
                ),
                Shape::Path("M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"),
                Shape::Path("M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"),
            ],
            Icon::Code => &[
                Shape::Path("m18 16 4-4-4-4"),
                Shape::Path("m6 8-4 4 4 4"),
                Shape::Path("m14.5 4-5 16"),
            ],
            Icon::Palette => &[
                Shape::Circle { cx: "13.5", cy: "6.5", r: ".5", filled: true },
                Shape::Circle { cx: "17.5", cy: "10.5", r: ".5", filled: true },
                Shape::Circle { cx: "8.5", cy: "7.5", r: ".5", filled: true },
                Shape::Circle { cx: "6.5", cy: "12.5", r: ".5", filled: true },
                Shape::Path(
                    "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z",
                ),
            ],
            Icon::Zap => &[Shape::Path(
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            )],
            Icon::Sun => &[
                Shape::Circle { cx: "12", cy: "12", r: "4", filled: false },
                Shape::Path("M12 2v2"),
                Shape::Path("M12 20v2"),
                Shape::Path("m4.93 4.93 1.41 1.41"),
                Shape::Path("m17.66 17.66 1.41 1.41"),
                Shape::Path("M2 12h2"),
                Shape::Path("M20 12h2"),
                Shape::Path("m6.34 17.66-1.41 1.41"),
                Shape::Path("m19.07 4.93-1.41 1.41"),
            ],
            Icon::Moon => &[Shape::Path("M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z")],
        }
    }

    /// Render as a 24x24 stroked SVG. Icons are decorative, so hidden from screen readers.
    pub fn render(self, class: &str) -> Markup {
        html! {
            svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24"
                fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
                stroke-linejoin="round" class=(class) aria-hidden="true" {
                @for shape in self.shapes() {
                    @match shape {
                        Shape::Path(d) => {
                            path d=(d) {}
                        }
                        Shape::Circle { cx, cy, r, filled } => {
                            circle cx=(cx) cy=(cy) r=(r) fill=[filled.then_some("currentColor")] {}
                        }
                    }
                }
            }
        }
    }
}

/// The stacked-layers logo mark shown in the header.
pub fn logo_mark() -> Markup {
    html! {
        svg class="h-6 w-6" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg" {
            path d="M12 2L2 7L12 12L22 7L12 2Z" class="fill-primary" {}
            path d="M2 17L12 22L22 17" class="stroke-primary" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" {}
            path d="M2 12L12 17L22 12" class="stroke-primary" stroke-width="2"
                stroke-linecap="round" stroke-linejoin="round" {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_paths_are_closed_elements() {
        let html = Icon::ArrowRight.render("ml-2 h-4 w-4").into_string();
        assert!(html.starts_with("<svg"));
        assert!(html.contains("class=\"ml-2 h-4 w-4\""));
        assert_eq!(html.matches("<path").count(), 2);
        assert_eq!(html.matches("</path>").count(), 2);
    }

    #[test]
    fn test_filled_circles() {
        let html = Icon::Palette.render("h-6 w-6").into_string();
        assert_eq!(html.matches("fill=\"currentColor\"").count(), 4);
        let sun = Icon::Sun.render("").into_string();
        assert!(sun.contains("<circle cx=\"12\" cy=\"12\" r=\"4\"></circle>"));
    }

    #[test]
    fn test_logo_uses_theme_tokens() {
        let html = logo_mark().into_string();
        assert!(html.contains("fill-primary"));
        assert_eq!(html.matches("stroke-primary").count(), 2);
    }
}
