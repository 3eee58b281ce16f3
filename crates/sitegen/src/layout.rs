// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Layout primitives: the width-capped [`container`] and the padded,
//! optionally backgrounded [`Section`] that wraps one.

use crate::cn;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

/// Base classes of every container.
pub const CONTAINER_CLASSES: &str = "container max-w-screen-2xl px-4 sm:px-6 lg:px-8";

/// Vertical padding tier of a [`Section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Spacing {
    pub const ALL: [Spacing; 5] = [
        Spacing::None,
        Spacing::Sm,
        Spacing::Md,
        Spacing::Lg,
        Spacing::Xl,
    ];

    pub fn classes(self) -> &'static str {
        match self {
            Spacing::None => "py-0",
            Spacing::Sm => "py-8 md:py-12",
            Spacing::Md => "py-12 md:py-16 lg:py-24",
            Spacing::Lg => "py-16 md:py-20 lg:py-28",
            Spacing::Xl => "py-20 md:py-24 lg:py-32",
        }
    }
}

/// Background treatment of a [`Section`], expressed as theme tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Muted,
    Accent,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Default, Variant::Muted, Variant::Accent];

    pub fn classes(self) -> &'static str {
        match self {
            Variant::Default => "bg-background",
            Variant::Muted => "bg-muted",
            Variant::Accent => "bg-accent",
        }
    }
}

/// Width-capped, horizontally padded wrapper. `children` is emitted as-is.
pub fn container(children: Markup, class_name: Option<&str>) -> Markup {
    html! {
        div class=(cn!(CONTAINER_CLASSES, class_name)) {
            (children)
        }
    }
}

/// A page section: vertical padding, background, optional anchor id, and an
/// inner [`container`].
///
/// ```
/// use sitegen::layout::{Section, Spacing, Variant};
/// use maud::html;
///
/// let markup = Section::new()
///     .variant(Variant::Muted)
///     .spacing(Spacing::Lg)
///     .id("pricing")
///     .render(html! { h2 { "Pricing" } });
/// assert!(markup.into_string().starts_with("<section id=\"pricing\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Section<'a> {
    class_name: Option<&'a str>,
    container_class_name: Option<&'a str>,
    spacing: Spacing,
    variant: Variant,
    id: Option<&'a str>,
}

impl<'a> Section<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn container_class_name(mut self, class_name: &'a str) -> Self {
        self.container_class_name = Some(class_name);
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Class attribute of the `<section>` element.
    pub fn classes(&self) -> String {
        cn!(self.spacing.classes(), self.variant.classes(), self.class_name)
    }

    pub fn render(&self, children: Markup) -> Markup {
        html! {
            section id=[self.id] class=(self.classes()) {
                (container(children, self.container_class_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_container_merges_classes() {
        let html = container(html! { p { "hi" } }, Some("max-w-screen-xl")).into_string();
        assert_eq!(
            html,
            "<div class=\"container px-4 sm:px-6 lg:px-8 max-w-screen-xl\"><p>hi</p></div>"
        );
    }

    #[test]
    fn test_container_without_extra_class() {
        let html = container(html! {}, None).into_string();
        assert_eq!(html, format!("<div class=\"{}\"></div>", CONTAINER_CLASSES));
    }

    #[test]
    fn test_section_defaults() {
        let section = Section::new();
        assert_eq!(section.classes(), "py-12 md:py-16 lg:py-24 bg-background");
        let html = section.render(html! {}).into_string();
        assert!(html.starts_with("<section class="));
        assert!(!html.contains("id="));
    }

    #[test]
    fn test_spacing_none_has_no_vertical_padding() {
        let classes = Section::new().spacing(Spacing::None).classes();
        assert!(classes.contains("py-0"));
        assert!(!classes.contains("md:py"));
        assert!(!classes.contains("lg:py"));
    }

    #[test]
    fn test_spacing_xl_is_largest_tier() {
        let classes = Section::new().spacing(Spacing::Xl).classes();
        assert!(classes.contains("lg:py-32"));
    }

    #[test]
    fn test_spacing_tiers_are_distinct() {
        let tiers: HashSet<_> = Spacing::ALL.iter().map(|s| s.classes()).collect();
        assert_eq!(tiers.len(), Spacing::ALL.len());
        let variants: HashSet<_> = Variant::ALL.iter().map(|v| v.classes()).collect();
        assert_eq!(variants.len(), Variant::ALL.len());
    }

    #[test]
    fn test_muted_section_with_id() {
        let html = Section::new()
            .variant(Variant::Muted)
            .id("pricing")
            .container_class_name("max-w-4xl")
            .render(html! { h2 { "Pricing" } })
            .into_string();
        assert_eq!(
            html,
            "<section id=\"pricing\" class=\"py-12 md:py-16 lg:py-24 bg-muted\">\
             <div class=\"container px-4 sm:px-6 lg:px-8 max-w-4xl\"><h2>Pricing</h2></div>\
             </section>"
        );
    }

    #[test]
    fn test_caller_class_overrides_tokens() {
        let classes = Section::new().class_name("bg-card py-6").classes();
        assert_eq!(classes, "md:py-16 lg:py-24 bg-card py-6");
    }

    #[test]
    fn test_enums_parse_lowercase() {
        let spacing: Spacing = serde_yaml_ng::from_str("xl").expect("spacing");
        assert_eq!(spacing, Spacing::Xl);
        let variant: Variant = serde_yaml_ng::from_str("accent").expect("variant");
        assert_eq!(variant, Variant::Accent);
        assert!(serde_yaml_ng::from_str::<Variant>("loud").is_err());
    }
}
