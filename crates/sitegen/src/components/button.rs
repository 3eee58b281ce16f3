// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Buttons, rendered either as links styled like a button or as a real
//! `<button>` for client-side actions.

use crate::cn;
use maud::{Markup, html};

const BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
            ButtonVariant::Outline => {
                "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2",
            ButtonSize::Sm => "h-8 rounded-md px-3 text-xs",
            ButtonSize::Lg => "h-10 rounded-md px-8",
            ButtonSize::Icon => "h-9 w-9",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Button<'a> {
    variant: ButtonVariant,
    size: ButtonSize,
    class_name: Option<&'a str>,
}

impl<'a> Button<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn classes(&self) -> String {
        cn!(BASE, self.variant.classes(), self.size.classes(), self.class_name)
    }

    /// An anchor styled as this button. Absolute URLs open in a new tab.
    pub fn link(&self, href: &str, children: Markup) -> Markup {
        let external = href.starts_with("http://") || href.starts_with("https://");
        html! {
            @if external {
                a href=(href) class=(self.classes()) target="_blank" rel="noopener noreferrer" {
                    (children)
                }
            } @else {
                a href=(href) class=(self.classes()) {
                    (children)
                }
            }
        }
    }

    /// A `<button type="button">` for script-driven actions.
    pub fn action(&self, id: &str, label: &str, children: Markup) -> Markup {
        html! {
            button type="button" id=(id) class=(self.classes()) aria-label=(label) {
                (children)
            }
        }
    }
}
