// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::cn;
use maud::{Markup, html};

const BASE: &str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Outline,
}

impl BadgeVariant {
    fn classes(self) -> &'static str {
        match self {
            BadgeVariant::Default => {
                "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"
            }
            BadgeVariant::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            BadgeVariant::Outline => "text-foreground",
        }
    }
}

pub fn badge(variant: BadgeVariant, class_name: Option<&str>, text: &str) -> Markup {
    html! {
        div class=(cn!(BASE, variant.classes(), class_name)) { (text) }
    }
}
