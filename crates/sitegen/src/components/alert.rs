// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Callout box with a title and description.

use crate::cn;
use maud::{Markup, html};

const BASE: &str = "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground [&>svg~*]:pl-7";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    fn classes(self) -> &'static str {
        match self {
            AlertVariant::Default => "bg-background text-foreground",
            AlertVariant::Destructive => {
                "border-destructive/50 text-destructive dark:border-destructive [&>svg]:text-destructive"
            }
        }
    }
}

pub fn alert(
    variant: AlertVariant,
    class_name: Option<&str>,
    title: &str,
    description: Markup,
) -> Markup {
    html! {
        div role="alert" class=(cn!(BASE, variant.classes(), class_name)) {
            h5 class="mb-1 font-medium leading-none tracking-tight" { (title) }
            div class="text-sm [&_p]:leading-relaxed" { (description) }
        }
    }
}
