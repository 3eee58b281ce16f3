// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Card surface with header, title, description and content slots.

use crate::cn;
use maud::{Markup, html};

pub fn card(class_name: Option<&str>, children: Markup) -> Markup {
    html! {
        div class=(cn!("rounded-xl border bg-card text-card-foreground shadow", class_name)) {
            (children)
        }
    }
}

pub fn card_header(children: Markup) -> Markup {
    html! {
        div class="flex flex-col space-y-1.5 p-6" { (children) }
    }
}

pub fn card_title(class_name: Option<&str>, text: &str) -> Markup {
    html! {
        div class=(cn!("font-semibold leading-none tracking-tight", class_name)) { (text) }
    }
}

pub fn card_description(text: &str) -> Markup {
    html! {
        div class="text-sm text-muted-foreground" { (text) }
    }
}

pub fn card_content(children: Markup) -> Markup {
    html! {
        div class="p-6 pt-0" { (children) }
    }
}
