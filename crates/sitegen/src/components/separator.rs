// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::cn;
use maud::{Markup, html};

/// Decorative horizontal rule.
pub fn separator(class_name: Option<&str>) -> Markup {
    html! {
        div role="none" data-orientation="horizontal"
            class=(cn!("shrink-0 bg-border h-[1px] w-full", class_name)) {}
    }
}
