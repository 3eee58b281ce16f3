// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Page renderers. Each returns the page body; `document::page` supplies
//! the surrounding HTML document.

mod docs;
mod docs_layout;
mod home;
mod starter;

pub use docs::{SECTION_IDS, docs_page};
pub use docs_layout::{docs_layout, mobile_nav, sidebar};
pub use home::{HIGHLIGHTS, Highlight, marketing_home};
pub use starter::starter_home;
