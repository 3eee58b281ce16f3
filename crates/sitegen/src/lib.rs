// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Sitegen: static renderer for the starter site
//!
//! Renders the marketing home page and the single-page documentation with
//! its navigation sidebar as Maud markup, styled with theme-token utility
//! classes. Class lists are composed with [`cn!`], which drops absent
//! fragments and resolves conflicting utilities in favour of the last one.
//!
//! ## Usage
//!
//! ```bash
//! starter build ./dist --config site.yaml
//! ```

pub mod anchors;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod generate;
pub mod layout;
pub mod nav;
pub mod pages;
pub mod routes;
pub mod style;

pub use config::{HomePage, SiteConfig, SiteMeta};
pub use document::RenderContext;
pub use error::{Result, SiteError};
pub use generate::{BuildOptions, BuildReport, generate_site};
pub use layout::{Section, Spacing, Variant, container};
pub use nav::{DOCS_NAVIGATION, NavGroup, NavItem, NavigationTree};
