// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Subcommands of `starter`. Each takes an output handler so results can be
//! printed by the binary or collected by tests.

pub mod build;
pub mod check;
pub mod nav;
pub mod render;

pub use build::build_command;
pub use check::check_command;
pub use nav::{NavFormat, nav_command};
pub use render::render_command;

use anyhow::{Context, Result};
use sitegen::SiteConfig;
use std::path::Path;

/// Load the site config named on the command line, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    SiteConfig::load_or_default(path).with_context(|| match path {
        Some(path) => format!("Failed to load site config {}", path.display()),
        None => "Failed to build default site config".to_string(),
    })
}
