// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::load_config;
use anyhow::Result;
use std::path::Path;

/// Render the page routed at `path` and hand its HTML to `handler`.
pub fn render_command<F>(config_path: Option<&Path>, path: &str, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    let config = load_config(config_path)?;
    let html = sitegen::routes::render_path(&config, path)?;
    handler(&html);
    Ok(())
}
