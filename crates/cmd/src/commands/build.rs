// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::load_config;
use anyhow::{Context, Result};
use sitegen::{BuildOptions, generate_site};
use std::path::Path;

/// Render the whole site into `output_dir`.
pub fn build_command<F>(
    config_path: Option<&Path>,
    output_dir: &Path,
    strict: bool,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    diagnostics::debug!(
        "build_command called with output {output}",
        output: output_dir.display().to_string()
    );

    let config = load_config(config_path)?;
    let options = BuildOptions {
        strict,
        ..BuildOptions::default()
    };
    let report = generate_site(&config, output_dir, &options)
        .with_context(|| format!("Failed to build site into {}", output_dir.display()))?;

    for page in &report.pages {
        handler(&format!("{:<6} {} ({} bytes)\n", page.path, page.output, page.bytes));
    }
    if !report.assets.is_empty() {
        handler(&format!("{} static file(s) copied\n", report.assets.len()));
    }
    for line in report.anchors.broken_lines() {
        handler(&format!("warning: {}\n", line));
    }
    handler(&format!("manifest: {}\n", report.manifest.display()));
    Ok(())
}
