// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use super::load_config;
use anyhow::{Result, bail};
use sitegen::{NavigationTree, anchors, routes};
use std::path::Path;

/// Check `tree` against the rendered pages. Fails when any internal link is
/// broken; empty groups are only reported.
pub fn check_command<F>(
    config_path: Option<&Path>,
    tree: &NavigationTree,
    mut handler: F,
) -> Result<()>
where
    F: FnMut(&str),
{
    let config = load_config(config_path)?;
    let routes = routes::site_routes(&config);
    let report = anchors::check(tree, &routes, &config);

    for group in &report.empty_groups {
        handler(&format!("warning: group '{}' has no items\n", group));
    }
    for line in report.broken_lines() {
        handler(&format!("broken: {}\n", line));
    }
    handler(&format!(
        "{} internal link(s) checked, {} external skipped, {} broken\n",
        report.checked,
        report.skipped_external,
        report.broken.len()
    ));

    if !report.is_ok() {
        bail!("{} broken navigation link(s)", report.broken.len());
    }
    Ok(())
}
