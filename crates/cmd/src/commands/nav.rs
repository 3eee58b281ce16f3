// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use sitegen::NavigationTree;

/// How `starter nav` prints the tree, chosen by `--flat` / `--json`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavFormat {
    /// Indented group / item listing
    #[default]
    Tree,
    /// One line per item, in sidebar order (the mobile grid)
    Flat,
    /// The tree as JSON
    Json,
}

impl NavFormat {
    pub fn from_flags(flat: bool, json: bool) -> Self {
        match (flat, json) {
            (_, true) => NavFormat::Json,
            (true, false) => NavFormat::Flat,
            (false, false) => NavFormat::Tree,
        }
    }
}

pub fn nav_command<F>(tree: &NavigationTree, format: NavFormat, mut handler: F) -> Result<()>
where
    F: FnMut(&str),
{
    match format {
        NavFormat::Tree => {
            for group in tree.groups() {
                handler(&format!("{}\n", group.title));
                for item in group.items {
                    handler(&format!("  {:<24} {}\n", item.title, item.href));
                }
            }
        }
        NavFormat::Flat => {
            for item in tree.flatten() {
                handler(&format!("{}\t{}\n", item.title, item.href));
            }
        }
        NavFormat::Json => {
            let json = serde_json::to_string_pretty(tree)?;
            handler(&json);
            handler("\n");
        }
    }
    Ok(())
}
