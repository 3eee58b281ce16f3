// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration, parsed from an optional `site.yaml`.

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level site configuration. Every field is optional.
///
/// ```yaml
/// site:
///   title: "Acme Inc."
///   docs_title: "Next16 Docs"
///   base_url: "/"
///   stylesheet: "/style.css"
///
/// home: marketing
///
/// static:
///   - pattern: "public/**/*"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub home: HomePage,
    #[serde(rename = "static", default)]
    pub static_assets: Vec<StaticAsset>,
    /// Directory relative static patterns are resolved against.
    /// Set by [`SiteConfig::load`]; the current directory otherwise.
    #[serde(skip)]
    pub root: Option<PathBuf>,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Brand shown in the header and page titles
    pub title: String,
    /// Heading above the docs sidebar
    pub docs_title: String,
    pub description: String,
    pub base_url: String,
    /// Stylesheet URL; the CSS itself is built elsewhere
    pub stylesheet: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Acme Inc.".to_string(),
            docs_title: "Next16 Docs".to_string(),
            description: "Start your next project with a fast, modern, production-ready starter."
                .to_string(),
            base_url: "/".to_string(),
            stylesheet: "/style.css".to_string(),
        }
    }
}

/// Which page is rendered at `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomePage {
    /// Hero with calls to action and feature highlights
    #[default]
    Marketing,
    /// The framework's default welcome page
    Starter,
}

/// Static files to copy verbatim, selected by glob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticAsset {
    pub pattern: String,
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Read and parse a config file, remembering its directory as the asset root.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| SiteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&text)?;
        config.root = path.parent().map(Path::to_path_buf);
        diagnostics::debug!("loaded site config from {path}", path: path.display().to_string());
        Ok(config)
    }

    /// [`SiteConfig::load`] when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn asset_root(&self) -> PathBuf {
        match &self.root {
            Some(root) if !root.as_os_str().is_empty() => root.clone(),
            _ => PathBuf::from("."),
        }
    }
}
