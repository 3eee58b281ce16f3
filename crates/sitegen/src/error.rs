// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, SiteError>;

/// Failures at the edges of rendering: config input, file output, asset globbing.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("cannot read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid site config: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid static pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("no page is routed at '{0}'")]
    UnknownRoute(String),

    #[error("{} broken navigation link(s): {}", .0.len(), .0.join(", "))]
    BrokenAnchors(Vec<String>),

    #[error("cannot serialize build manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
