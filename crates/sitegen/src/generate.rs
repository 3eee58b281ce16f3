// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Static site generation: render every route to `<output>/<route>/index.html`,
//! copy static assets, and record a `manifest.json` describing the build.

use crate::anchors::{self, AnchorReport};
use crate::config::{SiteConfig, StaticAsset};
use crate::error::{Result, SiteError};
use crate::nav::{DOCS_NAVIGATION, NavigationTree};
use crate::routes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use wax::Glob;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Refuse to write anything when a navigation link is broken.
    pub strict: bool,
    /// Tree checked against the rendered pages and recorded in the manifest
    pub navigation: NavigationTree,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            strict: false,
            navigation: DOCS_NAVIGATION,
        }
    }
}

/// One written page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    pub path: String,
    pub output: String,
    pub title: String,
    pub sha256: String,
    pub bytes: usize,
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generated_at: DateTime<Utc>,
    generator: String,
    base_url: &'a str,
    pages: &'a [PageRecord],
    assets: Vec<String>,
    navigation: NavigationTree,
}

/// What a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub pages: Vec<PageRecord>,
    /// Copied static files, relative to the output directory
    pub assets: Vec<PathBuf>,
    pub anchors: AnchorReport,
    pub manifest: PathBuf,
}

fn sha256_hex(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| SiteError::io(path, e))
}

/// Generate the complete site into `output_dir`.
pub fn generate_site(
    config: &SiteConfig,
    output_dir: &Path,
    options: &BuildOptions,
) -> Result<BuildReport> {
    let routes = routes::site_routes(config);
    let anchors = anchors::check(&options.navigation, &routes, config);

    for group in &anchors.empty_groups {
        diagnostics::warn!("navigation group {group} has no items", group: *group);
    }
    if !anchors.is_ok() {
        if options.strict {
            diagnostics::error!(
                "refusing to build: {count} broken navigation links",
                count: anchors.broken.len()
            );
            return Err(SiteError::BrokenAnchors(anchors.broken_lines()));
        }
        for line in anchors.broken_lines() {
            diagnostics::warn!("broken navigation link {link}", link: line);
        }
    }

    let mut pages = Vec::with_capacity(routes.len());
    for route in &routes {
        let html = routes::render(route, config);
        let out_path = output_dir.join(&route.output_path);
        write_file(&out_path, html.as_bytes())?;
        diagnostics::debug!("wrote {output}", output: route.output_path.clone());

        pages.push(PageRecord {
            path: route.path.to_string(),
            output: route.output_path.clone(),
            title: route.title.to_string(),
            sha256: sha256_hex(html.as_bytes()),
            bytes: html.len(),
        });
    }

    let mut assets = Vec::new();
    for asset in &config.static_assets {
        assets.extend(copy_static(asset, &config.asset_root(), output_dir)?);
    }

    let manifest = Manifest {
        generated_at: Utc::now(),
        generator: format!("sitegen {}", env!("CARGO_PKG_VERSION")),
        base_url: &config.site.base_url,
        pages: &pages,
        assets: assets
            .iter()
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .collect(),
        navigation: options.navigation,
    };
    let manifest_path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    write_file(&manifest_path, json.as_bytes())?;

    diagnostics::info!(
        "site generation complete: {pages} pages, {assets} static files to {dir}",
        pages: pages.len(),
        assets: assets.len(),
        dir: output_dir.display().to_string(),
    );

    Ok(BuildReport {
        pages,
        assets,
        anchors,
        manifest: manifest_path,
    })
}

/// Copy every file matched by `asset`, keeping its path below the pattern's
/// literal prefix: `public/**/*` copies `public/img/a.svg` to `img/a.svg`.
fn copy_static(asset: &StaticAsset, root: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern_error = |message: String| SiteError::Pattern {
        pattern: asset.pattern.clone(),
        message,
    };

    let glob = Glob::new(&asset.pattern).map_err(|e| pattern_error(e.to_string()))?;
    let (prefix, glob) = glob.partition();
    let base = root.join(prefix);
    if !base.is_dir() {
        diagnostics::warn!(
            "static pattern {pattern} matches nothing: {dir} is not a directory",
            pattern: asset.pattern.clone(),
            dir: base.display().to_string(),
        );
        return Ok(Vec::new());
    }

    let mut copied = Vec::new();
    for entry in glob.walk(base) {
        let entry = entry.map_err(|e| pattern_error(e.to_string()))?;
        let source = entry.path();
        if !source.is_file() {
            continue;
        }
        let candidate = entry.to_candidate_path();
        let relative = PathBuf::from(AsRef::<str>::as_ref(&candidate));
        let dest = output_dir.join(&relative);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        std::fs::copy(source, &dest).map_err(|e| SiteError::io(source, e))?;
        diagnostics::debug!("copied {file}", file: relative.display().to_string());
        copied.push(relative);
    }
    copied.sort();
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavGroup, NavItem};

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_writes_pages_and_manifest() {
        let out = tempfile::tempdir().expect("tempdir");
        let report = generate_site(&SiteConfig::default(), out.path(), &BuildOptions::default())
            .expect("build");

        assert_eq!(report.pages.len(), 2);
        assert!(report.anchors.is_ok());
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("docs/index.html").is_file());

        let html = std::fs::read_to_string(out.path().join("docs/index.html")).expect("read");
        assert_eq!(report.pages[1].sha256, sha256_hex(html.as_bytes()));
        assert_eq!(report.pages[1].bytes, html.len());

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&report.manifest).expect("manifest"),
        )
        .expect("json");
        assert_eq!(manifest["pages"][0]["path"], "/");
        assert_eq!(manifest["pages"][1]["output"], "docs/index.html");
        assert_eq!(manifest["navigation"][0]["title"], "Essentials");
        assert_eq!(manifest["navigation"][1]["items"][2]["href"], "/docs#configuration");
        assert!(manifest["generated_at"].is_string());
    }

    #[test]
    fn test_copies_static_assets() {
        let site = tempfile::tempdir().expect("site dir");
        let public = site.path().join("public");
        std::fs::create_dir_all(public.join("img")).expect("mkdir");
        std::fs::write(public.join("next.svg"), "<svg/>").expect("write");
        std::fs::write(public.join("img/hero.png"), [0u8, 1, 2]).expect("write");
        std::fs::write(public.join("notes.txt"), "skip").expect("write");

        let config = SiteConfig {
            static_assets: vec![
                StaticAsset {
                    pattern: "public/**/*.{svg,png}".to_string(),
                },
                StaticAsset {
                    pattern: "missing/**/*".to_string(),
                },
            ],
            root: Some(site.path().to_path_buf()),
            ..SiteConfig::default()
        };

        let out = tempfile::tempdir().expect("out dir");
        let report = generate_site(&config, out.path(), &BuildOptions::default()).expect("build");
        assert_eq!(
            report.assets,
            vec![PathBuf::from("img/hero.png"), PathBuf::from("next.svg")]
        );
        assert!(out.path().join("next.svg").is_file());
        assert!(out.path().join("img/hero.png").is_file());
        assert!(!out.path().join("notes.txt").exists());
    }

    static BROKEN: [NavGroup; 1] = [NavGroup {
        title: "Guides",
        items: &[
            NavItem {
                title: "Intro",
                href: "/docs#introduction",
                description: None,
            },
            NavItem {
                title: "Gone",
                href: "/docs#changelog",
                description: None,
            },
        ],
    }];

    #[test]
    fn test_strict_build_refuses_broken_links_before_writing() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let out = tmp.path().join("dist");
        let options = BuildOptions {
            strict: true,
            navigation: NavigationTree::new(&BROKEN),
        };
        let err = generate_site(&SiteConfig::default(), &out, &options).expect_err("strict");
        match err {
            SiteError::BrokenAnchors(lines) => {
                assert_eq!(lines.len(), 1);
                assert!(lines[0].contains("/docs#changelog"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }

    #[test]
    fn test_lenient_build_keeps_going_with_broken_links() {
        let out = tempfile::tempdir().expect("tempdir");
        let options = BuildOptions {
            navigation: NavigationTree::new(&BROKEN),
            ..BuildOptions::default()
        };
        let report = generate_site(&SiteConfig::default(), out.path(), &options).expect("build");
        assert_eq!(report.anchors.broken.len(), 1);
        assert!(out.path().join("docs/index.html").is_file());

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(&report.manifest).expect("manifest"),
        )
        .expect("json");
        assert_eq!(manifest["navigation"][0]["items"][1]["title"], "Gone");
    }

    #[test]
    fn test_invalid_pattern() {
        let config = SiteConfig {
            static_assets: vec![StaticAsset {
                pattern: "public/**/[".to_string(),
            }],
            ..SiteConfig::default()
        };
        let out = tempfile::tempdir().expect("out dir");
        let err = generate_site(&config, out.path(), &BuildOptions::default())
            .expect_err("bad pattern");
        assert!(matches!(err, SiteError::Pattern { .. }));
    }
}
