//! Screen capture for the static displays.
//!
//! Capturing is an external step: a headless browser loads each page address
//! and writes a raster image. Pages are captured one at a time; a failed page
//! is logged and the batch moves on.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{error, info};
use url::Url;

use crate::config::SnapshotConfig;
use crate::error::SnapshotError;
use crate::render::RenderedPage;

/// One page to capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotTarget {
    pub name: String,
    pub url: String,
    pub output: PathBuf,
}

#[async_trait]
pub trait SnapshotRenderer: Send + Sync {
    async fn capture(&self, target: &SnapshotTarget) -> Result<PathBuf, SnapshotError>;
}

/// Outcome of one capture batch
#[derive(Debug, Default)]
pub struct SnapshotReport {
    pub captured: Vec<PathBuf>,
    pub failed: Vec<(String, SnapshotError)>,
}

impl SnapshotReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Address each rendered page either under the public base URL or as a local file
pub fn targets_for(
    pages: &[RenderedPage],
    config: &SnapshotConfig,
    image_dir: &Path,
) -> Result<Vec<SnapshotTarget>, SnapshotError> {
    pages
        .iter()
        .map(|page| -> Result<SnapshotTarget, SnapshotError> {
            let url = match &config.base_url {
                Some(base) => format!("{}/{}.html", base.trim_end_matches('/'), page.name),
                None => file_url(&page.html_path)?,
            };

            Ok(SnapshotTarget {
                name: page.name.clone(),
                url,
                output: image_dir.join(format!("{}.png", page.name)),
            })
        })
        .collect()
}

fn file_url(path: &Path) -> Result<String, SnapshotError> {
    let absolute = std::fs::canonicalize(path).map_err(|_| SnapshotError::InvalidTarget {
        path: path.to_path_buf(),
    })?;

    Url::from_file_path(&absolute)
        .map(|url| url.to_string())
        .map_err(|_| SnapshotError::InvalidTarget { path: absolute })
}

/// Capture targets sequentially; failures are recorded, never propagated
pub async fn capture_all<R>(renderer: &R, targets: &[SnapshotTarget]) -> SnapshotReport
where
    R: SnapshotRenderer + ?Sized,
{
    let mut report = SnapshotReport::default();

    for target in targets {
        info!("Rendering: {}", target.url);

        match renderer.capture(target).await {
            Ok(path) => {
                info!("Saved {} to {}", target.name, path.display());
                report.captured.push(path);
            }
            Err(e) => {
                error!("Failed to capture {}: {}", target.name, e);
                report.failed.push((target.name.clone(), e));
            }
        }
    }

    report
}

/// Chromium/Chrome in headless mode, one process per page.
///
/// The settle delay is passed as a virtual-time budget so scripts and fonts
/// get that long to finish before the screenshot is taken.
pub struct HeadlessChrome {
    config: SnapshotConfig,
}

impl HeadlessChrome {
    pub fn new(config: SnapshotConfig) -> Self {
        Self { config }
    }

    pub fn args(&self, target: &SnapshotTarget) -> Vec<String> {
        vec![
            "--headless=new".to_string(),
            "--disable-gpu".to_string(),
            "--hide-scrollbars".to_string(),
            "--force-device-scale-factor=1".to_string(),
            format!("--window-size={},{}", self.config.width, self.config.height),
            format!("--virtual-time-budget={}", self.config.settle_delay_ms),
            format!("--screenshot={}", target.output.display()),
            target.url.clone(),
        ]
    }
}

#[async_trait]
impl SnapshotRenderer for HeadlessChrome {
    async fn capture(&self, target: &SnapshotTarget) -> Result<PathBuf, SnapshotError> {
        if let Some(parent) = target.output.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SnapshotError::Launch {
                    binary: self.config.browser.clone(),
                    source,
                })?;
        }

        let child = Command::new(&self.config.browser)
            .args(self.args(target))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SnapshotError::Launch {
                binary: self.config.browser.clone(),
                source,
            })?;

        let limit = self.config.navigation_timeout();
        let output = match timeout(limit, child.wait_with_output()).await {
            Ok(result) => result.map_err(|source| SnapshotError::Launch {
                binary: self.config.browser.clone(),
                source,
            })?,
            Err(_) => {
                return Err(SnapshotError::Timeout {
                    url: target.url.clone(),
                    timeout: limit,
                })
            }
        };

        if !output.status.success() {
            return Err(SnapshotError::BrowserFailed {
                url: target.url.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !tokio::fs::try_exists(&target.output).await.unwrap_or(false) {
            return Err(SnapshotError::MissingOutput {
                path: target.output.clone(),
            });
        }

        Ok(target.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(name: &str) -> RenderedPage {
        RenderedPage {
            number: 1,
            name: name.to_string(),
            html_path: PathBuf::from(format!("out/{}.html", name)),
            json_path: PathBuf::from(format!("out/{}.json", name)),
            card_count: 0,
        }
    }

    #[test]
    fn base_url_addresses_pages_by_name() {
        let config = SnapshotConfig {
            base_url: Some("https://example.org/board/".to_string()),
            ..SnapshotConfig::default()
        };
        let targets = targets_for(&[rendered("screen1"), rendered("screen2")], &config, Path::new("shots")).unwrap();

        assert_eq!(targets[0].url, "https://example.org/board/screen1.html");
        assert_eq!(targets[1].output, PathBuf::from("shots/screen2.png"));
    }

    #[test]
    fn missing_page_file_is_not_addressable() {
        let config = SnapshotConfig::default();
        let result = targets_for(&[rendered("does-not-exist")], &config, Path::new("shots"));
        assert!(matches!(result, Err(SnapshotError::InvalidTarget { .. })));
    }

    #[test]
    fn chrome_args_carry_viewport_and_settle_delay() {
        let chrome = HeadlessChrome::new(SnapshotConfig::default());
        let target = SnapshotTarget {
            name: "screen1".to_string(),
            url: "https://example.org/screen1.html".to_string(),
            output: PathBuf::from("out/screen1.png"),
        };
        let args = chrome.args(&target);

        assert!(args.contains(&"--window-size=3840,2160".to_string()));
        assert!(args.contains(&"--virtual-time-budget=4000".to_string()));
        assert!(args.contains(&"--screenshot=out/screen1.png".to_string()));
        assert_eq!(args.last().map(String::as_str), Some("https://example.org/screen1.html"));
    }
}
