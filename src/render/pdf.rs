//! PDF conversion through a headless browser.
//!
//! [`PdfEngine`] is the seam; [`ChromiumEngine`] launches a fresh headless
//! Chromium process per document. Nothing is pooled or reused between
//! requests.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::process::Command;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::PdfConfig;
use crate::error::{ReportError, ReportResult};

/// Converts a complete HTML document into PDF bytes.
pub trait PdfEngine: Send + Sync {
    /// Renders `html` to a PDF.
    fn render<'a>(&'a self, html: &'a str) -> BoxFuture<'a, ReportResult<Vec<u8>>>;
}

/// A per-request working directory. Removed after printing, or on drop if
/// the render is cancelled.
struct ScratchDir {
    path: PathBuf,
    removed: bool,
}

impl ScratchDir {
    async fn create(root: &Path) -> ReportResult<Self> {
        let path = root.join(format!("reporte-{}", Uuid::new_v4()));
        tokio::fs::create_dir_all(&path)
            .await
            .map_err(|e| ReportError::render(format!("cannot create {}: {e}", path.display())))?;
        Ok(Self {
            path,
            removed: false,
        })
    }

    async fn remove(mut self) {
        if let Err(err) = tokio::fs::remove_dir_all(&self.path).await {
            warn!(path = %self.path.display(), error = %err, "Failed to remove scratch directory");
        }
        self.removed = true;
    }
}

impl Drop for ScratchDir {
    // Only reached with `removed` unset when the render future is dropped
    // mid-print, where no async context is left to clean up from.
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(err) = std::fs::remove_dir_all(&self.path) {
            warn!(path = %self.path.display(), error = %err, "Failed to remove scratch directory");
        }
    }
}

/// Prints documents with a headless Chromium binary.
#[derive(Debug, Clone)]
pub struct ChromiumEngine {
    browser: PathBuf,
    scratch_root: PathBuf,
    timeout: Duration,
    print_background: bool,
}

impl ChromiumEngine {
    /// Creates an engine from the PDF settings, using the system temp dir
    /// for scratch space.
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            browser: PathBuf::from(&config.browser_path),
            scratch_root: std::env::temp_dir(),
            timeout: Duration::from_secs(config.timeout_secs),
            print_background: config.print_background,
        }
    }

    /// Places scratch directories under `root` instead of the temp dir.
    pub fn with_scratch_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.scratch_root = root.into();
        self
    }

    fn command(&self, scratch: &Path, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.browser);
        cmd.arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--no-pdf-header-footer")
            .arg(format!("--user-data-dir={}", scratch.join("profile").display()))
            .arg(format!("--print-to-pdf={}", output.display()));
        if !self.print_background {
            cmd.arg("--disable-print-backgrounds");
        }
        cmd.arg(format!("file://{}", input.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    async fn print(&self, scratch: &ScratchDir, html: &str) -> ReportResult<Vec<u8>> {
        let input = scratch.path.join("reporte.html");
        let output = scratch.path.join("reporte.pdf");
        tokio::fs::write(&input, html)
            .await
            .map_err(|e| ReportError::render(format!("cannot write document: {e}")))?;

        let child = self
            .command(&scratch.path, &input, &output)
            .spawn()
            .map_err(|e| {
                ReportError::render(format!("cannot launch {}: {e}", self.browser.display()))
            })?;

        let result = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                ReportError::render(format!("browser timed out after {}s", self.timeout.as_secs()))
            })?
            .map_err(|e| ReportError::render(format!("browser failed: {e}")))?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(ReportError::render(format!(
                "browser exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        let pdf = tokio::fs::read(&output)
            .await
            .map_err(|e| ReportError::render(format!("browser produced no PDF: {e}")))?;
        if pdf.is_empty() {
            return Err(ReportError::render("browser produced an empty PDF"));
        }
        debug!(bytes = pdf.len(), "PDF printed");
        Ok(pdf)
    }
}

impl PdfEngine for ChromiumEngine {
    fn render<'a>(&'a self, html: &'a str) -> BoxFuture<'a, ReportResult<Vec<u8>>> {
        Box::pin(async move {
            let scratch = ScratchDir::create(&self.scratch_root).await?;
            let result = self.print(&scratch, html).await;
            scratch.remove().await;
            result
        })
    }
}
