use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, info};

/// Trait for cloning a repository to a local path
///
/// Narrow seam over the external clone tool so the sync workflow can be
/// tested without spawning real git processes.
#[async_trait]
pub trait Cloner: Send + Sync {
    /// Clone `clone_url` into `dest`, recursively including submodules.
    ///
    /// `dest` must not exist yet. A non-zero exit from the clone tool is
    /// returned as an error carrying the tool's stderr text.
    async fn clone_repository(&self, clone_url: &str, dest: &Path) -> Result<()>;
}

/// Cloner backed by the `git` executable
pub struct GitCloner;

impl GitCloner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitCloner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cloner for GitCloner {
    async fn clone_repository(&self, clone_url: &str, dest: &Path) -> Result<()> {
        debug!("Cloning {} -> {}", clone_url, dest.display());

        let output = AsyncCommand::new("git")
            .args(["clone", "--recursive"])
            .arg(clone_url)
            .arg(dest)
            .output()
            .await
            .context("Failed to execute git clone")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!("git clone failed: {}", stderr.trim());
        }

        info!("Successfully cloned into {}", dest.display());
        Ok(())
    }
}

/// Check that the `git` executable is available on this system.
pub async fn git_available() -> bool {
    AsyncCommand::new("git")
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}
