//! Sequential repository-sync workflow
//!
//! Resolves a user's repository list, computes a target path per
//! repository, and clones each one that is not already present on disk.
//! Repositories are processed strictly one at a time, in the order the
//! API returned them; a failed clone never aborts the run.

use crate::git::Cloner;
use crate::github::RepoLister;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Per-repository result of a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Repository was cloned into `path`
    Cloned { path: PathBuf },
    /// A directory already existed at `path`; nothing was done
    Skipped { path: PathBuf },
    /// The clone tool failed; `error` carries its stderr text
    Failed { path: PathBuf, error: String },
}

/// Results from a complete sync run
#[derive(Debug, Clone)]
pub struct SyncSummary {
    pub total_repositories: usize,
    pub cloned: usize,
    pub skipped: usize,
    pub failed: usize,
    pub duration: Duration,
    /// (repository name, outcome) pairs in API order
    pub outcomes: Vec<(String, SyncOutcome)>,
}

impl SyncSummary {
    fn empty(duration: Duration) -> Self {
        Self {
            total_repositories: 0,
            cloned: 0,
            skipped: 0,
            failed: 0,
            duration,
            outcomes: Vec::new(),
        }
    }
}

/// The sync engine that drives the fetch-then-loop workflow
pub struct SyncEngine {
    lister: Box<dyn RepoLister>,
    cloner: Box<dyn Cloner>,
}

impl SyncEngine {
    /// Create a sync engine over the given lister and cloner.
    pub fn new(lister: Box<dyn RepoLister>, cloner: Box<dyn Cloner>) -> Self {
        Self { lister, cloner }
    }

    /// Run a complete sync: list repositories for `username` and clone
    /// every one that is not yet present under `dest_root/username`.
    ///
    /// Fails fast on an empty username, a missing destination root, or a
    /// listing error. Per-repository clone failures are recorded in the
    /// summary and do not stop the run.
    pub async fn run(&self, username: &str, dest_root: &Path) -> Result<SyncSummary> {
        let start_time = Instant::now();

        let username = username.trim();
        if username.is_empty() {
            bail!("Invalid username: must not be empty");
        }

        if !dest_root.is_dir() {
            bail!(
                "Invalid download path: {} is not an existing directory",
                dest_root.display()
            );
        }

        let user_dir = dest_root.join(username);
        if !user_dir.exists() {
            tokio::fs::create_dir_all(&user_dir).await?;
            println!("Created directory: {}", user_dir.display());
        }

        let repositories = self.lister.list_repositories(username).await?;

        if repositories.is_empty() {
            println!("No repositories found for user {}.", username);
            return Ok(SyncSummary::empty(start_time.elapsed()));
        }

        info!("Syncing {} repositories for {}", repositories.len(), username);
        println!(
            "Found {} repositories. Starting download...",
            repositories.len()
        );

        let mut outcomes = Vec::with_capacity(repositories.len());

        for repo in &repositories {
            let target = user_dir.join(&repo.name);

            // Lenient existence check: any directory at the target counts
            // as already cloned, without validating its contents.
            if target.exists() {
                debug!("Target already exists: {}", target.display());
                println!("Repository '{}' already exists. Skipping...", repo.name);
                outcomes.push((repo.name.clone(), SyncOutcome::Skipped { path: target }));
                continue;
            }

            println!("Cloning repository '{}'...", repo.name);
            match self.cloner.clone_repository(&repo.clone_url, &target).await {
                Ok(()) => {
                    println!("Successfully cloned to '{}'", target.display());
                    outcomes.push((repo.name.clone(), SyncOutcome::Cloned { path: target }));
                }
                Err(e) => {
                    warn!("Clone failed for '{}': {:#}", repo.name, e);
                    println!("Error cloning repository '{}': {:#}", repo.name, e);
                    outcomes.push((
                        repo.name.clone(),
                        SyncOutcome::Failed {
                            path: target,
                            error: format!("{:#}", e),
                        },
                    ));
                }
            }
        }

        let summary = compile_summary(outcomes, start_time.elapsed());

        info!(
            "Sync completed in {:.2}s: {} cloned, {} skipped, {} failed",
            summary.duration.as_secs_f64(),
            summary.cloned,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }
}

fn compile_summary(outcomes: Vec<(String, SyncOutcome)>, duration: Duration) -> SyncSummary {
    let total_repositories = outcomes.len();
    let mut cloned = 0;
    let mut skipped = 0;
    let mut failed = 0;

    for (_, outcome) in &outcomes {
        match outcome {
            SyncOutcome::Cloned { .. } => cloned += 1,
            SyncOutcome::Skipped { .. } => skipped += 1,
            SyncOutcome::Failed { .. } => failed += 1,
        }
    }

    SyncSummary {
        total_repositories,
        cloned,
        skipped,
        failed,
        duration,
        outcomes,
    }
}
