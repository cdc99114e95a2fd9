use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use octocrab::models::Repository;
use octocrab::Octocrab;
use std::env;
use tracing::{debug, info, warn};

/// Minimal description of a remote repository: everything the sync
/// workflow needs to decide on and perform a clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoDescriptor {
    /// Repository name (e.g., "repograb")
    pub name: String,
    /// URL usable by `git clone`
    pub clone_url: String,
}

/// Trait for listing a user's repositories from a remote provider
///
/// The sync workflow only depends on this seam, so tests can supply a
/// deterministic implementation without network access.
#[async_trait]
pub trait RepoLister: Send + Sync {
    /// List the repositories owned by `username`, in provider order.
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoDescriptor>>;
}

/// GitHub-backed repository lister
pub struct GitHubLister {
    client: Octocrab,
}

impl GitHubLister {
    /// Create a lister for the public GitHub API.
    ///
    /// Uses `GITHUB_TOKEN` when set (raises the rate limit); public
    /// repository listing works unauthenticated as well.
    pub fn new() -> Result<Self> {
        let mut builder = Octocrab::builder();

        match env::var("GITHUB_TOKEN") {
            Ok(token) if !token.is_empty() => {
                debug!("Using GITHUB_TOKEN for GitHub API access");
                builder = builder.personal_token(token);
            }
            _ => {
                debug!("No GITHUB_TOKEN set, using unauthenticated GitHub API access");
            }
        }

        let client = builder.build().context("Failed to create GitHub client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RepoLister for GitHubLister {
    async fn list_repositories(&self, username: &str) -> Result<Vec<RepoDescriptor>> {
        debug!("Fetching repositories for user: {}", username);

        let repos: Vec<Repository> = self
            .client
            .get(format!("/users/{}/repos", username), None::<&()>)
            .await
            .map_err(|e| match e {
                octocrab::Error::GitHub { ref source, .. }
                    if source.status_code.as_u16() == 404 =>
                {
                    anyhow!("GitHub user '{}' not found", username)
                }
                other => anyhow!(other)
                    .context(format!("Failed to list repositories for '{}'", username)),
            })?;

        let descriptors: Vec<RepoDescriptor> = repos
            .iter()
            .map(|repo| repo_to_descriptor(username, repo))
            .collect();

        info!(
            "Found {} repositories for user: {}",
            descriptors.len(),
            username
        );
        Ok(descriptors)
    }
}

/// Convert an octocrab Repository to our descriptor
///
/// Prefers the HTTPS clone URL, falls back to SSH, and finally
/// synthesizes an HTTPS URL from owner and name.
fn repo_to_descriptor(username: &str, repo: &Repository) -> RepoDescriptor {
    let clone_url = if let Some(clone_url) = &repo.clone_url {
        clone_url.to_string()
    } else if let Some(ssh_url) = &repo.ssh_url {
        ssh_url.clone()
    } else {
        warn!("No clone URL reported for '{}', synthesizing one", repo.name);
        fallback_clone_url(username, &repo.name)
    };

    RepoDescriptor {
        name: repo.name.clone(),
        clone_url,
    }
}

fn fallback_clone_url(owner: &str, name: &str) -> String {
    format!("https://github.com/{}/{}.git", owner, name)
}
