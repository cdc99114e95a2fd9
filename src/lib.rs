//! repograb - Clone every public repository of a GitHub user in one pass
//!
//! repograb lists a user's repositories through the GitHub API and clones
//! each one locally with the `git` executable, skipping repositories that
//! are already present on disk so re-runs are idempotent.
//!
//! ## Modules
//!
//! - [`github`]: GitHub API listing and the [`github::RepoLister`] seam
//! - [`git`]: `git clone` invocation and the [`git::Cloner`] seam
//! - [`sync`]: the sequential repository-sync workflow

pub mod git;
pub mod github;
pub mod sync;

pub use git::{Cloner, GitCloner};
pub use github::{GitHubLister, RepoDescriptor, RepoLister};
pub use sync::{SyncEngine, SyncOutcome, SyncSummary};
