use anyhow::Result;
use clap::Parser;
use inquire::Text;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use repograb::{GitCloner, GitHubLister, SyncEngine, SyncOutcome};

#[derive(Parser)]
#[command(name = "repograb")]
#[command(about = "Clone every public repository of a GitHub user in one pass")]
#[command(version)]
struct Cli {
    /// GitHub username to clone repositories from (prompted if omitted)
    #[arg(short, long)]
    username: Option<String>,

    /// Existing directory to download repositories into (prompted if omitted)
    #[arg(short, long)]
    dest: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;
    info!("Starting repograb v{}", env!("CARGO_PKG_VERSION"));

    let username = match cli.username {
        Some(username) => username,
        None => prompt_username(),
    };

    let dest_input = match cli.dest {
        Some(dest) => dest.to_string_lossy().into_owned(),
        None => prompt_destination(),
    };

    // Expand ~ and environment variables in the destination input
    let dest_root = match shellexpand::full(&dest_input) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(dest_input),
    };

    if !repograb::git::git_available().await {
        println!("❌ git executable not found. Install git and retry.");
        return Ok(());
    }

    let lister = match GitHubLister::new() {
        Ok(lister) => lister,
        Err(e) => {
            println!("❌ {:#}", e);
            return Ok(());
        }
    };

    let engine = SyncEngine::new(Box::new(lister), Box::new(GitCloner::new()));

    match engine.run(&username, &dest_root).await {
        Ok(summary) => {
            if summary.total_repositories > 0 {
                println!("\nRepositories download complete.");
                println!("   📊 Total repositories: {}", summary.total_repositories);
                println!("   ✅ Cloned: {}", summary.cloned);
                println!("   ⏭️  Skipped (already present): {}", summary.skipped);
                println!("   ❌ Failed: {}", summary.failed);
                println!("   ⏱️  Duration: {:.2}s", summary.duration.as_secs_f64());

                if summary.failed > 0 {
                    println!("\nFailed repositories:");
                    for (name, outcome) in &summary.outcomes {
                        if let SyncOutcome::Failed { error, .. } = outcome {
                            println!("   ❌ {}: {}", name, error);
                        }
                    }
                }
            }
        }
        Err(e) => {
            println!("❌ {:#}", e);
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    Ok(())
}

fn prompt_username() -> String {
    Text::new("Enter the GitHub username:")
        .with_help_message("Repositories of this user will be cloned")
        .prompt()
        .unwrap_or_default()
}

fn prompt_destination() -> String {
    Text::new("Enter the folder path where repositories should be downloaded:")
        .with_help_message("Must be an existing directory, e.g. ~/repos")
        .prompt()
        .unwrap_or_default()
}
