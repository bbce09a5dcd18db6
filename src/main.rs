//! committer - CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use committer::git::{check_git_installed, ensure_repository};
use committer::{
    Collector, CommitOptions, Committer, Config, EmojiCatalog, ProcessRunner, TerminalPrompter,
    compose_message, validate,
};

/// Git wrapper for committing in the conventional commit format.
#[derive(Parser, Debug)]
#[command(name = "committer")]
#[command(about = "Git wrapper for committing in the conventional commit format")]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    /// Sign commit with gpg key
    #[arg(short, long)]
    sign: bool,

    /// Add all untracked changes
    #[arg(short, long)]
    add: bool,

    /// Edit committer config (not implemented yet)
    #[arg(short, long)]
    config: bool,

    /// Push commit
    #[arg(short, long)]
    push: bool,
}

impl Cli {
    fn commit_options(&self) -> CommitOptions {
        CommitOptions {
            add: self.add,
            sign: self.sign,
            push: self.push,
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{}", style(format!("{:#}", e)).red());
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    if cli.config {
        warn!("--config is not implemented yet; continuing without it");
    }

    // Step 1: Check prerequisites
    check_git_installed().context("git is required")?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    ensure_repository(&cwd)
        .context("Run committer from within a git repository")?;

    // Step 2: Set up prompting
    let catalog = EmojiCatalog::bundled().context("Failed to load gitmoji catalog")?;
    let prompter = TerminalPrompter::setup()?;
    let collector = Collector::new(prompter, catalog, Config::from_env());

    // Step 3: Ask and validate
    let answers = collector.collect()?;
    validate(&answers)?;

    // Step 4: Compose and commit
    let message = compose_message(&answers);
    let committer = Committer::new(ProcessRunner::new());
    committer
        .commit_changes(&message, &cli.commit_options())
        .await?;

    Ok(())
}
