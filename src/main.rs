//! `shortlink` - command-line client for the link-shortening service.
//!
//! Drives the same flows a browser front end would: shorten a URL, search a
//! slug, show its statistics and delete it.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL and copy the result
//! shortlink shorten example.com/some/long/path --copy
//!
//! # Shorten with an expiration (local time or RFC 3339)
//! shortlink shorten https://example.com --expires-at 2030-01-01T12:00
//!
//! # Look up a slug and show its statistics
//! shortlink search abc123
//! shortlink stats abc123
//!
//! # Delete a link (asks for confirmation)
//! shortlink delete abc123
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (required unless `--api-base-url` is given): backend base URL
//! - `RUST_LOG`, `LOG_FORMAT`, `COPY_FEEDBACK_MS`, `CLIPBOARD_COMMAND`: see [`shortlink_client::config`]

use shortlink_client::application::flows::{
    CreationFlow, DeleteOutcome, DetailsFlow, DetailsView, LoadedDetails, LookupFlow,
};
use shortlink_client::config::{self, Config};
use shortlink_client::domain::navigation::Route;
use shortlink_client::error::GENERIC_FAILURE;
use shortlink_client::infrastructure::clipboard::{ClipboardService, SystemClipboard};
use shortlink_client::infrastructure::http::HttpLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Command-line client for the link-shortening service.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "API_BASE_URL")]
    api_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten (`https://` is added when no scheme is given)
        url: String,

        /// Expiration time, e.g. "2030-01-01T12:00" (local) or RFC 3339
        #[arg(long)]
        expires_at: Option<String>,

        /// Copy the short link to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Check that a slug exists and show its statistics
    Search {
        slug: String,
    },

    /// Show statistics for a slug
    Stats {
        slug: String,
    },

    /// Delete a link
    Delete {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), format!("{e:#}").red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_from_env(cli.api_base_url)?;
    init_tracing(&config)?;
    config.print_summary();

    let repository = Arc::new(
        HttpLinkRepository::new(&config.api_base_url).context("Failed to create HTTP client")?,
    );

    match cli.command {
        Commands::Shorten {
            url,
            expires_at,
            copy,
        } => handle_shorten(&config, repository, url, expires_at, copy).await,
        Commands::Search { slug } => handle_search(repository, slug).await,
        Commands::Stats { slug } => handle_stats(repository, &slug).await,
        Commands::Delete { slug, yes } => handle_delete(repository, &slug, yes).await,
    }
}

/// Installs the tracing subscriber. Logs go to stderr so stdout stays clean.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if config.log_format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}

fn clipboard(config: &Config) -> Arc<dyn ClipboardService> {
    let clipboard = config
        .clipboard_command
        .as_deref()
        .and_then(SystemClipboard::from_command_line)
        .unwrap_or_else(SystemClipboard::detect);
    tracing::debug!(program = clipboard.program(), "Using clipboard program");
    Arc::new(clipboard)
}

/// Runs the creation flow once.
///
/// # Flow
///
/// 1. Normalize and validate the URL (and expiration, when given)
/// 2. Submit to the backend
/// 3. Print the short link
/// 4. Copy it to the clipboard (with `--copy`)
async fn handle_shorten(
    config: &Config,
    repository: Arc<HttpLinkRepository>,
    url: String,
    expires_at: Option<String>,
    copy: bool,
) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let flow = CreationFlow::new(repository, clipboard(config))
        .with_copy_feedback(config.copy_feedback());
    flow.set_input(url).await;
    if let Some(expires_at) = expires_at {
        flow.toggle_options().await;
        flow.set_expires_at(expires_at).await;
    }

    let view = flow.view().await;
    println!("  URL:     {}", view.normalized_url.cyan());
    if !view.expires_at.is_empty() {
        println!("  Expires: {}", view.expires_at.cyan());
    }
    println!();

    let link = match flow.submit().await {
        Ok(link) => link,
        Err(e) => {
            let message = flow
                .view()
                .await
                .error
                .unwrap_or_else(|| e.user_message(GENERIC_FAILURE));
            anyhow::bail!(message);
        }
    };

    println!("{}", "✅ Short link created!".green().bold());
    println!();
    println!("  {}", link.short_url.bright_yellow().bold());
    println!();

    if copy {
        flow.copy()
            .await
            .context("Failed to copy the short link to the clipboard")?;
        if flow.view().await.copied {
            println!("{}", "📋 Copied!".green());
        }
    }

    Ok(())
}

/// Runs the lookup flow and, on success, follows the hand-off to the
/// statistics view.
async fn handle_search(repository: Arc<HttpLinkRepository>, slug: String) -> Result<()> {
    println!("{}", "🔍 Search".bright_blue().bold());
    println!();

    let flow = LookupFlow::new(Arc::clone(&repository));
    flow.set_slug(slug).await;

    match flow.search().await {
        Ok(Route::Details(slug)) => {
            println!("  {} {}", "→".bright_black(), Route::Details(slug.clone()));
            println!();
            handle_stats(repository, &slug).await
        }
        Ok(Route::Home) => Ok(()),
        Err(e) => {
            let message = flow
                .view()
                .await
                .error
                .unwrap_or_else(|| e.user_message(GENERIC_FAILURE));
            anyhow::bail!(message);
        }
    }
}

/// Loads statistics into `flow`, turning a failure into the message the
/// details view shows.
async fn load_details(
    flow: &DetailsFlow<HttpLinkRepository>,
    slug: &str,
) -> Result<LoadedDetails> {
    if let Err(e) = flow.load(slug).await {
        let message = match flow.view().await {
            DetailsView::Error { message, .. } => message,
            _ => e.user_message(GENERIC_FAILURE),
        };
        anyhow::bail!(message);
    }

    match flow.view().await {
        DetailsView::Loaded(details) => Ok(*details),
        _ => anyhow::bail!(GENERIC_FAILURE),
    }
}

/// Displays statistics for a slug.
///
/// # Output Format
///
/// ```text
/// 📊 Link Statistics
///
///   Slug:     abc123
///   URL:      https://example.com
///   Clicks:   5
///   Created:  2024-01-01 01:00:00
/// ```
async fn handle_stats(repository: Arc<HttpLinkRepository>, slug: &str) -> Result<()> {
    println!("{}", "📊 Link Statistics".bright_blue().bold());
    println!();

    let flow = DetailsFlow::new(repository);
    let details = load_details(&flow, slug).await?;
    print_details(&details);

    Ok(())
}

fn print_details(details: &LoadedDetails) {
    let record = &details.record;
    println!("  Slug:     {}", record.slug.cyan());
    println!("  URL:      {}", record.url.bright_white());
    println!(
        "  Clicks:   {}",
        record.click_count.to_string().bright_white().bold()
    );
    println!("  Created:  {}", details.created_at_local.bright_black());
    if let Some(expires_at) = &details.expires_at_local {
        println!("  Expires:  {}", expires_at.yellow());
    }
    println!();
}

/// Deletes a link after confirmation.
///
/// # Safety
///
/// - Statistics are shown before asking
/// - Requires confirmation (default: No) unless `--yes`
async fn handle_delete(repository: Arc<HttpLinkRepository>, slug: &str, yes: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let flow = DetailsFlow::new(repository);
    let details = load_details(&flow, slug).await?;
    print_details(&details);

    let mut prompt_error = None;
    let outcome = flow
        .delete(|question| {
            if yes {
                return true;
            }
            match Confirm::new().with_prompt(question).default(false).interact() {
                Ok(confirmed) => confirmed,
                Err(e) => {
                    prompt_error = Some(e);
                    false
                }
            }
        })
        .await;

    if let Some(e) = prompt_error {
        return Err(e).context("Failed to read confirmation");
    }

    match outcome {
        Ok(DeleteOutcome::Cancelled) => {
            println!("{}", "❌ Cancelled".red());
            Ok(())
        }
        Ok(DeleteOutcome::Deleted(route)) => {
            println!();
            println!("{}", "✅ Link deleted successfully!".green().bold());
            println!("  {} {}", "→".bright_black(), route);
            println!();
            Ok(())
        }
        Err(e) => {
            let message = match flow.view().await {
                DetailsView::Loaded(details) => details.delete_error,
                _ => None,
            };
            anyhow::bail!(message.unwrap_or_else(|| e.user_message(GENERIC_FAILURE)));
        }
    }
}
