//! CLI administration tool for link-resolver.
//!
//! Resolves links, allocates keys, and checks the store without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Where does example.com/promo go?
//! cargo run --bin admin -- resolve example.com promo
//!
//! # Root redirect for a domain
//! cargo run --bin admin -- resolve example.com
//!
//! # Allocate three unused keys under a prefix
//! cargo run --bin admin -- allocate example.com --prefix campaign --count 3
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - Every other variable read by the server applies here too

use link_resolver::config::{self, Config};
use link_resolver::domain::entities::RedirectSource;
use link_resolver::infrastructure::persistence::StorePool;
use link_resolver::server::build_state;
use link_resolver::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for managing link-resolver.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show what a domain and key resolve to
    Resolve {
        /// Domain slug, e.g. example.com
        domain: String,

        /// Short key; omit for the domain's root redirect
        key: Option<String>,
    },

    /// Allocate unused keys for a domain
    Allocate {
        domain: String,

        /// Prefix placed before the random part, e.g. "campaign"
        #[arg(short, long)]
        prefix: Option<String>,

        /// Number of keys to allocate
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Show a project
    Project {
        id: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = StorePool::open(Some(database_url), config.pool_settings())
        .await
        .context("Failed to connect to database")?;
    let state = build_state(pool.clone(), &config);

    let outcome = match cli.command {
        Commands::Resolve { domain, key } => handle_resolve(&state, &domain, key.as_deref()).await,
        Commands::Allocate {
            domain,
            prefix,
            count,
        } => handle_allocate(&state, &domain, prefix.as_deref(), count).await,
        Commands::Project { id } => handle_project(&state, &id).await,
        Commands::Db { action } => handle_db_action(action, &state, &config).await,
    };

    pool.close().await;
    outcome
}

/// Prints the resolution of a domain and optional key.
async fn handle_resolve(state: &AppState, domain: &str, key: Option<&str>) -> Result<()> {
    println!("{}", "🔎 Resolve".bright_blue().bold());
    println!();

    let Some(result) = state.redirect_service.resolve(domain, key).await? else {
        println!("{}", "  No match".yellow());
        println!();
        return Ok(());
    };

    let expired = result.is_expired();

    println!("  Domain: {}", domain.cyan());
    println!("  Key:    {}", result.key.cyan());
    match result.url {
        Some(ref url) => println!("  URL:    {}", url.bright_green().bold()),
        None => println!("  URL:    {}", "(no target)".yellow()),
    }

    match result.source {
        RedirectSource::Domain(ref d) => {
            println!("  Source: {} {}", "domain".bright_white(), d.id.bright_black());
        }
        RedirectSource::Link(ref l) => {
            println!("  Source: {} {}", "link".bright_white(), l.id.bright_black());
            if let Some(expires_at) = l.expires_at {
                let status = if expired {
                    "EXPIRED".red()
                } else {
                    "ACTIVE".green()
                };
                println!("  Expiry: {} ({})", expires_at.format("%Y-%m-%d %H:%M UTC"), status);
            }
        }
    }
    println!();

    Ok(())
}

/// Allocates and prints `count` keys.
///
/// Keys are only checked, never reserved, so they are printed for the
/// operator to use right away.
async fn handle_allocate(
    state: &AppState,
    domain: &str,
    prefix: Option<&str>,
    count: usize,
) -> Result<()> {
    println!("{}", "✨ Allocate keys".bright_blue().bold());
    println!();

    for _ in 0..count {
        let key = state.key_allocator.allocate(domain, prefix).await?;
        println!("  {}", key.bright_yellow().bold());
    }
    println!();

    Ok(())
}

async fn handle_project(state: &AppState, id: &str) -> Result<()> {
    println!("{}", "📁 Project".bright_blue().bold());
    println!();

    let project = state.project_service.get_project(id).await?;

    println!("  ID:      {}", project.id.bright_black());
    println!("  Name:    {}", project.name.cyan());
    println!("  Slug:    {}", project.slug.cyan());
    println!(
        "  Created: {}",
        project.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, state: &AppState, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            match state.store.probe("SELECT 1", &[]).await? {
                Some(true) => println!("{}", "✅ Database connection OK".green().bold()),
                _ => anyhow::bail!("Database did not answer the probe"),
            }
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version = state
                .store
                .execute::<(String,)>("SELECT version()", &[])
                .await?
                .and_then(|rows| rows.into_iter().next())
                .map(|(v,)| v)
                .unwrap_or_default();

            println!("  PostgreSQL:   {}", version.bright_white());
            println!("  Pool size:    {}", config.db_max_connections);
            println!("  Query timeout: {}s", config.db_query_timeout);
            println!();
        }
    }

    Ok(())
}
