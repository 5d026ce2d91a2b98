//! CLI administration tool for linkhash.
//!
//! Provisions the links table and inspects stored links without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the links table (asks for confirmation)
//! cargo run --bin admin -- db provision
//!
//! # Same, non-interactive (for deployment scripts)
//! cargo run --bin admin -- db provision -y
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show PostgreSQL version and whether the links table exists
//! cargo run --bin admin -- db info
//!
//! # Show the hash a URL would get
//! cargo run --bin admin -- link hash https://www.google.com
//!
//! # Store a link directly
//! cargo run --bin admin -- link create --title "Google" https://www.google.com
//!
//! # Look up a stored link
//! cargo run --bin admin -- link show 7378mDnD
//!
//! # Count stored links
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `BASE_URL` - Prefix used when printing short links (default: `http://127.0.0.1`)

use linkhash::application::services::LinkService;
use linkhash::application::services::link_service::DEFAULT_BASE_URL;
use linkhash::config::Config;
use linkhash::domain::store::{LinkStore, StoreError};
use linkhash::infrastructure::persistence::PgLinkStore;
use linkhash::infrastructure::persistence::pg_link_store::TABLE_NAME;
use linkhash::utils::hash::generate_hash;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkhash.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect and create links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Create the links table if it does not exist
    Provision {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check database connection
    Check,

    /// Show database info
    Info,
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Print the hash a URL would be stored under (no database access)
    Hash {
        /// Original URL
        url: String,
    },

    /// Store a link, overwriting any record with the same hash
    Create {
        /// Display title
        #[arg(short, long)]
        title: String,

        /// Original URL
        url: String,
    },

    /// Show a stored link
    Show {
        /// Short hash
        hash: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Hashing is pure; no connection needed.
    if let Commands::Link {
        action: LinkAction::Hash { url },
    } = &cli.command
    {
        print_hash(url);
        return Ok(());
    }

    let database_url = Config::load_database_url().context("Failed to load database configuration")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Link { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
    }

    Ok(())
}

/// Handles database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Provision { yes } => provision(pool, yes).await?,
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let table_exists: bool = sqlx::query_scalar("SELECT to_regclass($1) IS NOT NULL")
                .bind(TABLE_NAME)
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL:  {}", version.bright_white());
            println!(
                "  Table {}: {}",
                TABLE_NAME.cyan(),
                if table_exists {
                    "present".green()
                } else {
                    "missing".red()
                }
            );
            println!();
        }
    }

    Ok(())
}

/// Creates the links table after confirmation.
///
/// Safe to repeat; an existing table is left untouched.
async fn provision(pool: &PgPool, skip_confirm: bool) -> Result<()> {
    println!("{}", "🛠️  Provision link store".bright_blue().bold());
    println!();
    println!("  Table:       {}", TABLE_NAME.cyan());
    println!("  Primary key: {}", "hash".cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create the table if it does not exist?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let store = PgLinkStore::new(Arc::new(pool.clone()));
    store
        .provision_schema()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to provision schema: {}", e))?;

    println!("{}", "✅ Link store ready".green().bold());
    println!();

    Ok(())
}

/// Handles link commands that need the database.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let store: Arc<dyn LinkStore> = Arc::new(PgLinkStore::new(Arc::new(pool.clone())));
    let base_url = std::env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let service = LinkService::new(store.clone(), base_url);

    match action {
        LinkAction::Hash { url } => print_hash(&url),
        LinkAction::Create { title, url } => {
            if title.is_empty() || url.is_empty() {
                anyhow::bail!("Title and URL must not be empty");
            }

            let link = service
                .create_link(title, url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

            println!("{}", "✅ Link stored".green().bold());
            println!("  Hash:  {}", link.hash.bright_yellow().bold());
            println!("  Short: {}", service.short_url(&link.hash).cyan());
        }
        LinkAction::Show { hash } => match store.fetch_by_hash(&hash).await {
            Ok(link) => {
                println!("{}", "🔗 Link".bright_blue().bold());
                println!();
                println!("  Hash:     {}", link.hash.bright_yellow());
                println!("  Title:    {}", link.title.bright_white());
                println!("  Original: {}", link.original.cyan());
                println!("  Short:    {}", service.short_url(&link.hash));
                println!();
            }
            Err(StoreError::NotFound { hash }) => {
                println!("{} {}", "⚠️  No link stored under".yellow(), hash.bold());
            }
            Err(e) => return Err(anyhow::anyhow!("Failed to fetch link: {}", e)),
        },
    }

    Ok(())
}

fn print_hash(url: &str) {
    println!("{}", generate_hash(url).bright_yellow().bold());
}

/// Displays the number of stored links.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}
