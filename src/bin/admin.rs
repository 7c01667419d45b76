//! CLI administration tool for short-url-service.
//!
//! Inspects mappings, checks backing services and previews derived short
//! codes without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Totals across all mappings
//! cargo run --bin admin -- stats
//!
//! # Statistics for one short code, read straight from the store
//! cargo run --bin admin -- stats ac6bb669
//!
//! # Preview the code a URL would get
//! cargo run --bin admin -- hash www.google.com
//!
//! # Check connectivity
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- cache check
//! ```
//!
//! # Environment Variables
//!
//! Connection settings are read the same way the server reads them (see
//! [`short_url_service::config`]):
//!
//! - `DATABASE_URL`, `POSTGRES_URL` or the `DB_*` components (for `stats` and `db`)
//! - `REDIS_URL` (a bare `host:port` is accepted) or the `REDIS_*` components (for `cache`)

use short_url_service::config::Config;
use short_url_service::domain::error::UrlError;
use short_url_service::domain::repositories::UrlRepository;
use short_url_service::infrastructure::cache::{CacheService, RedisCache};
use short_url_service::infrastructure::persistence::PgUrlRepository;
use short_url_service::utils::code_generator::hash_code;
use short_url_service::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing short-url-service.
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
    /// Show statistics for all mappings, or for one short code
    Stats {
        /// Short code to inspect
        short_url: Option<String>,
    },

    /// Print the short code a URL would be assigned without an alias
    Hash {
        /// URL to hash (a missing scheme becomes http://)
        url: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Cache operations
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,

    /// Show database info
    Info,
}

/// Cache operation subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// Check Redis connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { short_url } => {
            let pool = connect_database().await?;
            match short_url {
                Some(code) => show_url_stats(&pool, &code).await?,
                None => show_totals(&pool).await?,
            }
        }
        Commands::Hash { url } => show_hash(&url),
        Commands::Db { action } => {
            let pool = connect_database().await?;
            handle_db_action(action, &pool).await?;
        }
        Commands::Cache { action } => handle_cache_action(action).await?,
    }

    Ok(())
}

async fn connect_database() -> Result<PgPool> {
    let database_url =
        Config::load_database_url().context("Failed to load database configuration")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Displays one mapping with its click counter.
async fn show_url_stats(pool: &PgPool, short_url: &str) -> Result<()> {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    let url = match repo.get_by_short_url(short_url).await {
        Ok(url) => url,
        Err(UrlError::NotFound { .. }) => {
            println!("{} {}", "Short URL not found:".yellow(), short_url.cyan());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to load short URL: {}", e)),
    };

    println!("{}", "Short URL statistics".bright_blue().bold());
    println!();
    println!("  Short URL:    {}", url.short_url.cyan());
    println!("  Original URL: {}", url.original_url.bright_white());
    println!(
        "  Clicks:       {}",
        url.click_count.to_string().bright_green().bold()
    );
    println!(
        "  Created:      {}",
        url.created_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
    );
    println!(
        "  Updated:      {}",
        url.updated_at.format("%Y-%m-%d %H:%M:%S").to_string().bright_black()
    );
    println!();

    Ok(())
}

/// Displays totals across all mappings.
async fn show_totals(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0)::BIGINT FROM urls")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short URLs: {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:     {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

fn show_hash(url: &str) {
    let normalized = normalize_url(url);
    println!("  Normalized: {}", normalized.bright_white());
    println!("  Short URL:  {}", hash_code(&normalized).cyan().bold());
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}

/// Handles cache diagnostic commands.
async fn handle_cache_action(action: CacheAction) -> Result<()> {
    match action {
        CacheAction::Check => {
            let redis_url = Config::load_redis_url().context(
                "Failed to load cache configuration: REDIS_URL or REDIS_HOST must be set",
            )?;
            println!("{}", "Checking Redis connection...".bright_blue());

            let cache = RedisCache::connect(&redis_url)
                .await
                .context("Failed to connect to Redis")?;

            if cache.health_check().await {
                println!("{}", "Redis connection OK".green().bold());
            } else {
                anyhow::bail!("Redis PING failed");
            }
        }
    }

    Ok(())
}
