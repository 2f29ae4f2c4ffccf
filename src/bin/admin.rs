//! CLI administration tool for alias-shortener.
//!
//! Manages mappings directly against the database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- add https://example.com/very/long
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- add https://example.com --alias promo
//!
//! # List all mappings
//! cargo run --bin admin -- list
//!
//! # Show where an alias points
//! cargo run --bin admin -- resolve promo
//!
//! # Delete every alias of a URL without prompting
//! cargo run --bin admin -- delete --url https://example.com -y
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `STORAGE_PATH`: database location, same as the server
//! - `ALIAS_LENGTH`: length of generated aliases (default: 6, range 4-32)

use alias_shortener::application::services::MappingService;
use alias_shortener::config::Config;
use alias_shortener::domain::StoreError;
use alias_shortener::domain::entities::{DeleteOutcome, DeleteTarget};
use alias_shortener::infrastructure::persistence::{
    MIGRATOR, PoolSettings, SqliteMappingRepository, connect,
};
use alias_shortener::utils::alias_generator::AliasGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

type Service = MappingService<SqliteMappingRepository>;

/// CLI tool for managing alias-shortener.
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
    /// Store a URL under an alias
    Add {
        /// Redirect target
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// List all mappings
    List,

    /// Show the URL stored for an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Delete by alias, by URL, or by the exact pair
    Delete {
        /// Alias to delete
        #[arg(short, long)]
        alias: Option<String>,

        /// URL whose aliases should be deleted
        #[arg(short, long)]
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let alias_length = Config::load_alias_length();
    Config::validate_alias_length(alias_length)?;

    let database_url = Config::load_database_url();

    let pool = connect(&database_url, &PoolSettings::default())
        .await
        .with_context(|| format!("Failed to open database at {database_url}"))?;

    MIGRATOR
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;

    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool.clone())));
    let service = MappingService::with_generator(
        repository,
        AliasGenerator::from_os_rng(),
        alias_length,
    );

    let result = match cli.command {
        Commands::Add { url, alias } => add_mapping(&service, url, alias).await,
        Commands::List => list_mappings(&service).await,
        Commands::Resolve { alias } => resolve_alias(&service, alias).await,
        Commands::Delete { alias, url, yes } => delete_mappings(&service, alias, url, yes).await,
        Commands::Db { action } => handle_db_action(action, &service).await,
    };

    pool.close().await;

    result
}

async fn add_mapping(service: &Service, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "Add mapping".bright_blue().bold());
    println!();

    let saved = match service.save(url.clone(), alias).await {
        Ok(saved) => saved,
        Err(StoreError::AliasConflict(alias)) => {
            println!("{} {}", "Alias already exists:".red(), alias.yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to save mapping: {}", e)),
    };

    println!("{}", "Mapping created".green().bold());
    println!("  Alias: {}", saved.alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!();

    Ok(())
}

/// Lists all mappings in insertion order.
///
/// # Output Format
///
/// ```text
/// Mappings
///
///   ID    Alias                URL
///   ----------------------------------------------------------------
///   1     promo                https://example.com/landing
///   2     x7Gh2k               https://example.com/landing
/// ```
async fn list_mappings(service: &Service) -> Result<()> {
    println!("{}", "Mappings".bright_blue().bold());
    println!();

    let mappings = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list mappings: {}", e))?;

    if mappings.is_empty() {
        println!("{}", "  No mappings found".yellow());
        println!();
        println!(
            "  Create one with: {} admin add <url>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    for mapping in &mappings {
        println!(
            "  {:<5} {:<20} {}",
            mapping.id.to_string().bright_black(),
            mapping.alias.cyan(),
            mapping.url
        );
    }

    println!();
    println!(
        "  Total: {}",
        mappings.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn resolve_alias(service: &Service, alias: String) -> Result<()> {
    match service.resolve(&alias).await {
        Ok(url) => {
            println!("  {} -> {}", alias.cyan(), url.bright_white());
        }
        Err(StoreError::NotFound) => {
            println!("{} {}", "Alias not found:".yellow(), alias);
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    }

    Ok(())
}

/// Deletes mappings after confirmation.
///
/// # Safety
///
/// - Deleting by URL alone removes every alias of that URL
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_mappings(
    service: &Service,
    alias: Option<String>,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "Delete mappings".bright_blue().bold());
    println!();

    let target = DeleteTarget::from_parts(alias, url)
        .map_err(|_| anyhow::anyhow!("Provide --alias, --url, or both"))?;

    let prompt = match &target {
        DeleteTarget::Pair { alias, url } => format!("Delete alias '{alias}' for {url}?"),
        DeleteTarget::Alias(alias) => format!("Delete alias '{alias}'?"),
        DeleteTarget::Url(url) => format!("Delete ALL aliases for {url}?"),
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    match service.delete(target).await {
        Ok(DeleteOutcome::Single { alias, url }) => {
            println!(
                "{} {} -> {}",
                "Deleted".green().bold(),
                alias.cyan(),
                url
            );
        }
        Ok(DeleteOutcome::Bulk { url, aliases }) => {
            println!(
                "{} {} alias(es) for {}",
                "Deleted".green().bold(),
                aliases.len().to_string().bright_white().bold(),
                url
            );
            for alias in &aliases {
                println!("  - {}", alias.cyan());
            }
        }
        Err(StoreError::NotFound) => {
            println!("{}", "Nothing matched, no mappings deleted".yellow());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to delete: {}", e)),
    }

    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service
                .health_check()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}
