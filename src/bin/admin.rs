//! CLI administration tool for song-catalog.
//!
//! Manages the catalog directly against the database, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List songs, optionally filtered
//! cargo run --bin admin -- song list --group muse
//!
//! # Add a song (fetches metadata like POST /api/v1/songs)
//! cargo run --bin admin -- song add "Muse" "Supermassive Black Hole"
//!
//! # Delete a song
//! cargo run --bin admin -- song delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `song_catalog::config`): `DATABASE_URL`, or the
//! `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` parts.
//! `EXTERNAL_API_URL` is needed for `song add` only.

use song_catalog::api::dto::pagination::MAX_PAGE_SIZE;
use song_catalog::application::services::SongService;
use song_catalog::config::Config;
use song_catalog::domain::repositories::SongFilter;
use song_catalog::infrastructure::enrichment::HttpEnrichmentClient;
use song_catalog::infrastructure::persistence::PgSongRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::num::NonZeroU32;
use std::sync::Arc;

/// CLI tool for managing song-catalog.
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
    /// Manage songs
    Song {
        #[command(subcommand)]
        action: SongAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Song management subcommands.
#[derive(Subcommand)]
enum SongAction {
    /// List songs
    List {
        /// Case-insensitive substring of the group name
        #[arg(short, long)]
        group: Option<String>,

        /// Case-insensitive substring of the title
        #[arg(short, long)]
        title: Option<String>,

        /// Page number
        #[arg(short, long, default_value_t = NonZeroU32::MIN)]
        page: NonZeroU32,

        /// Songs per page (1-100)
        #[arg(long, default_value = "20", value_parser = parse_page_size)]
        page_size: NonZeroU32,
    },

    /// Add a song, fetching its metadata from the external service
    Add {
        /// Group name
        group: String,

        /// Song title
        title: String,
    },

    /// Delete a song
    Delete {
        /// Song ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

type AdminService = SongService<PgSongRepository, HttpEnrichmentClient>;

/// Accepts page sizes in the same range as the HTTP API.
fn parse_page_size(value: &str) -> Result<NonZeroU32, String> {
    let size: u32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;

    NonZeroU32::new(size)
        .filter(|s| s.get() <= MAX_PAGE_SIZE)
        .ok_or_else(|| format!("page size must be between 1 and {MAX_PAGE_SIZE}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Song { action } => handle_song_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Builds the same service the HTTP API uses.
///
/// Only `song add` reaches the metadata service; other commands pass an
/// empty URL.
fn build_service(pool: &PgPool, external_api_url: String) -> AdminService {
    SongService::new(
        Arc::new(PgSongRepository::new(Arc::new(pool.clone()))),
        Arc::new(HttpEnrichmentClient::new(external_api_url)),
    )
}

/// Dispatches song management commands.
async fn handle_song_action(action: SongAction, pool: &PgPool) -> Result<()> {
    match action {
        SongAction::List {
            group,
            title,
            page,
            page_size,
        } => {
            let filter = SongFilter::new(page, page_size)
                .with_group(group)
                .with_title(title);
            list_songs(&build_service(pool, String::new()), filter).await?;
        }
        SongAction::Add { group, title } => {
            let external_api_url =
                Config::load_external_api_url().context("Cannot add songs")?;
            add_song(&build_service(pool, external_api_url), group, title).await?;
        }
        SongAction::Delete { id, yes } => {
            delete_song(&build_service(pool, String::new()), id, yes).await?;
        }
    }

    Ok(())
}

/// Lists one page of songs.
///
/// # Output Format
///
/// ```text
/// 🎵 Songs (page 1)
///
///   ID    Group                Title                          Released
///   ───────────────────────────────────────────────────────────────────────
///   1     Muse                 Supermassive Black Hole        16.07.2006
/// ```
async fn list_songs(service: &AdminService, filter: SongFilter) -> Result<()> {
    let page = filter.page;
    println!(
        "{}",
        format!("🎵 Songs (page {})", page).bright_blue().bold()
    );
    println!();

    let songs = service
        .get_songs(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list songs: {}", e))?;

    if songs.is_empty() {
        println!("{}", "  No songs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<30} {:<12}",
        "ID".bright_white().bold(),
        "Group".bright_white().bold(),
        "Title".bright_white().bold(),
        "Released".bright_white().bold()
    );
    println!("  {}", "─".repeat(71).bright_black());

    for song in &songs {
        println!(
            "  {:<5} {:<20} {:<30} {}",
            song.id.to_string().bright_black(),
            song.group.cyan(),
            song.title,
            song.release_date.bright_black()
        );
    }

    println!();
    println!("  Shown: {}", songs.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Adds a song through the metadata service.
async fn add_song(service: &AdminService, group: String, title: String) -> Result<()> {
    println!("{}", "➕ Add Song".bright_blue().bold());
    println!();
    println!("  Group: {}", group.cyan());
    println!("  Title: {}", title.cyan());
    println!();

    let song = service
        .add_song(group, title)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add song: {}", e))?;

    println!("{}", "✅ Song added".green().bold());
    println!("  ID:       {}", song.id.to_string().bright_white().bold());
    println!("  Released: {}", song.release_date);
    println!("  Link:     {}", song.link.bright_cyan());
    println!();

    Ok(())
}

/// Deletes a song after confirmation.
async fn delete_song(service: &AdminService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Song".bright_blue().bold());
    println!();

    let song = service
        .get_song_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load song {}: {}", id, e))?;

    println!("  {} - {}", song.group.cyan(), song.title);
    println!("  ID: {}", song.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this song?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_song(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete song: {}", e))?;

    println!("{}", "✅ Song deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
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

            let songs = build_service(pool, String::new())
                .count_songs()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count songs: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Songs:      {}", songs.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
