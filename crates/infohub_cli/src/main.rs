//! CLI probe for the catalog core.
//!
//! # Responsibility
//! - Drive one catalog session from command-line intents.
//! - Print derived views as text or JSON for quick local checks.

use anyhow::{Context, Result};
use clap::Parser;
use infohub_core::{default_log_level, init_logging, CatalogSession, CatalogSnapshot, SessionConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "infohub", version, about = "Browse the Information Hub catalog")]
struct Cli {
    /// Case-insensitive search text matched against titles and descriptions.
    #[arg(short, long)]
    search: Option<String>,

    /// Category label to filter by (the wildcard label selects everything).
    #[arg(short, long)]
    category: Option<String>,

    /// Article id whose bookmark is toggled; may repeat.
    #[arg(short, long = "toggle", value_name = "ID")]
    toggles: Vec<i64>,

    /// JSON seed file (array of articles) replacing the built-in dataset.
    #[arg(long, env = "INFOHUB_SEED_PATH")]
    seed: Option<PathBuf>,

    /// Print the full snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "INFOHUB_LOG_DIR")]
    log_dir: Option<String>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let mut session = open_session(cli.seed.as_ref())?;

    if let Some(category) = cli.category.as_deref() {
        session
            .select_category(category)
            .with_context(|| format!("cannot select category `{category}`"))?;
    }
    if let Some(search) = cli.search {
        session.set_search_query(search);
    }
    for id in &cli.toggles {
        if session.toggle_bookmark(*id).is_none() {
            eprintln!("warning: no article with id {id}");
        }
    }

    let snapshot = session.snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print_snapshot(&snapshot);
    }
    Ok(())
}

fn open_session(seed: Option<&PathBuf>) -> Result<CatalogSession> {
    let Some(path) = seed else {
        return Ok(CatalogSession::with_default_seed()?);
    };
    let payload = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file `{}`", path.display()))?;
    CatalogSession::from_seed_json(&payload, SessionConfig::default())
        .with_context(|| format!("failed to load seed file `{}`", path.display()))
}

fn print_snapshot(snapshot: &CatalogSnapshot) {
    println!("{} ({})", snapshot.heading, snapshot.visible_count);
    println!("categories: {}", snapshot.categories.join(", "));
    for article in &snapshot.visible {
        let mark = if article.is_bookmarked { '*' } else { ' ' };
        println!(
            "[{mark}] #{} {} | {} | {} | {}",
            article.id, article.title, article.category, article.read_time, article.date
        );
    }
    if snapshot.visible.is_empty() {
        if snapshot.store_size == 0 {
            println!("catalog is empty");
        } else {
            println!("no articles match");
        }
    }

    println!("bookmarks ({}):", snapshot.bookmarked_count);
    for article in &snapshot.bookmarked {
        println!("  #{} {} ({} • {})", article.id, article.title, article.read_time, article.date);
    }
}
