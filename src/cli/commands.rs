use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

use crate::config::{DATA_DIR_ENV, FEED_FILE, HISTORY_FILE, SERVICES_FILE, resolve_data_file};
use crate::feed::{
    ONBOARDING_MESSAGE, ReplyDisplay, annotate_relative_days, partition_by_relative_day,
    reply_display,
};
use crate::logging::{self, LogTarget};
use crate::models::{Thread, display_secret};
use crate::parsers::{load_entity_history, load_feed, load_services};
use crate::timeline::{VersionType, compute_visible_revisions, empty_placeholder};
use crate::tui::{AppOptions, run_interactive};
use crate::utils::strip_ansi_codes;

#[derive(Parser)]
#[command(name = "catalog-timeline")]
#[command(version)]
#[command(about = "Browse entity version history and activity threads from catalog exports", long_about = None)]
pub struct Cli {
    /// Directory holding history.json, feed.json and services.json
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    pub data_dir: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Append logs to this file (the interactive view logs nowhere else)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print an entity's version timeline
    Versions(VersionsArgs),
    /// Print the activity feed grouped by day
    Feed(FeedArgs),
    /// List service connections with secrets masked
    Services(ServicesArgs),
    /// Open the interactive timeline and feed view
    View(ViewArgs),
}

#[derive(Args)]
pub struct VersionsArgs {
    /// Entity history export
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Show all, major or minor revisions
    #[arg(long, default_value = "all")]
    pub filter: VersionType,
}

#[derive(Args)]
pub struct FeedArgs {
    /// Thread list export
    #[arg(long)]
    pub feed: Option<PathBuf>,

    /// Reference time for day labels (RFC 3339), defaults to now
    #[arg(long)]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Args)]
pub struct ServicesArgs {
    /// Service connection export
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct ViewArgs {
    #[arg(long)]
    pub history: Option<PathBuf>,

    #[arg(long)]
    pub feed: Option<PathBuf>,

    /// Allow threads to open in the side panel
    #[arg(long)]
    pub enable_panel: bool,

    /// Author name recorded on replies
    #[arg(long, default_value = "anonymous")]
    pub user: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let target = match (&cli.command, cli.log_file.as_deref()) {
        (_, Some(path)) => LogTarget::File(path),
        (Some(Commands::View(_)), None) => LogTarget::Off,
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, target)?;

    let data_dir = cli.data_dir.as_deref();
    match &cli.command {
        Some(Commands::Versions(args)) => show_versions(args, data_dir),
        Some(Commands::Feed(args)) => show_feed(args, data_dir),
        Some(Commands::Services(args)) => show_services(args, data_dir),
        Some(Commands::View(args)) => open_view(args, data_dir),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn show_versions(args: &VersionsArgs, data_dir: Option<&Path>) -> Result<()> {
    let path = resolve_data_file(args.history.as_deref(), data_dir, HISTORY_FILE)?;
    let history = load_entity_history(&path)?;
    let visible = compute_visible_revisions(&history.versions, args.filter);

    let entity = if history.entity_type.is_empty() {
        "entity".to_string()
    } else {
        strip_ansi_codes(&history.entity_type)
    };
    println!(
        "Version history: {} ({} of {} shown, filter: {})",
        entity,
        visible.len(),
        history.versions.len(),
        args.filter
    );
    println!("================================");

    if visible.is_empty() {
        println!("{}", empty_placeholder(args.filter));
        return Ok(());
    }

    for record in visible {
        let badge = if args.filter == VersionType::All && record.is_major() { " [Major]" } else { "" };
        println!(
            "v{}{}  {}  {}",
            strip_ansi_codes(&record.version),
            badge,
            strip_ansi_codes(&record.updated_by),
            record.updated_at.format("%Y-%m-%d %H:%M")
        );
        if let Some(summary) = record.change_description.as_ref().and_then(|c| c.summary()) {
            println!("    {}", strip_ansi_codes(&summary));
        }
    }

    Ok(())
}

fn show_feed(args: &FeedArgs, data_dir: Option<&Path>) -> Result<()> {
    let path = resolve_data_file(args.feed.as_deref(), data_dir, FEED_FILE)?;
    let feed = load_feed(&path)?;

    if feed.is_empty() {
        println!("{}", ONBOARDING_MESSAGE);
        return Ok(());
    }

    let now = args.now.unwrap_or_else(Utc::now);
    let annotated = annotate_relative_days(&feed, &now);

    for (idx, group) in partition_by_relative_day(&annotated).iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("== {} ==", group.relative_day);
        for thread in &group.threads {
            print_thread(thread);
        }
    }

    Ok(())
}

fn print_thread(thread: &Thread) {
    let about = thread.entity_link().map(|l| l.to_string()).unwrap_or_else(|| thread.about.clone());
    println!(
        "- {} on {} at {}",
        strip_ansi_codes(&thread.created_by),
        strip_ansi_codes(&about),
        thread.thread_ts.format("%H:%M")
    );
    println!("  {}", strip_ansi_codes(&thread.message));

    match reply_display(thread) {
        ReplyDisplay::ComposerOnly => {}
        ReplyDisplay::Inline { count, replies } => {
            println!("  {}", ReplyDisplay::count_label(count));
            for post in replies {
                println!("    > {}: {}", strip_ansi_codes(&post.from), strip_ansi_codes(&post.message));
            }
        }
        ReplyDisplay::ViewAll { count } => println!("  {}", ReplyDisplay::view_all_label(count)),
    }
}

fn show_services(args: &ServicesArgs, data_dir: Option<&Path>) -> Result<()> {
    let path = resolve_data_file(args.file.as_deref(), data_dir, SERVICES_FILE)?;
    let services = load_services(&path)?;

    println!("{:<10} {:<24} {:<12} {:<32} SECRET", "CATEGORY", "NAME", "TYPE", "ENDPOINT");
    for service in &services {
        println!(
            "{:<10} {:<24} {:<12} {:<32} {}",
            service.category().to_string(),
            strip_ansi_codes(service.name()),
            strip_ansi_codes(service.vendor().unwrap_or("-")),
            strip_ansi_codes(&service.endpoint().unwrap_or_else(|| "-".to_string())),
            display_secret(service.secret())
        );
    }
    println!();
    println!("{} services", services.len());

    Ok(())
}

fn open_view(args: &ViewArgs, data_dir: Option<&Path>) -> Result<()> {
    let history = match args.history.as_deref() {
        Some(path) => load_entity_history(path)?,
        None => {
            let path = resolve_data_file(None, data_dir, HISTORY_FILE)?;
            load_default(&path, load_entity_history)?.unwrap_or_default()
        }
    };

    let feed = match args.feed.as_deref() {
        Some(path) => load_feed(path)?,
        None => {
            let path = resolve_data_file(None, data_dir, FEED_FILE)?;
            load_default(&path, load_feed)?.unwrap_or_default()
        }
    };

    let options = AppOptions { enable_side_panel: args.enable_panel, user: args.user.clone() };
    run_interactive(history, feed, options).context("Interactive view failed")
}

/// Load a file found by its default name; a missing file means no data yet
fn load_default<T, E>(path: &Path, load: impl FnOnce(&Path) -> Result<T, E>) -> Result<Option<T>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    if !path.exists() {
        warn!(path = %path.display(), "data file not found, starting empty");
        return Ok(None);
    }
    let value = load(path)?;
    info!(path = %path.display(), "loaded data file");
    Ok(Some(value))
}
