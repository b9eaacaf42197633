mod config;
mod error;
mod input;
mod output;

use anyhow::Context;
use clap::Parser;
use spotrank_core::{
    rank_top_items, PageBase, PaginationBar, RankOptions, DEFAULT_VISIBLE_COUNT, MAX_RANKED_ITEMS,
    MAX_VISIBLE_COUNT,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::{SpotrankConfig, DEFAULT_TITLE_FIELD};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "spotrank", version, about = "Top-N popularity ranking and pagination bars for list screens")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file (default: ~/.config/spotrank/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Rank JSON records by views + likes + bookmarks and show the top entries
    Rank(RankArgs),
    /// Render the pagination bar for a page of a paginated list
    Pages(PagesArgs),
    /// Create a default config file
    Init,
}

#[derive(Parser)]
struct RankArgs {
    /// JSON file with the records (reads stdin when omitted)
    #[arg(long)]
    items: Option<PathBuf>,

    /// Field used to break score ties (default: "title")
    #[arg(long)]
    title_field: Option<String>,

    /// How many ranked items to show, at most 10
    #[arg(long)]
    limit: Option<usize>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct PagesArgs {
    /// Current page (1-based unless --zero-based)
    #[arg(long, allow_negative_numbers = true)]
    current: i64,

    /// Total number of pages
    #[arg(long, allow_negative_numbers = true)]
    total: i64,

    /// Number of middle page buttons (0-100)
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_VISIBLE_COUNT as u64))]
    visible: Option<u64>,

    /// Read --current as a 0-based page index
    #[arg(long)]
    zero_based: bool,

    /// Output JSON instead of a text bar
    #[arg(long)]
    json: bool,
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };

    match cli.command {
        Commands::Init => {
            config::create_default_config(&config_path)?;
            println!("Created config at {}", config_path.display());
            println!("Edit it to set your default title field, limit, etc.");
            Ok(())
        }
        Commands::Rank(args) => {
            let cfg = config::load_config(&config_path)?;
            run_rank(args, cfg)
        }
        Commands::Pages(args) => {
            let cfg = config::load_config(&config_path)?;
            run_pages(args, cfg)
        }
    }
}

fn run_rank(args: RankArgs, cfg: SpotrankConfig) -> anyhow::Result<()> {
    // CLI args win over config, config wins over built-in defaults
    let title_field = args
        .title_field
        .or(cfg.title_field)
        .unwrap_or_else(|| DEFAULT_TITLE_FIELD.to_string());
    if title_field.trim().is_empty() {
        return Err(CliError::EmptyTitleField.into());
    }

    let limit = args.limit.or(cfg.limit).unwrap_or(MAX_RANKED_ITEMS);
    if limit > MAX_RANKED_ITEMS {
        warn!(limit, max = MAX_RANKED_ITEMS, "limit above maximum, output is capped");
    }
    debug!(%title_field, limit, "rank options resolved");

    let records = input::load_records(args.items.as_deref())?;
    let options = RankOptions::new(title_field.as_str()).with_limit(limit);
    let ranked = rank_top_items(&records, &options);

    info!(input = records.len(), ranked = ranked.len(), "ranking complete");

    if args.json {
        let text = output::render_rank_json(&ranked, &title_field, records.len())
            .context("failed to serialize ranking")?;
        println!("{text}");
    } else {
        print!("{}", output::render_table(&ranked, &title_field, records.len()));
    }
    Ok(())
}

/// CLI flag wins over config, config over default. Config values are not
/// range-checked by clap, so they are capped here.
fn resolve_visible_count(flag: Option<u64>, configured: Option<usize>) -> usize {
    if let Some(visible) = flag {
        return usize::try_from(visible).unwrap_or(MAX_VISIBLE_COUNT).min(MAX_VISIBLE_COUNT);
    }
    match configured {
        Some(visible) if visible > MAX_VISIBLE_COUNT => {
            warn!(visible, max = MAX_VISIBLE_COUNT, "visible_count above maximum, capped");
            MAX_VISIBLE_COUNT
        }
        Some(visible) => visible,
        None => DEFAULT_VISIBLE_COUNT,
    }
}

fn run_pages(args: PagesArgs, cfg: SpotrankConfig) -> anyhow::Result<()> {
    let base = if args.zero_based || cfg.zero_based.unwrap_or(false) {
        PageBase::ZeroBased
    } else {
        PageBase::OneBased
    };
    let visible_count = resolve_visible_count(args.visible, cfg.visible_count);
    let current_page = base.to_one_based(args.current);

    if args.total < 0 {
        warn!(total = args.total, "negative total pages treated as 0");
    }
    debug!(?base, current_page, total = args.total, visible_count, "page options resolved");

    let bar = PaginationBar::new(current_page, args.total, visible_count);

    if args.json {
        let text = output::render_pages_json(&bar, base).context("failed to serialize pagination bar")?;
        println!("{text}");
    } else {
        println!("{}", output::render_bar(&bar));
    }
    Ok(())
}
