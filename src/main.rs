use clap::{Parser, Subcommand};
use menagerie::SourceKind;
use menagerie::catalog::build_source;
use menagerie::core::config::{CliOverrides, ResolvedConfig, load_config, resolve};
use menagerie::core::item::Catalog;
use menagerie::core::view::{describe_slots, render_page};
use menagerie::tui;
use menagerie::tui::components::card_list::EMPTY_MESSAGE;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "menagerie", about = "Browse a creature catalog in the terminal")]
struct Args {
    /// Catalog source to browse
    #[arg(short, long, value_enum)]
    source: Option<SourceKind>,

    /// Catalog listing for the file source
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    /// Directory of `<id>.json` detail records for the file source
    #[arg(long)]
    detail_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print one page of the catalog and exit
    List {
        /// Search term
        #[arg(long, default_value = "")]
        search: String,

        /// Page number, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        source: args.source,
        catalog_file: args.catalog_file,
        detail_dir: args.detail_dir,
    };
    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let resolved = resolve(&config, &cli);

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    log::info!("Menagerie starting up with source: {}", resolved.source);

    match args.command {
        Some(Command::List { search, page }) => list(&resolved, &search, page).await,
        None => tui::run(resolved),
    }
}

/// Prints the requested page the same way the browse view lays it out.
async fn list(config: &ResolvedConfig, search: &str, page: usize) -> std::io::Result<()> {
    let source = build_source(config).map_err(std::io::Error::other)?;
    let entries = source
        .fetch_catalog()
        .await
        .map_err(std::io::Error::other)?;
    let catalog = Catalog::from_entries(entries);
    let last = render_page(&catalog, search, 0).max_page_index.unwrap_or(0);
    let view = render_page(&catalog, search, page.saturating_sub(1).min(last));

    if view.is_empty() {
        println!("{EMPTY_MESSAGE}");
        return Ok(());
    }
    for item in &view.items {
        println!("#{:0>3}  {}", item.id, item.display_name());
    }
    if view.shows_controls() {
        println!();
        println!("{}", describe_slots(&view));
    }
    println!(
        "{} of {} (page {})",
        view.total_matches,
        catalog.len(),
        view.page_index + 1
    );
    Ok(())
}
