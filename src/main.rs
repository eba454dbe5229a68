//! BookVerse CLI entry point
//!
//! Without `--print` this opens the interactive finder; with it, one search
//! runs and the results go to stdout.
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/bookverse/config.toml` on Linux) and `BOOKVERSE_*`
//! environment variables. See `--show-config` for the effective values.

use bookverse::{
    Result,
    catalog::{CatalogSource, OpenLibraryClient},
    cli::Cli,
    config::BookverseConfig,
    logging, output,
    search::{SearchController, SearchOutcome},
    ui::Finder,
};
use std::sync::Arc;

/// Build the controller from config defaults overridden by the command line
fn build_controller(config: &BookverseConfig, cli: &Cli) -> SearchController {
    let mut controller = SearchController::new()
        .with_field(cli.field.unwrap_or(config.default_field))
        .with_layout(cli.layout.unwrap_or(config.default_layout))
        .with_filters_visible(config.show_filters);

    let filters = cli.filters();
    if !filters.is_empty() {
        controller.set_filter(filters);
    }
    if let Some(query) = &cli.query {
        controller.set_query_text(query.as_str());
    }
    controller
}

/// Run one search synchronously and print it
fn handle_print(config: &BookverseConfig, cli: &Cli) -> Result<()> {
    logging::init_stderr();

    let client = OpenLibraryClient::new(config.search_url.as_str(), config.timeout())?;
    let mut controller = build_controller(config, cli);

    let Some(ticket) = controller.submit_search() else {
        // Blank query: nothing to fetch
        return Ok(());
    };
    let outcome = SearchOutcome::run(&client, &ticket);
    controller.complete(outcome);

    for line in output::render_display(&controller.display(), &config.cover_urls(), cli.quiet) {
        println!("{line}");
    }
    Ok(())
}

/// Open the interactive finder
fn handle_ui(config: &BookverseConfig, cli: &Cli) -> Result<()> {
    match config.log_path() {
        Some(path) => {
            if let Err(e) = logging::init_file(&path) {
                eprintln!("Warning: could not open log file {}: {e}", path.display());
                logging::init_disabled();
            }
        }
        None => logging::init_disabled(),
    }

    let source: Arc<dyn CatalogSource> =
        Arc::new(OpenLibraryClient::new(config.search_url.as_str(), config.timeout())?);
    let controller = build_controller(config, cli);

    log::info!("Starting finder against {}", config.search_url);
    Finder::new(source, config.cover_urls())
        .with_probe_covers(config.probe_covers)
        .run(controller, cli.query.is_some())?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => BookverseConfig::load_from(path)?,
        None => BookverseConfig::load()?,
    };

    if cli.show_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let result = if cli.print {
        handle_print(&config, &cli)
    } else {
        handle_ui(&config, &cli)
    };
    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}
