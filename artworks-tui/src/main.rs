mod app;
mod demo;
mod error;
mod paths;
mod render;
mod settings;
mod terminal;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use artworks_lib::model::Artwork;
use artworks_lib::source::{ArtworkClient, InMemorySource, PageSource};
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::sync::mpsc;

use app::App;
use error::AppError;
use terminal::TerminalGuard;

/// Number of records served in offline mode.
const DEMO_RECORDS: u64 = 137;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    init_logging()?;
    let settings = settings::load()?;
    info!("Starting with {:?}", settings);

    let source: Arc<dyn PageSource<Artwork>> = if settings.offline {
        info!("Offline mode: serving {} demo records", DEMO_RECORDS);
        Arc::new(InMemorySource::new(demo::artworks(DEMO_RECORDS)))
    } else {
        Arc::new(ArtworkClient::from_config(&settings.browser)?)
    };

    let (fetches, results) = mpsc::unbounded_channel();
    let app = App::new(source, settings.browser.page_size, fetches);
    let terminal = TerminalGuard::new()?;
    app.run(terminal, results).await
}

fn init_logging() -> Result<(), AppError> {
    paths::rotate_logs();
    let path = paths::log_file().unwrap_or_else(|| PathBuf::from("artworks-tui.log"));
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}
