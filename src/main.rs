use clap::Parser;
use roam::core::config;
use roam::{LocationSource, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "roam", about = "Terminal map explorer with nearby points of interest")]
struct Args {
    /// How to resolve your current location
    #[arg(short, long, value_enum)]
    location: Option<LocationSource>,

    /// Grant location consent for this run
    #[arg(long)]
    allow_location: bool,

    /// Override the POI service endpoint
    #[arg(long)]
    endpoint: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to roam.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("roam.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Roam starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        config::RoamConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.location,
        args.allow_location,
        args.endpoint.as_deref(),
    );
    log::info!(
        "Resolved config: location source {:?}, consent {}",
        resolved.location_source,
        resolved.allow_location
    );

    tui::run(resolved)
}
