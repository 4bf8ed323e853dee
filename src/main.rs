use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use postdeck::core::config;
use postdeck::tui;

#[derive(Parser)]
#[command(name = "postdeck", about = "Terminal viewer for the JSONPlaceholder posts listing")]
struct Args {
    /// Listing endpoint override
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Config file path (default: ~/.postdeck/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config(args.config).unwrap_or_else(|e| {
        eprintln!("warning: {e}; falling back to defaults");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.endpoint.as_deref());

    // Initialize file logger - the fetch failure detail lands here, never on screen
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Postdeck starting up, endpoint: {}", resolved.endpoint);

    tui::run(resolved)
}
