use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use vitae::{backend::factory, config::Config, logger::Logger, ui};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file to this path and exit
    #[arg(long, value_name = "PATH")]
    generate_config: Option<PathBuf>,

    /// Base URL of the resume service
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Serve the resume from a local JSON file instead of the service
    #[arg(long, value_name = "PATH")]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        Config::generate_default_config(path)?;
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.api_url, cli.fixture);
    config.validate()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.log(format!("Startup: vitae v{}", env!("CARGO_PKG_VERSION")));

    let backend = factory::create_backend(&config.api)?;

    ui::run_app(&config, backend, logger).await
}
