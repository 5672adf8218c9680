mod action;
mod app;
mod cli;
mod components;
mod config;
mod error;
mod goods;
mod input;
mod logging;

use color_eyre::eyre::Result;
use cli::Cli;
use config::ConfigManager;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse_args();

    let config = match cli.config_dir {
        Some(ref dir) if cli.write_default_config => ConfigManager::load_from(dir.clone()),
        Some(ref dir) => ConfigManager::from_existing_dir(dir.clone())?,
        None => ConfigManager::new()?,
    };

    if cli.write_default_config {
        config.write_default_configs()?;
        println!("Default config written to {}", config.config_dir().display());
        return Ok(());
    }

    let log_file = match cli.log_file {
        Some(ref path) => path.clone(),
        None => config.log_file()?,
    };
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.app_config().general.log_level.clone());
    let _log_guard = logging::init_logging(&log_file, &log_level)?;

    tracing::info!(
        "goods-form {} starting (config dir: {})",
        env!("CARGO_PKG_VERSION"),
        config.config_dir().display()
    );

    let mut app = app::App::new(&config)?;
    app.run()?;

    tracing::info!("Exiting with {} goods", app.goods().len());
    Ok(())
}
