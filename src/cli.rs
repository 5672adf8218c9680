use std::path::PathBuf;

use clap::Parser;

/// Goods-Form: add named, colored goods to a list from the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "goods-form")]
#[command(author = "RidgetopAI")]
#[command(version)]
#[command(about = "Terminal form for adding colored goods to a list", long_about = None)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). Defaults to the config file value.
    #[arg(long, env = "GOODS_FORM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to this file instead of the default data directory
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Read config.toml and theme.toml from this directory
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Write default config files if missing, then exit
    #[arg(long, default_value_t = false)]
    pub write_default_config: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
