//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and store access used by
//! every command implementation.

use crate::app::services::profile_store::ProfileStore;
use crate::cli::args::GlobalArgs;
use crate::config::Config;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &GlobalArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("compost_log={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &GlobalArgs) -> Result<Config> {
    let mut config = Config::load_layered(args.config_file.as_deref())
        .context("Failed to load configuration")?;

    if let Some(store_path) = &args.store_path {
        config = config.with_store_path(store_path);
    }

    config.validate()?;
    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Open the profile store named by the configuration
pub fn open_store(config: &Config) -> Result<ProfileStore> {
    let path = &config.storage.store_path;
    info!("Using profile store: {}", path.display());
    ProfileStore::open(path)
        .with_context(|| format!("Failed to open profile store {}", path.display()))
}

/// Progress bar over `len` files, or `None` in quiet mode
pub fn file_progress(args: &GlobalArgs, len: usize) -> Option<ProgressBar> {
    if !args.show_progress() || len < 2 {
        return None;
    }

    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    Some(pb)
}
