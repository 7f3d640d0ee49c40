use anyhow::Context;
use clap::Parser;
use starfolio::cli::Cli;
use starfolio::config::Config;
use starfolio::logging;
use starfolio::shutdown::ShutdownHandle;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)?;
    cli.apply(&mut config);
    config.validate()?;
    tracing::info!(config = %config_path.display(), "configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("building tokio runtime")?;

    let shutdown = ShutdownHandle::new();
    shutdown
        .register_os_signals()
        .context("registering signal handlers")?;

    starfolio::ui::runtime::run(&config, runtime.handle(), shutdown)?;
    runtime.shutdown_timeout(Duration::from_secs(1));
    Ok(())
}
