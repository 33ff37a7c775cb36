use crate::logging::setup_logging;
use crate::utils::{print_banner, print_cycle};
use anyhow::{Context, Result};
use oracle_client::config_manager::ConfigLoader;
use oracle_client::OracleClient;

/// Loads the compiled-in configuration and samples forever.
///
/// Only start-up problems (config, logging, http client) return an error; once the
/// loop is running nothing ends it short of killing the process.
pub async fn run_collector() -> Result<()> {
    let config = ConfigLoader::load_default_config()?;
    setup_logging(&config.log_level)?;

    print_banner();

    let mut client = OracleClient::new(config).context("Failed to initialize collector")?;
    client.monitor(print_cycle).await;

    Ok(())
}
