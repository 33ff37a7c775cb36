use anyhow::Context;
use oracle_cli::process_command::run_collector;

// one control thread: sampling, encoding and delivery never overlap
#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    run_collector().await.context("Can't start collector")?;
    Ok(())
}
