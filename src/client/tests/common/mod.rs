#![allow(dead_code)]

pub mod test_server;

use oracle_client::config_manager::{Config, ConfigLoader};
use oracle_extracts::process_watcher::{EnumerationError, ProcessSource, RawProcess};
use std::path::PathBuf;

pub const TEST_INTERVAL_MS: u64 = 20;

pub fn test_config(endpoint: String) -> Config {
    Config {
        ingest_endpoint: endpoint,
        sample_interval_ms: TEST_INTERVAL_MS,
        request_timeout_ms: 2000,
        ..ConfigLoader::load_default_config().unwrap()
    }
}

/// A process table that returns the same listing every cycle.
pub struct FixedSource {
    listing: Result<Vec<RawProcess>, EnumerationError>,
    pub calls: usize,
}

impl FixedSource {
    pub fn new(processes: &[(u32, Option<&str>)]) -> Self {
        let listing = processes
            .iter()
            .map(|(pid, path)| RawProcess::new(*pid, path.map(PathBuf::from)))
            .collect();
        Self {
            listing: Ok(listing),
            calls: 0,
        }
    }

    pub fn failing(error: EnumerationError) -> Self {
        Self {
            listing: Err(error),
            calls: 0,
        }
    }
}

impl ProcessSource for FixedSource {
    fn list_processes(&mut self) -> Result<Vec<RawProcess>, EnumerationError> {
        self.calls += 1;
        self.listing.clone()
    }
}
