use crate::config_manager::Config;
use crate::exporters::telemetry_forward::TelemetryForward;

use anyhow::Result;
use oracle_common::types::ProcessRecord;
use oracle_extracts::process_watcher::{
    collect_development_tools, ProcessSource, SysinfoProcessSource,
};
use std::time::Duration;
use tracing::{debug, info};

/// What happened during one enumerate → classify → encode → ship pass.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub cycle: u64,
    pub processes: Vec<ProcessRecord>,
    pub delivered: bool,
}

impl CycleReport {
    /// Names of the first one or two matched processes, for the progress line.
    pub fn sample_names(&self) -> Vec<&str> {
        self.processes.iter().take(2).map(|p| p.name()).collect()
    }
}

pub struct OracleClient<S: ProcessSource = SysinfoProcessSource> {
    source: S,
    forwarder: TelemetryForward,
    interval: Duration,
    cycle: u64,
}

impl OracleClient<SysinfoProcessSource> {
    pub fn new(config: Config) -> Result<Self> {
        Self::with_source(config, SysinfoProcessSource::new())
    }
}

impl<S: ProcessSource> OracleClient<S> {
    pub fn with_source(config: Config, source: S) -> Result<Self> {
        config.validate()?;
        info!(
            "Initializing OracleClient, shipping to {} every {:?}",
            config.ingest_endpoint,
            config.sample_interval()
        );

        let forwarder =
            TelemetryForward::try_new(&config.ingest_endpoint, config.request_timeout())?;

        Ok(OracleClient {
            source,
            forwarder,
            interval: config.sample_interval(),
            cycle: 0,
        })
    }

    pub fn cycles_completed(&self) -> u64 {
        self.cycle
    }

    /// Runs a single cycle without the trailing delay.
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.cycle += 1;

        let processes = collect_development_tools(&mut self.source);
        debug!(
            "Cycle {}: {} development tools found",
            self.cycle,
            processes.len()
        );

        let delivered = self.forwarder.ship(&processes).await;

        CycleReport {
            cycle: self.cycle,
            processes,
            delivered,
        }
    }

    /// Runs `count` cycles, each followed by the fixed delay.
    pub async fn run_cycles(&mut self, count: usize) -> Vec<CycleReport> {
        let mut reports = Vec::with_capacity(count);
        for _ in 0..count {
            self.step(|report| reports.push(report.clone())).await;
        }
        reports
    }

    /// Cycles forever. Nothing that happens inside a cycle stops the loop.
    pub async fn monitor(&mut self, mut on_cycle: impl FnMut(&CycleReport)) {
        loop {
            self.step(&mut on_cycle).await;
        }
    }

    async fn step(&mut self, mut on_cycle: impl FnMut(&CycleReport)) {
        let report = self.run_cycle().await;
        on_cycle(&report);
        tokio::time::sleep(self.interval).await;
    }
}
