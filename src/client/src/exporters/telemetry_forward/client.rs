use super::{TelemetryForwardError, TelemetryForwardResult};
use crate::exporters::payload::encode_payload;
use anyhow::{Context, Result};
use oracle_common::http_client::send_json_body;
use oracle_common::types::ProcessRecord;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// HTTP client for forwarding process telemetry to the ingestion endpoint
pub struct TelemetryForward {
    endpoint: String,
    client: Client,
}

impl TelemetryForward {
    /// Builds the forwarder once; the underlying connection pool is reused every cycle.
    pub fn try_new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build telemetry http client")?;

        Ok(TelemetryForward {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs an encoded document. Any transport failure or non-2XX status is an error.
    pub async fn send_payload(&self, body: String) -> TelemetryForwardResult<()> {
        let status = send_json_body(&self.client, &self.endpoint, body).await?;

        if !status.is_success() {
            return Err(TelemetryForwardError::Server {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    /// Encodes and sends the records. An empty list sends nothing.
    pub async fn forward(&self, records: &[ProcessRecord]) -> TelemetryForwardResult<()> {
        if records.is_empty() {
            debug!("No processes to send, skipping network call");
            return Ok(());
        }

        let start_time = Instant::now();
        let body = encode_payload(records)?;
        self.send_payload(body).await?;

        debug!(
            "Sent {} processes to {}, elapsed: {:?}",
            records.len(),
            self.endpoint,
            start_time.elapsed()
        );
        Ok(())
    }

    /// Same as [`forward`](Self::forward), collapsed to a success flag.
    pub async fn ship(&self, records: &[ProcessRecord]) -> bool {
        match self.forward(records).await {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to deliver telemetry to {}: {}", self.endpoint, e);
                false
            }
        }
    }
}
