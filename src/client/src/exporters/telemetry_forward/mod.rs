//! Delivers matched processes to the ingestion endpoint.
//!
//! One POST per non-empty cycle, no retries: a failed delivery is reported and
//! the next cycle starts from scratch.
//!
//! # Example
//!
//! ```rust,no_run
//! # use std::time::Duration;
//! # use oracle_client::exporters::telemetry_forward::TelemetryForward;
//! #
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> anyhow::Result<()> {
//! let forwarder = TelemetryForward::try_new(
//!     "http://127.0.0.1:8000/telemetry/ingest",
//!     Duration::from_secs(10),
//! )?;
//! let delivered = forwarder.ship(&[]).await; // empty: no request, still a success
//! assert!(delivered);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::TelemetryForward;
pub use error::{TelemetryForwardError, TelemetryForwardResult};
