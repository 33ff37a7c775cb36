pub const BANNER: &str = "--- System Oracle: Collector Active ---";

pub const DEFAULT_INGEST_ENDPOINT: &str = "http://127.0.0.1:8000/telemetry/ingest";

pub const SAMPLE_INTERVAL_MS: u64 = 5000;
// the collector never retries, this only bounds a stalled endpoint
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const PROCESS_BUFFER_CAPACITY: usize = 64;
