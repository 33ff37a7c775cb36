use std::fmt;

/// Errors that can occur while delivering a telemetry payload
#[derive(Debug)]
pub enum TelemetryForwardError {
    /// Failed to serialize the payload to JSON
    Serialization(serde_json::Error),

    /// Network request failed (refused, DNS, timeout, ...)
    Network(reqwest::Error),

    /// Server answered with a non-2XX status code
    Server { status: u16 },
}

impl fmt::Display for TelemetryForwardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryForwardError::Serialization(e) => {
                write!(f, "Failed to serialize payload: {}", e)
            }
            TelemetryForwardError::Network(e) => write!(f, "Network request failed: {}", e),
            TelemetryForwardError::Server { status } => write!(f, "Server error {}", status),
        }
    }
}

impl std::error::Error for TelemetryForwardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryForwardError::Serialization(e) => Some(e),
            TelemetryForwardError::Network(e) => Some(e),
            TelemetryForwardError::Server { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TelemetryForwardError {
    fn from(err: serde_json::Error) -> Self {
        TelemetryForwardError::Serialization(err)
    }
}

impl From<reqwest::Error> for TelemetryForwardError {
    fn from(err: reqwest::Error) -> Self {
        TelemetryForwardError::Network(err)
    }
}

/// Result type for telemetry forwarding operations
pub type TelemetryForwardResult<T> = Result<T, TelemetryForwardError>;
