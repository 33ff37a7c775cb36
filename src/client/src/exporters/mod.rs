pub mod payload;
pub mod telemetry_forward;
