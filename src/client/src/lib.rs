pub mod config_manager;
pub mod exporters;

pub mod oracle_client;

pub use oracle_client::{CycleReport, OracleClient};
