//! JSON body posted to the ingestion endpoint:
//! `{"processes":[{"pid":42,"name":"gcc-12","path":"/usr/bin/gcc-12"}]}`

use oracle_common::types::ProcessRecord;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub path: String,
}

impl From<&ProcessRecord> for ProcessEntry {
    fn from(record: &ProcessRecord) -> Self {
        Self {
            pid: record.pid(),
            name: record.name().to_string(),
            path: record.executable_path().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TelemetryPayload {
    pub processes: Vec<ProcessEntry>,
}

impl TelemetryPayload {
    pub fn from_records(records: &[ProcessRecord]) -> Self {
        Self {
            processes: records.iter().map(ProcessEntry::from).collect(),
        }
    }
}

/// Encodes the records in the order given. Same input, same bytes.
pub fn encode_payload(records: &[ProcessRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(&TelemetryPayload::from_records(records))
}
