use super::{ProcessSource, RawProcess};
use oracle_common::constants::PROCESS_BUFFER_CAPACITY;
use oracle_common::target_process::classify;
use oracle_common::types::ProcessRecord;
use tracing::{debug, error};

/// Samples the process table once and returns the processes that are developer tools.
///
/// Processes without a usable executable path are skipped without a word. If the
/// table itself cannot be read the failure is logged and the result is empty; the
/// caller carries on with its cycle either way.
pub fn collect_development_tools<S>(source: &mut S) -> Vec<ProcessRecord>
where
    S: ProcessSource + ?Sized,
{
    let listing = match source.list_processes() {
        Ok(listing) => listing,
        Err(e) => {
            error!("Failed to list processes: {}", e);
            return Vec::new();
        }
    };

    let mut matched = Vec::with_capacity(PROCESS_BUFFER_CAPACITY);
    matched.extend(listing.iter().filter_map(match_process));
    matched
}

fn match_process(process: &RawProcess) -> Option<ProcessRecord> {
    // pid 0 is the scheduler, never a tool
    if process.pid == 0 {
        return None;
    }

    let path = process.executable_path.as_ref()?.to_string_lossy();
    if path.is_empty() {
        return None;
    }

    let record = classify(process.pid, &path)?;
    debug!("Checking: {}", record.executable_path());
    Some(record)
}
