pub mod targets_list;

use crate::types::ProcessRecord;
use targets_list::DEV_TOOL_INDICATORS;

/// Returns true if `path` contains at least one developer tool indicator.
///
/// Plain case-sensitive substring containment, so `/opt/nodejs-wrapper/run`
/// matches `node`. That imprecision is accepted.
pub fn is_development_tool(path: &str) -> bool {
    DEV_TOOL_INDICATORS
        .iter()
        .any(|indicator| path.contains(indicator))
}

/// Builds a [`ProcessRecord`] for `pid` only if its executable path is a developer tool.
pub fn classify(pid: u32, executable_path: &str) -> Option<ProcessRecord> {
    is_development_tool(executable_path).then(|| ProcessRecord::matched(pid, executable_path))
}
