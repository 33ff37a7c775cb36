use super::EnumerationError;
use oracle_common::constants::PROCESS_BUFFER_CAPACITY;
use std::path::{Path, PathBuf};
use sysinfo::{ProcessRefreshKind, System, UpdateKind, IS_SUPPORTED_SYSTEM};

/// One entry of the host's process table, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawProcess {
    pub pid: u32,
    /// `None` when the OS would not tell us (permissions, the process already exited)
    pub executable_path: Option<PathBuf>,
}

impl RawProcess {
    pub fn new(pid: u32, executable_path: Option<PathBuf>) -> Self {
        Self {
            pid,
            executable_path,
        }
    }
}

pub trait ProcessSource {
    /// Lists every live process, in whatever order the OS reports them.
    fn list_processes(&mut self) -> Result<Vec<RawProcess>, EnumerationError>;
}

/// Reads the process table through `sysinfo`.
pub struct SysinfoProcessSource {
    system: System,
}

impl SysinfoProcessSource {
    pub fn new() -> Self {
        Self {
            system: System::new(),
        }
    }
}

impl Default for SysinfoProcessSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for SysinfoProcessSource {
    fn list_processes(&mut self) -> Result<Vec<RawProcess>, EnumerationError> {
        if !IS_SUPPORTED_SYSTEM {
            return Err(EnumerationError::Unsupported);
        }

        // pids get reused, so the exe is re-read on every refresh
        self.system
            .refresh_processes_specifics(ProcessRefreshKind::new().with_exe(UpdateKind::Always));

        let processes = self.system.processes();
        if processes.is_empty() {
            return Err(EnumerationError::EmptyProcessTable);
        }

        let mut listing = Vec::with_capacity(processes.len().max(PROCESS_BUFFER_CAPACITY));
        // on Linux every thread shows up as its own entry sharing the parent's exe
        listing.extend(
            processes
                .iter()
                .filter(|(_, process)| process.thread_kind().is_none())
                .map(|(pid, process)| {
                    RawProcess::new(pid.as_u32(), process.exe().map(Path::to_path_buf))
                }),
        );

        Ok(listing)
    }
}
