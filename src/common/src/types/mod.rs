pub mod process;

pub use process::ProcessRecord;
