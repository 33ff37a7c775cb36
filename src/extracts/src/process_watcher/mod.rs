//! Process enumeration: lists live processes and keeps the developer tools.
//!
//! The host is queried through [`ProcessSource`]; [`SysinfoProcessSource`] is the
//! production backend and tests plug in their own fixed tables.

mod error;
mod source;
mod watcher;

pub use error::EnumerationError;
pub use source::{ProcessSource, RawProcess, SysinfoProcessSource};
pub use watcher::collect_development_tools;
