pub mod process_watcher;
