pub mod constants;
pub mod http_client;
pub mod target_process;
pub mod types;
