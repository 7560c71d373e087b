#[path = "../common/mod.rs"]
mod common;

mod config_loading;
mod error_handling;
mod watch_runtime;
