// Library root for the `roomshift` crate.
// Reexports the main modules and the `run_server` convenience entry point.
pub mod algorithm;
pub mod analithics;
pub mod api_json;
pub mod csvdata;
pub mod models;
pub mod server;
pub mod server_handlers;

/// Runs the HTTP server (reexport for easy use from `main`)
pub use server::run_server;
