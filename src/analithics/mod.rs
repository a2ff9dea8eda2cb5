pub mod db;
pub mod insertions;
pub mod queries;

pub use db::init_db;
pub use insertions::log_request;
pub use queries::{recent_requests, usage_summary};
