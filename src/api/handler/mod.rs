pub mod handler;

pub use handler::{health_handler, run_audit_handler, run_audit_query_handler};
