//! HTTP surface: admin gate, report handler, router.

pub mod access;
pub mod handler;
pub mod router;

pub use router::{router, serve, start_info_server, SERVE_PATH};
