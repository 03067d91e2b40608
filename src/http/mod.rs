//! HTTP protocol layer module
//!
//! HTTP protocol-related base functionality, decoupled from specific
//! business logic.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use response::{build_404_response, build_501_response, build_empty_404_response};
