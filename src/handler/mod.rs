//! Request handler module
//!
//! Routing dispatch and the endpoint behaviors: queue polling, the two
//! named player assets, developer-token minting, and the generic static
//! fallback for everything else.

pub mod queue;
pub mod router;
pub mod static_files;
pub mod token;

// Re-export main entry point
pub use router::handle_request;
