//! API models for requests and responses

pub mod api;
pub mod lead;

// Re-export commonly used types
pub use api::*;
pub use lead::*;
