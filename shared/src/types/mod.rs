//! Common type definitions
//!
//! - `response` - API response wrappers

pub mod response;

pub use response::ErrorResponse;
