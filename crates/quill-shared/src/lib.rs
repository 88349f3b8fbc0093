//! # Quill Shared
//!
//! Types shared between the API server and clients: request and response
//! bodies, the error body, and the blog editor's publish state machine.

pub mod dto;
pub mod editor;
pub mod response;

pub use response::ErrorResponse;
