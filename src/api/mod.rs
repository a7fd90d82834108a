//! Typed HTTP client for the `students` resource.

mod client;
mod error;
mod service;

pub use client::StudentApi;
pub use error::{ApiError, FieldErrors};
pub use service::StudentService;
