//! Seam between the form controller and the HTTP client.
//!
//! The controller dispatches work on spawned tasks, so implementations must
//! be cheap to clone and sendable; tests substitute an in-memory stub.

use async_trait::async_trait;

use super::error::ApiError;
use super::StudentApi;
use crate::models::{Student, StudentDraft};

/// The three operations the form flow needs.
#[async_trait]
pub trait StudentService: Clone + Send + Sync + 'static {
    /// Fetch one record by identifier.
    async fn fetch_student(&self, id: u64) -> Result<Student, ApiError>;

    /// Create a record from a draft; the result carries the server-assigned
    /// identifier.
    async fn create_student(&self, draft: StudentDraft) -> Result<Student, ApiError>;

    /// Replace the record stored under `id` wholesale.
    async fn replace_student(&self, id: u64, record: Student) -> Result<Student, ApiError>;
}

#[async_trait]
impl StudentService for StudentApi {
    async fn fetch_student(&self, id: u64) -> Result<Student, ApiError> {
        self.get(id).await
    }

    async fn create_student(&self, draft: StudentDraft) -> Result<Student, ApiError> {
        self.add(&draft).await
    }

    async fn replace_student(&self, id: u64, record: Student) -> Result<Student, ApiError> {
        self.update(id, &record).await
    }
}
