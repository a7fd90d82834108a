//! Value types shared across the client and the form engine.

mod gender;
mod student;

pub use gender::Gender;
pub use student::{Student, StudentDraft, StudentSummary};
