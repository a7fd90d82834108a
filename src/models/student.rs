//! # Student Records
//!
//! Wire-level value types for the `students` resource: the full record,
//! the identifierless draft held by the form, and the list projection.

use serde::{Deserialize, Serialize};

/// A full student record as the backend stores it.
///
/// The identifier is assigned server-side on creation. Every other field is
/// free text at the type level; the server is the sole authority on semantic
/// shape (email format, BTC address format) and reports violations through
/// its 422 envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub country: String,
    /// Base64-encoded image data.
    pub avatar: String,
    pub btc_address: String,
}

/// The form's transient, exclusively-owned copy of a record: a [`Student`]
/// minus the identifier. Serialized as the body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub country: String,
    pub avatar: String,
    pub btc_address: String,
}

impl StudentDraft {
    /// True when every field holds an empty string (the initial form state).
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.gender.is_empty()
            && self.country.is_empty()
            && self.avatar.is_empty()
            && self.btc_address.is_empty()
    }

    /// Attach an identifier, producing the full record sent on update.
    pub fn into_student(self, id: u64) -> Student {
        Student {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            gender: self.gender,
            country: self.country,
            avatar: self.avatar,
            btc_address: self.btc_address,
        }
    }
}

impl From<Student> for StudentDraft {
    fn from(record: Student) -> Self {
        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            email: record.email,
            gender: record.gender,
            country: record.country,
            avatar: record.avatar,
            btc_address: record.btc_address,
        }
    }
}

/// Projection returned by the paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: u64,
    pub avatar: String,
    pub email: String,
    pub last_name: String,
}
