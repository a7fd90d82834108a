//! Route-based mode detection.
//!
//! The form's mode is derived once from the route path and fixed for the
//! view's lifetime: `/students/add` means Add, `/students/{id}` with a
//! numeric identifier means Edit. A non-numeric identifier is rejected here,
//! which is what suppresses the edit-mode fetch downstream.

use thiserror::Error;

/// Add or Edit, fixed per view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Add,
    Edit(u64),
}

impl Mode {
    pub fn is_add(&self) -> bool {
        matches!(self, Mode::Add)
    }

    /// The identifier, in Edit mode.
    pub fn student_id(&self) -> Option<u64> {
        match self {
            Mode::Add => None,
            Mode::Edit(id) => Some(*id),
        }
    }

    /// Derive the mode from a route path.
    pub fn from_route(path: &str) -> Result<Mode, RouteError> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["students", "add"] => Ok(Mode::Add),
            ["students", id] => id
                .parse::<u64>()
                .map(Mode::Edit)
                .map_err(|_| RouteError::BadIdentifier(id.to_string())),
            _ => Err(RouteError::NotAStudentForm(path.to_string())),
        }
    }
}

/// Routes the form does not handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route `{0}` does not address a student form")]
    NotAStudentForm(String),
    #[error("`{0}` is not a numeric student identifier")]
    BadIdentifier(String),
}
