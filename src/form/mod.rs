//! The form engine: route-derived mode plus the pure draft state container.

mod route;
mod state;

pub use route::{Mode, RouteError};
pub use state::{Field, FetchState, FormState, SubmissionResult, SubmitBlocked};
