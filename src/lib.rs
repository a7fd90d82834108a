//! # Rosterly - Typed Client and Form Engine for a Student Roster API
//!
//! A thin typed HTTP client for a `students` REST resource plus an
//! event-driven form engine for creating and editing records.
//!
//! ## Architecture
//!
//! One linear flow, with the pure state kept apart from the async edges:
//!
//! ```text
//! route ──► Mode ──► FormController ──► StudentApi ──► backend
//!                        │    ▲              (reqwest)
//!                 edits  │    │ FormMessage (mpsc)
//!                        ▼    │
//!                    FormState (pure draft + reducer)
//!                        │
//!            on update success: StudentCache replace + Notifier
//! ```
//!
//! [`form::FormState`] owns the draft and every transition (field edits,
//! fetch lifecycle, submission outcome) as plain value updates, testable
//! without a runtime. [`controller::FormController`] dispatches requests on
//! spawned tasks and applies their completion messages back onto the state.

pub mod api;
pub mod cache;
pub mod cmd_args;
pub mod config;
pub mod controller;
pub mod form;
pub mod models;
pub mod notify;

pub use api::{ApiError, FieldErrors, StudentApi, StudentService};
pub use cache::StudentCache;
pub use controller::{FormController, FormMessage};
pub use form::{Field, FetchState, FormState, Mode, RouteError, SubmissionResult, SubmitBlocked};
pub use models::{Gender, Student, StudentDraft, StudentSummary};
pub use notify::{Notifier, TracingNotifier};
