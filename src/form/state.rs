//! # Form State
//!
//! The form's state container: an owned draft plus the fetch and submission
//! lifecycles, mutated only through the methods here. Pure value type, no
//! I/O, so every transition is testable without a runtime.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::api::FieldErrors;
use crate::models::{Student, StudentDraft};

use super::route::Mode;

/// The editable form fields. `name()` is the wire name, which is also the
/// key used by the server's field-error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Gender,
    Country,
    FirstName,
    LastName,
    Avatar,
    BtcAddress,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Email,
        Field::Gender,
        Field::Country,
        Field::FirstName,
        Field::LastName,
        Field::Avatar,
        Field::BtcAddress,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Gender => "gender",
            Field::Country => "country",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Avatar => "avatar",
            Field::BtcAddress => "btc_address",
        }
    }

    /// Whether the field must be non-empty before a submit. Gender is a
    /// selection input that may stay unset; the server's 422 is the only
    /// authority on it.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Gender)
    }

    fn slot<'a>(&self, draft: &'a mut StudentDraft) -> &'a mut String {
        match self {
            Field::Email => &mut draft.email,
            Field::Gender => &mut draft.gender,
            Field::Country => &mut draft.country,
            Field::FirstName => &mut draft.first_name,
            Field::LastName => &mut draft.last_name,
            Field::Avatar => &mut draft.avatar,
            Field::BtcAddress => &mut draft.btc_address,
        }
    }

    fn value_of<'a>(&self, draft: &'a StudentDraft) -> &'a str {
        match self {
            Field::Email => &draft.email,
            Field::Gender => &draft.gender,
            Field::Country => &draft.country,
            Field::FirstName => &draft.first_name,
            Field::LastName => &draft.last_name,
            Field::Avatar => &draft.avatar,
            Field::BtcAddress => &draft.btc_address,
        }
    }

    fn record_value<'a>(&self, record: &'a Student) -> &'a str {
        match self {
            Field::Email => &record.email,
            Field::Gender => &record.gender,
            Field::Country => &record.country,
            Field::FirstName => &record.first_name,
            Field::LastName => &record.last_name,
            Field::Avatar => &record.avatar,
            Field::BtcAddress => &record.btc_address,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle of the edit-mode fetch, tracked explicitly so an in-flight load
/// can never be confused with a settled one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Outcome of the last submit, tagged with the mode that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The server accepted the record.
    Accepted { mode: Mode },
    /// HTTP 422: per-field validation messages.
    Rejected { mode: Mode, errors: FieldErrors },
    /// Any other failure, held opaque.
    Errored { mode: Mode, message: String },
}

impl SubmissionResult {
    pub fn mode(&self) -> Mode {
        match self {
            SubmissionResult::Accepted { mode }
            | SubmissionResult::Rejected { mode, .. }
            | SubmissionResult::Errored { mode, .. } => *mode,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionResult::Accepted { .. })
    }
}

/// Reasons a submit is refused before anything is dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in progress")]
    AlreadySubmitting,
    #[error("required fields are empty: {}", .0.iter().map(Field::name).collect::<Vec<_>>().join(", "))]
    MissingFields(Vec<Field>),
}

/// The form's state: mode, draft, fetch lifecycle, submission outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    mode: Mode,
    draft: StudentDraft,
    fetch: FetchState,
    touched: HashSet<Field>,
    submission: Option<SubmissionResult>,
    submitting: bool,
}

impl FormState {
    /// All fields empty, nothing in flight.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            draft: StudentDraft::default(),
            fetch: FetchState::Idle,
            touched: HashSet::new(),
            submission: None,
            submitting: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &StudentDraft {
        &self.draft
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    pub fn submission(&self) -> Option<&SubmissionResult> {
        self.submission.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field_value(&self, field: Field) -> &str {
        field.value_of(&self.draft)
    }

    /// Replace exactly one field's value, mark it touched, and clear any
    /// previous submission result so stale outcomes don't linger across
    /// edits.
    pub fn set_field(&mut self, field: Field, value: String) {
        *field.slot(&mut self.draft) = value;
        self.touched.insert(field);
        self.submission = None;
    }

    /// Mark the edit-mode fetch as in flight.
    pub fn begin_fetch(&mut self) {
        self.fetch = FetchState::Loading;
    }

    /// Apply a fetched record. Fields the user already touched keep their
    /// edits; every untouched field takes the record's value. With an
    /// untouched draft this is a wholesale replacement.
    pub fn resolve_fetch(&mut self, record: &Student) {
        for field in Field::ALL {
            if !self.touched.contains(&field) {
                *field.slot(&mut self.draft) = field.record_value(record).to_string();
            }
        }
        self.fetch = FetchState::Loaded;
    }

    pub fn fail_fetch(&mut self, message: String) {
        self.fetch = FetchState::Failed(message);
    }

    /// An aborted or superseded fetch settles back to idle without touching
    /// the draft.
    pub fn cancel_fetch(&mut self) {
        if self.fetch == FetchState::Loading {
            self.fetch = FetchState::Idle;
        }
    }

    /// Required fields that fail the presence requirement.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| field.is_required() && field.value_of(&self.draft).is_empty())
            .collect()
    }

    /// Gate a submit: refuses while one is pending and enforces the
    /// presence requirement. No semantic validation happens client-side.
    pub fn begin_submit(&mut self) -> Result<(), SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(SubmitBlocked::MissingFields(missing));
        }
        self.submitting = true;
        Ok(())
    }

    /// Record a submit outcome. An accepted Add resets the draft to the
    /// all-empty initial state; an accepted Edit leaves the draft as-is.
    pub fn finish_submit(&mut self, result: SubmissionResult) {
        self.submitting = false;
        if result.is_accepted() && self.mode.is_add() {
            self.draft = StudentDraft::default();
            self.touched.clear();
        }
        self.submission = Some(result);
    }

    /// The validation message for a field, shown only when the stored
    /// result was produced in this form's own mode.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        match &self.submission {
            Some(SubmissionResult::Rejected { mode, errors }) if *mode == self.mode => {
                errors.get(field.name()).map(String::as_str)
            }
            _ => None,
        }
    }
}
