//! # Form Controller
//!
//! Glue between the pure [`FormState`] and the async world. Requests run on
//! spawned tasks that report back over an `mpsc` channel; the owner drains
//! the channel from its event loop with [`FormController::poll_message`] or
//! awaits with [`FormController::recv_message`]. All state mutation happens
//! on the owner's side, so no locking is involved.
//!
//! The edit-mode fetch can be cancelled: the driving task is aborted and a
//! generation stamp on every fetch message discards any result that raced
//! past the abort. Mutations have no cancellation; once dispatched, a submit
//! runs to completion.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::api::{ApiError, StudentService};
use crate::cache::StudentCache;
use crate::form::{Field, FormState, Mode, SubmissionResult, SubmitBlocked};
use crate::models::Student;
use crate::notify::Notifier;

/// Completion message sent back by a spawned request task.
#[derive(Debug)]
pub enum FormMessage {
    /// The edit-mode fetch settled. Stale generations are discarded.
    FetchDone {
        generation: u64,
        result: Result<Student, ApiError>,
    },
    /// A create or update settled.
    SubmitDone { result: Result<Student, ApiError> },
}

/// Drives one add-or-edit form flow.
pub struct FormController<S: StudentService, N: Notifier> {
    service: S,
    notifier: N,
    state: FormState,
    cache: StudentCache,
    receiver: mpsc::Receiver<FormMessage>,
    sender: mpsc::Sender<FormMessage>,
    fetch_task: Option<JoinHandle<()>>,
    fetch_generation: u64,
}

impl<S: StudentService, N: Notifier> FormController<S, N> {
    /// Create a controller for the given mode. Nothing is dispatched until
    /// [`FormController::start`].
    pub fn new(mode: Mode, service: S, notifier: N) -> Self {
        let (sender, receiver) = mpsc::channel(10);
        Self {
            service,
            notifier,
            state: FormState::new(mode),
            cache: StudentCache::new(),
            receiver,
            sender,
            fetch_task: None,
            fetch_generation: 0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn cache(&self) -> &StudentCache {
        &self.cache
    }

    /// Kick off the mount-time work: in Edit mode, the fetch-by-identifier.
    /// Add mode has nothing to load.
    pub fn start(&mut self) {
        if let Mode::Edit(id) = self.mode() {
            self.dispatch_fetch(id);
        }
    }

    fn dispatch_fetch(&mut self, id: u64) {
        self.cancel_fetch();
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        self.state.begin_fetch();

        tracing::debug!(id, generation, "dispatching student fetch");
        let service = self.service.clone();
        let sender = self.sender.clone();
        self.fetch_task = Some(tokio::spawn(async move {
            let result = service.fetch_student(id).await;
            // Receiver may be gone if the controller was dropped.
            let _ = sender.send(FormMessage::FetchDone { generation, result }).await;
        }));
    }

    /// Abort the in-flight fetch, if any. Any result that still arrives
    /// carries a stale generation and is discarded, so an aborted fetch can
    /// never overwrite newer state.
    pub fn cancel_fetch(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            tracing::debug!(generation = self.fetch_generation, "aborting student fetch");
            task.abort();
        }
        self.fetch_generation += 1;
        self.state.cancel_fetch();
    }

    /// Apply one field edit to the draft.
    pub fn edit_field(&mut self, field: Field, value: String) {
        self.state.set_field(field, value);
    }

    /// Dispatch the create (Add) or update (Edit) with the full current
    /// draft. Refused while a submission is pending or while required
    /// fields are empty.
    pub fn submit(&mut self) -> Result<(), SubmitBlocked> {
        self.state.begin_submit()?;

        let draft = self.state.draft().clone();
        let service = self.service.clone();
        let sender = self.sender.clone();

        match self.mode() {
            Mode::Add => {
                tracing::debug!("dispatching student create");
                tokio::spawn(async move {
                    let result = service.create_student(draft).await;
                    let _ = sender.send(FormMessage::SubmitDone { result }).await;
                });
            }
            Mode::Edit(id) => {
                tracing::debug!(id, "dispatching student update");
                let record = draft.into_student(id);
                tokio::spawn(async move {
                    let result = service.replace_student(id, record).await;
                    let _ = sender.send(FormMessage::SubmitDone { result }).await;
                });
            }
        }
        Ok(())
    }

    /// Non-blocking: the next completion message, if one is waiting.
    pub fn poll_message(&mut self) -> Option<FormMessage> {
        self.receiver.try_recv().ok()
    }

    /// Await the next completion message. `None` only if the channel is
    /// closed, which cannot happen while the controller holds its sender.
    pub async fn recv_message(&mut self) -> Option<FormMessage> {
        self.receiver.recv().await
    }

    /// Drain and apply every waiting message; returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Some(message) = self.poll_message() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    /// Apply one completion message to the form state.
    pub fn handle_message(&mut self, message: FormMessage) {
        match message {
            FormMessage::FetchDone { generation, .. } if generation != self.fetch_generation => {
                tracing::debug!(generation, "discarding stale fetch result");
            }
            FormMessage::FetchDone { result: Ok(record), .. } => {
                tracing::debug!(id = record.id, "student fetch resolved");
                self.fetch_task = None;
                self.state.resolve_fetch(&record);
            }
            FormMessage::FetchDone { result: Err(error), .. } => {
                tracing::warn!(%error, "student fetch failed");
                self.fetch_task = None;
                self.state.fail_fetch(error.to_string());
            }
            FormMessage::SubmitDone { result } => self.apply_submit_result(result),
        }
    }

    fn apply_submit_result(&mut self, result: Result<Student, ApiError>) {
        let mode = self.mode();
        match result {
            Ok(record) => {
                match mode {
                    Mode::Add => {
                        tracing::info!(id = record.id, "student created");
                        self.notifier.success("Student created successfully");
                    }
                    Mode::Edit(_) => {
                        tracing::info!(id = record.id, "student updated");
                        self.cache.replace(record);
                        self.notifier.success("Student updated successfully");
                    }
                }
                self.state.finish_submit(SubmissionResult::Accepted { mode });
            }
            Err(ApiError::Validation(errors)) => {
                tracing::debug!(fields = errors.len(), "submission rejected by validation");
                self.state
                    .finish_submit(SubmissionResult::Rejected { mode, errors });
            }
            Err(error) => {
                // Silent-failure path: held opaque, nothing rendered per-field.
                tracing::warn!(%error, "submission failed");
                self.state.finish_submit(SubmissionResult::Errored {
                    mode,
                    message: error.to_string(),
                });
            }
        }
    }
}

impl<S: StudentService, N: Notifier> Drop for FormController<S, N> {
    fn drop(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}
