//! Success notifications.
//!
//! The toast surface itself is an external collaborator; this trait is the
//! fixed call contract to it.

/// Sink for user-facing success messages.
pub trait Notifier {
    fn success(&self, message: &str);
}

/// Default sink: structured log line at info.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!("{message}");
    }
}
