//! Progress notification port
//!
//! The AI round-trip is the only slow operation in the system; this port
//! lets the presentation layer show a spinner while it runs.

/// Callback for progress updates around an AI request.
///
/// Implementations live in the presentation layer and can display progress
/// in various ways (console spinner, plain text, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called just before the request is sent. `label` names the operation.
    fn on_request_start(&self, label: &str);

    /// Called once the round-trip finishes, successfully or not.
    fn on_request_complete(&self, label: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _label: &str) {}
    fn on_request_complete(&self, _label: &str, _success: bool) {}
}
