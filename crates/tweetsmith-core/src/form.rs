//! Form state and the two-state submission machine.
//!
//! `Idle` → `Submitting { request_id }` → `Idle`. A submission is started
//! with [`FormState::begin_submit`], which hands back the payload to send,
//! and finished with [`FormState::finish_submit`] once the response (or
//! error) is known. Finishing always unlocks the form and clears the inputs,
//! whatever the outcome. The description and filters are not kept for a
//! retry, even after a failure.
//!
//! Every submission is numbered. A completion carrying any id other than the
//! one in flight is dropped without touching state, so a late response can
//! never overwrite newer results.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::notify::{Notice, Notifier};
use crate::registry::CategoryRegistry;
use crate::selection::SelectionState;
use crate::submission::{RequestPayload, SubmitOutcome, SUCCESS_ICON, SUCCESS_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting { request_id: u64 },
}

/// What to send for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub request_id: u64,
    pub payload: RequestPayload,
}

/// Whether a completion was applied to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The completion did not belong to the submission in flight.
    Stale,
}

#[derive(Debug, Clone)]
pub struct FormState {
    description: String,
    selections: SelectionState,
    results: Vec<String>,
    phase: FormPhase,
    next_request_id: u64,
}

impl FormState {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        Self {
            description: String::new(),
            selections: SelectionState::new(registry),
            results: Vec::new(),
            phase: FormPhase::Idle,
            next_request_id: 1,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// In-place access for text editing.
    pub fn description_mut(&mut self) -> &mut String {
        &mut self.description
    }

    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    pub fn selections_mut(&mut self) -> &mut SelectionState {
        &mut self.selections
    }

    pub fn registry(&self) -> &Arc<CategoryRegistry> {
        self.selections.registry()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    pub fn in_flight(&self) -> Option<u64> {
        match self.phase {
            FormPhase::Submitting { request_id } => Some(request_id),
            FormPhase::Idle => None,
        }
    }

    /// Lock the form and snapshot the inputs into a payload.
    ///
    /// Returns `None` while a submission is already in flight. No validation
    /// is done: an empty description and empty filters are sent as-is.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if let FormPhase::Submitting { request_id } = self.phase {
            debug!(request_id, "Submit ignored, request already in flight");
            return None;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.phase = FormPhase::Submitting { request_id };

        let payload = RequestPayload {
            description: self.description.clone(),
            selected_options: self.selections.snapshot(),
        };
        debug!(
            request_id,
            selected = self.selections.selected_count(),
            "Submission started"
        );

        Some(SubmitTicket {
            request_id,
            payload,
        })
    }

    /// Apply the outcome of submission `request_id` and return to `Idle`.
    ///
    /// - `Ok(results)` replaces the result list and notifies success.
    /// - Rate limiting and request failures notify an error; results stay.
    /// - Unexpected errors are logged only.
    ///
    /// In every applied case the description is cleared and the selections
    /// are reset.
    pub fn finish_submit(
        &mut self,
        request_id: u64,
        outcome: SubmitOutcome,
        notifier: &mut dyn Notifier,
    ) -> Completion {
        if self.in_flight() != Some(request_id) {
            warn!(
                request_id,
                in_flight = ?self.in_flight(),
                "Discarding stale submission result"
            );
            return Completion::Stale;
        }

        match outcome {
            Ok(results) => {
                info!(request_id, count = results.len(), "Generated suggestions");
                self.results = results;
                notifier.notify(Notice::success(SUCCESS_MESSAGE).with_icon(SUCCESS_ICON));
            }
            Err(err) => {
                error!(request_id, error = %err, "Error fetching tweet ideas");
                if let Some(message) = err.user_message() {
                    notifier.notify_error(message);
                }
            }
        }

        self.phase = FormPhase::Idle;
        self.description.clear();
        self.selections.reset();

        Completion::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NoticeKind, NotificationLog};
    use crate::registry::Category;
    use crate::submission::{SubmitError, GENERIC_FAILURE_MESSAGE, RATE_LIMIT_MESSAGE};
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Run `f` with a subscriber that writes into the returned buffer.
    fn capture_logs(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        buffer.contents()
    }

    fn form() -> FormState {
        let registry = CategoryRegistry::new(vec![
            Category::new("tone", "Tone", &["funny", "serious"]),
            Category::new("length", "Length", &["short", "long"]),
        ])
        .unwrap();
        FormState::new(Arc::new(registry))
    }

    fn fill(form: &mut FormState) {
        form.set_description("launch day");
        form.selections_mut().set_selection("tone", "funny").unwrap();
    }

    fn assert_cleared(form: &FormState) {
        assert!(!form.is_loading());
        assert_eq!(form.description(), "");
        assert!(form.selections().is_empty());
        assert_eq!(form.selections().keys().count(), 2);
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn begin_submit_locks_and_snapshots() {
        let mut form = form();
        fill(&mut form);
        assert!(!form.is_loading());

        let ticket = form.begin_submit().unwrap();
        assert!(form.is_loading());
        assert_eq!(form.in_flight(), Some(ticket.request_id));
        assert_eq!(ticket.payload.description, "launch day");
        assert_eq!(ticket.payload.selected_options["tone"], "funny");
        assert_eq!(ticket.payload.selected_options["length"], "");
    }

    #[test]
    fn second_submit_while_loading_is_refused() {
        let mut form = form();
        let first = form.begin_submit().unwrap();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.in_flight(), Some(first.request_id));
    }

    #[test]
    fn empty_inputs_are_sent_as_is() {
        let mut form = form();
        let ticket = form.begin_submit().unwrap();
        assert_eq!(ticket.payload.description, "");
        assert!(ticket.payload.selected_options.values().all(|v| v.is_empty()));
    }

    #[test]
    fn success_replaces_results_and_clears_inputs() {
        let mut form = form();
        let mut log = NotificationLog::new();

        let ticket = form.begin_submit().unwrap();
        form.finish_submit(ticket.request_id, Ok(strings(&["old"])), &mut log);

        fill(&mut form);
        let ticket = form.begin_submit().unwrap();
        let completion = form.finish_submit(
            ticket.request_id,
            Ok(strings(&["Hello world!", "Ship it!"])),
            &mut log,
        );

        assert_eq!(completion, Completion::Applied);
        assert_eq!(form.results(), strings(&["Hello world!", "Ship it!"]).as_slice());
        assert_cleared(&form);
        let notice = log.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, SUCCESS_MESSAGE);
        assert_eq!(notice.icon.as_deref(), Some(SUCCESS_ICON));
    }

    #[test]
    fn results_keep_service_order() {
        let mut form = form();
        let mut log = NotificationLog::new();
        let ticket = form.begin_submit().unwrap();
        form.finish_submit(ticket.request_id, Ok(strings(&["c", "a", "b"])), &mut log);
        assert_eq!(form.results(), strings(&["c", "a", "b"]).as_slice());
    }

    #[test]
    fn rate_limit_keeps_results_and_notifies() {
        let mut form = form();
        let mut log = NotificationLog::new();
        let ticket = form.begin_submit().unwrap();
        form.finish_submit(ticket.request_id, Ok(strings(&["keep me"])), &mut log);
        log.drain();

        fill(&mut form);
        let ticket = form.begin_submit().unwrap();
        form.finish_submit(ticket.request_id, Err(SubmitError::RateLimited), &mut log);

        assert_eq!(form.results(), strings(&["keep me"]).as_slice());
        assert_cleared(&form);
        assert_eq!(log.notices().len(), 1);
        assert_eq!(log.notices()[0].kind, NoticeKind::Error);
        assert_eq!(log.notices()[0].message, RATE_LIMIT_MESSAGE);
    }

    #[test]
    fn request_failure_notifies_generic_message() {
        let mut form = form();
        let mut log = NotificationLog::new();
        fill(&mut form);
        let ticket = form.begin_submit().unwrap();
        form.finish_submit(
            ticket.request_id,
            Err(SubmitError::request_failed(Some(500), "HTTP 500")),
            &mut log,
        );

        assert!(form.results().is_empty());
        assert_cleared(&form);
        assert_eq!(log.last().unwrap().message, GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn unexpected_error_is_silent_but_still_cleans_up() {
        let mut form = form();
        let mut log = NotificationLog::new();
        fill(&mut form);
        let ticket = form.begin_submit().unwrap();
        let completion = form.finish_submit(
            ticket.request_id,
            Err(SubmitError::Unexpected("expected value at line 1".into())),
            &mut log,
        );

        assert_eq!(completion, Completion::Applied);
        assert!(log.is_empty());
        assert_cleared(&form);
    }

    #[test]
    fn unexpected_error_is_logged_at_error_level() {
        let mut form = form();
        let mut log = NotificationLog::new();
        fill(&mut form);
        let ticket = form.begin_submit().unwrap();

        let output = capture_logs(|| {
            form.finish_submit(
                ticket.request_id,
                Err(SubmitError::Unexpected("expected value at line 1".into())),
                &mut log,
            );
        });

        let line = output
            .lines()
            .find(|l| l.contains("Error fetching tweet ideas"))
            .expect("unexpected error was not logged");
        assert!(line.contains("ERROR"));
        assert!(line.contains("expected value at line 1"));
        assert!(log.is_empty());
    }

    #[test]
    fn success_logs_no_error() {
        let mut form = form();
        let mut log = NotificationLog::new();
        let ticket = form.begin_submit().unwrap();

        let output = capture_logs(|| {
            form.finish_submit(ticket.request_id, Ok(strings(&["a"])), &mut log);
        });

        assert!(!output.contains("ERROR"));
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = form();
        let mut log = NotificationLog::new();
        let ticket = form.begin_submit().unwrap();

        let completion = form.finish_submit(ticket.request_id + 7, Ok(strings(&["x"])), &mut log);
        assert_eq!(completion, Completion::Stale);
        assert!(form.is_loading());
        assert!(form.results().is_empty());
        assert!(log.is_empty());

        form.finish_submit(ticket.request_id, Ok(strings(&["y"])), &mut log);
        let again = form.finish_submit(ticket.request_id, Ok(strings(&["z"])), &mut log);
        assert_eq!(again, Completion::Stale);
        assert_eq!(form.results(), strings(&["y"]).as_slice());
    }

    #[test]
    fn request_ids_increase() {
        let mut form = form();
        let mut log = NotificationLog::new();
        let first = form.begin_submit().unwrap();
        form.finish_submit(first.request_id, Ok(vec![]), &mut log);
        let second = form.begin_submit().unwrap();
        assert!(second.request_id > first.request_id);
    }
}
