//! Action enum: the central message bus for the TUI.
//! All user interactions and async results flow through here.

use tweetsmith_core::{SubmitOutcome, SubmitTicket};

/// Every possible action that can occur in the application.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Global ──────────────────────────────────────────────
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Display a status message in the status bar.
    SetStatus(String),
    /// A tick event for animations and toast expiry.
    Tick,

    // ── Focus ────────────────────────────────────────────────
    /// Tab: next field, or next pane when leaving the last field.
    SwitchInputField,
    /// Shift+Tab: previous field.
    SwitchInputFieldBack,
    /// Move focus to the other pane (form ↔ results).
    FocusNextPane,
    /// Move focus to the other pane, entering it from the end.
    FocusPrevPane,

    // ── Submission ───────────────────────────────────────────
    /// Submit the form (Ctrl+S / Ctrl+Enter, or Enter outside the text field).
    SubmitForm,
    /// The form accepted a submission; the payload must be sent.
    SubmissionStarted(SubmitTicket),
    /// The network task finished.
    SubmissionFinished {
        request_id: u64,
        outcome: SubmitOutcome,
    },

    // ── Filters ──────────────────────────────────────────────
    /// Next option of the focused filter.
    CycleNext,
    /// Previous option of the focused filter.
    CyclePrev,
    /// Clear the focused filter.
    ClearSelection,

    // ── Results ──────────────────────────────────────────────
    /// Copy the highlighted result.
    CopyResult,

    // ── Text Input ───────────────────────────────────────────
    /// A character was typed (only sent when in input mode).
    CharInput(char),
    /// Backspace pressed (only sent when in input mode).
    BackspaceInput,
    /// Delete word (Ctrl+W).
    DeleteWord,
    /// Insert a newline in the description.
    NewlineInput,
    /// Bulk paste from bracketed paste mode (terminal sends entire text at once).
    PasteBulk(String),
    /// Leave the text field (Esc in input mode).
    ExitEditing,

    // ── Scrolling / Selection ───────────────────────────────
    ScrollUp,
    ScrollDown,
    Confirm,
}

/// Whether the app is in a text-input mode where raw keys should
/// be forwarded to the active component instead of interpreted as
/// global shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Normal mode: keys are global shortcuts.
    Normal,
    /// Text input mode: keys go to the description field.
    Editing,
}

/// The two focusable panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Compose,
    Results,
}
