//! User-facing notices.
//!
//! The form never talks to a toast widget directly; it reports through a
//! [`Notifier`] supplied by whoever drives it (the TUI, the one-shot CLI).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub icon: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
            icon: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
            icon: None,
        }
    }

    pub fn info(message: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            icon: Some(icon.into()),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.icon {
            Some(icon) => write!(f, "{} {}", icon, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Sink for transient user notices.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);

    fn notify_success(&mut self, message: &str) {
        self.notify(Notice::success(message));
    }

    fn notify_error(&mut self, message: &str) {
        self.notify(Notice::error(message));
    }

    fn notify_info(&mut self, message: &str, icon: &str) {
        self.notify(Notice::info(message, icon));
    }
}

/// Buffers notices in arrival order.
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    notices: Vec<Notice>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Take all buffered notices, leaving the log empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}
