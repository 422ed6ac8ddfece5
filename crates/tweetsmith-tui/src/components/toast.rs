//! Transient notices drawn over the top of the screen.
//!
//! The component is the TUI's [`Notifier`]: the form and the result list
//! push notices into it, and `Tick` expires them.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use tweetsmith_core::{Notice, NoticeKind, Notifier};

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

/// At most this many toasts are shown at once; older ones are dropped.
const MAX_VISIBLE: usize = 3;

fn lifetime(kind: NoticeKind) -> Duration {
    match kind {
        NoticeKind::Success | NoticeKind::Info => Duration::from_secs(2),
        NoticeKind::Error => Duration::from_secs(4),
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notice: Notice,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct ToastComponent {
    toasts: VecDeque<Toast>,
}

impl ToastComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notice> {
        self.toasts.iter().map(|t| &t.notice)
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }
}

impl Notifier for ToastComponent {
    fn notify(&mut self, notice: Notice) {
        let expires_at = Instant::now() + lifetime(notice.kind);
        self.toasts.push_back(Toast { notice, expires_at });
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }
}

impl Component for ToastComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        if let Action::Tick = action {
            self.expire(Instant::now());
        }
        None
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let mut y = area.y + 1;
        for toast in &self.toasts {
            let text = toast.notice.to_string();
            let width = (text.chars().count() as u16 + 4).min(area.width);
            if y + 3 > area.y + area.height {
                break;
            }
            let rect = Rect {
                x: area.x + area.width.saturating_sub(width) / 2,
                y,
                width,
                height: 3,
            };
            let style = Theme::toast(toast.notice.kind);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .style(style);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(text, style)))
                    .alignment(Alignment::Center)
                    .block(block),
                rect,
            );
            y += 3;
        }
    }
}
