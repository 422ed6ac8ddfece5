//! Status bar at the bottom of the TUI.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::action::{Action, Pane};
use crate::components::Component;
use crate::theme::Theme;

pub struct StatusBarComponent {
    /// Current status message.
    pub message: String,
    /// Pane that owns keyboard focus.
    pub pane: Pane,
    /// Whether a submission is in flight.
    pub loading: bool,
}

impl StatusBarComponent {
    pub fn new() -> Self {
        Self {
            message: "Describe your tweet, pick some filters, then Ctrl+S.".to_string(),
            pane: Pane::Compose,
            loading: false,
        }
    }

    fn badge(&self) -> &'static str {
        if self.loading {
            return "Generating";
        }
        match self.pane {
            Pane::Compose => "Compose",
            Pane::Results => "Results",
        }
    }

    fn hints(&self) -> &'static str {
        match self.pane {
            Pane::Compose => "Ctrl+S·Tab·←/→·?",
            Pane::Results => "↑/↓·y·Tab·q",
        }
    }
}

impl Default for StatusBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBarComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::SetStatus(msg) => {
                self.message = msg.clone();
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let width = area.width as usize;

        let hints = self.hints();
        let hints_len = hints.chars().count() + 1;

        let badge = self.badge();
        let badge_len = badge.len() + 2;

        let msg_budget = width
            .saturating_sub(badge_len)
            .saturating_sub(hints_len)
            .saturating_sub(4);

        let msg_len = self.message.chars().count();
        let msg = if msg_len > msg_budget {
            if msg_budget > 3 {
                let kept: String = self.message.chars().take(msg_budget - 3).collect();
                format!("{kept}...")
            } else {
                String::new()
            }
        } else {
            self.message.clone()
        };

        let used = badge_len + 2 + msg.chars().count();
        let pad = width.saturating_sub(used + hints_len);

        let badge_style = if self.loading {
            Theme::loading()
        } else {
            Theme::muted()
        };

        let line = Line::from(vec![
            Span::styled(format!(" {badge} "), badge_style),
            Span::styled("  ", Theme::dim()),
            Span::styled(msg, Theme::dim()),
            Span::raw(" ".repeat(pad)),
            Span::styled(hints, Theme::key_hint()),
            Span::raw(" "),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
