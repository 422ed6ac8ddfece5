//! Help overlay: keybinding reference.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

pub struct HelpComponent {
    pub visible: bool,
}

impl HelpComponent {
    pub fn new() -> Self {
        Self { visible: false }
    }

    fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
        let vertical = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(area);

        let horizontal = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .flex(Flex::Center)
        .split(vertical[1]);

        horizontal[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HelpComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::ToggleHelp => {
                self.visible = !self.visible;
                None
            }
            // Background traffic must not dismiss the overlay.
            Action::Tick
            | Action::SetStatus(_)
            | Action::SubmissionStarted(_)
            | Action::SubmissionFinished { .. } => None,
            _ if self.visible => {
                self.visible = false;
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let dialog = Self::centered_rect(area, 58, 22);
        frame.render_widget(Clear, dialog);

        let block = Block::default()
            .title(" Help: Keybindings ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Theme::accent()));

        let help_text = vec![
            Line::from(""),
            key_line("Ctrl+S / Ctrl+Enter", "Generate tweet ideas"),
            key_line("Tab / Shift+Tab", "Next / previous field"),
            key_line("Esc", "Stop editing the description"),
            key_line("q / Ctrl+C", "Quit"),
            key_line("?", "Toggle this help"),
            Line::from(""),
            Line::from(Span::styled("── Filters ──", Theme::header())),
            Line::from(""),
            key_line("Up / Down / j / k", "Move between categories"),
            key_line("Left / Right / h / l", "Cycle options"),
            key_line("x / Backspace", "Clear the selection"),
            Line::from(""),
            Line::from(Span::styled("── Results ──", Theme::header())),
            Line::from(""),
            key_line("Up / Down", "Select a suggestion"),
            key_line("Enter / y / c", "Copy to clipboard"),
            Line::from(""),
            Line::from(Span::styled(
                "  Description and filters reset after every request.",
                Theme::dim(),
            )),
        ];

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, dialog);
    }
}

fn key_line<'a>(key: &'a str, desc: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<22}", key), Theme::selected()),
        Span::styled(desc, Theme::normal()),
    ])
}
