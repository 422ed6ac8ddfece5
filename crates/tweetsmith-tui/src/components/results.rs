//! Generated tweet ideas, each one copyable to the clipboard.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::{debug, warn};

use tweetsmith_core::Notifier;

use crate::action::Action;
use crate::clipboard::ClipboardWriter;
use crate::components::compose_form::wrap_line;
use crate::components::Component;
use crate::theme::Theme;

pub const COPIED_MESSAGE: &str = "Copied to clipboard";
pub const COPIED_ICON: &str = "📋";

#[derive(Debug, Default)]
pub struct ResultsComponent {
    results: Vec<String>,
    selected: usize,
    /// Whether the results pane owns keyboard focus.
    active: bool,
}

impl ResultsComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Show a new result list, highlighting the first entry.
    pub fn set_results(&mut self, results: &[String]) {
        self.results = results.to_vec();
        self.selected = 0;
    }

    /// Copy result `index` and confirm with an info notice.
    ///
    /// The notice is sent even when the clipboard write fails; the failure
    /// only reaches the log. Returns `false` when there is nothing at `index`.
    pub fn copy_result(
        &self,
        index: usize,
        clipboard: &mut dyn ClipboardWriter,
        notifier: &mut dyn Notifier,
    ) -> bool {
        let Some(text) = self.results.get(index) else {
            return false;
        };
        match clipboard.write_text(text) {
            Ok(()) => debug!(index, chars = text.chars().count(), "Copied result"),
            Err(e) => warn!(index, error = ?e, "Clipboard write failed"),
        }
        notifier.notify_info(COPIED_MESSAGE, COPIED_ICON);
        true
    }

    pub fn copy_selected(
        &self,
        clipboard: &mut dyn ClipboardWriter,
        notifier: &mut dyn Notifier,
    ) -> bool {
        self.copy_result(self.selected, clipboard, notifier)
    }
}

impl Component for ResultsComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            Action::ScrollDown => {
                if self.selected + 1 < self.results.len() {
                    self.selected += 1;
                }
                None
            }
            Action::ScrollUp => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            Action::SwitchInputField => Some(Action::FocusNextPane),
            Action::SwitchInputFieldBack => Some(Action::FocusPrevPane),
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.results.is_empty() {
            " Tweet ideas ".to_string()
        } else {
            format!(" Tweet ideas ({}) ", self.results.len())
        };
        let block = Block::default()
            .title(title)
            .title_style(if self.active {
                Theme::key_hint()
            } else {
                Theme::muted()
            })
            .borders(Borders::ALL)
            .border_style(if self.active {
                Theme::focused_border()
            } else {
                Theme::border()
            });

        if self.results.is_empty() {
            let placeholder = Paragraph::new(Span::styled(
                "Generated tweet ideas will appear here.",
                Theme::dim(),
            ))
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        let inner = block.inner(area);
        let text_width = (inner.width as usize).saturating_sub(4).max(1);

        let mut lines: Vec<Line> = Vec::new();
        let mut selected_top = 0usize;
        for (i, result) in self.results.iter().enumerate() {
            let is_selected = i == self.selected;
            if is_selected {
                selected_top = lines.len();
            }
            let style = if is_selected && self.active {
                Theme::selection().patch(Theme::normal())
            } else {
                Theme::normal()
            };
            let number = format!("{:>2}. ", i + 1);
            let marker_style = if is_selected {
                Theme::selected()
            } else {
                Theme::dim()
            };
            let segments: Vec<String> = result
                .split('\n')
                .flat_map(|logical| wrap_line(logical, text_width))
                .collect();
            for (si, segment) in segments.into_iter().enumerate() {
                let prefix = if si == 0 {
                    number.clone()
                } else {
                    "    ".to_string()
                };
                lines.push(Line::from(vec![
                    Span::styled(prefix, marker_style),
                    Span::styled(segment, style),
                ]));
            }
            lines.push(Line::from(""));
        }

        let viewport = inner.height as usize;
        let scroll = if viewport > 0 && selected_top >= viewport {
            selected_top + 1 - viewport
        } else {
            0
        };

        let block = if self.active {
            block.title_bottom(Line::from(vec![
                Span::styled(" y", Theme::key_hint()),
                Span::styled(" copy ", Theme::dim()),
            ]))
        } else {
            block
        };

        frame.render_widget(
            Paragraph::new(lines).scroll((scroll as u16, 0)).block(block),
            area,
        );
    }
}
