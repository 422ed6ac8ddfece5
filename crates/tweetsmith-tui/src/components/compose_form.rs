//! Compose form: the tweet description and one filter row per category.
//!
//! Features:
//! - Description: multi-line text area with a scrolling viewport
//! - Filters: Left/Right cycle each category through "any" and its options
//! - Tab walks Description → filters, then hands focus to the results pane
//! - Ctrl+S submits; the whole form is locked while a request is in flight

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tracing::warn;

use tweetsmith_core::{Completion, CycleDirection, FormState, Notifier, SubmitOutcome};

use crate::action::Action;
use crate::components::Component;
use crate::theme::Theme;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which part of the form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Description,
    /// Index into the category registry.
    Filter(usize),
}

pub struct ComposeFormComponent {
    form: FormState,
    focus: FormFocus,
    /// Cursor position (byte offset) within the description.
    cursor: usize,
    /// Whether the compose pane owns keyboard focus.
    active: bool,
    /// First visible line of the description.
    desc_scroll: usize,
    spinner_frame: usize,
}

impl ComposeFormComponent {
    pub fn new(form: FormState) -> Self {
        let cursor = form.description().len();
        Self {
            form,
            focus: FormFocus::Description,
            cursor,
            active: true,
            desc_scroll: 0,
            spinner_frame: 0,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Focus the last filter row, used when entering the pane backwards.
    pub fn focus_last(&mut self) {
        let count = self.form.registry().len();
        self.focus = if count == 0 {
            FormFocus::Description
        } else {
            FormFocus::Filter(count - 1)
        };
    }

    /// Whether raw key input should go to the description.
    pub fn wants_input(&self) -> bool {
        self.active && self.focus == FormFocus::Description && !self.form.is_loading()
    }

    /// Apply a finished submission. Notices go to `notifier`.
    pub fn finish_submit(
        &mut self,
        request_id: u64,
        outcome: SubmitOutcome,
        notifier: &mut dyn Notifier,
    ) -> Completion {
        let completion = self.form.finish_submit(request_id, outcome, notifier);
        if completion == Completion::Applied {
            self.cursor = 0;
            self.desc_scroll = 0;
            self.spinner_frame = 0;
        }
        completion
    }

    // ── Description editing ─────────────────────────────────

    fn clamp_cursor(&mut self) {
        self.cursor = snap_to_boundary(self.form.description(), self.cursor);
    }

    fn insert_char(&mut self, c: char) {
        self.clamp_cursor();
        let cursor = self.cursor;
        self.form.description_mut().insert(cursor, c);
        self.cursor += c.len_utf8();
        self.ensure_cursor_visible();
    }

    fn insert_str(&mut self, s: &str) {
        self.clamp_cursor();
        let cursor = self.cursor;
        self.form.description_mut().insert_str(cursor, s);
        self.cursor += s.len();
        self.ensure_cursor_visible();
    }

    fn delete_char(&mut self) {
        self.clamp_cursor();
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let input = self.form.description_mut();
        let prev = input[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        input.remove(prev);
        self.cursor = prev;
        self.ensure_cursor_visible();
    }

    /// Delete the word before the cursor (Ctrl+W).
    fn delete_word(&mut self) {
        self.clamp_cursor();
        if self.cursor == 0 {
            return;
        }
        let cursor = self.cursor;
        let input = self.form.description_mut();
        let bytes = input.as_bytes();
        let mut end = cursor;
        while end > 0 && matches!(bytes[end - 1], b' ' | b'\n') {
            end -= 1;
        }
        let mut start = end;
        while start > 0 && !matches!(bytes[start - 1], b' ' | b'\n') {
            start -= 1;
        }
        input.drain(start..cursor);
        self.cursor = start;
        self.ensure_cursor_visible();
    }

    fn cursor_up(&mut self) {
        let text = self.form.description();
        let (line, col) = cursor_line_col(text, self.cursor);
        if line == 0 {
            return;
        }
        let lines: Vec<&str> = text.split('\n').collect();
        let prev_line = lines[line - 1];
        let prev_line_start: usize = lines[..line - 1].iter().map(|l| l.len() + 1).sum();
        self.cursor = snap_to_boundary(text, prev_line_start + col.min(prev_line.len()));
        self.ensure_cursor_visible();
    }

    /// Returns `false` when the cursor is already on the last line.
    fn cursor_down(&mut self) -> bool {
        let text = self.form.description();
        let lines: Vec<&str> = text.split('\n').collect();
        let (line, col) = cursor_line_col(text, self.cursor);
        if line + 1 >= lines.len() {
            return false;
        }
        let next_line = lines[line + 1];
        let next_line_start: usize = lines[..line + 1].iter().map(|l| l.len() + 1).sum();
        self.cursor = snap_to_boundary(text, next_line_start + col.min(next_line.len()));
        self.ensure_cursor_visible();
        true
    }

    /// Keep the cursor's line inside the viewport. Render refines this with
    /// the real height.
    fn ensure_cursor_visible(&mut self) {
        let (cursor_line, _) = cursor_line_col(self.form.description(), self.cursor);
        if cursor_line < self.desc_scroll {
            self.desc_scroll = cursor_line;
        }
        let estimated_viewport = 4usize;
        if cursor_line >= self.desc_scroll + estimated_viewport {
            self.desc_scroll = cursor_line.saturating_sub(estimated_viewport - 1);
        }
    }

    // ── Filters ─────────────────────────────────────────────

    fn focused_key(&self) -> Option<String> {
        match self.focus {
            FormFocus::Filter(i) => self.form.registry().iter().nth(i).map(|c| c.key.clone()),
            FormFocus::Description => None,
        }
    }

    fn cycle_focused(&mut self, direction: CycleDirection) {
        if self.form.is_loading() {
            return;
        }
        if let Some(key) = self.focused_key() {
            if let Err(e) = self.form.selections_mut().cycle(&key, direction) {
                warn!(key = %key, error = %e, "Failed to cycle filter");
            }
        }
    }

    fn clear_focused(&mut self) {
        if self.form.is_loading() {
            return;
        }
        if let Some(key) = self.focused_key() {
            if let Err(e) = self.form.selections_mut().set_selection(&key, "") {
                warn!(key = %key, error = %e, "Failed to clear filter");
            }
        }
    }

    // ── Focus movement ──────────────────────────────────────

    fn focus_next(&mut self) -> Option<Action> {
        let count = self.form.registry().len();
        match self.focus {
            FormFocus::Description if count > 0 => {
                self.focus = FormFocus::Filter(0);
                None
            }
            FormFocus::Filter(i) if i + 1 < count => {
                self.focus = FormFocus::Filter(i + 1);
                None
            }
            _ => {
                self.focus = FormFocus::Description;
                Some(Action::FocusNextPane)
            }
        }
    }

    fn focus_prev(&mut self) -> Option<Action> {
        match self.focus {
            FormFocus::Description => {
                self.focus_last();
                Some(Action::FocusPrevPane)
            }
            FormFocus::Filter(0) => {
                self.focus_description();
                None
            }
            FormFocus::Filter(i) => {
                self.focus = FormFocus::Filter(i - 1);
                None
            }
        }
    }

    /// Focus the description field with the cursor at the end.
    pub fn focus_description(&mut self) {
        self.focus = FormFocus::Description;
        self.cursor = self.form.description().len();
        self.ensure_cursor_visible();
    }

    fn editable(&self) -> bool {
        self.focus == FormFocus::Description && !self.form.is_loading()
    }
}

impl Component for ComposeFormComponent {
    fn handle_action(&mut self, action: &Action) -> Option<Action> {
        match action {
            // ── Text input ──────────────────────────────────────
            Action::CharInput(c) if self.editable() => {
                self.insert_char(*c);
                None
            }
            Action::NewlineInput if self.editable() => {
                self.insert_char('\n');
                None
            }
            Action::PasteBulk(text) if self.editable() => {
                if !text.is_empty() {
                    self.insert_str(text);
                }
                None
            }
            Action::BackspaceInput if self.editable() => {
                self.delete_char();
                None
            }
            Action::DeleteWord if self.editable() => {
                self.delete_word();
                None
            }
            Action::ExitEditing if self.focus == FormFocus::Description => {
                self.focus_next();
                None
            }

            // ── Focus ───────────────────────────────────────────
            Action::SwitchInputField => self.focus_next(),
            Action::SwitchInputFieldBack => self.focus_prev(),
            Action::ScrollDown => {
                match self.focus {
                    FormFocus::Description => {
                        if !self.cursor_down() && !self.form.registry().is_empty() {
                            self.focus = FormFocus::Filter(0);
                        }
                    }
                    FormFocus::Filter(i) if i + 1 < self.form.registry().len() => {
                        self.focus = FormFocus::Filter(i + 1);
                    }
                    FormFocus::Filter(_) => {}
                }
                None
            }
            Action::ScrollUp => {
                match self.focus {
                    FormFocus::Description => self.cursor_up(),
                    FormFocus::Filter(0) => self.focus_description(),
                    FormFocus::Filter(i) => self.focus = FormFocus::Filter(i - 1),
                }
                None
            }

            // ── Filters ─────────────────────────────────────────
            Action::CycleNext => {
                self.cycle_focused(CycleDirection::Next);
                None
            }
            Action::CyclePrev => {
                self.cycle_focused(CycleDirection::Prev);
                None
            }
            Action::ClearSelection => {
                self.clear_focused();
                None
            }

            // ── Submission ──────────────────────────────────────
            Action::SubmitForm | Action::Confirm => {
                self.form.begin_submit().map(Action::SubmissionStarted)
            }

            Action::Tick => {
                if self.form.is_loading() {
                    self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
                }
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let filter_rows = self.form.registry().len() as u16;
        let chunks = Layout::vertical([
            Constraint::Min(5),                  // Description
            Constraint::Length(filter_rows + 2), // Filters
            Constraint::Length(1),               // Instructions
        ])
        .split(area);

        let desc_focused = self.active && self.focus == FormFocus::Description;
        self.render_description_field(desc_focused, frame, chunks[0]);
        self.render_filters(frame, chunks[1]);

        let instructions = if self.form.is_loading() {
            Paragraph::new(Line::from(vec![
                Span::styled(format!("  {} ", SPINNER[self.spinner_frame]), Theme::loading()),
                Span::styled("Generating...", Theme::loading()),
            ]))
        } else if self.wants_input() {
            Paragraph::new(Line::from(vec![
                Span::styled("  ctrl+s", Theme::key_hint()),
                Span::styled(" generate  ", Theme::dim()),
                Span::styled("tab", Theme::key_hint()),
                Span::styled(" filters  ", Theme::dim()),
                Span::styled("esc", Theme::key_hint()),
                Span::styled(" done", Theme::dim()),
            ]))
        } else {
            Paragraph::new(Line::from(vec![
                Span::styled("  ←→", Theme::key_hint()),
                Span::styled(" change  ", Theme::dim()),
                Span::styled("x", Theme::key_hint()),
                Span::styled(" clear  ", Theme::dim()),
                Span::styled("enter", Theme::key_hint()),
                Span::styled(" generate", Theme::dim()),
            ]))
        };
        frame.render_widget(instructions, chunks[2]);
    }
}

impl ComposeFormComponent {
    fn render_filters(&self, frame: &mut Frame, area: Rect) {
        let locked = self.form.is_loading();
        let block = Block::default()
            .title(" Filters ")
            .title_style(Theme::muted())
            .borders(Borders::ALL)
            .border_style(
                if self.active && matches!(self.focus, FormFocus::Filter(_)) {
                    Theme::focused_border()
                } else {
                    Theme::border()
                },
            );

        let name_width = self
            .form
            .registry()
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);

        let lines: Vec<Line> = self
            .form
            .registry()
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let focused = self.active && self.focus == FormFocus::Filter(i);
                let value = self.form.selections().get(&category.key).unwrap_or("");
                let marker = if focused { "▸ " } else { "  " };
                let name_style = if focused {
                    Theme::selected()
                } else {
                    Theme::normal()
                };
                let value_span = if value.is_empty() {
                    Span::styled("any", Theme::dim())
                } else if locked {
                    Span::styled(value.to_string(), Theme::muted())
                } else {
                    Span::styled(value.to_string(), Theme::header())
                };
                let mut spans = vec![
                    Span::styled(marker, Theme::key_hint()),
                    Span::styled(format!("{:<width$}  ", category.name, width = name_width), name_style),
                ];
                if focused && !locked {
                    spans.push(Span::styled("‹ ", Theme::key_hint()));
                    spans.push(value_span);
                    spans.push(Span::styled(" ›", Theme::key_hint()));
                } else {
                    spans.push(value_span);
                }
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render the multi-line description text area with scrolling viewport.
    fn render_description_field(&self, is_focused: bool, frame: &mut Frame, area: Rect) {
        let border_style = if is_focused {
            Style::default().fg(Theme::accent())
        } else {
            Theme::border()
        };

        let text = self.form.description();
        let title = if self.form.is_loading() {
            " Description (locked) ".to_string()
        } else if text.is_empty() {
            " What's your tweet about? ".to_string()
        } else {
            format!(" Description ({} chars) ", text.chars().count())
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner_area = block.inner(area);
        let viewport_height = inner_area.height as usize;

        if text.is_empty() && !(is_focused && self.editable()) {
            let placeholder = Paragraph::new(Span::styled(
                "Describe the tweet you want: a launch, an opinion, a thread opener...",
                Theme::dim(),
            ))
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }

        if !is_focused || !self.editable() {
            let display = Paragraph::new(text)
                .style(if self.form.is_loading() {
                    Theme::muted()
                } else {
                    Theme::normal()
                })
                .wrap(Wrap { trim: false })
                .scroll((self.desc_scroll as u16, 0))
                .block(block);
            frame.render_widget(display, area);
            return;
        }

        // ── Focused: render with cursor, word-wrap, and scroll ─────
        let wrap_width = match inner_area.width as usize {
            0 => 80,
            w => w,
        };

        struct VisualLine {
            text: String,
            cursor_col: Option<usize>,
        }

        let (cursor_logical, cursor_col_in_logical) = cursor_line_col(text, self.cursor);
        let mut visual_lines: Vec<VisualLine> = Vec::new();
        let mut cursor_visual_line = 0usize;

        for (li, logical_text) in text.split('\n').enumerate() {
            let is_cursor_logical = li == cursor_logical;
            let mut col_offset = 0usize;
            let wrapped = wrap_line(logical_text, wrap_width);
            let segments = wrapped.len();
            for (si, segment) in wrapped.into_iter().enumerate() {
                let seg_len = segment.len();
                let last = si + 1 == segments;
                let cursor_col = if is_cursor_logical {
                    let c = cursor_col_in_logical;
                    // A cursor on a wrap boundary belongs to the next segment.
                    let on_this = c >= col_offset && (c < col_offset + seg_len || last);
                    on_this.then(|| c - col_offset)
                } else {
                    None
                };
                if cursor_col.is_some() {
                    cursor_visual_line = visual_lines.len();
                }
                visual_lines.push(VisualLine {
                    text: segment,
                    cursor_col,
                });
                col_offset += seg_len;
            }
        }

        let total_visual = visual_lines.len();

        let scroll = {
            let mut s = self.desc_scroll;
            if cursor_visual_line < s {
                s = cursor_visual_line;
            }
            if viewport_height > 0 && cursor_visual_line >= s + viewport_height {
                s = cursor_visual_line - viewport_height + 1;
            }
            s
        };

        let rendered_lines: Vec<Line> = visual_lines
            .iter()
            .skip(scroll)
            .take(viewport_height)
            .map(|vl| match vl.cursor_col {
                Some(col) => {
                    let col = snap_to_boundary(&vl.text, col);
                    let (before, after) = vl.text.split_at(col);
                    let mut chars = after.chars();
                    let cursor_char = chars.next().map(String::from).unwrap_or_else(|| " ".into());
                    Line::from(vec![
                        Span::styled(before, Theme::normal()),
                        Span::styled(cursor_char, Theme::cursor()),
                        Span::styled(chars.as_str(), Theme::normal()),
                    ])
                }
                None => Line::from(Span::styled(vl.text.as_str(), Theme::normal())),
            })
            .collect();

        let has_more_below = scroll + viewport_height < total_visual;
        let block = if has_more_below {
            block.title_bottom(Line::from(Span::styled(
                format!(" [{} more below] ", total_visual - scroll - viewport_height),
                Theme::dim(),
            )))
        } else if scroll > 0 {
            block.title_bottom(Line::from(Span::styled(
                format!(" [{} above] ", scroll),
                Theme::dim(),
            )))
        } else {
            block
        };

        frame.render_widget(Paragraph::new(rendered_lines).block(block), area);
    }
}

/// Line number and byte column of `cursor` within `text`.
fn cursor_line_col(text: &str, cursor: usize) -> (usize, usize) {
    let cursor = cursor.min(text.len());
    let before = &text[..snap_to_boundary(text, cursor)];
    let line = before.matches('\n').count();
    let col = before.rfind('\n').map(|p| before.len() - p - 1).unwrap_or(before.len());
    (line, col)
}

/// Largest char boundary in `text` that is `<= idx`.
fn snap_to_boundary(text: &str, idx: usize) -> usize {
    let mut idx = idx.min(text.len());
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Word-wrap a single logical line to fit within `max_width` columns.
/// Breaks at the last space when one falls late enough in the line, and
/// hard-breaks otherwise. Always returns at least one segment.
pub(crate) fn wrap_line(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || text.chars().count() <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let Some((limit, _)) = remaining.char_indices().nth(max_width) else {
            lines.push(remaining.to_string());
            break;
        };

        let chunk = &remaining[..limit];
        let break_pos = match chunk.rfind(' ') {
            Some(pos) if pos > limit / 3 => pos + 1,
            _ => limit,
        };

        let (line, rest) = remaining.split_at(break_pos);
        lines.push(line.to_string());
        remaining = rest;
    }

    lines
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tweetsmith_core::{Category, CategoryRegistry, NotificationLog, SubmitError};

    use super::*;

    fn component() -> ComposeFormComponent {
        let registry = CategoryRegistry::new(vec![
            Category::new("tone", "Tone", &["funny", "serious"]),
            Category::new("length", "Length", &["short", "long"]),
        ])
        .unwrap();
        ComposeFormComponent::new(FormState::new(Arc::new(registry)))
    }

    fn type_text(c: &mut ComposeFormComponent, text: &str) {
        for ch in text.chars() {
            c.handle_action(&Action::CharInput(ch));
        }
    }

    #[test]
    fn typing_edits_the_description() {
        let mut c = component();
        type_text(&mut c, "launch dayy");
        c.handle_action(&Action::BackspaceInput);
        assert_eq!(c.form().description(), "launch day");
        assert_eq!(c.cursor(), "launch day".len());

        c.handle_action(&Action::DeleteWord);
        assert_eq!(c.form().description(), "launch ");
    }

    #[test]
    fn multibyte_input_keeps_cursor_on_boundaries() {
        let mut c = component();
        type_text(&mut c, "café 🎉");
        c.handle_action(&Action::BackspaceInput);
        assert_eq!(c.form().description(), "café ");
        c.handle_action(&Action::NewlineInput);
        type_text(&mut c, "x");
        c.handle_action(&Action::ScrollUp);
        type_text(&mut c, "!");
        assert_eq!(c.form().description(), "c!afé \nx");
    }

    #[test]
    fn paste_inserts_at_cursor() {
        let mut c = component();
        c.handle_action(&Action::PasteBulk("line one\nline two".into()));
        assert_eq!(c.form().description(), "line one\nline two");
    }

    #[test]
    fn tab_walks_filters_then_leaves_the_pane() {
        let mut c = component();
        assert!(c.handle_action(&Action::SwitchInputField).is_none());
        assert_eq!(c.focus(), FormFocus::Filter(0));
        assert!(c.handle_action(&Action::SwitchInputField).is_none());
        assert_eq!(c.focus(), FormFocus::Filter(1));
        assert!(matches!(
            c.handle_action(&Action::SwitchInputField),
            Some(Action::FocusNextPane)
        ));
        assert_eq!(c.focus(), FormFocus::Description);

        assert!(matches!(
            c.handle_action(&Action::SwitchInputFieldBack),
            Some(Action::FocusPrevPane)
        ));
        assert_eq!(c.focus(), FormFocus::Filter(1));
    }

    #[test]
    fn cycling_changes_only_the_focused_filter() {
        let mut c = component();
        c.handle_action(&Action::SwitchInputField);
        c.handle_action(&Action::CycleNext);
        assert_eq!(c.form().selections().get("tone"), Some("funny"));
        c.handle_action(&Action::CyclePrev);
        c.handle_action(&Action::CyclePrev);
        assert_eq!(c.form().selections().get("tone"), Some("serious"));
        assert_eq!(c.form().selections().get("length"), Some(""));

        c.handle_action(&Action::ClearSelection);
        assert_eq!(c.form().selections().get("tone"), Some(""));
    }

    #[test]
    fn typing_is_ignored_while_filters_are_focused() {
        let mut c = component();
        c.handle_action(&Action::SwitchInputField);
        c.handle_action(&Action::CharInput('q'));
        assert_eq!(c.form().description(), "");
    }

    #[test]
    fn submit_emits_ticket_and_locks_the_form() {
        let mut c = component();
        type_text(&mut c, "launch day");
        c.handle_action(&Action::SwitchInputField);
        c.handle_action(&Action::CycleNext);

        let Some(Action::SubmissionStarted(ticket)) = c.handle_action(&Action::SubmitForm) else {
            panic!("expected a submission ticket");
        };
        assert_eq!(ticket.payload.description, "launch day");
        assert_eq!(ticket.payload.selected_options["tone"], "funny");
        assert!(!c.wants_input());

        // Locked: no second submission, no edits.
        assert!(c.handle_action(&Action::SubmitForm).is_none());
        c.handle_action(&Action::CycleNext);
        assert_eq!(c.form().selections().get("tone"), Some("funny"));
    }

    #[test]
    fn finishing_resets_inputs_and_cursor() {
        let mut c = component();
        type_text(&mut c, "launch day");
        let Some(Action::SubmissionStarted(ticket)) = c.handle_action(&Action::SubmitForm) else {
            panic!("expected a submission ticket");
        };

        let mut log = NotificationLog::new();
        let completion = c.finish_submit(ticket.request_id, Err(SubmitError::RateLimited), &mut log);
        assert_eq!(completion, Completion::Applied);
        assert_eq!(c.form().description(), "");
        assert_eq!(c.cursor(), 0);
        assert!(c.wants_input());
        assert_eq!(log.notices().len(), 1);
    }

    #[test]
    fn spinner_advances_only_while_loading() {
        let mut c = component();
        c.handle_action(&Action::Tick);
        assert_eq!(c.spinner_frame, 0);
        c.handle_action(&Action::SubmitForm);
        c.handle_action(&Action::Tick);
        assert_eq!(c.spinner_frame, 1);
    }

    #[test]
    fn renders_description_and_filters() {
        let mut c = component();
        type_text(&mut c, "launch day");
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal
            .draw(|frame| c.render(frame, frame.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains("launch day"));
        assert!(content.contains("Tone"));
        assert!(content.contains("Length"));
        assert!(content.contains("any"));
    }

    #[test]
    fn wrap_line_breaks_at_spaces() {
        assert_eq!(wrap_line("", 10), vec![""]);
        assert_eq!(wrap_line("short", 10), vec!["short"]);
        assert_eq!(
            wrap_line("hello brave new world", 12),
            vec!["hello brave ", "new world"]
        );
    }

    #[test]
    fn wrap_line_hard_breaks_long_words_without_splitting_chars() {
        let lines = wrap_line("ééééééé", 3);
        assert_eq!(lines, vec!["ééé", "ééé", "é"]);
    }
}
