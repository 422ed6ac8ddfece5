//! Main application state and render loop.

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use tweetsmith_client::SubmitTransport;
use tweetsmith_core::{Completion, FormState, SubmitTicket};

use crate::action::{Action, InputMode, Pane};
use crate::clipboard::ClipboardWriter;
use crate::components::compose_form::ComposeFormComponent;
use crate::components::help::HelpComponent;
use crate::components::results::ResultsComponent;
use crate::components::status_bar::StatusBarComponent;
use crate::components::toast::ToastComponent;
use crate::components::Component;
use crate::event::{self, EventHandler, InputModeFlag};
use crate::theme::Theme;

/// Side-by-side layout needs at least this many columns.
const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Main application state.
pub struct App {
    /// Whether the app should exit.
    should_quit: bool,
    /// Shared flag to tell the EventHandler which key-mapping to use.
    input_mode_flag: InputModeFlag,
    /// Pane that owns keyboard focus.
    pane: Pane,
    /// Sends submissions; shared with the spawned request task.
    transport: Arc<dyn SubmitTransport>,
    clipboard: Box<dyn ClipboardWriter>,

    // Components
    compose: ComposeFormComponent,
    results: ResultsComponent,
    toasts: ToastComponent,
    status_bar: StatusBarComponent,
    help: HelpComponent,
}

impl App {
    pub fn new(
        form: FormState,
        transport: Arc<dyn SubmitTransport>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let mut results = ResultsComponent::new();
        results.set_results(form.results());
        Self {
            should_quit: false,
            input_mode_flag: event::new_input_mode_flag(),
            pane: Pane::Compose,
            transport,
            clipboard,
            compose: ComposeFormComponent::new(form),
            results,
            toasts: ToastComponent::new(),
            status_bar: StatusBarComponent::new(),
            help: HelpComponent::new(),
        }
    }

    /// Run the TUI application.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Restore the terminal even when the loop failed.
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<Action>();

        let event_tx = tx.clone();
        let mode_flag = self.input_mode_flag.clone();
        let event_handler = EventHandler::new(event_tx, Duration::from_millis(100), mode_flag);
        tokio::spawn(async move {
            event_handler.run().await;
        });

        self.sync_input_mode();
        info!("TUI started");

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            let Some(action) = rx.recv().await else {
                break;
            };
            self.handle_action(&action, &tx);

            if self.should_quit {
                break;
            }
        }

        info!("TUI exiting");
        Ok(())
    }

    /// Determine and set the correct input mode. Called after every action.
    fn sync_input_mode(&self) {
        event::set_input_mode(&self.input_mode_flag, self.current_input_mode());
    }

    fn current_input_mode(&self) -> InputMode {
        // Help overlay keeps normal mode so any key can dismiss it.
        if self.help.visible {
            return InputMode::Normal;
        }
        if self.pane == Pane::Compose && self.compose.wants_input() {
            InputMode::Editing
        } else {
            InputMode::Normal
        }
    }

    fn set_pane(&mut self, pane: Pane) {
        self.pane = pane;
        self.compose.set_active(pane == Pane::Compose);
        self.results.set_active(pane == Pane::Results);
        self.status_bar.pane = pane;
    }

    /// Actions that keep flowing while the help overlay is open.
    fn passes_help_overlay(action: &Action) -> bool {
        matches!(
            action,
            Action::Quit
                | Action::Tick
                | Action::SetStatus(_)
                | Action::SubmissionStarted(_)
                | Action::SubmissionFinished { .. }
        )
    }

    /// Dispatch an action to all relevant components.
    fn handle_action(&mut self, action: &Action, tx: &mpsc::UnboundedSender<Action>) {
        // While help is open, a key only dismisses it.
        if self.help.visible && !Self::passes_help_overlay(action) {
            self.help.handle_action(action);
            self.sync_input_mode();
            return;
        }

        // Global actions first.
        match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::FocusNextPane => match self.pane {
                Pane::Compose => self.set_pane(Pane::Results),
                Pane::Results => {
                    self.compose.focus_description();
                    self.set_pane(Pane::Compose);
                }
            },
            Action::FocusPrevPane => match self.pane {
                Pane::Compose => self.set_pane(Pane::Results),
                Pane::Results => {
                    self.compose.focus_last();
                    self.set_pane(Pane::Compose);
                }
            },
            Action::SubmissionStarted(ticket) => {
                self.spawn_submit(ticket.clone(), tx.clone());
            }
            Action::SubmissionFinished {
                request_id,
                outcome,
            } => {
                let completion =
                    self.compose
                        .finish_submit(*request_id, outcome.clone(), &mut self.toasts);
                if completion == Completion::Applied {
                    self.status_bar.message = match outcome {
                        Ok(ideas) => {
                            self.results.set_results(self.compose.form().results());
                            format!("{} tweet ideas. Tab to the list, y to copy.", ideas.len())
                        }
                        Err(_) => "Ready.".to_string(),
                    };
                }
            }
            Action::CopyResult | Action::Confirm if self.pane == Pane::Results => {
                self.results
                    .copy_selected(self.clipboard.as_mut(), &mut self.toasts);
            }
            _ => {}
        }

        // Submission and ticks always reach the form; everything else goes
        // to the focused pane.
        let chained = match (self.pane, action) {
            (_, Action::SubmitForm | Action::Tick) | (Pane::Compose, _) => {
                self.compose.handle_action(action)
            }
            (Pane::Results, _) => self.results.handle_action(action),
        };

        self.toasts.handle_action(action);
        self.help.handle_action(action);
        self.status_bar.handle_action(action);
        self.status_bar.loading = self.compose.form().is_loading();

        self.sync_input_mode();

        if let Some(chained) = chained {
            self.handle_action(&chained, tx);
        }
    }

    // ── Async task spawners ─────────────────────────────────────

    /// Send the ticket's payload on a background task and report back with
    /// `SubmissionFinished`.
    fn spawn_submit(&self, ticket: SubmitTicket, tx: mpsc::UnboundedSender<Action>) {
        let transport = Arc::clone(&self.transport);
        let _ = tx.send(Action::SetStatus("Generating tweet ideas...".to_string()));

        tokio::spawn(async move {
            let SubmitTicket {
                request_id,
                payload,
            } = ticket;
            debug!(request_id, "Sending submission");
            let outcome = transport.submit(&payload).await;
            let _ = tx.send(Action::SubmissionFinished {
                request_id,
                outcome,
            });
        });
    }

    /// Render the full UI.
    fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();

        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

        self.render_title(frame, chunks[0]);

        let main = if chunks[1].width >= WIDE_LAYOUT_MIN_WIDTH {
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1])
        } else {
            Layout::vertical([Constraint::Min(12), Constraint::Percentage(40)]).split(chunks[1])
        };
        self.compose.render(frame, main[0]);
        self.results.render(frame, main[1]);

        self.status_bar.render(frame, chunks[2]);

        // Overlays (rendered on top)
        self.toasts.render(frame, area);
        self.help.render(frame, area);
    }

    fn render_title(&self, frame: &mut ratatui::Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" tweetsmith ", Theme::title()),
            Span::styled("· tweet idea generator", Theme::dim()),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }
}
