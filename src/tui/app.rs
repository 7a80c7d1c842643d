//! TUI application state and event handling.
//!
//! The `App` owns the controller state, the effect dispatcher and the
//! clipboard, and runs the main event loop via `run()`:
//!
//! - **Messages**: keyboard and paste events become controller [`Message`]s,
//!   reduced into a new [`AppState`]
//! - **Effects**: conversion requests go to the [`Dispatcher`]; finished
//!   conversions are drained back in every loop iteration
//! - **Copy feedback**: a transient "copied" acknowledgement per panel
//! - **Dirty state tracking**: redraw only when something changed, plus a
//!   periodic redraw for resizes and the loading spinner

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::rendering::{Panel, RenderState, render_ui};
use crate::clipboard::{ClipboardProvider, SystemClipboard, copy_logged};
use crate::controller::{AppState, Dispatcher, Message, reduce};
use crate::gateway::ConversionGateway;

/// How long the "copied" acknowledgement stays visible (milliseconds)
const COPY_FEEDBACK_DURATION_MS: u64 = 2000;
/// Maximum time between redraws (milliseconds)
const REDRAW_INTERVAL_MS: u64 = 100;

/// Transient "copied" acknowledgement with expiry
#[derive(Debug, Clone, Copy)]
struct CopyFeedback {
    panel: Panel,
    expires_at: Instant,
}

pub struct App {
    state: AppState,
    dispatcher: Dispatcher,
    clipboard: Box<dyn ClipboardProvider>,
    focus: Panel,
    copy_feedback: Option<CopyFeedback>,
    // Output panel scroll, clamped to what the last frame could show
    output_scroll: u16,
    output_max_scroll: u16,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
    tick: usize,
}

impl App {
    pub fn new(gateway: ConversionGateway) -> Self {
        Self::with_clipboard(gateway, Box::new(SystemClipboard::new()))
    }

    pub fn with_clipboard(
        gateway: ConversionGateway,
        clipboard: Box<dyn ClipboardProvider>,
    ) -> Self {
        Self {
            state: AppState::new(),
            dispatcher: Dispatcher::new(gateway),
            clipboard,
            focus: Panel::Input,
            copy_feedback: None,
            output_scroll: 0,
            output_max_scroll: 0,
            should_quit: false,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
            tick: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Reduce a message and run whatever effect it produced
    fn send(&mut self, message: Message) {
        let (next, effect) = reduce(&self.state, message);
        if next.output() != self.state.output() {
            self.output_scroll = 0;
        }
        self.state = next;
        if let Some(effect) = effect {
            self.dispatcher.dispatch(effect);
        }
        self.needs_redraw = true;
    }

    /// Feed finished conversions back into the state
    fn drain_dispatcher(&mut self) {
        while let Some(message) = self.dispatcher.try_recv() {
            self.send(message);
        }
    }

    /// Check and clear an expired copy acknowledgement
    fn check_and_clear_expired_feedback(&mut self) {
        let expired =
            self.copy_feedback.map(|fb| Instant::now() >= fb.expires_at).unwrap_or(false);
        if expired {
            self.copy_feedback = None;
            self.needs_redraw = true;
        }
    }

    fn copied_panel(&self) -> Option<Panel> {
        self.copy_feedback.map(|fb| fb.panel)
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.drain_dispatcher();
            self.check_and_clear_expired_feedback();

            // Draw if dirty or if it's been >100ms (resize handling, spinner)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(REDRAW_INTERVAL_MS) {
                if self.state.is_loading() {
                    self.tick = self.tick.wrapping_add(1);
                }
                self.draw(terminal)?;
                self.last_draw_time = now;
            }

            // Handle events
            let action = poll_event(Duration::from_millis(REDRAW_INTERVAL_MS))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut max_scroll = 0;
        terminal.draw(|f| {
            let view = RenderState {
                state: &self.state,
                focus: self.focus,
                copied: self.copied_panel(),
                tick: self.tick,
                output_scroll: self.output_scroll,
            };
            max_scroll = render_ui(f, &view);
        })?;
        self.output_max_scroll = max_scroll;
        self.output_scroll = self.output_scroll.min(max_scroll);
        self.needs_redraw = false;
        Ok(())
    }

    /// Scroll the output panel when it has focus. The input panel always
    /// follows its cursor.
    fn scroll_output(&mut self, delta: i32) {
        if self.focus != Panel::Output {
            return;
        }
        let max = i32::from(self.output_max_scroll);
        self.output_scroll = (i32::from(self.output_scroll) + delta).clamp(0, max) as u16;
        self.needs_redraw = true;
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Convert => self.send(Message::Convert),
            Action::Swap => self.send(Message::Swap),
            Action::Clear => self.send(Message::Clear),
            Action::CopyToClipboard => self.copy_focused(),
            Action::ToggleFocus => {
                self.focus = self.focus.toggled();
                self.needs_redraw = true;
            }
            Action::InsertChar(c) => self.send(Message::InsertChar(c)),
            Action::Newline => self.send(Message::InsertChar('\n')),
            Action::Paste(text) => {
                // Terminals send CR line endings inside bracketed paste
                let text = text.replace("\r\n", "\n").replace('\r', "\n");
                self.send(Message::InsertText(text));
            }
            Action::DeleteChar => self.send(Message::DeleteChar),
            Action::ScrollUp(rows) => self.scroll_output(-i32::from(rows)),
            Action::ScrollDown(rows) => self.scroll_output(i32::from(rows)),
            Action::None => {}
        }
    }

    /// Copy the focused panel. Failures are logged only.
    fn copy_focused(&mut self) {
        let text = match self.focus {
            Panel::Input => self.state.input(),
            Panel::Output => self.state.output(),
        };

        // The copy control only exists for non-empty panels
        if text.is_empty() {
            debug!(panel = ?self.focus, "nothing to copy");
            return;
        }

        if copy_logged(text, self.clipboard.as_mut()) {
            self.copy_feedback = Some(CopyFeedback {
                panel: self.focus,
                expires_at: Instant::now() + Duration::from_millis(COPY_FEEDBACK_DURATION_MS),
            });
            self.needs_redraw = true;
        }
    }
}
