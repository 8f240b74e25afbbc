//! The shell session.
//!
//! [`Shell`] owns all session state (line buffer, history, scrollback) and
//! is the input dispatcher: each resolved [`Action`] mutates exactly one
//! piece of state and triggers the matching repaint. Direct edits cancel
//! both browsing modes — typing always brings the user back to the live
//! line — and history browsing restarts from the most recent entry after
//! any edit, including plain cursor movement.

pub mod commands;
pub mod external;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::input::{self, Action};
use crate::model::{History, LineBuffer, Scrollback};
use crate::view::renderer;
use crate::view::Surface;

use commands::CommandOutcome;

pub struct Shell {
    config: Config,
    line: LineBuffer,
    history: History,
    scrollback: Scrollback,
    should_quit: bool,
}

impl Shell {
    pub fn new(config: Config) -> Self {
        Self {
            line: LineBuffer::new(),
            history: History::new(config.history_capacity),
            scrollback: Scrollback::new(config.scrollback_capacity),
            should_quit: false,
            config,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Process one key event to completion: resolve, mutate, repaint.
    pub fn handle_key(&mut self, event: KeyEvent, surface: &mut dyn Surface) -> Result<()> {
        let action = input::resolve(&event);
        tracing::trace!(?event, ?action, "key event");
        self.apply_action(action, surface)
    }

    pub fn apply_action(&mut self, action: Action, surface: &mut dyn Surface) -> Result<()> {
        match action {
            Action::InsertChar(c) => {
                let was_panned = self.scrollback.reset_pan();
                self.history.reset_navigation();
                self.line.insert(c);
                self.repaint_input(was_panned, surface)?;
            }
            Action::DeleteBackward => {
                let was_panned = self.scrollback.reset_pan();
                self.history.reset_navigation();
                self.line.delete_before_cursor();
                self.repaint_input(was_panned, surface)?;
            }
            Action::MoveLeft | Action::MoveRight => {
                let was_panned = self.scrollback.reset_pan();
                self.history.reset_navigation();
                let delta = if action == Action::MoveLeft { -1 } else { 1 };
                self.line.move_cursor(delta);
                if was_panned {
                    self.repaint_full(surface)?;
                } else {
                    let row = self.input_row(surface);
                    renderer::park_cursor(surface, &self.config.prompt, &self.line, row)?;
                    surface.flush()?;
                }
            }
            Action::HistoryOlder => {
                let was_panned = self.scrollback.reset_pan();
                let recalled = self.history.navigate_older();
                if let Some(entry) = &recalled {
                    self.line.replace_with(entry);
                }
                if was_panned {
                    self.repaint_full(surface)?;
                } else if recalled.is_some() {
                    self.repaint_input(false, surface)?;
                }
            }
            Action::HistoryNewer => {
                let was_panned = self.scrollback.reset_pan();
                let recalled = self.history.navigate_newer();
                if let Some(entry) = &recalled {
                    self.line.replace_with(entry);
                }
                if was_panned {
                    self.repaint_full(surface)?;
                } else if recalled.is_some() {
                    self.repaint_input(false, surface)?;
                }
            }
            Action::ScrollUp => {
                if self.scrollback.pan(1, renderer::window_height(surface)) {
                    self.repaint_full(surface)?;
                }
            }
            Action::ScrollDown => {
                if self.scrollback.pan(-1, renderer::window_height(surface)) {
                    self.repaint_full(surface)?;
                }
            }
            Action::CancelLine => {
                let was_panned = self.scrollback.reset_pan();
                self.history.reset_navigation();
                self.line.reset();
                self.repaint_input(was_panned, surface)?;
            }
            Action::Submit => self.submit(surface)?,
            Action::Quit => {
                tracing::info!("quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
        Ok(())
    }

    /// Append one output row to the scrollback; repaints only when the
    /// live view is showing.
    pub fn emit_output_line(&mut self, text: &str, surface: &mut dyn Surface) -> Result<()> {
        self.scrollback.append(text.to_string());
        if self.scrollback.is_live() {
            renderer::append_live_row(
                surface,
                &self.config.prompt,
                &self.line,
                &self.scrollback,
                text,
            )?;
            surface.flush()?;
        }
        Ok(())
    }

    /// Repaint everything; used after resize and at startup.
    pub fn redraw(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.repaint_full(surface)
    }

    fn submit(&mut self, surface: &mut dyn Surface) -> Result<()> {
        if self.scrollback.reset_pan() {
            self.repaint_full(surface)?;
        }
        let text = self.line.text();
        tracing::debug!(line = %text, "submit");

        // Empty lines never pollute the history, but the prompt row still
        // advances into the scrollback.
        self.history.push(&text);
        let decorated = format!("{}{}", self.config.prompt, text);
        self.emit_output_line(&decorated, surface)?;

        if !text.trim().is_empty() {
            match commands::dispatch(&text) {
                CommandOutcome::Output(lines) => {
                    for line in lines {
                        self.emit_output_line(&line, surface)?;
                    }
                }
                CommandOutcome::Clear => self.scrollback.clear(),
                CommandOutcome::Exit => self.should_quit = true,
            }
        }

        self.line.reset();
        self.repaint_full(surface)
    }

    fn repaint_input(&mut self, was_panned: bool, surface: &mut dyn Surface) -> Result<()> {
        if was_panned {
            return self.repaint_full(surface);
        }
        let row = self.input_row(surface);
        renderer::draw_input_row(surface, &self.config.prompt, &self.line, row)?;
        surface.flush()?;
        Ok(())
    }

    fn repaint_full(&mut self, surface: &mut dyn Surface) -> Result<()> {
        renderer::draw_full(surface, &self.config.prompt, &self.line, &self.scrollback)?;
        surface.flush()?;
        Ok(())
    }

    fn input_row(&self, surface: &dyn Surface) -> u16 {
        renderer::input_row(self.scrollback.len(), surface.viewport_height())
    }

    pub fn line(&self) -> &LineBuffer {
        &self.line
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }
}
