//! TUI application - event handling and state management
//!
//! The App struct owns the AppState and handles all keyboard events.
//! It does not do any rendering - that's delegated to the views module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::state::{AppState, FormField, Phase};
use crate::domain::PlanRequest;

/// What the runner should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond redrawing
    None,
    /// Send this request
    Submit(PlanRequest),
    /// Leave the app
    Quit,
}

/// TUI application
#[derive(Debug, Default)]
pub struct App {
    /// Application state
    state: AppState,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Self {
        Self { state: AppState::new() }
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Get reference to state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to state
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        debug!(?key, phase = self.state.phase.name(), "App::handle_key: called");

        // Ctrl+C always quits, whatever the phase
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return Action::Quit;
        }

        let action = match self.state.phase {
            Phase::Collecting => self.handle_form_key(key),
            Phase::Requesting => self.handle_requesting_key(key),
            Phase::Displaying(_) => self.handle_plan_key(key),
            Phase::Failed(_) => self.handle_failed_key(key),
        };

        if action == Action::Quit {
            self.state.should_quit = true;
        }
        action
    }

    /// Keys on the trip form
    fn handle_form_key(&mut self, key: KeyEvent) -> Action {
        let form = &mut self.state.form;

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Tab => {
                form.focus = form.focus.next();
                return Action::None;
            }
            KeyCode::BackTab => {
                form.focus = form.focus.prev();
                return Action::None;
            }
            KeyCode::Enter if form.focus != FormField::Interests => {
                return match self.state.submit_form() {
                    Some(request) => Action::Submit(request),
                    None => Action::None,
                };
            }
            _ => {}
        }

        match form.focus {
            FormField::Destination => match key.code {
                KeyCode::Char(c) => form.insert_char(c),
                KeyCode::Backspace => form.delete_back(),
                KeyCode::Delete => form.delete_forward(),
                KeyCode::Left => form.cursor_left(),
                KeyCode::Right => form.cursor_right(),
                KeyCode::Home => form.cursor_home(),
                KeyCode::End => form.cursor_end(),
                KeyCode::Down => form.focus = form.focus.next(),
                _ => {}
            },
            FormField::Budget => match key.code {
                KeyCode::Left | KeyCode::Char('h') => form.prev_budget(),
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => form.next_budget(),
                KeyCode::Up => form.focus = form.focus.prev(),
                KeyCode::Down => form.focus = form.focus.next(),
                KeyCode::Char('q') => return Action::Quit,
                _ => {}
            },
            FormField::Interests => match key.code {
                KeyCode::Up | KeyCode::Char('k') => form.interest_up(),
                KeyCode::Down | KeyCode::Char('j') => form.interest_down(),
                KeyCode::Char(' ') | KeyCode::Enter => form.toggle_interest(),
                KeyCode::Char('q') => return Action::Quit,
                _ => {}
            },
            FormField::Submit => match key.code {
                KeyCode::Char(' ') => {
                    return match self.state.submit_form() {
                        Some(request) => Action::Submit(request),
                        None => Action::None,
                    };
                }
                KeyCode::Up => form.focus = form.focus.prev(),
                KeyCode::Char('q') => return Action::Quit,
                _ => {}
            },
        }
        Action::None
    }

    /// Only quitting works while the request is in flight
    fn handle_requesting_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => {
                debug!("App::handle_requesting_key: request in flight, ignoring key");
                Action::None
            }
        }
    }

    /// Keys on the itinerary screen
    fn handle_plan_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') | KeyCode::Enter => {
                self.state.reset();
            }
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(1),
            KeyCode::PageUp => self.state.scroll_up(10),
            KeyCode::PageDown => self.state.scroll_down(10),
            KeyCode::Home | KeyCode::Char('g') => self.state.scroll = 0,
            _ => {}
        }
        Action::None
    }

    /// Keys on the error screen
    fn handle_failed_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('r') | KeyCode::Enter => {
                self.state.reset();
                Action::None
            }
            _ => Action::None,
        }
    }
}
