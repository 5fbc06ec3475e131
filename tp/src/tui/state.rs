//! TUI application state
//!
//! Pure data structures for the TUI. No rendering logic here.
//! The `Phase` enum is the single source of truth for which screen is shown.

use std::time::Instant;

use rand::seq::IndexedRandom;
use tracing::{debug, info, warn};

use crate::domain::{BudgetTier, Interest, ItineraryPlan, PlanRequest};
use crate::planner::PlanError;

/// Fun words for the loading indicator
pub const LOADING_WORDS: &[&str] = &[
    "Packing",
    "Scouting",
    "Mapping",
    "Wandering",
    "Budgeting",
    "Sightseeing",
    "Exploring",
    "Backpacking",
    "Daydreaming",
    "Route-finding",
];

/// Which screen the app is on
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Editing the trip form
    #[default]
    Collecting,
    /// One generation request is in flight
    Requesting,
    /// A plan came back and is on screen
    Displaying(ItineraryPlan),
    /// Generation failed; holds the user-facing message
    Failed(String),
}

impl Phase {
    pub fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Collecting => "collecting",
            Self::Requesting => "requesting",
            Self::Displaying(_) => "displaying",
            Self::Failed(_) => "failed",
        }
    }
}

/// Form field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Destination,
    Budget,
    Interests,
    Submit,
}

impl FormField {
    /// Next field (Tab), wrapping
    pub fn next(self) -> Self {
        match self {
            Self::Destination => Self::Budget,
            Self::Budget => Self::Interests,
            Self::Interests => Self::Submit,
            Self::Submit => Self::Destination,
        }
    }

    /// Previous field (Shift-Tab), wrapping
    pub fn prev(self) -> Self {
        match self {
            Self::Destination => Self::Submit,
            Self::Budget => Self::Destination,
            Self::Interests => Self::Budget,
            Self::Submit => Self::Interests,
        }
    }
}

/// Trip form being edited
#[derive(Debug, Clone, Default)]
pub struct FormState {
    /// Destination text buffer
    pub destination: String,
    /// Cursor position in the destination, in chars
    pub cursor: usize,
    pub budget: BudgetTier,
    /// Highlighted row in the interest checklist
    pub interest_cursor: usize,
    /// Selected interests, in the order they were picked
    pub selected: Vec<Interest>,
    pub focus: FormField,
    /// Inline validation message
    pub error: Option<String>,
    /// Set once a valid submit went out; blocks duplicate submits
    pub submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the cursor in the destination buffer
    fn cursor_byte(&self) -> usize {
        self.destination
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.destination.len())
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte();
        self.destination.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace)
    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.cursor_byte();
        self.destination.remove(at);
    }

    /// Delete the character under the cursor (Delete)
    pub fn delete_forward(&mut self) {
        if self.cursor < self.destination.chars().count() {
            let at = self.cursor_byte();
            self.destination.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.destination.chars().count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.destination.chars().count();
    }

    pub fn next_budget(&mut self) {
        self.budget = self.budget.next();
    }

    pub fn prev_budget(&mut self) {
        self.budget = self.budget.prev();
    }

    pub fn interest_up(&mut self) {
        self.interest_cursor = self.interest_cursor.saturating_sub(1);
    }

    pub fn interest_down(&mut self) {
        self.interest_cursor = (self.interest_cursor + 1).min(Interest::ALL.len() - 1);
    }

    /// Interest under the checklist cursor
    pub fn highlighted_interest(&self) -> Interest {
        Interest::ALL[self.interest_cursor.min(Interest::ALL.len() - 1)]
    }

    pub fn is_selected(&self, interest: Interest) -> bool {
        self.selected.contains(&interest)
    }

    /// Toggle the highlighted interest on or off
    pub fn toggle_interest(&mut self) {
        let interest = self.highlighted_interest();
        debug!(%interest, "FormState::toggle_interest: called");
        if let Some(pos) = self.selected.iter().position(|i| *i == interest) {
            self.selected.remove(pos);
        } else {
            self.selected.push(interest);
        }
    }

    /// Validate the form
    ///
    /// Returns the request and sets `submitting` on success. On failure the
    /// message lands in `error` and nothing is returned. A form that is
    /// already submitting refuses silently.
    pub fn submit(&mut self) -> Option<PlanRequest> {
        debug!(submitting = self.submitting, "FormState::submit: called");
        if self.submitting {
            debug!("FormState::submit: already submitting, refusing");
            return None;
        }

        match PlanRequest::new(self.destination.as_str(), self.budget, self.selected.iter().copied()) {
            Ok(request) => {
                self.error = None;
                self.submitting = true;
                Some(request)
            }
            Err(e) => {
                debug!(error = %e, "FormState::submit: validation failed");
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Last validation error, if the form is showing one
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub phase: Phase,
    pub form: FormState,
    /// Status word shown while requesting
    pub loading_word: String,
    /// When the current request went out
    pub request_started: Option<Instant>,
    /// Vertical scroll of the itinerary view
    pub scroll: u16,
    /// Model identifier, for the header
    pub model: String,
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Collecting,
            form: FormState::new(),
            loading_word: LOADING_WORDS[0].to_string(),
            request_started: None,
            scroll: 0,
            model: String::new(),
            should_quit: false,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Submit the form
    ///
    /// Only valid in `Collecting`. Returns the request to send when the
    /// phase moved to `Requesting`.
    pub fn submit_form(&mut self) -> Option<PlanRequest> {
        debug!(phase = self.phase.name(), "AppState::submit_form: called");
        if self.phase != Phase::Collecting {
            return None;
        }

        let request = self.form.submit()?;
        info!(
            destination = %request.destination(),
            budget = %request.budget(),
            "AppState::submit_form: requesting plan"
        );
        self.start_loading();
        self.phase = Phase::Requesting;
        Some(request)
    }

    /// Pick a loading word and start the clock
    fn start_loading(&mut self) {
        let mut rng = rand::rng();
        self.loading_word = LOADING_WORDS.choose(&mut rng).unwrap_or(&"Packing").to_string();
        self.request_started = Some(Instant::now());
    }

    /// Settle the in-flight request
    ///
    /// Returns false and drops the result when nothing is in flight.
    pub fn complete(&mut self, result: Result<ItineraryPlan, PlanError>) -> bool {
        debug!(phase = self.phase.name(), ok = result.is_ok(), "AppState::complete: called");
        if !self.phase.is_requesting() {
            warn!(phase = self.phase.name(), "AppState::complete: no request in flight, discarding result");
            return false;
        }

        self.form.submitting = false;
        self.request_started = None;
        self.scroll = 0;
        self.phase = match result {
            Ok(plan) => {
                info!(days = plan.itinerary.len(), "AppState::complete: plan ready");
                Phase::Displaying(plan)
            }
            Err(e) => Phase::Failed(e.to_string()),
        };
        true
    }

    /// Go back to an empty form from the plan or error screen
    ///
    /// Ignored in `Collecting` and while a request is in flight.
    pub fn reset(&mut self) -> bool {
        debug!(phase = self.phase.name(), "AppState::reset: called");
        match self.phase {
            Phase::Displaying(_) | Phase::Failed(_) => {
                self.phase = Phase::Collecting;
                self.form = FormState::new();
                self.scroll = 0;
                true
            }
            Phase::Collecting | Phase::Requesting => false,
        }
    }

    /// Seconds since the request went out
    pub fn elapsed_secs(&self) -> u64 {
        self.request_started.map(|t| t.elapsed().as_secs()).unwrap_or(0)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Plan on screen, if any
    pub fn plan(&self) -> Option<&ItineraryPlan> {
        match &self.phase {
            Phase::Displaying(plan) => Some(plan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItineraryActivity, ItineraryDay};
    use crate::llm::LlmError;
    use crate::planner::GenerationFailure;

    fn sample_plan() -> ItineraryPlan {
        ItineraryPlan {
            destination: "Tokyo, Japan".to_string(),
            itinerary: vec![ItineraryDay {
                day: 1,
                title: "Arrival".to_string(),
                activities: vec![ItineraryActivity {
                    time: "Morning".to_string(),
                    description: "Explore Ueno Park".to_string(),
                    estimated_cost: "Free".to_string(),
                }],
                daily_budget: "~$20".to_string(),
            }],
        }
    }

    fn failure() -> PlanError {
        PlanError::GenerationFailed(GenerationFailure::Service(LlmError::InvalidResponse("empty".to_string())))
    }

    fn filled_state() -> AppState {
        let mut state = AppState::new();
        for c in "Tokyo".chars() {
            state.form.insert_char(c);
        }
        state.form.toggle_interest();
        state
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.phase, Phase::Collecting);
        assert_eq!(state.form.budget, BudgetTier::Moderate);
        assert!(state.form.selected.is_empty());
        assert_eq!(state.form.focus, FormField::Destination);
    }

    #[test]
    fn test_destination_editing() {
        let mut form = FormState::new();
        for c in "Lsbon".chars() {
            form.insert_char(c);
        }
        form.cursor_home();
        form.cursor_right();
        form.insert_char('i');
        assert_eq!(form.destination, "Lisbon");

        form.cursor_end();
        form.delete_back();
        assert_eq!(form.destination, "Lisbo");

        form.cursor_home();
        form.delete_forward();
        assert_eq!(form.destination, "isbo");
        assert_eq!(form.cursor, 0);
    }

    #[test]
    fn test_editing_multibyte_destination() {
        let mut form = FormState::new();
        for c in "Zürich".chars() {
            form.insert_char(c);
        }
        form.cursor_left();
        form.cursor_left();
        form.cursor_left();
        form.cursor_left();
        form.delete_back();
        assert_eq!(form.destination, "Zrich");
    }

    #[test]
    fn test_toggle_interest_keeps_pick_order() {
        let mut form = FormState::new();
        form.interest_down();
        form.interest_down();
        form.toggle_interest();
        form.interest_up();
        form.interest_up();
        form.toggle_interest();
        assert_eq!(form.selected, vec![Interest::ALL[2], Interest::ALL[0]]);

        form.interest_down();
        form.interest_down();
        form.toggle_interest();
        assert_eq!(form.selected, vec![Interest::ALL[0]]);
    }

    #[test]
    fn test_interest_cursor_clamped() {
        let mut form = FormState::new();
        form.interest_up();
        assert_eq!(form.interest_cursor, 0);
        for _ in 0..50 {
            form.interest_down();
        }
        assert_eq!(form.interest_cursor, Interest::ALL.len() - 1);
    }

    #[test]
    fn test_blank_destination_stays_in_form() {
        let mut state = AppState::new();
        state.form.insert_char(' ');
        state.form.toggle_interest();

        assert!(state.submit_form().is_none());
        assert_eq!(state.phase, Phase::Collecting);
        assert_eq!(state.form.error(), Some("Please enter a destination."));
        assert!(!state.form.submitting);
    }

    #[test]
    fn test_no_interests_stays_in_form() {
        let mut state = AppState::new();
        state.form.insert_char('X');

        assert!(state.submit_form().is_none());
        assert_eq!(state.form.error(), Some("Please select at least one interest."));
    }

    #[test]
    fn test_valid_submit_moves_to_requesting() {
        let mut state = filled_state();
        state.form.next_budget();

        let request = state.submit_form().expect("valid form");
        assert_eq!(request.destination(), "Tokyo");
        assert_eq!(request.budget(), BudgetTier::Comfortable);
        assert_eq!(request.interests(), &[Interest::ALL[0]]);
        assert!(state.phase.is_requesting());
        assert!(state.form.submitting);
        assert!(state.form.error().is_none());
        assert!(LOADING_WORDS.contains(&state.loading_word.as_str()));
    }

    #[test]
    fn test_second_submit_refused() {
        let mut state = filled_state();
        assert!(state.submit_form().is_some());
        assert!(state.submit_form().is_none());
        assert!(state.form.submit().is_none());
    }

    #[test]
    fn test_success_displays_plan() {
        let mut state = filled_state();
        state.submit_form();
        assert!(state.complete(Ok(sample_plan())));
        assert_eq!(state.plan(), Some(&sample_plan()));
        assert!(!state.form.submitting);
    }

    #[test]
    fn test_failure_shows_generic_message() {
        let mut state = filled_state();
        state.submit_form();
        assert!(state.complete(Err(failure())));
        match &state.phase {
            Phase::Failed(msg) => assert!(msg.starts_with("Failed to generate itinerary.")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_result_without_request_is_discarded() {
        let mut state = AppState::new();
        assert!(!state.complete(Ok(sample_plan())));
        assert_eq!(state.phase, Phase::Collecting);
    }

    #[test]
    fn test_reset_from_displaying_and_failed() {
        let mut state = filled_state();
        state.submit_form();
        state.complete(Ok(sample_plan()));
        state.scroll_down(5);
        assert!(state.reset());
        assert_eq!(state.phase, Phase::Collecting);
        assert!(state.form.destination.is_empty());
        assert!(state.form.selected.is_empty());
        assert_eq!(state.scroll, 0);

        let mut state = filled_state();
        state.submit_form();
        state.complete(Err(failure()));
        assert!(state.reset());
        assert_eq!(state.phase, Phase::Collecting);
        assert!(state.form.error().is_none());
    }

    #[test]
    fn test_reset_ignored_while_requesting() {
        let mut state = filled_state();
        state.submit_form();
        assert!(!state.reset());
        assert!(state.phase.is_requesting());

        // the late result still lands
        assert!(state.complete(Ok(sample_plan())));
        assert!(matches!(state.phase, Phase::Displaying(_)));
    }

    #[test]
    fn test_form_field_cycle() {
        let mut field = FormField::Destination;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Destination);
        assert_eq!(FormField::Destination.prev(), FormField::Submit);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut state = AppState::new();
        state.scroll_up(3);
        assert_eq!(state.scroll, 0);
        state.scroll_down(4);
        state.scroll_up(1);
        assert_eq!(state.scroll, 3);
    }
}
