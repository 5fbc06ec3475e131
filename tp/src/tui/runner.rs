//! TUI Runner - main loop that owns the terminal
//!
//! Draws the current phase, feeds keys to `App`, and runs the single
//! generation request on a spawned task whose result comes back over a
//! channel.

use std::sync::Arc;
use std::time::Duration;

use eyre::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::Tui;
use super::app::{Action, App};
use super::events::{Event, EventHandler};
use super::state::{AppState, LOADING_WORDS};
use super::views;
use crate::domain::{ItineraryPlan, PlanRequest};
use crate::planner::{GenerationFailure, PlanError, Planner};

/// Input poll interval; also paces the loading animation
const TICK_RATE: Duration = Duration::from_millis(250);

/// Ticks between loading word changes
const WORD_ROTATE_TICKS: u64 = 8;

type PlanResult = Result<ItineraryPlan, PlanError>;

/// A closed channel means the request task died before sending
fn received_or_interrupted(received: Option<PlanResult>) -> PlanResult {
    received.unwrap_or_else(|| {
        warn!("TuiRunner: request task ended without a result");
        Err(PlanError::from(GenerationFailure::Interrupted))
    })
}

/// TUI Runner that manages the terminal and event loop
pub struct TuiRunner {
    app: App,
    terminal: Tui,
    event_handler: EventHandler,
    planner: Arc<Planner>,
    /// Receiver for the in-flight request's result
    result_rx: Option<mpsc::Receiver<PlanResult>>,
    /// Handle to the background request task
    plan_task: Option<JoinHandle<()>>,
    ticks: u64,
}

impl TuiRunner {
    pub fn new(terminal: Tui, planner: Arc<Planner>) -> Self {
        debug!(model = planner.model(), "TuiRunner::new: called");
        let state = AppState::new().with_model(planner.model());
        Self {
            app: App::with_state(state),
            terminal,
            event_handler: EventHandler::new(TICK_RATE),
            planner,
            result_rx: None,
            plan_task: None,
            ticks: 0,
        }
    }

    /// Run until the user quits
    pub async fn run(&mut self) -> Result<()> {
        debug!("TuiRunner::run: entering main loop");
        loop {
            self.terminal.draw(|frame| views::render(self.app.state(), frame))?;

            tokio::select! {
                event = self.event_handler.next() => {
                    match event? {
                        Event::Key(key) => {
                            match self.app.handle_key(key) {
                                Action::Submit(request) => self.start_request(request),
                                Action::Quit => break,
                                Action::None => {}
                            }
                        }
                        Event::Resize(width, height) => {
                            debug!(width, height, "TuiRunner::run: resized");
                        }
                        Event::Tick => self.handle_tick(),
                    }
                }
                received = async {
                    if let Some(rx) = &mut self.result_rx {
                        rx.recv().await
                    } else {
                        std::future::pending::<Option<PlanResult>>().await
                    }
                } => {
                    self.finish_request(received_or_interrupted(received));
                }
            }

            if self.app.state().should_quit {
                debug!("TuiRunner::run: should_quit is true, breaking");
                break;
            }
        }

        if let Some(task) = self.plan_task.take() {
            debug!("TuiRunner::run: aborting in-flight request");
            task.abort();
        }
        debug!("TuiRunner::run: exiting");
        Ok(())
    }

    /// Spawn the generation request
    fn start_request(&mut self, request: PlanRequest) {
        info!(destination = %request.destination(), "TuiRunner::start_request: called");
        let (tx, rx) = mpsc::channel::<PlanResult>(1);
        let planner = Arc::clone(&self.planner);

        self.plan_task = Some(tokio::spawn(async move {
            let result = planner.generate(&request).await;
            if tx.send(result).await.is_err() {
                warn!("TuiRunner: result receiver dropped");
            }
        }));
        self.result_rx = Some(rx);
        self.ticks = 0;
    }

    fn finish_request(&mut self, result: PlanResult) {
        debug!(ok = result.is_ok(), "TuiRunner::finish_request: called");
        self.result_rx = None;
        self.plan_task = None;
        if !self.app.state_mut().complete(result) {
            debug!("TuiRunner::finish_request: result discarded");
        }
    }

    fn handle_tick(&mut self) {
        if !self.app.state().phase.is_requesting() {
            return;
        }
        self.ticks += 1;
        if self.ticks % WORD_ROTATE_TICKS == 0 {
            let idx = (self.ticks / WORD_ROTATE_TICKS) as usize % LOADING_WORDS.len();
            self.app.state_mut().loading_word = LOADING_WORDS[idx].to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BudgetTier, Interest};
    use crate::tui::state::Phase;

    fn requesting() -> AppState {
        let mut state = AppState::new();
        state.form.destination = "Lisbon".to_string();
        state.form.selected = vec![Interest::Food];
        state.form.budget = BudgetTier::Shoestring;
        assert!(state.submit_form().is_some());
        assert!(state.phase.is_requesting());
        state
    }

    #[test]
    fn test_closed_channel_becomes_generic_failure() {
        let result = received_or_interrupted(None);
        assert!(matches!(result, Err(PlanError::GenerationFailed(GenerationFailure::Interrupted))));
    }

    #[test]
    fn test_closed_channel_leaves_requesting() {
        let mut state = requesting();
        assert!(state.complete(received_or_interrupted(None)));
        match &state.phase {
            Phase::Failed(msg) => assert!(msg.starts_with("Failed to generate itinerary.")),
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(state.reset());
        assert_eq!(state.phase, Phase::Collecting);
    }

    #[test]
    fn test_received_result_passes_through() {
        let plan = ItineraryPlan {
            destination: "Lisbon".to_string(),
            itinerary: vec![],
        };
        let result = received_or_interrupted(Some(Ok(plan.clone())));
        assert_eq!(result.ok(), Some(plan));
    }
}
