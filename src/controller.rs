//! Drives one prompt request at a time against a text generator.
//!
//! The controller is the only writer of [`RequestState`]. It keeps the state
//! inside a `watch` channel so renderers can either take snapshots or await
//! changes, and it runs the generation call on a spawned Tokio task so
//! [`RequestController::submit_prompt`] never blocks.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use uuid::Uuid;

use crate::generation::TextGenerator;
use crate::mvi::Reducer;
use crate::request::{RequestIntent, RequestReducer, RequestState};

/// Message shown when the generation call fails, whatever the cause.
pub const GENERATION_FAILED_MESSAGE: &str =
    "API error: the text generation service is unavailable. Please try again.";

/// What happened to a submitted prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// State moved to Loading and the generation call was started.
    Accepted,
    /// Empty or whitespace-only prompt; nothing changed.
    Blank,
    /// A request is already in flight; the prompt was dropped.
    Busy,
    /// Called outside a Tokio runtime; nothing changed.
    NoRuntime,
}

/// Single owner of the request lifecycle.
pub struct RequestController {
    state: Arc<watch::Sender<RequestState>>,
    generator: Arc<dyn TextGenerator>,
}

impl RequestController {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let (state, _) = watch::channel(RequestState::default());

        tracing::info!(generator = generator.name(), "Request controller ready");

        Self {
            state: Arc::new(state),
            generator,
        }
    }

    /// Submit a prompt to the generator.
    ///
    /// Blank prompts and prompts arriving while a request is in flight are
    /// ignored. Otherwise the state becomes Loading before this returns and
    /// the generation call continues on a spawned task.
    ///
    /// Outside a Tokio runtime the prompt is rejected with
    /// [`SubmitOutcome::NoRuntime`] and the state is left untouched.
    pub fn submit_prompt(&self, prompt: impl Into<String>) -> SubmitOutcome {
        let prompt = prompt.into();

        if prompt.trim().is_empty() {
            tracing::debug!("Ignoring blank prompt");
            return SubmitOutcome::Blank;
        }

        // Resolve the runtime before touching state: a Loading state with
        // no task behind it would never settle.
        let runtime = match Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                tracing::error!(error = %err, "No Tokio runtime, cannot start generation");
                return SubmitOutcome::NoRuntime;
            }
        };

        // Check and transition under the channel's lock so racing submits
        // cannot both start a request.
        let accepted = self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            let current = std::mem::take(state);
            *state = RequestReducer::reduce(current, RequestIntent::Submit);
            true
        });

        if !accepted {
            tracing::debug!("Request already in flight, dropping prompt");
            return SubmitOutcome::Busy;
        }

        let request_id = Uuid::new_v4();
        tracing::info!(
            %request_id,
            generator = self.generator.name(),
            prompt_len = prompt.len(),
            "Prompt submitted"
        );

        runtime.spawn(run_request(
            Arc::clone(&self.state),
            Arc::clone(&self.generator),
            prompt,
            request_id,
        ));

        SubmitOutcome::Accepted
    }

    /// Current snapshot of the request state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Check if a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_loading()
    }
}

async fn run_request(
    state: Arc<watch::Sender<RequestState>>,
    generator: Arc<dyn TextGenerator>,
    prompt: String,
    request_id: Uuid,
) {
    let name = generator.name();

    // The call runs on its own task so a panicking generator still
    // settles the state instead of leaving it in Loading.
    let call = tokio::spawn(async move { generator.generate(&prompt).await });

    let intent = match call.await {
        Ok(Ok(text)) => {
            tracing::info!(%request_id, generator = name, "Generation succeeded");
            RequestIntent::Succeed { text }
        }
        Ok(Err(err)) => {
            tracing::warn!(%request_id, generator = name, error = %err, "Generation failed");
            RequestIntent::Fail {
                message: GENERATION_FAILED_MESSAGE.to_string(),
            }
        }
        Err(err) => {
            tracing::error!(%request_id, generator = name, error = %err, "Generation task aborted");
            RequestIntent::Fail {
                message: GENERATION_FAILED_MESSAGE.to_string(),
            }
        }
    };

    dispatch(&state, intent);
}

fn dispatch(state: &watch::Sender<RequestState>, intent: RequestIntent) {
    state.send_modify(|state| {
        let current = std::mem::take(state);
        *state = RequestReducer::reduce(current, intent);
    });
}
