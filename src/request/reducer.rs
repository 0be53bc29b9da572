//! Reducer for the request lifecycle.

use crate::mvi::Reducer;

use super::intent::RequestIntent;
use super::state::RequestState;

/// Reducer for request state transitions.
pub struct RequestReducer;

impl Reducer for RequestReducer {
    type State = RequestState;
    type Intent = RequestIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            // Entering Loading drops whatever the previous request produced.
            (_, RequestIntent::Submit) => RequestState::Loading,

            (RequestState::Loading, RequestIntent::Succeed { text }) => RequestState::Success {
                response_text: text,
            },

            (RequestState::Loading, RequestIntent::Fail { message }) => RequestState::Failed {
                error_message: message,
            },

            // Completions only count while a request is in flight.
            (other, RequestIntent::Succeed { .. } | RequestIntent::Fail { .. }) => other,
        }
    }
}
