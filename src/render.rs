//! Plain-text view of the request state.

use crate::request::RequestState;

/// Render a snapshot for the terminal.
///
/// Idle renders as `None`: there is nothing to show before the first prompt.
pub fn render_state(state: &RequestState) -> Option<String> {
    match state {
        RequestState::Idle => None,
        RequestState::Loading => Some("⏳ Calling generation API...".to_string()),
        RequestState::Success { response_text } => Some(format!("Response:\n{}", response_text)),
        RequestState::Failed { error_message } => Some(format!("Error: {}", error_message)),
    }
}
