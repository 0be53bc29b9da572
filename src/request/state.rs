//! State of a single prompt request.

use std::fmt;

use crate::mvi::Snapshot;

/// Lifecycle phase of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestStatus {
    Idle,
    Loading,
    Success,
    Failed,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RequestStatus::Idle => "idle",
            RequestStatus::Loading => "loading",
            RequestStatus::Success => "success",
            RequestStatus::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Snapshot of the request lifecycle.
///
/// Response text only exists in `Success` and the error message only in
/// `Failed`, so the two can never be set together or outlive their phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet.
    #[default]
    Idle,

    /// A generation call is in flight.
    Loading,

    /// The last call returned text.
    Success {
        /// Text returned by the generator.
        response_text: String,
    },

    /// The last call failed.
    Failed {
        /// Fixed, non-sensitive message for display.
        error_message: String,
    },
}

impl Snapshot for RequestState {}

impl RequestState {
    /// Current lifecycle phase.
    pub fn status(&self) -> RequestStatus {
        match self {
            Self::Idle => RequestStatus::Idle,
            Self::Loading => RequestStatus::Loading,
            Self::Success { .. } => RequestStatus::Success,
            Self::Failed { .. } => RequestStatus::Failed,
        }
    }

    /// Response text, present only in `Success`.
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Self::Success { response_text } => Some(response_text),
            _ => None,
        }
    }

    /// Error message, present only in `Failed`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { error_message } => Some(error_message),
            _ => None,
        }
    }

    /// Check if a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
