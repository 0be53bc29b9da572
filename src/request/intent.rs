//! Intents for the request lifecycle.

use crate::mvi::Intent;

/// Events that drive [`RequestState`](super::RequestState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestIntent {
    /// A valid prompt was accepted; the generation call is about to start.
    Submit,

    /// The generation call returned text.
    Succeed {
        /// Text produced by the generator.
        text: String,
    },

    /// The generation call failed.
    Fail {
        /// User-facing message. Never the raw error.
        message: String,
    },
}

impl Intent for RequestIntent {}
