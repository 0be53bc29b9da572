//! Marker trait for events fed into a reducer.

/// An event that may move a state machine forward.
///
/// Intents cross task boundaries (a completion is produced on the task
/// running the generation call), so they must be `Send + 'static`.
pub trait Intent: Send + 'static {}
